//! Category lexicon: the table mapping each document category to the keyword
//! phrases that indicate it.
//!
//! A lexicon is built once (from the shipped table or a JSON override file)
//! and never mutated afterwards. Category order is declaration order, which
//! the classifier uses to break score ties.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::LexiconError;
use crate::report::{NO_MATCH, UNCLASSIFIED};

/// Version accepted in the `version` field of a lexicon file.
pub const LEXICON_FILE_VERSION: u32 = 1;

/// Shipped Spanish lexicon, in declaration order.
const BUILTIN: &[(&str, &[&str])] = &[
    (
        "contrato",
        &[
            "partes",
            "firma",
            "cláusula",
            "objeto del contrato",
            "obligaciones",
            "vigencia",
            "rescisión",
            "contraprestación",
            "domicilio",
            "indemnización",
        ],
    ),
    (
        "contrato_laboral",
        &[
            "trabajador",
            "empleador",
            "relación laboral",
            "salario",
            "jornada",
            "período de prueba",
            "vacaciones",
            "seguridad social",
            "despido",
        ],
    ),
    (
        "factura_judicial",
        &[
            "factura",
            "folio",
            "rfc",
            "emisor",
            "receptor",
            "importe",
            "iva",
            "costas",
            "honorarios",
            "juzgado",
        ],
    ),
    (
        "demanda",
        &[
            "demandante",
            "demandado",
            "juzgado",
            "hechos",
            "pretensiones",
            "fundamentos de derecho",
            "suplico",
            "emplazamiento",
        ],
    ),
    (
        "escritura",
        &[
            "notario",
            "escritura pública",
            "comparecen",
            "otorgante",
            "protocolo",
            "inmueble",
            "registro de la propiedad",
            "doy fe",
        ],
    ),
    (
        "testamento",
        &[
            "testador",
            "heredero",
            "herencia",
            "legado",
            "albacea",
            "última voluntad",
            "bienes",
        ],
    ),
    (
        "poder_notarial",
        &[
            "poderdante",
            "apoderado",
            "otorga poder",
            "facultades",
            "representación",
            "notario",
            "revocación",
        ],
    ),
    (
        "certificado",
        &[
            "certifica",
            "hace constar",
            "expide",
            "validez",
            "sello",
            "a petición del interesado",
        ],
    ),
    (
        "acta",
        &[
            "acta",
            "asistentes",
            "orden del día",
            "acuerdos",
            "quórum",
            "sesión",
            "secretario",
        ],
    ),
    (
        "resolucion",
        &[
            "resuelve",
            "autoridad",
            "expediente",
            "infracción",
            "multa",
            "recurso",
            "considerando",
            "notifíquese",
        ],
    ),
    (
        "sentencia",
        &[
            "tribunal",
            "fallo",
            "sentencia",
            "magistrado",
            "fundamentos jurídicos",
            "condena",
            "absuelve",
            "costas",
        ],
    ),
];

/// One lexicon row: a category and its trigger phrases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub name: String,
    pub keywords: Vec<String>,
}

impl CategoryEntry {
    pub fn new(name: impl Into<String>, keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

/// On-disk shape of a lexicon override file.
#[derive(Serialize, Deserialize)]
struct LexiconFile {
    version: u32,
    categories: Vec<CategoryEntry>,
}

/// Immutable category → keywords table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    categories: Vec<CategoryEntry>,
}

impl Lexicon {
    /// Build a lexicon from entries in declaration order.
    ///
    /// Names must be non-empty, unique, and distinct from the result
    /// sentinels. A category with no keywords is accepted; it always scores 0.
    pub fn new(categories: Vec<CategoryEntry>) -> Result<Self, LexiconError> {
        let mut seen = HashSet::with_capacity(categories.len());
        for (pos, entry) in categories.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(LexiconError::EmptyName(pos));
            }
            if entry.name == UNCLASSIFIED || entry.name == NO_MATCH {
                return Err(LexiconError::ReservedName(entry.name.clone()));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(LexiconError::DuplicateCategory(entry.name.clone()));
            }
            if entry.keywords.is_empty() {
                warn!(category = %entry.name, "category has no keywords; it will always score 0");
            }
        }
        Ok(Self { categories })
    }

    /// The shipped Spanish legal-document lexicon.
    pub fn builtin() -> Self {
        Self {
            categories: BUILTIN
                .iter()
                .map(|(name, keywords)| CategoryEntry::new(*name, keywords.iter().copied()))
                .collect(),
        }
    }

    /// Parse a lexicon file: `{"version": 1, "categories": [{"name", "keywords"}]}`.
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let file: LexiconFile = serde_json::from_str(json)?;
        if file.version != LEXICON_FILE_VERSION {
            return Err(LexiconError::UnsupportedVersion {
                found: file.version,
                expected: LEXICON_FILE_VERSION,
            });
        }
        Self::new(file.categories)
    }

    /// Load a lexicon file from disk.
    pub fn from_path(path: &Path) -> Result<Self, LexiconError> {
        let json = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            categories = lexicon.len(),
            "loaded lexicon"
        );
        Ok(lexicon)
    }

    /// Serialize in the same shape [`Lexicon::from_json`] reads.
    pub fn to_json(&self) -> Result<String, LexiconError> {
        let file = LexiconFile {
            version: LEXICON_FILE_VERSION,
            categories: self.categories.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Keywords for `category`, or an empty slice when the category is unknown.
    pub fn keywords_for(&self, category: &str) -> &[String] {
        self.get(category)
            .map(|entry| entry.keywords.as_slice())
            .unwrap_or(&[])
    }

    pub fn get(&self, category: &str) -> Option<&CategoryEntry> {
        self.categories.iter().find(|entry| entry.name == category)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.get(category).is_some()
    }

    /// Entries in declaration order.
    pub fn categories(&self) -> &[CategoryEntry] {
        &self.categories
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|entry| entry.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
