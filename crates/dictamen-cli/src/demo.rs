//! Built-in sample documents for trying the pipeline end to end.

use dictamen_core::{ComplianceStatus, NO_MATCH};
use dictamen_engine::ComplianceEngine;
use serde::Serialize;

pub struct DemoDocument {
    pub title: &'static str,
    /// Category the document is written to exhibit.
    pub expected: &'static str,
    pub text: &'static str,
}

pub const DEMO_DOCUMENTS: &[DemoDocument] = &[
    DemoDocument {
        title: "Contrato de arrendamiento",
        expected: "contrato",
        text: "Las partes firman el presente contrato de arrendamiento de vivienda. \
               El objeto del contrato es el alquiler del inmueble descrito en la cláusula 1. \
               La vigencia será de un año y las obligaciones del arrendatario constan en la cláusula 5.",
    },
    DemoDocument {
        title: "Contrato de trabajo indefinido",
        expected: "contrato_laboral",
        text: "El empleador contrata al trabajador a tiempo completo. \
               La relación laboral comienza con un período de prueba de dos meses. \
               El salario bruto anual se abona en catorce pagas y la jornada es de cuarenta horas semanales. \
               El trabajador disfrutará de treinta días de vacaciones.",
    },
    DemoDocument {
        title: "Minuta de costas procesales",
        expected: "factura_judicial",
        text: "Factura con folio 2024-118 emitida por el despacho. \
               Emisor: Bufete Ruiz, RFC BRU900101AB1. \
               Receptor: Juzgado Segundo de lo Civil. \
               Importe de honorarios y costas del procedimiento, más IVA.",
    },
    DemoDocument {
        title: "Demanda por incumplimiento",
        expected: "demanda",
        text: "Al Juzgado de Primera Instancia. \
               El demandante interpone demanda contra el demandado por incumplimiento. \
               Hechos: el demandado no abonó las cantidades pactadas. \
               Fundamentos de derecho: artículo 1101 del Código Civil. \
               Suplico al Juzgado que estime las pretensiones.",
    },
    DemoDocument {
        title: "Escritura de compraventa",
        expected: "escritura",
        text: "Ante mí, el notario, comparecen las partes para otorgar escritura pública de compraventa. \
               El otorgante vende el inmueble libre de cargas, que se inscribirá en el Registro de la Propiedad. \
               Queda incorporada a mi protocolo, de lo cual doy fe.",
    },
    DemoDocument {
        title: "Testamento abierto",
        expected: "testamento",
        text: "El testador, en pleno uso de sus facultades, expresa su última voluntad. \
               Instituye heredero universal de todos sus bienes a su hijo. \
               Deja un legado a su sobrina y nombra albacea a su hermano.",
    },
    DemoDocument {
        title: "Poder general para pleitos",
        expected: "poder_notarial",
        text: "El poderdante otorga poder general a favor del apoderado. \
               Le confiere facultades de representación ante toda clase de juzgados y tribunales. \
               La revocación deberá comunicarse por escrito.",
    },
    DemoDocument {
        title: "Certificado de empadronamiento",
        expected: "certificado",
        text: "La secretaria del Ayuntamiento certifica y hace constar que el solicitante figura \
               inscrito en el padrón municipal. \
               Se expide a petición del interesado, con sello de la corporación.",
    },
    DemoDocument {
        title: "Acta de junta de propietarios",
        expected: "acta",
        text: "En la sesión ordinaria se levanta acta con los asistentes presentes y quórum suficiente. \
               Orden del día: aprobación de cuentas. \
               Acuerdos: se aprueban las cuentas por unanimidad. \
               El secretario da fe de lo tratado.",
    },
    DemoDocument {
        title: "Resolución sancionadora",
        expected: "resolucion",
        text: "Vistos los hechos del expediente 45/2024 y considerando la infracción cometida, \
               esta autoridad resuelve imponer una multa de 3.000 euros. \
               Contra la presente cabe recurso de alzada. \
               Notifíquese al interesado.",
    },
    DemoDocument {
        title: "Sentencia de apelación",
        expected: "sentencia",
        text: "El tribunal, integrado por el magistrado ponente, dicta sentencia. \
               Fundamentos jurídicos: se aprecia la existencia de daño. \
               Fallo: se condena a la demandada al pago, con imposición de costas.",
    },
    DemoDocument {
        title: "Nota informativa",
        expected: NO_MATCH,
        text: "Este documento de prueba no encaja en ninguna de las categorías anteriores \
               y solo contiene información general.",
    },
];

/// Pipeline result for one demo document.
#[derive(Debug, Clone, Serialize)]
pub struct DemoOutcome {
    pub title: &'static str,
    pub expected: &'static str,
    pub classified: String,
    pub confidence: f64,
    pub compliance_status: ComplianceStatus,
    pub compliance_percent: f64,
}

impl DemoOutcome {
    pub fn agrees(&self) -> bool {
        self.classified == self.expected
    }
}

/// Classify and explain every demo document.
pub fn run_demo(engine: &ComplianceEngine) -> Vec<DemoOutcome> {
    DEMO_DOCUMENTS
        .iter()
        .map(|doc| {
            let report = engine.analyze(doc.text, None);
            DemoOutcome {
                title: doc.title,
                expected: doc.expected,
                classified: report.classification.category,
                confidence: report.classification.confidence,
                compliance_status: report.explanation.compliance_status,
                compliance_percent: report.explanation.percent(),
            }
        })
        .collect()
}
