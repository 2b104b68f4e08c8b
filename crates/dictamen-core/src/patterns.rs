//! Cross-pattern table: category-independent markers of legal documents.
//!
//! Each entry pairs a stable identifier with a word-boundary-anchored regular
//! expression, evaluated case-insensitively. Table order is significant:
//! pattern signatures and hit records list identifiers in this order. Bump
//! [`PATTERN_TABLE_VERSION`] whenever an entry is added, removed, or changed.

pub const PATTERN_TABLE_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossPattern {
    pub id: &'static str,
    pub expr: &'static str,
}

impl CrossPattern {
    pub const fn new(id: &'static str, expr: &'static str) -> Self {
        Self { id, expr }
    }
}

pub const CROSS_PATTERNS: &[CrossPattern] = &[
    // Article, clause, and section references.
    CrossPattern::new("articulo_abreviado", r"\bart\.?\s*\d+\b"),
    CrossPattern::new("articulo", r"\bartículo\s+\d+\b"),
    CrossPattern::new("inciso", r"\binciso\s+[a-zA-Z0-9]+\b"),
    CrossPattern::new("apartado", r"\bapartado\s+\d+[a-zA-Z]?\b"),
    CrossPattern::new("clausula_numerada", r"\bcláusula\s+\d+[a-zA-Z]?\b"),
    CrossPattern::new("seccion", r"\bsección\s+\d+[a-zA-Z]?\b"),
    // Parties and signatures.
    CrossPattern::new("partes", r"\bpartes\b"),
    CrossPattern::new("objeto", r"\bobjeto\b"),
    CrossPattern::new("firmado", r"\bfirmado\b"),
    CrossPattern::new("firma", r"\bfirma\b"),
    CrossPattern::new("otorgante", r"\botorgante\b"),
    CrossPattern::new("representante", r"\brepresentante\b"),
    CrossPattern::new("apoderado", r"\bapoderado\b"),
    // Administrative and financial details.
    CrossPattern::new("importe", r"\bimporte\b"),
    CrossPattern::new("folio", r"\bfolio\b"),
    CrossPattern::new("rfc", r"\bRFC\b"),
    CrossPattern::new("asistentes", r"\basistentes\b"),
    CrossPattern::new("orden_del_dia", r"\borden del día\b"),
    CrossPattern::new("acuerdos", r"\bacuerdos\b"),
    CrossPattern::new("emisor", r"\bemisor\b"),
    CrossPattern::new("destinatario", r"\bdestinatario\b"),
    CrossPattern::new("validez", r"\bvalidez\b"),
    CrossPattern::new("activo", r"\bactivo\b"),
    CrossPattern::new("pasivo", r"\bpasivo\b"),
    CrossPattern::new("patrimonio", r"\bpatrimonio\b"),
    CrossPattern::new("fallo", r"\bfallo\b"),
    CrossPattern::new("autoridad", r"\bautoridad\b"),
    CrossPattern::new("infraccion", r"\binfracción\b"),
    CrossPattern::new("multa", r"\bmulta\b"),
    // Employment terms.
    CrossPattern::new("relacion_laboral", r"\brelación laboral\b"),
    CrossPattern::new("contratacion", r"\bcontratación\b"),
    CrossPattern::new("periodo_de_prueba", r"\bperíodo de prueba\b"),
    CrossPattern::new("finalizacion_de_contrato", r"\bfinalización de contrato\b"),
    CrossPattern::new("terminacion_de_contrato", r"\bterminación de contrato\b"),
    CrossPattern::new("beneficios", r"\bbeneficios\b"),
    CrossPattern::new("prestaciones", r"\bprestaciones\b"),
    CrossPattern::new("sueldo", r"\bsueldo\b"),
    CrossPattern::new("salario", r"\bsalario\b"),
    CrossPattern::new("remuneracion", r"\bremuneración\b"),
    CrossPattern::new("jornada", r"\bjornada\b"),
    CrossPattern::new("horario", r"\bhorario\b"),
    CrossPattern::new("vacaciones", r"\bvacaciones\b"),
    CrossPattern::new("lesion", r"\blesión\b"),
    CrossPattern::new("modificacion_de_contrato", r"\bmodificación de contrato\b"),
    CrossPattern::new("acuerdo_laboral", r"\bacuerdo laboral\b"),
    CrossPattern::new("pacto_laboral", r"\bpacto laboral\b"),
    // Social security and compensation.
    CrossPattern::new("seguridad_social", r"\bseguridad social\b"),
    CrossPattern::new("subsidio", r"\bsubsidio\b"),
    CrossPattern::new("prestacion_por_desempleo", r"\bprestación por desempleo\b"),
    // Other frequent legal terms.
    CrossPattern::new("reglamento_interno", r"\breglamento interno\b"),
    CrossPattern::new("huelga", r"\bhuelga\b"),
    CrossPattern::new("licencia", r"\blicencia\b"),
    CrossPattern::new("permiso", r"\bpermiso\b"),
    CrossPattern::new("reestructuracion", r"\breestructuración\b"),
    CrossPattern::new("despido", r"\bdespido\b"),
    // Longer contract expressions.
    CrossPattern::new("trabajador_a", r"\btrabajador/a\b"),
    CrossPattern::new("empleado_a", r"\bempleado/a\b"),
    CrossPattern::new("empleador_a", r"\bempleador/a\b"),
    CrossPattern::new("persona_con_discapacidad", r"\bpersona con discapacidad\b"),
    CrossPattern::new("tiempo_completo", r"\btiempo completo\b"),
    CrossPattern::new("tiempo_parcial", r"\btiempo parcial\b"),
    CrossPattern::new("fijo_discontinuo", r"\bfijo-discontinuo\b"),
];

/// Position of `id` in [`CROSS_PATTERNS`].
pub fn position(id: &str) -> Option<usize> {
    CROSS_PATTERNS.iter().position(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = CROSS_PATTERNS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), CROSS_PATTERNS.len());
    }

    #[test]
    fn ids_are_snake_case_ascii() {
        for p in CROSS_PATTERNS {
            assert!(
                p.id.chars().all(|c| c.is_ascii_lowercase() || c == '_'),
                "bad id {:?}",
                p.id
            );
        }
    }

    #[test]
    fn every_expression_is_word_anchored() {
        for p in CROSS_PATTERNS {
            assert!(p.expr.starts_with(r"\b"), "{} not anchored", p.id);
            assert!(p.expr.ends_with(r"\b"), "{} not anchored", p.id);
        }
    }

    #[test]
    fn pinned_table_shape() {
        assert_eq!(PATTERN_TABLE_VERSION, 1);
        assert_eq!(CROSS_PATTERNS.len(), 62);
        assert_eq!(CROSS_PATTERNS[0].id, "articulo_abreviado");
        assert_eq!(position("clausula_numerada"), Some(4));
        assert_eq!(position("partes"), Some(6));
        assert_eq!(CROSS_PATTERNS.last().map(|p| p.id), Some("fijo_discontinuo"));
        assert_eq!(position("no_existe"), None);
    }
}
