use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, ValidationError};
use crate::utils::text_utils::contains_folded;

/// Movement category kind used by `/api/conceptos/tipo/{tipo}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConceptKind {
    Ahorro,
    Egreso,
    Ingreso,
}

impl ConceptKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ConceptKind::Ahorro => "AHORRO",
            ConceptKind::Egreso => "EGRESO",
            ConceptKind::Ingreso => "INGRESO",
        }
    }
}

impl fmt::Display for ConceptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConceptKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AHORRO" => Ok(ConceptKind::Ahorro),
            "EGRESO" => Ok(ConceptKind::Egreso),
            "INGRESO" => Ok(ConceptKind::Ingreso),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "unknown concept kind '{}'",
                other
            )))),
        }
    }
}

/// A movement concept (category).
///
/// `tipo` stays free text: the backend has shipped concepts with kinds
/// outside the three known values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    #[serde(alias = "conceptoId")]
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub tipo: Option<String>,
}

impl Concept {
    pub fn kind(&self) -> Option<ConceptKind> {
        self.tipo.as_deref().and_then(|t| t.parse().ok())
    }
}

/// id -> name lookup used to title cards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConceptDirectory {
    names: HashMap<i64, String>,
}

impl ConceptDirectory {
    pub fn from_concepts(concepts: &[Concept]) -> Self {
        Self {
            names: concepts.iter().map(|c| (c.id, c.nombre.clone())).collect(),
        }
    }

    pub fn name(&self, id: i64) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn name_or<'a>(&'a self, id: i64, fallback: &'a str) -> &'a str {
        self.name(id).unwrap_or(fallback)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Accent-insensitive match on concept name, used by the concept picker.
pub fn search_concepts<'a>(concepts: &'a [Concept], query: &str) -> Vec<&'a Concept> {
    concepts
        .iter()
        .filter(|c| contains_folded(&c.nombre, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concept(id: i64, nombre: &str) -> Concept {
        Concept {
            id,
            nombre: nombre.to_string(),
            descripcion: None,
            tipo: Some("EGRESO".to_string()),
        }
    }

    #[test]
    fn decodes_both_id_spellings() {
        let a: Concept = serde_json::from_str(r#"{"id": 3, "nombre": "Transporte"}"#).unwrap();
        let b: Concept =
            serde_json::from_str(r#"{"conceptoId": 3, "nombre": "Transporte", "tipo": "EGRESO"}"#)
                .unwrap();
        assert_eq!(a.id, b.id);
        assert_eq!(b.kind(), Some(ConceptKind::Egreso));
    }

    #[test]
    fn unknown_tipo_is_kept_as_text() {
        let c: Concept =
            serde_json::from_str(r#"{"id": 1, "nombre": "Otro", "tipo": "MIXTO"}"#).unwrap();
        assert_eq!(c.tipo.as_deref(), Some("MIXTO"));
        assert_eq!(c.kind(), None);
    }

    #[test]
    fn directory_falls_back_for_unknown_ids() {
        let directory = ConceptDirectory::from_concepts(&[concept(1, "Vacaciones")]);
        assert_eq!(directory.name_or(1, "Meta de Ahorro"), "Vacaciones");
        assert_eq!(directory.name_or(2, "Meta de Ahorro"), "Meta de Ahorro");
    }

    #[test]
    fn search_ignores_accents() {
        let concepts = vec![concept(1, "Alimentación"), concept(2, "Transporte")];
        let hits = search_concepts(&concepts, "alimentacion");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
        assert_eq!(search_concepts(&concepts, "").len(), 2);
    }
}
