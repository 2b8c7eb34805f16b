mod concepts_model;
mod concepts_traits;

pub use concepts_model::{search_concepts, Concept, ConceptDirectory, ConceptKind};
pub use concepts_traits::ConceptApiTrait;
