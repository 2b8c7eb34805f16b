use crate::concepts::concepts_model::{Concept, ConceptKind};
use crate::errors::Result;
use async_trait::async_trait;

/// Remote concept lookups.
#[async_trait]
pub trait ConceptApiTrait: Send + Sync {
    async fn concepts_by_kind(&self, kind: ConceptKind) -> Result<Vec<Concept>>;

    async fn get_concept(&self, id: i64) -> Result<Concept>;
}
