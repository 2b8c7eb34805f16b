use async_trait::async_trait;

use gastu_core::concepts::{Concept, ConceptApiTrait, ConceptKind};
use gastu_core::errors::Result;

use crate::client::GastuApiClient;
use crate::routes;

#[async_trait]
impl ConceptApiTrait for GastuApiClient {
    async fn concepts_by_kind(&self, kind: ConceptKind) -> Result<Vec<Concept>> {
        self.get(&routes::concepts_by_kind(kind)).await
    }

    async fn get_concept(&self, id: i64) -> Result<Concept> {
        self.get(&routes::concept(id)).await
    }
}
