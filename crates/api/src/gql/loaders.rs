use async_graphql::dataloader::Loader;
use infra::{models::MapRow, Store, StoreError};
use std::{collections::HashMap, future::Future, sync::Arc};
use uuid::Uuid;

/// Batch loads maps by ID, used by `Point.map`.
#[derive(Clone)]
pub struct MapLoader {
    store: Arc<dyn Store>,
}

impl MapLoader {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

impl Loader<Uuid> for MapLoader {
    type Value = MapRow;
    type Error = Arc<StoreError>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let store = self.store.clone();
        let ids: Vec<Uuid> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = store.get_maps_by_ids(&ids).await.map_err(Arc::new)?;

            Ok(rows.into_iter().map(|r| (r.id, r)).collect())
        }
    }
}
