//! Client for the menu actor: the catalog collaborator consumed by the UI.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::clients::actor_client::ActorClient;
use crate::framework::ResourceClient;
use crate::menu_actor::MenuError;
use crate::model::{FoodCategory, MenuItem, MenuItemCreate, MenuItemUpdate};

/// Client for interacting with the menu actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<MenuItem>,
    categories: Vec<FoodCategory>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<MenuItem>, categories: Vec<FoodCategory>) -> Self {
        Self { inner, categories }
    }

    /// Adds an item to the catalog.
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn add_item(&self, params: MenuItemCreate) -> Result<String, MenuError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(MenuError::from)
    }

    /// Applies a partial update to a catalog item.
    #[instrument(skip(self, update))]
    pub async fn update_item(
        &self,
        id: String,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(MenuError::from)
    }

    /// Fetches menu items, optionally restricted to one category, sorted by
    /// name for stable display.
    #[instrument(skip(self))]
    pub async fn menu_items(&self, category_id: Option<&str>) -> Result<Vec<MenuItem>, MenuError> {
        debug!("Sending request");
        let mut items = self.inner.list().await.map_err(MenuError::from)?;
        if let Some(category_id) = category_id {
            items.retain(|item| item.category_id == category_id);
        }
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    /// The category list this catalog serves.
    pub fn categories(&self) -> Vec<FoodCategory> {
        self.categories.clone()
    }
}

#[async_trait]
impl ActorClient<MenuItem> for CatalogClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }
}
