//! Menu/catalog resource logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::clients::CatalogClient;
use crate::framework::ResourceActor;
use crate::model::{FoodCategory, MenuItem};

/// Creates a new menu actor and its catalog client.
///
/// `categories` is the fixed category list the catalog serves; menu items
/// reference categories by id.
pub fn new(categories: Vec<FoodCategory>) -> (ResourceActor<MenuItem>, CatalogClient) {
    let item_id_counter = Arc::new(AtomicU64::new(1));
    let next_item_id = move || {
        let id = item_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("item_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(32, next_item_id);
    let client = CatalogClient::new(generic_client, categories);

    (actor, client)
}
