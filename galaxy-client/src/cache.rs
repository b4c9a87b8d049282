//! Client-side list cache
//!
//! Holds the three hot lists the storefront renders on almost every page:
//! menu items, offers and published feedback. Reads check the cache
//! first; every mutating client call invalidates the affected list after
//! the request settles, success or failure, so a stale read can never
//! follow a mutation made through the same client.
//!
//! Fallback data is never cached.

use std::sync::Arc;

use tokio::sync::RwLock;

use shared::models::{Feedback, MenuItem, OfferItem};

#[derive(Debug, Default)]
struct CachedLists {
    menu_items: Option<Vec<MenuItem>>,
    offers: Option<Vec<OfferItem>>,
    published_feedback: Option<Vec<Feedback>>,
}

/// Shared cache of the hot lists. Cloning shares the underlying storage.
#[derive(Debug, Clone, Default)]
pub struct ListCache {
    inner: Arc<RwLock<CachedLists>>,
}

impl ListCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn menu_items(&self) -> Option<Vec<MenuItem>> {
        self.inner.read().await.menu_items.clone()
    }

    pub async fn store_menu_items(&self, items: Vec<MenuItem>) {
        self.inner.write().await.menu_items = Some(items);
    }

    pub async fn invalidate_menu_items(&self) {
        self.inner.write().await.menu_items = None;
    }

    pub async fn offers(&self) -> Option<Vec<OfferItem>> {
        self.inner.read().await.offers.clone()
    }

    pub async fn store_offers(&self, offers: Vec<OfferItem>) {
        self.inner.write().await.offers = Some(offers);
    }

    pub async fn invalidate_offers(&self) {
        self.inner.write().await.offers = None;
    }

    pub async fn published_feedback(&self) -> Option<Vec<Feedback>> {
        self.inner.read().await.published_feedback.clone()
    }

    pub async fn store_published_feedback(&self, entries: Vec<Feedback>) {
        self.inner.write().await.published_feedback = Some(entries);
    }

    pub async fn invalidate_published_feedback(&self) {
        self.inner.write().await.published_feedback = None;
    }

    /// Drop everything
    pub async fn clear(&self) {
        let mut lists = self.inner.write().await;
        lists.menu_items = None;
        lists.offers = None;
        lists.published_feedback = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, name: &str) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            description: String::new(),
            price: 9.5,
            category: "Classics".to_string(),
            image: None,
            popular: false,
            available_sizes: vec![],
            available_toppings: vec![],
            discount: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[tokio::test]
    async fn test_store_read_invalidate() {
        let cache = ListCache::new();
        assert!(cache.menu_items().await.is_none());

        cache.store_menu_items(vec![item(1, "Margherita")]).await;
        let cached = cache.menu_items().await.unwrap();
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].name, "Margherita");

        cache.invalidate_menu_items().await;
        assert!(cache.menu_items().await.is_none());
    }

    #[tokio::test]
    async fn test_lists_are_independent() {
        let cache = ListCache::new();
        cache.store_menu_items(vec![item(1, "Margherita")]).await;
        cache.store_offers(vec![]).await;

        cache.invalidate_offers().await;
        assert!(cache.offers().await.is_none());
        assert!(cache.menu_items().await.is_some());
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let cache = ListCache::new();
        let clone = cache.clone();

        cache.store_menu_items(vec![item(1, "Margherita")]).await;
        assert!(clone.menu_items().await.is_some());

        clone.clear().await;
        assert!(cache.menu_items().await.is_none());
    }
}
