//! Galaxy Client - typed HTTP client for the Galaxy server
//!
//! Mirrors the storefront's data layer: every API operation as a typed
//! async method, a cache for the hot lists, an offline fallback menu for
//! connectivity failures, and a checkout cart priced with the shared
//! rules.
//!
//! ```ignore
//! let client = GalaxyClient::new(ClientConfig::new("http://localhost:3001"));
//! let menu = client.menu_items().await?;
//! let popular = client.popular_menu_items().await?;
//! ```

pub mod cache;
pub mod cart;
pub mod config;
pub mod error;
pub mod fallback;
pub mod http;
pub mod types;

mod forms;

pub use cache::ListCache;
pub use cart::{Cart, CartLine, CustomerDetails};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use types::{
    CheckInfo, DiagnosticChecks, DiagnosticInfo, HealthInfo, ImageUpload, UploadPathInfo,
};

// Re-export shared types for convenience
pub use shared::models::{
    Category, ContactInput, ContactMessage, Feedback, FeedbackInput, LoginRequest, LoginResponse,
    MenuItem, MenuItemInput, OfferInput, OfferItem, Order, OrderInput, OrderStatus,
    OrderStatusUpdate, OrderType,
};

/// High level client: the full operation set of the Galaxy API.
///
/// List reads serve the cache when warm and fall back to the bundled
/// offline dataset on connectivity failures. Mutating calls invalidate
/// the affected cached list after the request settles, success or
/// failure, and never fall back.
#[derive(Debug, Clone)]
pub struct GalaxyClient {
    http: HttpClient,
    cache: ListCache,
}

impl GalaxyClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: HttpClient::new(&config),
            cache: ListCache::new(),
        }
    }

    /// Build from API_URL / API_TIMEOUT / API_DEBUG
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    // ── Menu items ───────────────────────────────────────────

    /// All menu items (cached, offline fallback)
    pub async fn menu_items(&self) -> ClientResult<Vec<MenuItem>> {
        if let Some(cached) = self.cache.menu_items().await {
            return Ok(cached);
        }
        match self.http.get::<Vec<MenuItem>>("/api/menu-items").await {
            Ok(items) => {
                self.cache.store_menu_items(items.clone()).await;
                Ok(items)
            }
            Err(ClientError::Http(e)) => {
                tracing::warn!(error = %e, "API unreachable, serving fallback menu");
                Ok(fallback::menu_items())
            }
            Err(e) => Err(e),
        }
    }

    /// One menu item by id
    pub async fn menu_item(&self, id: i64) -> ClientResult<MenuItem> {
        self.http.get(&format!("/api/menu-items/{id}")).await
    }

    /// Menu items in one category, derived from the full list
    pub async fn menu_items_by_category(&self, category: &str) -> ClientResult<Vec<MenuItem>> {
        let items = self.menu_items().await?;
        Ok(items
            .into_iter()
            .filter(|item| item.category == category)
            .collect())
    }

    /// Items flagged popular, derived from the full list
    pub async fn popular_menu_items(&self) -> ClientResult<Vec<MenuItem>> {
        let items = self.menu_items().await?;
        Ok(items.into_iter().filter(|item| item.popular).collect())
    }

    /// Create a menu item, optionally with an image file
    pub async fn add_menu_item(
        &self,
        input: &MenuItemInput,
        image: Option<ImageUpload>,
    ) -> ClientResult<MenuItem> {
        let result = match image {
            Some(upload) => {
                let form = forms::menu_item_form(input, Some(upload))?;
                self.http.post_multipart("/api/menu-items", form).await
            }
            None => self.http.post("/api/menu-items", input).await,
        };
        self.cache.invalidate_menu_items().await;
        result
    }

    /// Replace a menu item, optionally with a new image file
    pub async fn update_menu_item(
        &self,
        id: i64,
        input: &MenuItemInput,
        image: Option<ImageUpload>,
    ) -> ClientResult<MenuItem> {
        let path = format!("/api/menu-items/{id}");
        let result = match image {
            Some(upload) => {
                let form = forms::menu_item_form(input, Some(upload))?;
                self.http.put_multipart(&path, form).await
            }
            None => self.http.put(&path, input).await,
        };
        self.cache.invalidate_menu_items().await;
        result
    }

    /// Delete a menu item. Offers may link it, so both lists drop.
    pub async fn delete_menu_item(&self, id: i64) -> ClientResult<bool> {
        let result = self.http.delete(&format!("/api/menu-items/{id}")).await;
        self.cache.invalidate_menu_items().await;
        self.cache.invalidate_offers().await;
        result
    }

    // ── Offers ───────────────────────────────────────────────

    /// All offers (cached, offline fallback)
    pub async fn offers(&self) -> ClientResult<Vec<OfferItem>> {
        if let Some(cached) = self.cache.offers().await {
            return Ok(cached);
        }
        match self.http.get::<Vec<OfferItem>>("/api/offers").await {
            Ok(offers) => {
                self.cache.store_offers(offers.clone()).await;
                Ok(offers)
            }
            Err(ClientError::Http(e)) => {
                tracing::warn!(error = %e, "API unreachable, serving fallback offers");
                Ok(fallback::offers())
            }
            Err(e) => Err(e),
        }
    }

    /// Offers live today (offline fallback, filtered the same way)
    pub async fn active_offers(&self) -> ClientResult<Vec<OfferItem>> {
        match self.http.get::<Vec<OfferItem>>("/api/offers/active").await {
            Ok(offers) => Ok(offers),
            Err(ClientError::Http(e)) => {
                tracing::warn!(error = %e, "API unreachable, serving fallback offers");
                let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
                Ok(fallback::offers()
                    .into_iter()
                    .filter(|o| {
                        o.is_active
                            && o.start_date.as_str() <= today.as_str()
                            && today.as_str() <= o.end_date.as_str()
                    })
                    .collect())
            }
            Err(e) => Err(e),
        }
    }

    /// Create an offer, optionally with a banner image
    pub async fn add_offer(
        &self,
        input: &OfferInput,
        image: Option<ImageUpload>,
    ) -> ClientResult<OfferItem> {
        let result = match image {
            Some(upload) => {
                let form = forms::offer_form(input, Some(upload))?;
                self.http.post_multipart("/api/offers", form).await
            }
            None => self.http.post("/api/offers", input).await,
        };
        self.cache.invalidate_offers().await;
        result
    }

    /// Replace an offer, optionally with a new banner image
    pub async fn update_offer(
        &self,
        id: i64,
        input: &OfferInput,
        image: Option<ImageUpload>,
    ) -> ClientResult<OfferItem> {
        let path = format!("/api/offers/{id}");
        let result = match image {
            Some(upload) => {
                let form = forms::offer_form(input, Some(upload))?;
                self.http.put_multipart(&path, form).await
            }
            None => self.http.put(&path, input).await,
        };
        self.cache.invalidate_offers().await;
        result
    }

    /// Delete an offer
    pub async fn delete_offer(&self, id: i64) -> ClientResult<bool> {
        let result = self.http.delete(&format!("/api/offers/{id}")).await;
        self.cache.invalidate_offers().await;
        result
    }

    // ── Categories ───────────────────────────────────────────

    /// All categories (offline fallback derives them from the menu)
    pub async fn categories(&self) -> ClientResult<Vec<Category>> {
        match self.http.get::<Vec<Category>>("/api/categories").await {
            Ok(categories) => Ok(categories),
            Err(ClientError::Http(e)) => {
                tracing::warn!(error = %e, "API unreachable, serving fallback categories");
                Ok(fallback::categories())
            }
            Err(e) => Err(e),
        }
    }

    // ── Orders ───────────────────────────────────────────────

    /// All orders, newest first. No fallback: order data must be real.
    pub async fn orders(&self) -> ClientResult<Vec<Order>> {
        self.http.get("/api/orders").await
    }

    /// One order by id
    pub async fn order(&self, id: i64) -> ClientResult<Order> {
        self.http.get(&format!("/api/orders/{id}")).await
    }

    /// Place an order
    pub async fn add_order(&self, input: &OrderInput) -> ClientResult<Order> {
        self.http.post("/api/orders", input).await
    }

    /// Move an order to a new status
    pub async fn update_order_status(&self, id: i64, status: OrderStatus) -> ClientResult<Order> {
        let body = OrderStatusUpdate {
            status: status.to_string(),
        };
        self.http
            .patch(&format!("/api/orders/{id}/status"), &body)
            .await
    }

    // ── Feedback ─────────────────────────────────────────────

    /// All feedback entries, for the admin dashboard
    pub async fn feedback(&self) -> ClientResult<Vec<Feedback>> {
        self.http.get("/api/feedback").await
    }

    /// Published testimonials (cached; empty when offline)
    pub async fn published_feedback(&self) -> ClientResult<Vec<Feedback>> {
        if let Some(cached) = self.cache.published_feedback().await {
            return Ok(cached);
        }
        match self.http.get::<Vec<Feedback>>("/api/feedback/published").await {
            Ok(entries) => {
                self.cache.store_published_feedback(entries.clone()).await;
                Ok(entries)
            }
            Err(ClientError::Http(e)) => {
                tracing::warn!(error = %e, "API unreachable, no testimonials to show");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Submit feedback; it starts unpublished, so no cached list changes
    pub async fn add_feedback(&self, input: &FeedbackInput) -> ClientResult<Feedback> {
        self.http.post("/api/feedback", input).await
    }

    /// Publish or unpublish an entry
    pub async fn set_feedback_published(
        &self,
        id: i64,
        is_published: bool,
    ) -> ClientResult<Feedback> {
        let body = shared::models::FeedbackPublishUpdate { is_published };
        let result = self
            .http
            .patch(&format!("/api/feedback/{id}/publish"), &body)
            .await;
        self.cache.invalidate_published_feedback().await;
        result
    }

    /// Delete a feedback entry
    pub async fn delete_feedback(&self, id: i64) -> ClientResult<bool> {
        let result = self.http.delete(&format!("/api/feedback/{id}")).await;
        self.cache.invalidate_published_feedback().await;
        result
    }

    // ── Contact, auth, diagnostics ───────────────────────────

    /// Send a contact form message
    pub async fn send_contact_message(&self, input: &ContactInput) -> ClientResult<ContactMessage> {
        self.http.post("/api/contact", input).await
    }

    /// Admin login
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.http.post("/api/auth/login", &body).await
    }

    /// Liveness probe
    pub async fn health(&self) -> ClientResult<HealthInfo> {
        self.http.get("/api/health").await
    }

    /// Server diagnostics
    pub async fn diagnostic(&self) -> ClientResult<DiagnosticInfo> {
        self.http.get("/api/diagnostic").await
    }

    /// Upload directory info
    pub async fn upload_path_info(&self) -> ClientResult<UploadPathInfo> {
        self.http.get("/api/upload-path").await
    }
}
