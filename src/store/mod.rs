//! In-memory store: the hosting layer's single mutable reference.
//!
//! The mobile screens keep their state in Redux slices and `useState`; this
//! store is the Rust counterpart. One write-locked blob of application data,
//! mutated only through the pure rule functions in [`crate::feed`] and
//! [`crate::mall`], with a revision counter the hosting layer can poll for
//! change detection.

use chrono::Utc;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::errors::AppError;
use crate::feed::{self, FilterState};
use crate::mall;
use crate::models::{
    CreateCommentRequest, CreatePostRequest, Datastore, ExchangeDecision, ExchangePhase,
    ExchangeRecord, ExchangeResult, OrderStatus, Post, Product, ProductCategory, RevisionInfo,
    UserProfile,
};

const SCHEMA_VERSION: i32 = 1;

/// Initial collections a hosting layer seeds the store with.
#[derive(Debug, Clone, Default)]
pub struct InitialState {
    pub posts: Vec<Post>,
    pub products: Vec<Product>,
    pub records: Vec<ExchangeRecord>,
    pub balance: u32,
    pub profile: Option<UserProfile>,
}

/// Everything the application holds in memory.
#[derive(Debug)]
struct StoreData {
    posts: Vec<Post>,
    products: Vec<Product>,
    records: Vec<ExchangeRecord>,
    balance: u32,
    profile: UserProfile,
    phase: ExchangePhase,
    revision_id: i64,
    generated_at: String,
}

impl StoreData {
    /// Bump the revision after a data mutation.
    fn touch(&mut self) {
        self.revision_id += 1;
        self.generated_at = Utc::now().to_rfc3339();
    }
}

/// In-memory store for all application data.
pub struct Store {
    data: RwLock<StoreData>,
    config: Config,
}

impl Store {
    /// Create a store seeded with the given initial collections.
    pub fn with_initial(config: Config, initial: InitialState) -> Self {
        let data = StoreData {
            posts: initial.posts,
            products: initial.products,
            records: initial.records,
            balance: initial.balance,
            profile: initial.profile.unwrap_or(UserProfile {
                address: String::new(),
                phone: String::new(),
            }),
            phase: ExchangePhase::Idle,
            revision_id: 0,
            generated_at: Utc::now().to_rfc3339(),
        };
        Self {
            data: RwLock::new(data),
            config,
        }
    }

    /// Create an empty store.
    pub fn new(config: Config) -> Self {
        Self::with_initial(config, InitialState::default())
    }

    /// Create a store preloaded with the demo feed, catalog and history.
    pub fn with_demo_data(config: Config) -> Self {
        Self::with_initial(config, crate::seed::demo_state())
    }

    /// Create a store honoring the configured demo-data toggle.
    pub fn from_config(config: Config) -> Self {
        if config.seed_demo_data {
            Self::with_demo_data(config)
        } else {
            Self::new(config)
        }
    }

    // ==================== REVISION / SNAPSHOT ====================

    /// Get the current revision ID.
    pub async fn get_revision_id(&self) -> i64 {
        self.data.read().await.revision_id
    }

    /// Get revision info.
    pub async fn get_revision_info(&self) -> RevisionInfo {
        let data = self.data.read().await;
        RevisionInfo {
            revision_id: data.revision_id,
            generated_at: data.generated_at.clone(),
        }
    }

    /// Get the full datastore snapshot.
    pub async fn get_datastore(&self) -> Datastore {
        let data = self.data.read().await;
        Datastore {
            schema_version: SCHEMA_VERSION,
            generated_at: data.generated_at.clone(),
            revision_id: data.revision_id,
            posts: data.posts.clone(),
            products: data.products.clone(),
            records: data.records.clone(),
            balance: data.balance,
        }
    }

    // ==================== FEED OPERATIONS ====================

    /// List all posts, newest first.
    pub async fn list_posts(&self) -> Vec<Post> {
        self.data.read().await.posts.clone()
    }

    /// Get a post by ID.
    pub async fn get_post(&self, id: &str) -> Option<Post> {
        self.data.read().await.posts.iter().find(|p| p.id == id).cloned()
    }

    /// The feed as the community screen renders it under the given filters.
    pub async fn filtered_posts(&self, filters: &FilterState) -> Vec<Post> {
        feed::apply_filters(&self.data.read().await.posts, filters)
    }

    /// Publish a new post to the front of the feed.
    pub async fn create_post(&self, request: &CreatePostRequest) -> Result<Post, AppError> {
        let mut data = self.data.write().await;
        let next = feed::publish_post(&data.posts, request)?;
        data.posts = next;
        data.touch();
        Ok(data.posts[0].clone())
    }

    /// Like a post. Unknown ids are silently ignored.
    pub async fn like_post(&self, id: &str) {
        let mut data = self.data.write().await;
        let known = data.posts.iter().any(|p| p.id == id);
        data.posts = feed::like_post(&data.posts, id);
        if known {
            data.touch();
        }
    }

    /// Comment on a post. Blank text and unknown ids are silently ignored.
    pub async fn add_comment(&self, id: &str, request: &CreateCommentRequest) {
        let mut data = self.data.write().await;
        let known = data.posts.iter().any(|p| p.id == id);
        data.posts = feed::add_comment(&data.posts, id, request);
        if known && !request.content.trim().is_empty() {
            data.touch();
        }
    }

    // ==================== MALL OPERATIONS ====================

    /// List the product catalog.
    pub async fn list_products(&self) -> Vec<Product> {
        self.data.read().await.products.clone()
    }

    /// Get a product by ID.
    pub async fn get_product(&self, id: &str) -> Option<Product> {
        self.data
            .read()
            .await
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    /// The catalog as the shopping screen renders it under the given filters.
    pub async fn filtered_products(&self, category: ProductCategory, query: &str) -> Vec<Product> {
        mall::filter_products(&self.data.read().await.products, category, query)
    }

    /// The user's current points balance.
    pub async fn balance(&self) -> u32 {
        self.data.read().await.balance
    }

    /// Shipping details shown in the confirm dialog.
    pub async fn profile(&self) -> UserProfile {
        self.data.read().await.profile.clone()
    }

    /// Current phase of the exchange attempt machine.
    pub async fn exchange_phase(&self) -> ExchangePhase {
        self.data.read().await.phase
    }

    /// Validate an exchange without committing, for the confirm dialog.
    pub async fn preview_exchange(&self, product_id: &str) -> Result<ExchangeDecision, AppError> {
        let data = self.data.read().await;
        let product = data
            .products
            .iter()
            .find(|p| p.id == product_id)
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", product_id)))?;
        Ok(mall::request_exchange(data.balance, product))
    }

    /// Execute an exchange: simulated processing delay, then re-validation
    /// and commit under a single write lock.
    ///
    /// The preview from [`Store::preview_exchange`] is never trusted here;
    /// the commit re-checks stock and balance against current state, which is
    /// the only defense against a double-submit. Once started, the attempt
    /// runs to completion; there is no cancellation.
    pub async fn exchange(&self, product_id: &str) -> Result<ExchangeResult, AppError> {
        {
            let mut data = self.data.write().await;
            data.phase = ExchangePhase::Validating;
        }

        // Stands in for the network round-trip the real app will eventually
        // make; the confirm button stays disabled while this runs.
        if self.config.exchange_delay_ms > 0 {
            tokio::time::sleep(self.config.exchange_delay()).await;
        }

        let mut data = self.data.write().await;

        let product = match data.products.iter().find(|p| p.id == product_id).cloned() {
            Some(product) => product,
            None => {
                data.phase = ExchangePhase::Idle;
                return Err(AppError::NotFound(format!(
                    "Product {} not found",
                    product_id
                )));
            }
        };

        let (new_balance, new_product, result) = mall::commit_exchange(data.balance, &product);

        if result.success {
            data.balance = new_balance;
            if let Some(slot) = data.products.iter_mut().find(|p| p.id == product_id) {
                *slot = new_product.clone();
            }
            let sequence = data.records.len() + 1;
            let record = mall::new_record(&new_product, &data.profile, sequence);
            data.records.push(record);
            data.phase = ExchangePhase::Committed;
            data.touch();
        } else {
            data.phase = ExchangePhase::Rejected;
        }

        Ok(result)
    }

    /// Dismiss the exchange result notification, returning the phase machine
    /// to `Idle` for the next attempt.
    pub async fn dismiss_result(&self) {
        let mut data = self.data.write().await;
        data.phase = ExchangePhase::Idle;
    }

    // ==================== HISTORY OPERATIONS ====================

    /// List all exchange records.
    pub async fn list_records(&self) -> Vec<ExchangeRecord> {
        self.data.read().await.records.clone()
    }

    /// The history as its screen renders it under the given filters.
    pub async fn filtered_records(
        &self,
        status: Option<OrderStatus>,
        query: &str,
    ) -> Vec<ExchangeRecord> {
        mall::filter_records(&self.data.read().await.records, status, query)
    }

    /// Confirm receipt of a shipped order.
    pub async fn confirm_receipt(&self, id: &str) -> Result<ExchangeRecord, AppError> {
        let mut data = self.data.write().await;
        let next = mall::confirm_receipt(&data.records, id)?;
        let updated = next
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Exchange record {} not found", id)))?;
        data.records = next;
        data.touch();
        Ok(updated)
    }
}
