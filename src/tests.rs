//! Integration tests for the ChoreBoard domain core.

use once_cell::sync::Lazy;

use crate::config::Config;
use crate::errors::AppError;
use crate::feed::FilterState;
use crate::models::{
    Author, CreateCommentRequest, CreatePostRequest, ExchangePhase, OrderStatus, PostCategory,
    Product, ProductCategory,
};
use crate::store::{InitialState, Store};

static TRACING: Lazy<()> = Lazy::new(|| {
    crate::init_logging(&test_config());
});

fn test_config() -> Config {
    Config {
        exchange_delay_ms: 0,
        seed_demo_data: false,
        log_level: "warn".to_string(),
    }
}

/// Store preloaded with the demo screens' data.
fn demo_store() -> Store {
    Lazy::force(&TRACING);
    Store::with_demo_data(test_config())
}

/// Store with a custom catalog and balance, empty feed and history.
fn catalog_store(products: Vec<Product>, balance: u32) -> Store {
    Lazy::force(&TRACING);
    Store::with_initial(
        test_config(),
        InitialState {
            products,
            balance,
            profile: Some(crate::seed::demo_profile()),
            ..Default::default()
        },
    )
}

fn product(id: &str, points: u32, stock: u32) -> Product {
    Product {
        id: id.to_string(),
        name: format!("测试商品{}", id),
        description: String::new(),
        points,
        category: ProductCategory::Other,
        stock,
        sales: 0,
    }
}

fn current_user() -> Author {
    Author {
        name: "当前用户".to_string(),
        level: "家务达人".to_string(),
        avatar: None,
    }
}

#[tokio::test]
async fn test_demo_snapshot_shape() {
    let store = demo_store();
    let snapshot = store.get_datastore().await;

    assert_eq!(snapshot.schema_version, 1);
    assert_eq!(snapshot.revision_id, 0);
    assert_eq!(snapshot.posts.len(), 2);
    assert_eq!(snapshot.products.len(), 3);
    assert_eq!(snapshot.records.len(), 4);
    assert_eq!(snapshot.balance, 1280);
    assert_eq!(store.profile().await.address, "北京市海淀区中关村大街1号");

    // The demo-seed toggle decides what from_config builds
    let empty = Store::from_config(test_config());
    assert!(empty.list_posts().await.is_empty());
    assert_eq!(empty.balance().await, 0);

    let mut seeded_config = test_config();
    seeded_config.seed_demo_data = true;
    let seeded = Store::from_config(seeded_config);
    assert_eq!(seeded.list_products().await.len(), 3);
}

#[tokio::test]
async fn test_exchange_end_to_end_ledger() {
    // Catalog with a single product: 300 points, two in stock
    let store = catalog_store(vec![product("1", 300, 2)], 300);

    let result = store.exchange("1").await.unwrap();
    assert!(result.success);
    assert_eq!(result.updated_balance, Some(0));
    let updated = result.updated_product.unwrap();
    assert_eq!(updated.stock, 1);
    assert_eq!(updated.sales, 1);

    assert_eq!(store.balance().await, 0);
    let records = store.list_records().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, OrderStatus::Pending);
    assert_eq!(records[0].points, 300);
    assert!(records[0].order_number.ends_with("0001"));

    // Second attempt on the updated state: balance is exhausted
    let result = store.exchange("1").await.unwrap();
    assert!(!result.success);
    assert_eq!(result.message, "积分不足，无法兑换商品");
    assert_eq!(store.balance().await, 0);
    assert_eq!(store.get_product("1").await.unwrap().stock, 1);
    assert_eq!(store.list_records().await.len(), 1);
}

#[tokio::test]
async fn test_exchange_never_oversells() {
    // One in stock, balance covers two: the second attempt hits OutOfStock
    let store = catalog_store(vec![product("1", 100, 1)], 1000);

    let first = store.exchange("1").await.unwrap();
    assert!(first.success);
    assert_eq!(store.get_product("1").await.unwrap().stock, 0);
    assert_eq!(store.balance().await, 900);

    let second = store.exchange("1").await.unwrap();
    assert!(!second.success);
    assert_eq!(second.message, "商品已售罄，请选择其他商品");
    assert_eq!(store.get_product("1").await.unwrap().stock, 0);
    assert_eq!(store.get_product("1").await.unwrap().sales, 1);
    assert_eq!(store.balance().await, 900);
}

#[tokio::test]
async fn test_rejection_priority_stock_before_balance() {
    // Sold out AND unaffordable: stock is reported, per the fixed check order
    let store = catalog_store(vec![product("1", 100, 0)], 50);

    let preview = store.preview_exchange("1").await.unwrap();
    assert!(!preview.is_approved());

    let result = store.exchange("1").await.unwrap();
    assert!(!result.success);
    assert_eq!(result.message, "商品已售罄，请选择其他商品");
}

#[tokio::test]
async fn test_exchange_unknown_product_is_an_error() {
    let store = demo_store();
    let err = store.exchange("999").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(store.exchange_phase().await, ExchangePhase::Idle);
    assert_eq!(store.balance().await, 1280);
}

#[tokio::test]
async fn test_exchange_phase_machine() {
    let store = catalog_store(vec![product("1", 100, 1)], 100);

    let result = store.exchange("1").await.unwrap();
    assert!(result.success);
    assert_eq!(store.exchange_phase().await, ExchangePhase::Committed);

    store.dismiss_result().await;
    assert_eq!(store.exchange_phase().await, ExchangePhase::Idle);

    let result = store.exchange("1").await.unwrap();
    assert!(!result.success);
    assert_eq!(store.exchange_phase().await, ExchangePhase::Rejected);

    store.dismiss_result().await;
    assert_eq!(store.exchange_phase().await, ExchangePhase::Idle);
}

#[tokio::test]
async fn test_exchange_applies_simulated_delay() {
    let mut config = test_config();
    config.exchange_delay_ms = 50;
    let store = Store::with_initial(
        config,
        InitialState {
            products: vec![product("1", 100, 1)],
            balance: 100,
            ..Default::default()
        },
    );

    let started = tokio::time::Instant::now();
    let result = store.exchange("1").await.unwrap();
    assert!(result.success);
    assert!(started.elapsed() >= std::time::Duration::from_millis(50));
}

#[tokio::test]
async fn test_publish_like_comment_flow() {
    let store = demo_store();
    let revision = store.get_revision_id().await;

    // Blank title is rejected and nothing changes
    let invalid = CreatePostRequest {
        title: String::new(),
        content: "内容".to_string(),
        category: Some(PostCategory::Experience),
        tags: Vec::new(),
        author: current_user(),
    };
    assert!(store.create_post(&invalid).await.is_err());
    assert_eq!(store.list_posts().await.len(), 2);
    assert_eq!(store.get_revision_id().await, revision);

    // Valid request lands at the front of the feed
    let request = CreatePostRequest {
        title: "阳台收纳心得".to_string(),
        content: "可折叠收纳箱真的很好用".to_string(),
        category: Some(PostCategory::Organizing),
        tags: vec!["阳台".to_string()],
        author: current_user(),
    };
    let post = store.create_post(&request).await.unwrap();
    let posts = store.list_posts().await;
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0].id, post.id);
    assert!(store.get_revision_id().await > revision);

    // Like and comment through the store
    store.like_post(&post.id).await;
    assert_eq!(store.get_post(&post.id).await.unwrap().likes, 1);

    let comment = CreateCommentRequest {
        author: "李爸爸".to_string(),
        content: "学习了！".to_string(),
    };
    store.add_comment(&post.id, &comment).await;
    let comments = store.get_post(&post.id).await.unwrap().comments;
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].content, "学习了！");

    // Unknown ids are benign no-ops and do not bump the revision
    let revision = store.get_revision_id().await;
    store.like_post("does-not-exist").await;
    store.add_comment("does-not-exist", &comment).await;
    assert_eq!(store.get_revision_id().await, revision);
}

#[tokio::test]
async fn test_filtered_views_through_store() {
    let store = demo_store();

    let filters = FilterState {
        category: PostCategory::CleaningTips,
        tags: vec!["厨房".to_string()],
        search_query: "清洁".to_string(),
    };
    let posts = store.filtered_posts(&filters).await;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, "1");

    let products = store
        .filtered_products(ProductCategory::StorageTools, "收纳")
        .await;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, "2");

    let shipped = store
        .filtered_records(Some(OrderStatus::Shipped), "")
        .await;
    assert_eq!(shipped.len(), 1);
    assert_eq!(shipped[0].order_number, "EX202406050002");
}

#[tokio::test]
async fn test_confirm_receipt_flow() {
    let store = demo_store();

    // Demo record "2" is shipped; confirming completes it
    let updated = store.confirm_receipt("2").await.unwrap();
    assert_eq!(updated.status, OrderStatus::Completed);
    assert_eq!(
        store
            .filtered_records(Some(OrderStatus::Shipped), "")
            .await
            .len(),
        0
    );

    // Pending record "3" cannot be confirmed yet
    let err = store.confirm_receipt("3").await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_snapshot_serialization_contract() {
    let store = demo_store();
    let snapshot = store.get_datastore().await;

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["schemaVersion"], 1);
    assert_eq!(json["revisionId"], 0);
    assert_eq!(json["posts"][0]["category"], "清洁技巧");
    assert_eq!(json["products"][2]["category"], "厨房用品");
    assert_eq!(json["records"][1]["status"], "已发货");
    assert_eq!(json["records"][1]["orderNumber"], "EX202406050002");
    assert_eq!(json["balance"], 1280);
}

#[tokio::test]
async fn test_revision_monotonicity() {
    let store = demo_store();
    let initial = store.get_revision_id().await;

    let result = store.exchange("2").await.unwrap(); // 300 points
    assert!(result.success);
    let after_first = store.get_revision_id().await;
    assert!(after_first > initial);

    let result = store.exchange("3").await.unwrap(); // 800 points
    assert!(result.success);
    let after_second = store.get_revision_id().await;
    assert!(after_second > after_first);

    // Balance is now 180: the rejected attempt mutates nothing
    let result = store.exchange("3").await.unwrap();
    assert!(!result.success);
    assert_eq!(store.get_revision_id().await, after_second);

    store.confirm_receipt("2").await.unwrap();
    assert!(store.get_revision_id().await > after_second);

    let info = store.get_revision_info().await;
    assert_eq!(info.revision_id, store.get_revision_id().await);
    assert!(!info.generated_at.is_empty());
}
