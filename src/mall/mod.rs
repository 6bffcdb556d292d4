//! Points mall rules: exchange validation and commit, plus catalog filtering.
//!
//! The exchange functions are pure over `(balance, product)`; the store wraps
//! them with the simulated processing delay and the single state swap.

mod history;

pub use history::*;

use crate::errors::AppError;
use crate::models::{ExchangeDecision, ExchangeResult, Product, ProductCategory};

/// Validate an exchange attempt without committing anything.
///
/// Checks run in a fixed order and the first failing check wins: stock
/// before balance. An approval carries the resulting balance, computed but
/// not yet committed.
pub fn request_exchange(balance: u32, product: &Product) -> ExchangeDecision {
    if product.stock == 0 {
        return ExchangeDecision::Rejected(AppError::OutOfStock {
            product: product.name.clone(),
        });
    }
    if balance < product.points {
        return ExchangeDecision::Rejected(AppError::InsufficientPoints {
            required: product.points,
            balance,
        });
    }
    ExchangeDecision::Approved {
        remaining_balance: balance - product.points,
    }
}

/// The shopping screen's button-disable predicate.
pub fn can_exchange(balance: u32, product: &Product) -> bool {
    request_exchange(balance, product).is_approved()
}

/// Re-validate and commit an exchange.
///
/// A stale preview is never trusted: validation runs again here, which is the
/// only defense against a double-submit racing the confirm dialog. On
/// approval the debit, stock decrement and sales increment land as one value
/// construction; on rejection the inputs are returned unchanged.
pub fn commit_exchange(balance: u32, product: &Product) -> (u32, Product, ExchangeResult) {
    match request_exchange(balance, product) {
        ExchangeDecision::Approved { remaining_balance } => {
            let mut updated = product.clone();
            updated.stock -= 1;
            updated.sales += 1;
            let result = ExchangeResult::committed(updated.clone(), remaining_balance);
            tracing::info!(
                product_id = %product.id,
                points = product.points,
                new_balance = remaining_balance,
                "exchange committed"
            );
            (remaining_balance, updated, result)
        }
        ExchangeDecision::Rejected(reason) => {
            tracing::info!(
                product_id = %product.id,
                code = reason.error_code(),
                "exchange rejected"
            );
            (balance, product.clone(), ExchangeResult::rejected(&reason))
        }
    }
}

/// Filter the product catalog by category chip and search box.
pub fn filter_products(
    products: &[Product],
    category: ProductCategory,
    query: &str,
) -> Vec<Product> {
    let query = query.to_lowercase();
    products
        .iter()
        .filter(|product| {
            let matches_category =
                category == ProductCategory::All || product.category == category;
            let matches_search = query.is_empty()
                || product.name.to_lowercase().contains(&query)
                || product.description.to_lowercase().contains(&query);
            matches_category && matches_search
        })
        .cloned()
        .collect()
}
