//! Exchange history rules: record construction, filtering and receipt
//! confirmation.

use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{ExchangeRecord, OrderStatus, Product, UserProfile};

/// Build the history record for a just-committed exchange.
///
/// Order numbers follow the `EX` + date + 4-digit sequence format the history
/// screen displays, e.g. `EX202406100001`.
pub fn new_record(product: &Product, profile: &UserProfile, sequence: usize) -> ExchangeRecord {
    let now = Utc::now();
    ExchangeRecord {
        id: Uuid::new_v4().to_string(),
        product_name: product.name.clone(),
        exchange_date: now.format("%Y-%m-%d").to_string(),
        points: product.points,
        status: OrderStatus::Pending,
        order_number: format!("EX{}{:04}", now.format("%Y%m%d"), sequence),
        address: profile.address.clone(),
        tracking_number: None,
        logistics: None,
    }
}

/// Filter exchange records by status chip and search box.
///
/// `None` status is the `全部` chip; the search query matches product name or
/// order number, case-insensitively.
pub fn filter_records(
    records: &[ExchangeRecord],
    status: Option<OrderStatus>,
    query: &str,
) -> Vec<ExchangeRecord> {
    let query = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            let matches_status = status.map_or(true, |s| record.status == s);
            let matches_search = query.is_empty()
                || record.product_name.to_lowercase().contains(&query)
                || record.order_number.to_lowercase().contains(&query);
            matches_status && matches_search
        })
        .cloned()
        .collect()
}

/// Confirm receipt of a shipped order (`已发货` → `已完成`).
///
/// Unlike post likes, this is an explicit user action on a specific record,
/// so an unknown id is a real error rather than a benign race.
pub fn confirm_receipt(
    records: &[ExchangeRecord],
    id: &str,
) -> Result<Vec<ExchangeRecord>, AppError> {
    let record = records
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Exchange record {} not found", id)))?;

    if record.status != OrderStatus::Shipped {
        return Err(AppError::Validation(format!(
            "Only shipped orders can be confirmed, order {} is {}",
            record.order_number,
            record.status.as_str()
        )));
    }

    Ok(records
        .iter()
        .map(|r| {
            if r.id == id {
                let mut updated = r.clone();
                updated.status = OrderStatus::Completed;
                updated
            } else {
                r.clone()
            }
        })
        .collect())
}
