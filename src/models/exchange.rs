//! Exchange models: decisions, results, history records and the per-attempt
//! phase machine.

use serde::{Deserialize, Serialize};

use super::Product;
use crate::errors::AppError;

/// Outcome of validating an exchange attempt, before anything is committed.
#[derive(Debug)]
pub enum ExchangeDecision {
    /// All checks passed; `remaining_balance` is computed but not committed.
    Approved { remaining_balance: u32 },
    /// First failing check, in the fixed stock-then-balance order.
    Rejected(AppError),
}

impl ExchangeDecision {
    pub fn is_approved(&self) -> bool {
        matches!(self, ExchangeDecision::Approved { .. })
    }
}

/// Result envelope surfaced to the shopping screen after a commit attempt.
///
/// Transient, constructed fresh per attempt, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_balance: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_product: Option<Product>,
}

impl ExchangeResult {
    /// Successful exchange, with the message copy the screen displays.
    pub fn committed(product: Product, new_balance: u32) -> Self {
        Self {
            success: true,
            message: format!(
                "成功兑换\"{}\"，消耗{}积分",
                product.name, product.points
            ),
            updated_balance: Some(new_balance),
            updated_product: Some(product),
        }
    }

    /// Rejected exchange carrying the specific reason.
    pub fn rejected(error: &AppError) -> Self {
        Self {
            success: false,
            message: error.message(),
            updated_balance: None,
            updated_product: None,
        }
    }
}

/// Delivery status of an exchange record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrderStatus {
    #[serde(rename = "待发货")]
    Pending,
    #[serde(rename = "已发货")]
    Shipped,
    #[serde(rename = "已完成")]
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "待发货",
            OrderStatus::Shipped => "已发货",
            OrderStatus::Completed => "已完成",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "待发货" => Some(OrderStatus::Pending),
            "已发货" => Some(OrderStatus::Shipped),
            "已完成" => Some(OrderStatus::Completed),
            _ => None,
        }
    }
}

/// A completed exchange as shown on the history screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRecord {
    pub id: String,
    pub product_name: String,
    /// Calendar date of the exchange, `YYYY-MM-DD`
    pub exchange_date: String,
    pub points: u32,
    pub status: OrderStatus,
    pub order_number: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logistics: Option<String>,
}

/// Per-attempt exchange state machine.
///
/// `Committed` and `Rejected` are terminal per attempt; the store returns to
/// `Idle` once the result has been produced, and the screen disables the
/// confirm button while `Validating`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum ExchangePhase {
    #[default]
    Idle,
    Validating,
    Committed,
    Rejected,
}
