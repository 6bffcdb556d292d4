//! Mall product model matching the frontend Product interface.

use serde::{Deserialize, Serialize};

/// Fixed category set for mall products.
///
/// `All` (`全部`) is the filter sentinel; catalog products always carry one of
/// the concrete categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProductCategory {
    #[serde(rename = "全部")]
    All,
    #[serde(rename = "清洁用品")]
    CleaningSupplies,
    #[serde(rename = "厨房用品")]
    Kitchenware,
    #[serde(rename = "收纳工具")]
    StorageTools,
    #[serde(rename = "生活用品")]
    DailyNecessities,
    #[serde(rename = "其他")]
    Other,
}

impl ProductCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::All => "全部",
            ProductCategory::CleaningSupplies => "清洁用品",
            ProductCategory::Kitchenware => "厨房用品",
            ProductCategory::StorageTools => "收纳工具",
            ProductCategory::DailyNecessities => "生活用品",
            ProductCategory::Other => "其他",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "全部" => Some(ProductCategory::All),
            "清洁用品" => Some(ProductCategory::CleaningSupplies),
            "厨房用品" => Some(ProductCategory::Kitchenware),
            "收纳工具" => Some(ProductCategory::StorageTools),
            "生活用品" => Some(ProductCategory::DailyNecessities),
            "其他" => Some(ProductCategory::Other),
            _ => None,
        }
    }
}

/// A catalog product exchangeable for points.
///
/// `stock` and `sales` are mutated only by a successful exchange; the unsigned
/// types carry the `stock >= 0` / `sales >= 0` invariants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Points cost, always positive in the catalog
    pub points: u32,
    pub category: ProductCategory,
    pub stock: u32,
    pub sales: u32,
}
