//! User profile model: shipping details shown in the exchange confirm dialog.

use serde::{Deserialize, Serialize};

/// Shipping details of the current user, embedded into exchange records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub address: String,
    pub phone: String,
}
