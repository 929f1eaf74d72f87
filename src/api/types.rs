use serde::{Deserialize, Serialize};

/// Success body of the purchase endpoint.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PurchaseReceipt {
    /// Content identifier of the purchased dataset.
    pub cid: String,
}
