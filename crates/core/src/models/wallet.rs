use serde::{Deserialize, Serialize};

/// Body of `POST /coin/request` and `POST /money/request`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountRequest {
    pub amount: u64,
}
