use serde::{Deserialize, Serialize};

/// A retail location returned by the store-lookup API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    /// API-assigned store id.
    pub id: i64,
    pub name: String,
    pub address_line_1: String,
    pub city: String,
    pub postal_code: String,
}
