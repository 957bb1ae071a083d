use serde::{Deserialize, Serialize};

/// JWT payload. `user` carries the account email.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub user: String,
    #[serde(default)]
    pub iat: i64, // issued at (unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>, // only present when a ttl is configured
}
