use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Success envelope: `{ "message": ..., "data": ... }`.
#[derive(Serialize, Debug)]
pub struct MessageResponse<T> {
    pub message: &'static str,
    pub data: T,
}

/// Error envelope returned to clients. Only ever carries a generic message.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}
