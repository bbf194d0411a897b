use serde::{Deserialize, Serialize};

/// Wire envelope for full-collection reads: `GET /api/{collection}`
/// responds with `{ "items": [...] }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        ListResponse { items }
    }
}
