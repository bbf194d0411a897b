use serde::{Deserialize, Serialize};
use validator::Validate;

/// Contact form payload. Messages are transient: the server logs them and
/// acknowledges, nothing is persisted. Only non-emptiness is checked here;
/// anything stricter lives in the browser form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "email cannot be empty"))]
    pub email: String,

    #[validate(length(min = 1, message = "subject cannot be empty"))]
    pub subject: String,

    #[validate(length(min = 1, message = "message cannot be empty"))]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactAck {
    pub success: bool,
    pub message: String,
}
