use std::time::Duration;

use tokio::time::sleep;
use validator::Validate;

use crate::{
    entities::contact::{ContactAck, ContactForm},
    errors::AppError,
};

/// Artificial response delay carried over from the demo backend, so the UI's
/// submit spinner stays visible long enough to be seen.
const ACK_DELAY: Duration = Duration::from_millis(1000);

/// Contact submissions are intentionally not persisted. The only server-side
/// effect is the operational log entry written here.
pub struct ContactHandler;

impl ContactHandler {
    pub fn new() -> Self {
        ContactHandler
    }

    pub async fn receive_message(&self, form: ContactForm) -> Result<ContactAck, AppError> {
        form.validate()?;

        tracing::info!(
            from = %form.name,
            email = %form.email,
            subject = %form.subject,
            "new contact form submission"
        );
        tracing::info!(message = %form.message, "contact message body");

        sleep(ACK_DELAY).await;

        Ok(ContactAck {
            success: true,
            message: "Message received successfully".to_string(),
        })
    }
}

impl Default for ContactHandler {
    fn default() -> Self {
        ContactHandler::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Nice portfolio.".into(),
        }
    }

    #[tokio::test]
    async fn acknowledges_a_valid_submission() {
        let handler = ContactHandler::new();
        let ack = handler.receive_message(valid_form()).await.unwrap();

        assert!(ack.success);
        assert_eq!(ack.message, "Message received successfully");
    }

    #[tokio::test]
    async fn rejects_empty_fields() {
        let handler = ContactHandler::new();
        let mut form = valid_form();
        form.message = String::new();

        let result = handler.receive_message(form).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
