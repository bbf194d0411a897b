use actix_web::{Error, HttpResponse, Responder, web};

use crate::{AppState, entities::contact::ContactForm};

pub async fn create_contact_message(
    state: web::Data<AppState>,
    form: web::Json<ContactForm>,
) -> Result<impl Responder, Error> {
    let ack = state
        .contact_handler
        .receive_message(form.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ack))
}
