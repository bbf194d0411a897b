use actix_web::{Error, HttpResponse, Responder, web};

use crate::AppState;

pub async fn list_projects(state: web::Data<AppState>) -> Result<impl Responder, Error> {
    let response = state.project_handler.list_projects().await?;

    Ok(HttpResponse::Ok().json(response))
}

pub async fn get_project(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<impl Responder, Error> {
    let id = path.into_inner();
    let project = state.project_handler.get_project_by_id(&id).await?;

    Ok(HttpResponse::Ok().json(project))
}
