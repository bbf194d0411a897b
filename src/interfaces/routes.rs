use actix_web::web;

use crate::handlers::{home::home, json_error::JsonError, system::health_check};

mod api;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default().error_handler(|err, _req| JsonError::from(err).into()),
    );

    cfg.service(home);
    cfg.service(health_check);

    cfg.service(web::scope("/api").configure(api::config_routes));
}
