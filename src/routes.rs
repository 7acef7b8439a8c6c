use actix_web::{web, HttpRequest};
use crate::errors::AppError;
use crate::handlers;

/// Registers the `/api` routes. The store handle is expected as
/// `web::Data<PgPool>` on the enclosing `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req: &HttpRequest| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .service(
        web::resource("/api/employees")
            .route(web::get().to(handlers::employee::get_employees))
            .route(web::post().to(handlers::employee::create_employee)),
    )
    .service(
        web::resource("/api/employees/{id}")
            .route(web::put().to(handlers::employee::update_employee))
            .route(web::delete().to(handlers::employee::delete_employee)),
    )
    .service(
        web::resource("/api/departments")
            .route(web::get().to(handlers::department::get_departments)),
    );
}
