use actix_web::{web, HttpResponse};
use crate::errors::AppError;
use crate::models::department::Department;

pub async fn get_departments(
    pool: web::Data<sqlx::PgPool>,
) -> Result<HttpResponse, AppError> {
    let departments = sqlx::query_as::<_, Department>("SELECT * FROM departments")
        .fetch_all(&**pool)
        .await?;

    Ok(HttpResponse::Ok().json(departments))
}
