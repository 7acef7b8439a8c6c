use actix_web::{web, HttpResponse};
use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeePayload};

pub async fn get_employees(
    pool: web::Data<sqlx::PgPool>,
) -> Result<HttpResponse, AppError> {
    // Seed rows share one transaction timestamp; id breaks the tie.
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT * FROM employees ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(employees))
}

pub async fn create_employee(
    pool: web::Data<sqlx::PgPool>,
    payload: web::Json<EmployeePayload>,
) -> Result<HttpResponse, AppError> {
    let EmployeePayload { name, department_id } = payload.into_inner();

    let employee = sqlx::query_as::<_, Employee>(
        r#"
        INSERT INTO employees (name, department_id)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(name)
    .bind(department_id)
    .fetch_one(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(employee))
}

pub async fn update_employee(
    pool: web::Data<sqlx::PgPool>,
    id: web::Path<i32>,
    payload: web::Json<EmployeePayload>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let EmployeePayload { name, department_id } = payload.into_inner();

    // updated_at moves forward even when name and department are unchanged.
    let employee = sqlx::query_as::<_, Employee>(
        r#"
        UPDATE employees
        SET name = $1, department_id = $2, updated_at = now()
        WHERE id = $3
        RETURNING *
        "#,
    )
    .bind(name)
    .bind(department_id)
    .bind(id)
    .fetch_optional(&**pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))?;

    Ok(HttpResponse::Ok().json(employee))
}

pub async fn delete_employee(
    pool: web::Data<sqlx::PgPool>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    sqlx::query("DELETE FROM employees WHERE id = $1")
        .bind(id.into_inner())
        .execute(&**pool)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
