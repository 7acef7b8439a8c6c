#![allow(dead_code)]

use actix_web::test::TestRequest;
use serde_json::json;
use sqlx::PgPool;

/// Builds the routed service over `$pool`, the same way `main` does.
macro_rules! app {
    ($pool:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($pool.clone()))
                .configure(acme_hr_directory::routes::configure),
        )
        .await
    };
}
pub(crate) use app;

pub async fn seeded(pool: &PgPool) {
    acme_hr_directory::db::bootstrap::reset_and_seed(pool)
        .await
        .unwrap();
}

pub async fn employee_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM employees")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn list_employees() -> TestRequest {
    TestRequest::get().uri("/api/employees")
}

pub fn list_departments() -> TestRequest {
    TestRequest::get().uri("/api/departments")
}

pub fn create_employee(name: &str, department_id: Option<i32>) -> TestRequest {
    TestRequest::post()
        .uri("/api/employees")
        .set_json(json!({ "name": name, "department_id": department_id }))
}

pub fn update_employee(id: i32, name: &str, department_id: Option<i32>) -> TestRequest {
    TestRequest::put()
        .uri(&format!("/api/employees/{}", id))
        .set_json(json!({ "name": name, "department_id": department_id }))
}

pub fn delete_employee(id: i32) -> TestRequest {
    TestRequest::delete().uri(&format!("/api/employees/{}", id))
}
