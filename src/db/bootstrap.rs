//! Destructive development bootstrap: drops both tables, recreates them and
//! loads the seed rows. Every call wipes whatever the store held before.

use log::info;
use sqlx::{Executor, PgConnection, PgPool};

const DROP_SQL: &str = r#"
    DROP TABLE IF EXISTS employees;
    DROP TABLE IF EXISTS departments;
"#;

const SCHEMA_SQL: &str = r#"
    CREATE TABLE departments (
        id SERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL
    );

    CREATE TABLE employees (
        id SERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        department_id INTEGER REFERENCES departments(id)
    );
"#;

const SEED_SQL: &str = r#"
    INSERT INTO departments (name) VALUES ('Engineering');
    INSERT INTO departments (name) VALUES ('HR');
    INSERT INTO departments (name) VALUES ('Sales');

    INSERT INTO employees (name, department_id) VALUES ('Alice', 1);
    INSERT INTO employees (name, department_id) VALUES ('Bob', 2);
    INSERT INTO employees (name, department_id) VALUES ('Charlie', 3);
"#;

/// Names of the seeded departments, in id order.
pub const SEED_DEPARTMENTS: [&str; 3] = ["Engineering", "HR", "Sales"];

/// Seeded employees with the department id each one belongs to.
pub const SEED_EMPLOYEES: [(&str, i32); 3] = [("Alice", 1), ("Bob", 2), ("Charlie", 3)];

/// Resets the schema and loads the seed data in a single transaction.
pub async fn reset_and_seed(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    recreate_tables(&mut tx).await?;
    seed(&mut tx).await?;
    tx.commit().await
}

async fn recreate_tables(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    conn.execute(DROP_SQL).await?;
    conn.execute(SCHEMA_SQL).await?;
    info!("Tables created");
    Ok(())
}

async fn seed(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    conn.execute(SEED_SQL).await?;
    info!("Data seeded");
    Ok(())
}
