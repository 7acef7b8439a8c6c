use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info, warn};
use std::io;

use acme_hr_directory::config::Config;
use acme_hr_directory::{db, routes};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|err| {
        error!("Invalid configuration: {}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err)
    })?;

    let pool = db::create_pool(&config).await.map_err(|err| {
        error!("Failed to connect to the database: {:?}", err);
        io::Error::new(io::ErrorKind::Other, err)
    })?;

    if config.bootstrap_enabled() {
        warn!("APP_ENV=development: dropping and reseeding employees and departments");
        db::bootstrap::reset_and_seed(&pool).await.map_err(|err| {
            error!("Database bootstrap failed: {:?}", err);
            io::Error::new(io::ErrorKind::Other, err)
        })?;
    }

    let (host, port) = config.bind_addr();
    info!("Server listening on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
