use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use std::io;
use std::sync::Arc;

use employee_api::config::{AppConfig, StoreConfig};
use employee_api::db::{self, EmployeeStore, InMemoryEmployeeStore, PgEmployeeStore};
use employee_api::handlers;
use employee_api::services::employee::EmployeeService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env().map_err(|err| {
        error!("Invalid configuration: {}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err)
    })?;

    let store: Arc<dyn EmployeeStore> = match &config.store {
        StoreConfig::Postgres(db_config) => {
            let pool = db::create_pool(db_config).await.map_err(startup_error)?;
            db::run_migrations(&pool).await.map_err(startup_error)?;
            info!("Connected to Postgres");
            Arc::new(PgEmployeeStore::new(pool))
        }
        StoreConfig::Memory => {
            info!("Using in-memory employee store");
            Arc::new(InMemoryEmployeeStore::new())
        }
    };

    let service = web::Data::new(EmployeeService::new(store));

    info!("Starting server at {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(service.clone())
            .configure(handlers::employee::configure)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}

fn startup_error(err: employee_api::errors::StorageError) -> io::Error {
    error!("Failed to prepare employee storage: {}", err);
    io::Error::new(io::ErrorKind::Other, err)
}
