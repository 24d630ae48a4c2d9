use axum::{http::HeaderValue, middleware::from_fn, Server};
use diesel::{
    r2d2::{self, ConnectionManager as DbConnectionManager},
    PgConnection,
};
use matchday_backend::{config::Config, db::DbPool};
use std::{sync::Arc, time::Duration};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {}", err);
            std::process::exit(1);
        }
    };

    matchday_backend::init_tracing(&config);

    let manager = DbConnectionManager::<PgConnection>::new(&config.database_url);
    let pool: DbPool = r2d2::Pool::builder()
        .max_size(config.database_max_connections)
        .min_idle(Some(config.database_min_connections))
        .connection_timeout(Duration::from_secs(config.database_connection_timeout))
        .build(manager)
        .expect("Failed to create database connection pool");

    let cors = if config.cors_origins.iter().any(|origin| origin == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let app = matchday_backend::routes::create_router(Arc::new(pool))
        .layer(cors)
        .layer(from_fn(matchday_backend::middleware::logger::logger));

    let addr = config
        .server_address()
        .parse()
        .expect("Invalid server address");
    tracing::info!(address = %addr, "server listening");
    Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("Server failed to start");
}
