mod routes;
mod telemetry;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use graphql::build_schema;
use repositories::ClientRepository;
use services::{AppConfig, ValidatorRegistry};
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    telemetry::init(config.log_format);

    let schema = build_schema(ClientRepository::new(), ValidatorRegistry::client_registration());

    tracing::info!(host = %config.host, port = config.port, "starting clientdesk");
    let allowed_origin = config.cors_allowed_origin.clone();
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(schema.clone()))
            .configure(routes::configure)
    })
    .bind(config.bind_address())?
    .run()
    .await
}
