use actix_web::{get, middleware, web, App, HttpServer, Responder};
use petsitting_service::repo::database_repository::MongoRepository;
use petsitting_service::routes::{booking_routes, owner_routes, sitter_routes};
use petsitting_service::utils::config::AppConfig;

#[get("/")]
async fn entry_point() -> impl Responder {
    "This is the pet-sitting API. See /owner, /sitter and /booking."
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = AppConfig::global();

    let mongo_repository =
        match MongoRepository::init(&config.database_url, &config.database_name).await {
            Ok(repo) => {
                log::info!("Connected to MongoDB successfully.");
                repo
            }
            Err(e) => {
                log::error!("Failed to connect to MongoDB: {}", e);
                std::process::exit(1);
            }
        };

    log::info!("Server running at http://{}", config.bind_address);

    let mongo_data = web::Data::new(mongo_repository);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::NormalizePath::trim())
            .app_data(mongo_data.clone())
            .configure(booking_routes)
            .configure(owner_routes)
            .configure(sitter_routes)
            .service(entry_point)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
