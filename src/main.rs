use blog_posts_api::{Config, ServerError, start};
use env_logger::Env;
use log::info;

#[actix_web::main]
async fn main() -> Result<(), ServerError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    info!("Starting server on http://{}:{}", config.host, config.port);

    let server = start(&config).await?;

    actix_web::rt::signal::ctrl_c().await?;
    info!("Received Ctrl-C");

    server.stop().await
}
