use std::io;

use dotenvy::dotenv;
use order_service::{
    build_server, create_pool, logging, postgres_order_service, run_migrations, Config,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    let config = Config::from_env().map_err(io::Error::other)?;
    logging::init(config.log_file.as_deref())?;

    let pool = create_pool(&config.database_url, config.pool_size).map_err(io::Error::other)?;
    run_migrations(&pool).map_err(io::Error::other)?;

    log::info!("Starting server at http://{}", config.addr());

    build_server(postgres_order_service(pool), &config.host, config.port)?.await
}
