//! Creates or upgrades the order tables without starting the HTTP server.

use std::io;

use dotenvy::dotenv;
use order_service::{create_pool, logging, run_migrations, Config};

fn main() -> io::Result<()> {
    dotenv().ok();

    let config = Config::from_env().map_err(io::Error::other)?;
    logging::init(config.log_file.as_deref())?;

    let pool = create_pool(&config.database_url, 1).map_err(io::Error::other)?;
    run_migrations(&pool).map_err(io::Error::other)?;

    log::info!("Initialized the database successfully");
    Ok(())
}
