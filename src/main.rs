//! Vestra gateway entry point
//!
//! Loads `config/{env}.yaml`, connects PostgreSQL and serves the API.

use std::sync::Arc;

use vestra::config::AppConfig;
use vestra::db::Database;
use vestra::gateway;
use vestra::logging::init_logging;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() {
    let env = get_env();
    let config = AppConfig::load(&env);

    // Guard must stay alive for the process lifetime
    let _log_guard = init_logging(&config);
    tracing::info!("Starting vestra gateway (env: {})", env);

    let db = match Database::connect(&config.postgres_url).await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            eprintln!("FATAL: PostgreSQL connection failed: {}", e);
            std::process::exit(1);
        }
    };

    gateway::run_server(
        &config.gateway.host,
        config.gateway.port,
        db,
        config.jwt_secret.clone(),
        config.security.clone(),
    )
    .await;
}
