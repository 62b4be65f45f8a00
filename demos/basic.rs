//! Basic usage example

use envvar::{Envvar, Record};

#[derive(Debug, Default, Envvar)]
#[envvar(rename_all = "UPPERCASE")]
struct Config {
    // Required field: loaded from DATABASE_URL
    database_url: String,

    // With default value
    #[envvar(default = "127.0.0.1:8080")]
    server_addr: String,

    // Numeric type
    #[envvar(default = "10")]
    max_connections: u32,

    // Boolean type
    #[envvar(default = "false")]
    debug_mode: bool,

    // Duration literal
    #[envvar(default = "30s")]
    request_timeout: std::time::Duration,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("SERVER_ADDR", "0.0.0.0:3000");
    std::env::set_var("REQUEST_TIMEOUT", "1m30s");

    // Load configuration
    let config = Config::from_env()?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Address: {}", config.server_addr);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);
    println!("  Request Timeout: {:?}", config.request_timeout);

    Ok(())
}
