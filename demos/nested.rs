//! Nested structs and key prefixes example

use envvar::{Binder, Envvar};

#[derive(Debug, Default, Envvar)]
struct Database {
    #[envvar(name = "URL")]
    url: String,

    #[envvar(name = "POOL_SIZE", default = "5")]
    pool_size: u32,
}

#[derive(Debug, Default, Envvar)]
struct Config {
    // Keys inside are prefixed: MYAPP_PRIMARY_DB_URL, MYAPP_PRIMARY_DB_POOL_SIZE
    #[envvar(prefix = "PRIMARY_DB_")]
    primary: Database,

    // Allocated when absent, then bound: MYAPP_REPLICA_DB_URL, ...
    #[envvar(prefix = "REPLICA_DB_")]
    replica: Option<Box<Database>>,

    #[envvar(name = "PORT", default = "8080")]
    port: u16,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("MYAPP_PRIMARY_DB_URL", "postgres://primary/db");
    std::env::set_var("MYAPP_PRIMARY_DB_POOL_SIZE", "20");
    std::env::set_var("MYAPP_REPLICA_DB_URL", "postgres://replica/db");
    std::env::set_var("MYAPP_PORT", "3000");

    let config: Config = Binder::new().prefix("MYAPP_").load()?;

    println!("Configuration with prefix 'MYAPP_':");
    println!("  Primary: {:?}", config.primary);
    println!("  Replica: {:?}", config.replica);
    println!("  Port: {}", config.port);

    Ok(())
}
