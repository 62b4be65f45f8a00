//! Example demonstrating custom parsers

use chrono::{DateTime, Utc};
use envvar::{Envvar, Json, Record, Unmarshal};

// Custom parser for comma-separated strings
#[derive(Debug, Default)]
struct CommaSeparated(Vec<String>);

impl Unmarshal for CommaSeparated {
    fn unmarshal_text(&mut self, text: &str) -> anyhow::Result<()> {
        self.0 = text.split(',').map(|s| s.trim().to_string()).collect();
        Ok(())
    }
}

#[derive(Debug, Default, Envvar)]
#[envvar(rename_all = "UPPERCASE")]
struct Config {
    app_name: String,

    // Uses serde_json (JSON format)
    json_tags: Json<Vec<String>>,

    // Uses the custom parser above
    comma_tags: CommaSeparated,

    // RFC 3339 timestamp
    #[envvar(default = "2024-01-01T00:00:00Z")]
    release_date: DateTime<Utc>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("APP_NAME", "my-app");
    std::env::set_var("JSON_TAGS", r#"["prod","api","v2"]"#);
    std::env::set_var("COMMA_TAGS", "tag1, tag2, tag3");

    let config = Config::from_env()?;

    println!("Configuration loaded:");
    println!("  App Name: {}", config.app_name);
    println!("  JSON Tags: {:?}", *config.json_tags);
    println!("  Comma Tags: {:?}", config.comma_tags.0);
    println!("  Release Date: {}", config.release_date);

    Ok(())
}
