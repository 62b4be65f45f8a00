// Raw identifiers lose their `r#` when used as keys.

#![deny(warnings)]

use envvar::{Binder, Envvar};

#[derive(Debug, Default, Envvar)]
#[envvar(rename_all = "UPPERCASE")]
struct Config {
    r#type: String,
    r#match: u8,
}

fn main() {
    let config: Config = Binder::new()
        .lookup(envvar::lookup_fn(|key| match key {
            "TYPE" => Some("primary".to_string()),
            "MATCH" => Some("3".to_string()),
            _ => None,
        }))
        .load()
        .unwrap();
    assert_eq!(config.r#type, "primary");
    assert_eq!(config.r#match, 3);
}
