//! Example showing that every problem is reported at once

use envvar::{Binder, Envvar, FieldError};

#[derive(Debug, Default, Envvar)]
#[envvar(rename_all = "UPPERCASE")]
struct Config {
    database_url: String,
    api_key: String,
    port: u16,

    #[envvar(default = "true")]
    enable_tls: bool,
}

fn main() {
    std::env::remove_var("DATABASE_URL");
    std::env::remove_var("API_KEY");
    std::env::set_var("PORT", "eighty");
    std::env::set_var("ENABLE_TLS", "maybe");

    let mut config = Config::default();
    let Err(error) = Binder::new().bind(&mut config) else {
        println!("Configuration loaded: {config:?}");
        return;
    };

    // One line per problem
    eprintln!("{error}");

    // Or inspect them one by one
    for field_error in error.field_errors() {
        match field_error {
            FieldError::UnsetVariable { name } => eprintln!("set {name}"),
            FieldError::InvalidVariable { name, value, .. } => {
                eprintln!("fix {name}, {value:?} is not valid")
            }
            FieldError::UnsupportedField { name, .. } => eprintln!("change the type of {name}"),
        }
    }
}
