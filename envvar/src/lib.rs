//! Bind environment variables into typed configuration structs
//!
//! `envvar` fills an existing configuration struct from a flat key/value source
//! (the process environment by default). Each field is looked up by its name,
//! or by a name given with `#[envvar(name = "...")]`, and converted into the
//! field's type. A field with `#[envvar(default = "...")]` is optional; every
//! other field is required.
//!
//! Binding never stops at the first problem: all fields are visited and every
//! missing or malformed variable is reported together.
//!
//! # Features
//!
//! - **Declarative**: `#[derive(Envvar)]` generates the field table
//! - **All errors at once**: one [`ErrorList`] per bind, in field order
//! - **Nested structs**: nested records share a key prefix
//! - **Custom parsers**: implement [`Unmarshal`] for your own field types
//! - **Pluggable source**: any [`Lookup`], e.g. a `HashMap` in tests
//!
//! # Value Parsing
//!
//! - Strings are used verbatim: `DATABASE_URL=postgres://localhost/db`
//! - Integers and floats use base-10 / decimal literals: `MAX_CONNECTIONS=42`
//! - Booleans accept `1 t T TRUE true True` and `0 f F FALSE false False`
//! - [`std::time::Duration`] accepts duration literals: `TIMEOUT=1m30s`
//! - `chrono::DateTime` accepts RFC 3339: `STARTED_AT=2017-10-31T14:18:00Z`
//! - [`Json<T>`] accepts JSON: `TAGS=["prod","api"]`
//!
//! A variable that is set, even to the empty string, always wins over the
//! default.
//!
//! # Example
//!
//! ```rust
//! use envvar::{Envvar, Record};
//!
//! #[derive(Debug, Default, Envvar)]
//! #[envvar(rename_all = "UPPERCASE")]
//! struct Config {
//!     database_url: String,
//!
//!     #[envvar(default = "8080")]
//!     port: u16,
//! }
//!
//! # fn main() -> Result<(), envvar::Error> {
//! #     std::env::set_var("DATABASE_URL", "postgres://localhost/db");
//! let config = Config::from_env()?;
//! #     assert_eq!(config.database_url, "postgres://localhost/db");
//! #     assert_eq!(config.port, 8080);
//! #     Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[envvar(name = "CUSTOM_NAME")]`
//!
//! Look the field up under a different key. On a nested struct the name is a
//! prefix for every key inside it instead.
//!
//! ```rust
//! # use envvar::Envvar;
//! #[derive(Envvar)]
//! struct Config {
//!     // Loaded from REDIS_URL
//!     #[envvar(name = "REDIS_URL")]
//!     redis_connection_string: String,
//! }
//! ```
//!
//! ## `#[envvar(default = "value")]`
//!
//! Use the literal when the variable is not set. The literal goes through the
//! same conversion as a real value. Not allowed on nested structs.
//!
//! ## `#[envvar(prefix = "PREFIX_")]`
//!
//! Same as `name`, reads better on nested structs.
//!
//! ```rust
//! # use envvar::Envvar;
//! #[derive(Default, Envvar)]
//! struct Database {
//!     #[envvar(name = "URL")]
//!     url: String,
//! }
//!
//! #[derive(Default, Envvar)]
//! struct Config {
//!     // Loaded from DB_URL
//!     #[envvar(prefix = "DB_")]
//!     database: Database,
//! }
//! ```
//!
//! ## `#[envvar(rename_all = "UPPERCASE")]`
//!
//! On the struct: derive keys from upper-cased (or `"lowercase"`) field names.
//! Explicit names are never renamed.

extern crate self as envvar;

mod convert;
pub mod duration;
mod error;
mod lookup;
mod record;
mod unmarshal;
mod walker;

#[doc(hidden)]
#[path = "private.rs"]
pub mod __private;

pub use convert::{parse_bool, ParseBoolError, Scalar};
pub use envvar_derive::Envvar;
pub use error::{Error, ErrorList, FieldError};
pub use lookup::{lookup_fn, Env, FnLookup, Lookup, NotUnicodeError};
pub use record::{Field, FieldDescriptor, Record, Slot};
pub use unmarshal::{Json, Unmarshal};
pub use walker::{bind, Binder, Walker};

// Re-export for custom parser implementations
pub use anyhow;
