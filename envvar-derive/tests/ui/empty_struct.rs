// A record without fields binds successfully from any source.

#![deny(warnings)]

use envvar::{Binder, Envvar};

#[derive(Debug, Default, Envvar)]
struct Empty {}

fn main() {
    let empty: Empty = Binder::new()
        .lookup(envvar::lookup_fn(|_| None))
        .load()
        .unwrap();
    println!("{empty:?}");
}
