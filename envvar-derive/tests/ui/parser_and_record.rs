// A type that derives Envvar and implements Unmarshal is bound through its
// parser when used as a field.

#![deny(warnings)]

use envvar::{Binder, Envvar, Unmarshal};

#[derive(Debug, Default, Envvar)]
struct Endpoint {
    #[envvar(name = "HOST")]
    host: String,
    #[envvar(name = "PORT")]
    port: u16,
}

impl Unmarshal for Endpoint {
    fn unmarshal_text(&mut self, text: &str) -> envvar::anyhow::Result<()> {
        let (host, port) = text
            .split_once(':')
            .ok_or_else(|| envvar::anyhow::anyhow!("expected host:port"))?;
        self.host = host.to_string();
        self.port = port.parse()?;
        Ok(())
    }
}

#[derive(Debug, Default, Envvar)]
struct Config {
    #[envvar(name = "UPSTREAM")]
    upstream: Endpoint,
    #[envvar(prefix = "FALLBACK_")]
    fallback: Option<Box<Inner>>,
}

#[derive(Debug, Default, Envvar)]
struct Inner {
    #[envvar(name = "URL", default = "http://localhost")]
    url: String,
}

fn main() {
    let config: Config = Binder::new()
        .lookup(envvar::lookup_fn(|key| {
            (key == "UPSTREAM").then(|| "example.com:8443".to_string())
        }))
        .load()
        .unwrap();
    assert_eq!(config.upstream.host, "example.com");
    assert_eq!(config.upstream.port, 8443);
    assert_eq!(config.fallback.unwrap().url, "http://localhost");
}
