use crate::config::ConfigLoader;
use crate::validate::HostResolver;
use serde_json::{Map, Value, json};
use std::io::{self, Write};
use std::net::{IpAddr, Ipv4Addr};
use tempfile::NamedTempFile;

/// Resolver that answers from a fixed list instead of DNS.
///
/// Entries of the form `*.example.com` match any name under `example.com`.
#[derive(Debug, Clone, Default)]
pub(crate) struct StaticResolver {
    known: Vec<String>,
}

impl StaticResolver {
    pub(crate) fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: hosts.into_iter().map(Into::into).collect(),
        }
    }

    fn knows(&self, host: &str) -> bool {
        self.known.iter().any(|entry| match entry.strip_prefix("*.") {
            Some(suffix) => host
                .strip_suffix(suffix)
                .is_some_and(|head| head.len() > 1 && head.ends_with('.')),
            None => entry == host,
        })
    }
}

impl HostResolver for StaticResolver {
    fn lookup_host(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        if self.knows(host) {
            Ok(vec![IpAddr::V4(Ipv4Addr::new(10, 244, 0, 34))])
        } else {
            Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("lookup {}: no such host", host),
            ))
        }
    }
}

/// The names the baseline document needs resolved.
pub(crate) fn bosh_lite_resolver() -> StaticResolver {
    StaticResolver::new(["api.bosh-lite.com", "*.cf-app.bosh-lite.com"])
}

/// Loader with standard defaults and the bosh-lite resolver.
pub(crate) fn test_loader() -> ConfigLoader {
    ConfigLoader::new().with_resolver(bosh_lite_resolver())
}

/// The smallest valid document: only keys without defaults, plus `use_http`.
pub(crate) fn required_document() -> Map<String, Value> {
    let Value::Object(map) = json!({
        "api": "api.bosh-lite.com",
        "admin_user": "admin",
        "admin_password": "admin",
        "skip_ssl_validation": true,
        "apps_domain": "cf-app.bosh-lite.com",
        "use_http": true,
    }) else {
        unreachable!("literal is an object");
    };
    map
}

/// The baseline document with `key` replaced by `value`.
pub(crate) fn document_with(key: &str, value: Value) -> String {
    let mut doc = required_document();
    doc.insert(key.to_string(), value);
    Value::Object(doc).to_string()
}

/// The baseline document with `key` omitted.
pub(crate) fn document_without(key: &str) -> String {
    let mut doc = required_document();
    doc.remove(key);
    Value::Object(doc).to_string()
}

/// Write `contents` to a fresh temp file that lives as long as the handle.
pub(crate) fn write_config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
