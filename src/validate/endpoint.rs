//! URL-shape and resolvability checks for `api` and `apps_domain`.
//!
//! Both keys take bare hosts (`api.example.com`) as well as full URLs
//! (`https://api.example.com`). The two differ in one respect: the API may be
//! addressed by IP literal, while the apps domain must be a DNS name because
//! apps are routed by subdomain.

use super::resolver::HostResolver;
use super::rules::Rule;
use super::violation::Violation;
use crate::config::RawConfig;
use std::net::IpAddr;
use url::{Host, Url};

/// Subdomain probed under the apps domain to check for a wildcard record.
pub const APPS_DOMAIN_PROBE: &str = "made-up-app-host-name";

/// Extract the host from a bare host or a URL.
///
/// Returns `None` if the value is not a syntactically valid URL. Malformed
/// percent-escapes, whitespace, and control characters are rejected outright
/// so the checked host always matches the stored value.
pub fn parse_host(value: &str) -> Option<Host<String>> {
    if value
        .chars()
        .any(|c| c.is_ascii_whitespace() || c.is_control())
    {
        return None;
    }

    if has_malformed_escape(value) {
        return None;
    }

    let url = if value.contains("://") {
        Url::parse(value).ok()?
    } else {
        Url::parse(&format!("https://{}", value)).ok()?
    };

    url.host().map(|host| host.to_owned())
}

fn has_malformed_escape(value: &str) -> bool {
    let bytes = value.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return true;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    false
}

fn no_such_host(field: &'static str, value: &str, host: &str) -> Violation {
    Violation::new(
        field,
        format!(
            "Invalid configuration for '{}' <{}> (host {}): lookup {}: no such host",
            field, value, host, host
        ),
    )
}

fn not_a_url(field: &'static str, value: &str) -> Violation {
    Violation::invalid(
        field,
        format_args!("'{}' must be a valid URL but was set to '{}'", field, value),
    )
}

fn lookup(
    resolver: &dyn HostResolver,
    field: &'static str,
    value: &str,
    host: &str,
) -> Option<Violation> {
    match resolver.lookup_host(host) {
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(field, host, error = %e, "host lookup failed");
            Some(no_such_host(field, value, host))
        }
    }
}

/// Checks `api`: blank, then URL shape, then resolvability of the host.
pub struct ApiEndpointRule<'a> {
    resolver: &'a dyn HostResolver,
}

impl<'a> ApiEndpointRule<'a> {
    pub fn new(resolver: &'a dyn HostResolver) -> Self {
        Self { resolver }
    }
}

impl Rule for ApiEndpointRule<'_> {
    fn check(&self, raw: &RawConfig) -> Vec<Violation> {
        const FIELD: &str = "api";

        let Some(value) = raw.api.as_str() else {
            return Vec::new();
        };

        if value.is_empty() {
            return vec![Violation::invalid(
                FIELD,
                "'api' must be a valid Cloud Controller endpoint but was blank",
            )];
        }

        let host = match parse_host(value) {
            Some(Host::Domain(domain)) => domain,
            Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => return Vec::new(),
            None => return vec![not_a_url(FIELD, value)],
        };

        lookup(self.resolver, FIELD, value, &host).into_iter().collect()
    }
}

/// Checks `apps_domain`: blank, IP literal, URL shape, then that a made-up
/// subdomain resolves.
pub struct AppsDomainRule<'a> {
    resolver: &'a dyn HostResolver,
}

impl<'a> AppsDomainRule<'a> {
    pub fn new(resolver: &'a dyn HostResolver) -> Self {
        Self { resolver }
    }
}

impl Rule for AppsDomainRule<'_> {
    fn check(&self, raw: &RawConfig) -> Vec<Violation> {
        const FIELD: &str = "apps_domain";

        let Some(value) = raw.apps_domain.as_str() else {
            return Vec::new();
        };

        if value.is_empty() {
            return vec![Violation::invalid(
                FIELD,
                "'apps_domain' must be a valid domain but was blank",
            )];
        }

        let probe = format!("{}.{}", APPS_DOMAIN_PROBE, value);

        // No name lives under an address, so the probe can never resolve.
        if value.parse::<IpAddr>().is_ok() {
            return vec![no_such_host(FIELD, value, &probe)];
        }

        let host = match parse_host(&probe) {
            Some(Host::Domain(domain)) => domain,
            _ => return vec![not_a_url(FIELD, value)],
        };

        lookup(self.resolver, FIELD, value, &host).into_iter().collect()
    }
}
