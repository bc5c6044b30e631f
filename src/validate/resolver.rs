//! Host name resolution used by the endpoint checks.

use std::io;
use std::net::{IpAddr, ToSocketAddrs};

/// Resolves a host name to addresses.
///
/// Each call is a single blocking lookup; implementations must not cache
/// across loads.
pub trait HostResolver {
    fn lookup_host(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}

/// Resolver backed by the operating system's name service.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl HostResolver for SystemResolver {
    fn lookup_host(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        let addrs: Vec<IpAddr> = (host, 0)
            .to_socket_addrs()?
            .map(|addr| addr.ip())
            .collect();

        if addrs.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} has no addresses", host),
            ));
        }

        Ok(addrs)
    }
}
