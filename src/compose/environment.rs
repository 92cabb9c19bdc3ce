use crate::shared::Result;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Environment variable prefix for a service: upper-cased, with anything
/// that is not valid in a shell variable name replaced by `_`
pub fn env_key_prefix(service: &str) -> String {
    service
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// `<SERVICE>_HOST`
pub fn host_key(service: &str) -> String {
    format!("{}_HOST", env_key_prefix(service))
}

/// `<SERVICE>_PORT_<port>_TCP_PORT`
pub fn port_key(service: &str, container_port: &str) -> String {
    format!(
        "{}_PORT_{}_TCP_PORT",
        env_key_prefix(service),
        container_port
    )
}

/// Splits `host:port`, `[v6]:port` into its parts
pub fn split_host_port(address: &str) -> Result<(String, String)> {
    let address = address.trim();
    if let Some(rest) = address.strip_prefix('[') {
        let (host, port) = rest
            .split_once("]:")
            .ok_or_else(|| anyhow::anyhow!("address {}: missing port in address", address))?;
        return Ok((host.to_string(), port.to_string()));
    }

    let (host, port) = address
        .rsplit_once(':')
        .ok_or_else(|| anyhow::anyhow!("address {}: missing port in address", address))?;
    if host.contains(':') {
        anyhow::bail!("address {}: too many colons in address", address);
    }
    Ok((host.to_string(), port.to_string()))
}

/// Maps wildcard bind addresses to the matching loopback address so the
/// value can be dialed from the host
pub fn normalize_host(host: &str) -> String {
    match host.parse::<IpAddr>() {
        Ok(IpAddr::V4(ip)) if ip == Ipv4Addr::UNSPECIFIED => Ipv4Addr::LOCALHOST.to_string(),
        Ok(IpAddr::V6(ip)) if ip == Ipv6Addr::UNSPECIFIED => Ipv6Addr::LOCALHOST.to_string(),
        _ => host.to_string(),
    }
}
