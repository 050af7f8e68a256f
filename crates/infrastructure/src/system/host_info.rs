use asim_dns_application::ports::{HostIdentity, HostInfoPort};
use std::net::UdpSocket;
use std::sync::OnceLock;
use tracing::debug;

/// Host identity provider backed by the local system.
///
/// Hostname, local IP, OS descriptor and domain type are probed once on
/// first use and cached for the lifetime of the process. Probes are
/// best-effort; fields that cannot be determined are left unset rather
/// than failing event processing.
pub struct SystemHostInfo {
    identity: OnceLock<HostIdentity>,
}

impl SystemHostInfo {
    pub fn new() -> Self {
        Self {
            identity: OnceLock::new(),
        }
    }

    fn probe() -> HostIdentity {
        let hostname = hostname::get()
            .ok()
            .and_then(|name| name.into_string().ok())
            .unwrap_or_else(|| "unknown".to_string());

        let ip_address = local_ip_address();
        let os = os_name().to_string();
        let os_version = os_version();
        let domain_type = domain_type(&hostname);

        debug!(
            hostname = %hostname,
            ip_address = ?ip_address,
            os = %os,
            domain_type = %domain_type,
            "Resolved host identity"
        );

        HostIdentity {
            hostname,
            ip_address,
            os,
            os_version,
            domain_type,
        }
    }
}

impl Default for SystemHostInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl HostInfoPort for SystemHostInfo {
    fn identity(&self) -> HostIdentity {
        self.identity.get_or_init(Self::probe).clone()
    }
}

/// Finds the local outbound IPv4 address by opening a UDP socket toward
/// a public address. No packets are sent; the OS picks the source
/// interface, which skips loopback.
fn local_ip_address() -> Option<String> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:80").ok()?;
    let addr = socket.local_addr().ok()?;
    if addr.ip().is_loopback() || addr.ip().is_unspecified() {
        return None;
    }
    Some(addr.ip().to_string())
}

fn os_name() -> &'static str {
    match std::env::consts::OS {
        "windows" => "Windows",
        "linux" => "Linux",
        "macos" => "macOS",
        other => other,
    }
}

#[cfg(target_os = "linux")]
fn os_version() -> Option<String> {
    let version = std::fs::read_to_string("/proc/sys/kernel/osrelease").ok()?;
    let version = version.trim();
    if version.is_empty() {
        return None;
    }
    Some(version.to_string())
}

#[cfg(not(target_os = "linux"))]
fn os_version() -> Option<String> {
    None
}

/// A hostname carrying a DNS suffix indicates a domain-joined machine.
fn domain_type(hostname: &str) -> String {
    if hostname.contains('.') {
        "FQDN".to_string()
    } else {
        "WORKGROUP".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_memoized() {
        let provider = SystemHostInfo::new();
        let first = provider.identity();
        let second = provider.identity();
        assert_eq!(first.hostname, second.hostname);
        assert_eq!(first.ip_address, second.ip_address);
    }

    #[test]
    fn hostname_is_never_empty() {
        let provider = SystemHostInfo::new();
        assert!(!provider.identity().hostname.is_empty());
    }

    #[test]
    fn domain_type_from_hostname_suffix() {
        assert_eq!(domain_type("host.corp.example.com"), "FQDN");
        assert_eq!(domain_type("workstation"), "WORKGROUP");
    }

    #[test]
    fn os_name_is_human_readable() {
        let os = os_name();
        assert!(!os.is_empty());
        assert_ne!(os, "linux");
        assert_ne!(os, "windows");
        assert_ne!(os, "macos");
    }
}
