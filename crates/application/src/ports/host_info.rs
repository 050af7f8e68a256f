/// Device-identity fields attached to every normalized record.
///
/// Values are effectively constant within one process run; providers are
/// expected to compute them once and hand out copies.
#[derive(Debug, Clone, Default)]
pub struct HostIdentity {
    pub hostname: String,
    /// Local non-loopback IPv4 address, when one exists.
    pub ip_address: Option<String>,
    pub os: String,
    pub os_version: Option<String>,
    /// "FQDN" when the host is domain-joined, "WORKGROUP" otherwise.
    pub domain_type: String,
}

pub trait HostInfoPort: Send + Sync {
    fn identity(&self) -> HostIdentity;
}
