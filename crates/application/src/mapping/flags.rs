use asim_dns_domain::RawEvent;

/// Client-source flag bits carried in the QueryOptions bit-field.
const RECURSION_DESIRED_BIT: u64 = 0x100;
const CHECKING_DISABLED_BIT: u64 = 0x10;

/// Decoded DNS header flags plus the combined human-readable summary
/// (e.g. "RD CD").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsFlags {
    pub recursion_desired: bool,
    pub checking_disabled: bool,
    pub summary: String,
}

/// Raw QueryOptions value on client events; arrives as a decimal string
/// or an integer depending on the event id.
pub fn client_query_options(event: &RawEvent) -> Option<u64> {
    if let Some(s) = event.field_str("QueryOptions") {
        return s.trim().parse().ok();
    }
    event.field_i64("QueryOptions").map(|n| n as u64)
}

/// Client events carry flags as one bit-field integer.
pub fn decode_client_flags(options: u64) -> DnsFlags {
    let recursion_desired = options & RECURSION_DESIRED_BIT != 0;
    let checking_disabled = options & CHECKING_DISABLED_BIT != 0;

    let mut parts = Vec::with_capacity(2);
    if recursion_desired {
        parts.push("RD");
    }
    if checking_disabled {
        parts.push("CD");
    }

    DnsFlags {
        recursion_desired,
        checking_disabled,
        summary: parts.join(" "),
    }
}

fn flag_set(event: &RawEvent, key: &str) -> bool {
    event.field_str(key) == Some("1")
}

/// Server events carry flags as discrete string-valued sub-fields
/// (`"1"` meaning set). AA and AD only appear in the summary.
pub fn decode_server_flags(event: &RawEvent) -> DnsFlags {
    let recursion_desired = flag_set(event, "RD");
    let checking_disabled = flag_set(event, "CD");

    let mut parts = Vec::with_capacity(4);
    if recursion_desired {
        parts.push("RD");
    }
    if checking_disabled {
        parts.push("CD");
    }
    if flag_set(event, "AA") {
        parts.push("AA");
    }
    if flag_set(event, "AD") {
        parts.push("AD");
    }

    DnsFlags {
        recursion_desired,
        checking_disabled,
        summary: parts.join(" "),
    }
}
