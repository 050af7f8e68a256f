//! Numeric DNS code to mnemonic tables.
//!
//! Both functions are total: unknown codes render through the
//! `TYPE<code>` / `RCODE<code>` fallback instead of failing.

use std::borrow::Cow;

/// DNS record-type code to mnemonic (RFC 1035 and friends).
pub fn query_type_name(code: i64) -> Cow<'static, str> {
    match code {
        1 => Cow::Borrowed("A"),
        2 => Cow::Borrowed("NS"),
        5 => Cow::Borrowed("CNAME"),
        6 => Cow::Borrowed("SOA"),
        12 => Cow::Borrowed("PTR"),
        15 => Cow::Borrowed("MX"),
        16 => Cow::Borrowed("TXT"),
        28 => Cow::Borrowed("AAAA"),
        33 => Cow::Borrowed("SRV"),
        65 => Cow::Borrowed("HTTPS"),
        other => Cow::Owned(format!("TYPE{}", other)),
    }
}

/// DNS response code (RCODE) to mnemonic.
pub fn response_code_name(code: i64) -> Cow<'static, str> {
    match code {
        0 => Cow::Borrowed("NOERROR"),
        1 => Cow::Borrowed("FORMERR"),
        2 => Cow::Borrowed("SERVFAIL"),
        3 => Cow::Borrowed("NXDOMAIN"),
        4 => Cow::Borrowed("NOTIMP"),
        5 => Cow::Borrowed("REFUSED"),
        6 => Cow::Borrowed("YXDOMAIN"),
        7 => Cow::Borrowed("YXRRSET"),
        8 => Cow::Borrowed("NXRRSET"),
        9 => Cow::Borrowed("NOTAUTH"),
        10 => Cow::Borrowed("NOTZONE"),
        other => Cow::Owned(format!("RCODE{}", other)),
    }
}

/// Record-type code for AAAA queries, used by the query-type filter.
pub const AAAA_RECORD_TYPE: i64 = 28;
