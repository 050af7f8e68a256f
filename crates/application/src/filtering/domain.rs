use crate::fields;
use asim_dns_domain::{EventClassification, RawEvent};
use fancy_regex::Regex;
use tracing::{debug, info, warn};

/// Drops query events whose domain matches a configured exclusion pattern.
///
/// Patterns are glob-style: `.` is literal, `*` matches any substring, the
/// whole pattern is anchored. `*.example.com` matches `foo.example.com`
/// but not `example.com`.
pub struct DomainFilter {
    patterns: Vec<Regex>,
}

impl DomainFilter {
    pub fn new(excluded_domains: &[String]) -> Self {
        let mut patterns = Vec::with_capacity(excluded_domains.len());

        for pattern in excluded_domains {
            let regex_pattern = format!(
                "^{}$",
                pattern.replace('.', "\\.").replace('*', ".*")
            );

            match Regex::new(&regex_pattern) {
                Ok(regex) => {
                    debug!(pattern = %pattern, regex = %regex_pattern, "Added domain pattern");
                    patterns.push(regex);
                }
                // A bad pattern is skipped, never fatal at startup.
                Err(e) => {
                    warn!(pattern = %pattern, error = %e, "Failed to compile domain pattern");
                }
            }
        }

        info!(pattern_count = patterns.len(), "Domain filter initialized");

        Self { patterns }
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    pub fn should_filter(&self, event: &RawEvent, classification: EventClassification) -> bool {
        if self.patterns.is_empty() || !classification.is_query() {
            return false;
        }

        let Some(domain) = fields::domain_name(event) else {
            return false;
        };
        if domain.is_empty() {
            return false;
        }

        for regex in &self.patterns {
            if regex.is_match(domain).unwrap_or(false) {
                debug!(domain = %domain, pattern = %regex, "Filtering domain by pattern");
                return true;
            }
        }

        false
    }
}
