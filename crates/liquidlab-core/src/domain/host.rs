//! Hostname normalization and classification
//!
//! A hostname is either exempt (the marketing site, localhost), a
//! `<label>.<platform suffix>` subdomain, or a tenant's own custom domain.
//! Subdomain shape is always checked before custom domain.

use liquidlab_shared::constants::{
    DEFAULT_ADMIN_PREFIX, DEFAULT_API_PREFIX, DEFAULT_MAIN_DOMAIN, DEFAULT_SUBDOMAIN_SUFFIXES,
    LOCALHOST,
};
use liquidlab_shared::TenancySettings;

use crate::error::DomainError;

const MAX_HOST_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Shape of a normalized hostname.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostClass<'a> {
    /// First label of a host under one of the platform suffixes.
    Subdomain(&'a str),
    /// Whole host, matched against registered custom domains.
    CustomDomain(&'a str),
}

/// Lower-case a raw `Host` value and strip its port and trailing dot.
pub fn normalize_host(raw: &str) -> Result<String, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::MissingHost);
    }

    let without_port = strip_port(trimmed).ok_or_else(|| malformed(raw))?;
    let host = without_port
        .strip_suffix('.')
        .unwrap_or(without_port)
        .to_ascii_lowercase();

    if host.starts_with('[') {
        let inner = &host[1..host.len() - 1];
        let valid = !inner.is_empty()
            && inner
                .bytes()
                .all(|b| b.is_ascii_hexdigit() || b == b':' || b == b'.');
        return if valid { Ok(host) } else { Err(malformed(raw)) };
    }

    let valid = !host.is_empty()
        && host.len() <= MAX_HOST_LEN
        && host.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= MAX_LABEL_LEN
                && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
        });

    if valid {
        Ok(host)
    } else {
        Err(malformed(raw))
    }
}

fn strip_port(host: &str) -> Option<&str> {
    if host.starts_with('[') {
        let end = host.find(']')?;
        let (literal, rest) = host.split_at(end + 1);
        return match rest.strip_prefix(':') {
            Some(port) => port.parse::<u16>().ok().map(|_| literal),
            None if rest.is_empty() => Some(literal),
            None => None,
        };
    }

    match host.split_once(':') {
        None => Some(host),
        // A second colon means an unbracketed IPv6 literal.
        Some((_, port)) if port.contains(':') => None,
        Some((name, port)) => port.parse::<u16>().ok().map(|_| name),
    }
}

fn malformed(raw: &str) -> DomainError {
    DomainError::MalformedHost(raw.chars().take(MAX_HOST_LEN).collect())
}

/// Exemption and classification rules for platform resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRules {
    main_domain: String,
    subdomain_suffixes: Vec<String>,
    api_prefix: String,
    admin_prefix: String,
}

impl ResolutionRules {
    pub fn new(
        main_domain: &str,
        subdomain_suffixes: &[impl AsRef<str>],
        api_prefix: &str,
        admin_prefix: &str,
    ) -> Self {
        let subdomain_suffixes = subdomain_suffixes
            .iter()
            .map(|s| s.as_ref().trim().to_ascii_lowercase())
            .filter(|s| !s.is_empty() && s != ".")
            .map(|s| if s.starts_with('.') { s } else { format!(".{}", s) })
            .collect();

        Self {
            main_domain: main_domain.trim().to_ascii_lowercase(),
            subdomain_suffixes,
            api_prefix: api_prefix.to_string(),
            admin_prefix: admin_prefix.to_string(),
        }
    }

    pub fn main_domain(&self) -> &str {
        &self.main_domain
    }

    pub fn subdomain_suffixes(&self) -> &[String] {
        &self.subdomain_suffixes
    }

    /// API and admin paths are never tenant scoped.
    pub fn is_exempt_path(&self, path: &str) -> bool {
        [&self.api_prefix, &self.admin_prefix]
            .iter()
            .any(|prefix| !prefix.is_empty() && path.starts_with(prefix.as_str()))
    }

    /// Expects a normalized host.
    pub fn is_exempt_host(&self, host: &str) -> bool {
        host == self.main_domain || host == LOCALHOST
    }

    pub fn is_exempt(&self, host: &str, path: &str) -> bool {
        self.is_exempt_path(path) || self.is_exempt_host(host)
    }

    /// Expects a normalized host.
    pub fn classify<'a>(&self, host: &'a str) -> Result<HostClass<'a>, DomainError> {
        if self.subdomain_suffixes.iter().any(|suffix| host.ends_with(suffix.as_str())) {
            return match host.split('.').next() {
                Some(label) if !label.is_empty() => Ok(HostClass::Subdomain(label)),
                _ => Err(malformed(host)),
            };
        }
        Ok(HostClass::CustomDomain(host))
    }
}

impl Default for ResolutionRules {
    fn default() -> Self {
        Self::new(
            DEFAULT_MAIN_DOMAIN,
            &DEFAULT_SUBDOMAIN_SUFFIXES,
            DEFAULT_API_PREFIX,
            DEFAULT_ADMIN_PREFIX,
        )
    }
}

impl From<&TenancySettings> for ResolutionRules {
    fn from(settings: &TenancySettings) -> Self {
        Self::new(
            &settings.main_domain,
            &settings.subdomain_suffixes,
            &settings.api_prefix,
            &settings.admin_prefix,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_strips_port() {
        assert_eq!(normalize_host("ACME.LiquidLab.Trade").unwrap(), "acme.liquidlab.trade");
        assert_eq!(normalize_host("acme.liquidlab.trade:443").unwrap(), "acme.liquidlab.trade");
        assert_eq!(normalize_host("trade.acme.com.").unwrap(), "trade.acme.com");
        assert_eq!(normalize_host(" localhost:5173 ").unwrap(), "localhost");
        assert_eq!(normalize_host("[::1]:8080").unwrap(), "[::1]");
    }

    #[test]
    fn test_normalize_rejects_malformed() {
        assert_eq!(normalize_host(""), Err(DomainError::MissingHost));
        assert_eq!(normalize_host("   "), Err(DomainError::MissingHost));

        for raw in ["acme..com", ".acme.com", "acme.com:http", "acme.com:", "ac me.com", "::1", "a/b.com", "[::1", "[]"] {
            assert!(
                matches!(normalize_host(raw), Err(DomainError::MalformedHost(_))),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_exemptions() {
        let rules = ResolutionRules::default();

        assert!(rules.is_exempt("liquidlab.trade", "/"));
        assert!(rules.is_exempt("localhost", "/"));
        assert!(rules.is_exempt("acme.liquidlab.trade", "/api/v1/platforms"));
        assert!(rules.is_exempt("trade.acme.com", "/admin/settings"));
        assert!(!rules.is_exempt("acme.liquidlab.trade", "/"));
        assert!(!rules.is_exempt("www.liquidlab.trade", "/"));
        assert!(!rules.is_exempt("trade.acme.com", "/platform.json"));
    }

    #[test]
    fn test_classify_subdomain_takes_first_label() {
        let rules = ResolutionRules::default();

        assert_eq!(rules.classify("acme.liquidlab.trade").unwrap(), HostClass::Subdomain("acme"));
        assert_eq!(rules.classify("acme.liquidlab.app").unwrap(), HostClass::Subdomain("acme"));
        assert_eq!(rules.classify("a.b.liquidlab.trade").unwrap(), HostClass::Subdomain("a"));
    }

    #[test]
    fn test_classify_custom_domain() {
        let rules = ResolutionRules::default();

        assert_eq!(rules.classify("trade.acme.com").unwrap(), HostClass::CustomDomain("trade.acme.com"));
        // Shares the suffix text but not the label boundary.
        assert_eq!(
            rules.classify("evilliquidlab.trade").unwrap(),
            HostClass::CustomDomain("evilliquidlab.trade")
        );
    }

    #[test]
    fn test_suffixes_normalized() {
        let rules = ResolutionRules::new("Example.COM", &["example.net", ".Example.org", "", "."], "/api", "/admin");

        assert_eq!(rules.main_domain(), "example.com");
        assert_eq!(rules.subdomain_suffixes(), &[".example.net".to_string(), ".example.org".to_string()]);
        assert_eq!(rules.classify("shop.example.net").unwrap(), HostClass::Subdomain("shop"));
    }

    #[test]
    fn test_empty_prefix_exempts_nothing() {
        let rules = ResolutionRules::new("liquidlab.trade", &[".liquidlab.trade"], "", "/admin");
        assert!(!rules.is_exempt_path("/anything"));
        assert!(rules.is_exempt_path("/admin"));
    }
}
