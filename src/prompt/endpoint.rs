use std::fmt;

use anyhow::{Result, bail};
use url::Url;

const HTTPS: &str = "https://";
const HTTP: &str = "http://";

/// A public hostname the platform is served from.
///
/// Operators type either `api.example.com` or `https://api.example.com/`;
/// both normalize to the same value. The host keeps an explicit port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    secure: bool,
    host: String,
}

impl Endpoint {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let (secure, rest) = if let Some(rest) = strip_prefix_ignore_case(trimmed, HTTPS) {
            (true, rest)
        } else if let Some(rest) = strip_prefix_ignore_case(trimmed, HTTP) {
            (false, rest)
        } else {
            (true, trimmed)
        };

        let rest = rest.trim_end_matches('/');
        if rest.is_empty() {
            bail!("a hostname is required");
        }
        if rest.contains('/') {
            bail!("only a hostname is expected, without a path");
        }

        let url = Url::parse(&format!("{HTTP}{rest}/"))
            .map_err(|e| anyhow::anyhow!("'{rest}' is not a valid hostname: {e}"))?;
        if !url.username().is_empty()
            || url.password().is_some()
            || url.query().is_some()
            || url.fragment().is_some()
        {
            bail!("only a hostname is expected");
        }
        let Some(host) = url.host_str() else {
            bail!("'{rest}' is not a valid hostname");
        };

        let host = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
        Ok(Self { secure, host })
    }

    /// Host (and port) without scheme or trailing slash.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Full URL with scheme and trailing slash.
    #[must_use]
    pub fn url(&self) -> String {
        let scheme = if self.secure { HTTPS } else { HTTP };
        format!("{scheme}{}/", self.host)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.host)
    }
}

fn strip_prefix_ignore_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let head = input.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        input.get(prefix.len()..)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::validators::{full_domain, partial_domain};

    #[test]
    fn test_bare_host() {
        let endpoint = Endpoint::parse("api.example.com").unwrap();
        assert_eq!(endpoint.host(), "api.example.com");
        assert_eq!(endpoint.url(), "https://api.example.com/");
    }

    #[test]
    fn test_full_url_is_stripped() {
        let endpoint = Endpoint::parse("https://api.example.com/").unwrap();
        assert_eq!(endpoint, Endpoint::parse("api.example.com").unwrap());
    }

    #[test]
    fn test_plain_http_is_kept_in_url() {
        let endpoint = Endpoint::parse("HTTP://ctf.local:8080//").unwrap();
        assert_eq!(endpoint.host(), "ctf.local:8080");
        assert_eq!(endpoint.url(), "http://ctf.local:8080/");
    }

    #[test]
    fn test_host_starting_with_http_is_not_a_scheme() {
        let endpoint = Endpoint::parse("httpbin.org").unwrap();
        assert_eq!(endpoint.host(), "httpbin.org");
        assert!(partial_domain(endpoint.host()).is_valid());
        assert!(full_domain(&endpoint.url()).is_valid());
    }

    #[test]
    fn test_forms_satisfy_domain_validators() {
        let endpoint = Endpoint::parse(" https://Example.com/ ").unwrap();
        assert!(partial_domain(endpoint.host()).is_valid());
        assert!(full_domain(&endpoint.url()).is_valid());
        assert_eq!(endpoint.to_string(), "example.com");
    }

    #[test]
    fn test_rejects_paths_and_junk() {
        assert!(Endpoint::parse("").is_err());
        assert!(Endpoint::parse("https:///").is_err());
        assert!(Endpoint::parse("example.com/api").is_err());
        assert!(Endpoint::parse("exa mple.com").is_err());
        assert!(Endpoint::parse("user@example.com").is_err());
        assert!(Endpoint::parse("example.com?x=1").is_err());
    }
}
