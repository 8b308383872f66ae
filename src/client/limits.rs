//! Rate-limit information reported by the API.

use reqwest::header::HeaderMap;

/// Header carrying the bucket state, e.g. `32/40`.
pub(crate) const CALL_LIMIT_HEADER: &str = "x-shopify-shop-api-call-limit";

/// Parsed `X-Shopify-Shop-Api-Call-Limit` header value.
///
/// Shopify throttles with a leaky bucket; `used` is the current bucket fill
/// and `max` its capacity. The pipeline logs this on every response and
/// attaches it to status errors so callers can implement their own backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallLimit {
    /// Requests currently counted against the bucket.
    pub used: u32,
    /// Bucket capacity.
    pub max: u32,
}

impl CallLimit {
    /// Parses a `used/max` header value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let (used, max) = value.trim().split_once('/')?;
        Some(Self {
            used: used.parse().ok()?,
            max: max.parse().ok()?,
        })
    }

    pub(crate) fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get(CALL_LIMIT_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(Self::parse)
    }

    /// Fraction of the bucket in use, between 0.0 and 1.0.
    #[must_use]
    pub fn utilization(&self) -> f64 {
        if self.max == 0 {
            return 1.0;
        }
        f64::from(self.used) / f64::from(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_well_formed_header() {
        let limit = CallLimit::parse("32/40").unwrap();
        assert_eq!(limit.used, 32);
        assert_eq!(limit.max, 40);
        assert!((limit.utilization() - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_malformed_header() {
        assert!(CallLimit::parse("").is_none());
        assert!(CallLimit::parse("32").is_none());
        assert!(CallLimit::parse("a/b").is_none());
        assert!(CallLimit::parse("32/").is_none());
    }

    #[test]
    fn test_zero_capacity_reports_full() {
        let limit = CallLimit::parse("0/0").unwrap();
        assert!((limit.utilization() - 1.0).abs() < f64::EPSILON);
    }
}
