use http::HeaderMap;
use http::header::ACCEPT;

/// Decides whether the client prefers a given representation
pub trait ContentNegotiator: Send + Sync {
    /// Whether `format` (e.g. `html`) is the client's most preferred type
    fn prefers(&self, headers: &HeaderMap, format: &str) -> bool;
}

/// Negotiator driven by the `Accept` header
///
/// Media ranges are ranked by quality, keeping header order for ties. The
/// format is preferred when the top-ranked range's subtype names it, so
/// `text/html` and `application/xhtml+xml` prefer `html` and `xhtml`
/// respectively while `*/*` prefers nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptNegotiator;

impl ContentNegotiator for AcceptNegotiator {
    fn prefers(&self, headers: &HeaderMap, format: &str) -> bool {
        let mut ranges: Vec<MediaRange<'_>> = headers
            .get_all(ACCEPT)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(','))
            .filter_map(MediaRange::parse)
            .collect();

        ranges.sort_by(|a, b| b.quality.total_cmp(&a.quality));

        ranges.first().is_some_and(|range| range.names(format))
    }
}

#[derive(Debug)]
struct MediaRange<'a> {
    subtype: &'a str,
    quality: f32,
}

impl<'a> MediaRange<'a> {
    /// Parse one `type/subtype;q=0.8` entry; unacceptable (q=0) and
    /// malformed entries yield `None`
    fn parse(raw: &'a str) -> Option<Self> {
        let mut params = raw.split(';');
        let (_, subtype) = params.next()?.trim().split_once('/')?;
        let mut quality = 1.0;

        for param in params {
            if let Some((key, value)) = param.split_once('=')
                && key.trim().eq_ignore_ascii_case("q")
            {
                quality = value
                    .trim()
                    .parse::<f32>()
                    .ok()
                    .filter(|q| (0.0..=1.0).contains(q))?;
            }
        }

        (quality > 0.0).then_some(Self {
            subtype: subtype.trim(),
            quality,
        })
    }

    fn names(&self, format: &str) -> bool {
        self.subtype
            .split('+')
            .next()
            .is_some_and(|base| base.eq_ignore_ascii_case(format))
    }
}

#[cfg(test)]
mod tests {
    use http::HeaderValue;

    use super::*;

    fn accept(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn browser_accept_prefers_html() {
        let headers = accept("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8");
        assert!(AcceptNegotiator.prefers(&headers, "html"));
        assert!(!AcceptNegotiator.prefers(&headers, "json"));
    }

    #[test]
    fn json_client_does_not_prefer_html() {
        assert!(!AcceptNegotiator.prefers(&accept("application/json"), "html"));
        assert!(AcceptNegotiator.prefers(&accept("application/json"), "json"));
    }

    #[test]
    fn missing_header_prefers_nothing() {
        assert!(!AcceptNegotiator.prefers(&HeaderMap::new(), "html"));
    }

    #[test]
    fn wildcard_prefers_nothing() {
        assert!(!AcceptNegotiator.prefers(&accept("*/*"), "html"));
    }

    #[test]
    fn quality_outranks_order() {
        let headers = accept("text/html;q=0.5, application/json");
        assert!(!AcceptNegotiator.prefers(&headers, "html"));
        assert!(AcceptNegotiator.prefers(&headers, "json"));
    }

    #[test]
    fn ties_keep_header_order() {
        assert!(AcceptNegotiator.prefers(&accept("text/html;q=0.8, application/json;q=0.8"), "html"));
    }

    #[test]
    fn rejected_and_malformed_ranges_are_ignored() {
        assert!(!AcceptNegotiator.prefers(&accept("text/html;q=0, application/json;q=0.1"), "html"));
        assert!(!AcceptNegotiator.prefers(&accept("text/html;q=high, application/json;q=0.1"), "html"));
        assert!(AcceptNegotiator.prefers(&accept("html, text/html;q=0.2"), "html"));
    }

    #[test]
    fn structured_suffix_names_base_subtype() {
        assert!(AcceptNegotiator.prefers(&accept("application/xhtml+xml"), "xhtml"));
    }

    #[test]
    fn multiple_header_values_are_combined() {
        let mut headers = HeaderMap::new();
        headers.append(ACCEPT, HeaderValue::from_static("application/json;q=0.4"));
        headers.append(ACCEPT, HeaderValue::from_static("text/html"));
        assert!(AcceptNegotiator.prefers(&headers, "html"));
    }
}
