//! Link URL sanitisation for the editor and the HTML projection.

use url::Url;

/// Schemes a stored link is allowed to carry.
const SUPPORTED_SCHEMES: [&str; 5] = ["http", "https", "mailto", "sms", "tel"];

/// The neutral target substituted for unsafe links.
pub const BLANK_URL: &str = "about:blank";

/// Sanitise a user-entered link target.
///
/// A URL with a missing scheme is retried under `https://`; a URL whose
/// scheme is outside the allow list (such as `javascript:`) degrades to
/// [`BLANK_URL`] instead of failing the edit.
#[must_use]
pub fn sanitize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return BLANK_URL.to_owned();
    }
    match Url::parse(trimmed) {
        Ok(parsed) if SUPPORTED_SCHEMES.contains(&parsed.scheme()) => trimmed.to_owned(),
        Ok(_) => BLANK_URL.to_owned(),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let candidate = format!("https://{trimmed}");
            match Url::parse(&candidate) {
                Ok(_) => candidate,
                Err(_) => BLANK_URL.to_owned(),
            }
        }
        Err(_) => BLANK_URL.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{BLANK_URL, sanitize_url};

    #[rstest]
    #[case("https://example.com/jobs")]
    #[case("http://example.com")]
    #[case("mailto:jobs@example.com")]
    #[case("tel:+15125550147")]
    fn supported_schemes_pass_through(#[case] url: &str) {
        assert_eq!(sanitize_url(url), url);
    }

    #[rstest]
    fn missing_scheme_defaults_to_https() {
        assert_eq!(sanitize_url("example.com/apply"), "https://example.com/apply");
        assert_eq!(sanitize_url("  example.com  "), "https://example.com");
    }

    #[rstest]
    #[case("javascript:alert(1)")]
    #[case("data:text/html,<script>1</script>")]
    #[case("vbscript:msgbox")]
    fn unsafe_schemes_degrade_to_blank(#[case] url: &str) {
        assert_eq!(sanitize_url(url), BLANK_URL);
    }

    #[rstest]
    fn empty_input_degrades_to_blank() {
        assert_eq!(sanitize_url(""), BLANK_URL);
        assert_eq!(sanitize_url("   "), BLANK_URL);
    }
}
