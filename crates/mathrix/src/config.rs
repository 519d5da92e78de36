//! Build-time configuration for the client.

/// API root used when `MATHRIX_API_URL` is not set at compile time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Local storage key holding the JSON-serialized signed-in participant.
pub const SESSION_KEY: &str = "participant";

/// Local storage key holding the preferred theme name.
pub const THEME_KEY: &str = "theme";

/// Debounce before the live email availability check fires, in milliseconds.
pub const EMAIL_CHECK_DEBOUNCE_MS: u32 = 1000;

/// Debounce before the live USN availability check fires, in milliseconds.
pub const USN_CHECK_DEBOUNCE_MS: u32 = 800;

/// Delay between a completed registration and the redirect to the dashboard.
pub const REGISTRATION_REDIRECT_MS: u32 = 3000;

/// Returns the API root, taken from the `MATHRIX_API_URL` environment variable at
/// compile time (trailing slashes stripped) or [`DEFAULT_API_URL`].
pub fn api_base_url() -> &'static str {
    resolve_base_url(option_env!("MATHRIX_API_URL"))
}

fn resolve_base_url(configured: Option<&'static str>) -> &'static str {
    match configured.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/'),
        _ => DEFAULT_API_URL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        assert_eq!(resolve_base_url(None), DEFAULT_API_URL);
        assert_eq!(resolve_base_url(Some("   ")), DEFAULT_API_URL);
    }

    #[test]
    fn test_configured_base_url_strips_trailing_slash() {
        assert_eq!(
            resolve_base_url(Some("https://api.example.org/")),
            "https://api.example.org"
        );
    }
}
