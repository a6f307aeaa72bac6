use shared::DEFAULT_ENDPOINT;

/// Classification endpoint, fixed at build time via `SPAMCHECK_ENDPOINT`.
pub fn endpoint() -> &'static str {
    option_env!("SPAMCHECK_ENDPOINT")
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(DEFAULT_ENDPOINT)
}
