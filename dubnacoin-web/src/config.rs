//! Client configuration baked in at compile time.
///
/// `PUBLIC_URL` prefixes static assets (e.g. `/play` when hosted under a
/// sub-path). `DUBNACOIN_API_BASE` points requests at another origin,
/// `DUBNACOIN_BOT_USERNAME` enables referral links and
/// `DUBNACOIN_QUERY_FALLBACK=1` reads launch data from the URL when the page
/// is opened outside Telegram.
#[must_use]
pub fn client_config() -> dubnacoin_core::ClientConfig {
    config_from(
        option_env!("PUBLIC_URL"),
        option_env!("DUBNACOIN_API_BASE"),
        option_env!("DUBNACOIN_BOT_USERNAME"),
        option_env!("DUBNACOIN_QUERY_FALLBACK"),
    )
}

fn config_from(
    public_url: Option<&str>,
    api_base: Option<&str>,
    bot_username: Option<&str>,
    query_fallback: Option<&str>,
) -> dubnacoin_core::ClientConfig {
    dubnacoin_core::ClientConfig {
        api_base: api_base.unwrap_or_default().trim().to_string(),
        asset_base: public_url.unwrap_or_default().trim().to_string(),
        bot_username: bot_username
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ToString::to_string),
        query_fallback: query_fallback.is_some_and(flag_enabled),
        ..dubnacoin_core::ClientConfig::default()
    }
}

fn flag_enabled(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
