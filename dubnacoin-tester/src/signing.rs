//! Builds and checks signed Telegram launch data.
//!
//! `legacy` matches the production backend: secret = SHA-256(bot token) and
//! values stay URL-encoded in the check string. `webapp` is Telegram's
//! documented scheme: secret = HMAC-SHA256("WebAppData", bot token) over
//! decoded values.

use clap::ValueEnum;
use dubnacoin_core::LaunchUser;
use hmac::{Hmac, Mac};
use rand::Rng;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SigningScheme {
    /// SHA-256 secret, raw values (what the backend checks today)
    Legacy,
    /// Telegram's WebAppData secret, decoded values
    Webapp,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SigningError {
    #[error("launch data has no hash")]
    MissingHash,
    #[error("launch data hash does not match")]
    Mismatch,
    #[error("launch data value is not valid UTF-8 after decoding: {0}")]
    Encoding(String),
    #[error("launch user could not be encoded: {0}")]
    User(String),
}

fn secret_key(scheme: SigningScheme, bot_token: &str) -> Vec<u8> {
    match scheme {
        SigningScheme::Legacy => Sha256::digest(bot_token.as_bytes()).to_vec(),
        SigningScheme::Webapp => {
            let mut mac = <HmacSha256 as Mac>::new_from_slice(b"WebAppData")
                .expect("HMAC can take key of any size");
            mac.update(bot_token.as_bytes());
            mac.finalize().into_bytes().to_vec()
        }
    }
}

/// Sorted `key=value` lines, without `hash` and `signature`.
///
/// A repeated key keeps its last value.
///
/// # Errors
/// [`SigningError::Encoding`] when a `webapp` value does not decode.
pub fn data_check_string(scheme: SigningScheme, init_data: &str) -> Result<String, SigningError> {
    let mut pairs = BTreeMap::new();
    for (key, value) in init_data.split('&').filter_map(|item| item.split_once('=')) {
        if key == "hash" || key == "signature" {
            continue;
        }
        let value = match scheme {
            SigningScheme::Legacy => value.to_string(),
            SigningScheme::Webapp => urlencoding::decode(value)
                .map_err(|err| SigningError::Encoding(err.to_string()))?
                .into_owned(),
        };
        pairs.insert(key, value);
    }
    Ok(pairs
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn keyed_mac(scheme: SigningScheme, bot_token: &str, check_string: &str) -> HmacSha256 {
    let secret = secret_key(scheme, bot_token);
    let mut mac = <HmacSha256 as Mac>::new_from_slice(&secret).expect("HMAC can take key of any size");
    mac.update(check_string.as_bytes());
    mac
}

fn digest(scheme: SigningScheme, bot_token: &str, check_string: &str) -> String {
    hex::encode(keyed_mac(scheme, bot_token, check_string).finalize().into_bytes())
}

/// Produce init data for `user` as Telegram would hand it to the Mini App.
///
/// # Errors
/// Fails if the user cannot be serialized.
pub fn sign_init_data(
    scheme: SigningScheme,
    bot_token: &str,
    user: &LaunchUser,
    auth_date: i64,
) -> Result<String, SigningError> {
    let user_json = serde_json::to_string(user).map_err(|err| SigningError::User(err.to_string()))?;
    let query_id = format!("AAH{:016x}", rand::thread_rng().r#gen::<u64>());
    let unsigned = format!(
        "query_id={query_id}&user={}&auth_date={auth_date}",
        urlencoding::encode(&user_json)
    );
    let check_string = data_check_string(scheme, &unsigned)?;
    Ok(format!("{unsigned}&hash={}", digest(scheme, bot_token, &check_string)))
}

/// Check `init_data` the way the backend does.
///
/// # Errors
/// [`SigningError::MissingHash`] or [`SigningError::Mismatch`].
pub fn verify_init_data(
    scheme: SigningScheme,
    bot_token: &str,
    init_data: &str,
) -> Result<(), SigningError> {
    let hash = init_data
        .split('&')
        .rev()
        .find_map(|item| item.strip_prefix("hash="))
        .filter(|hash| !hash.is_empty())
        .ok_or(SigningError::MissingHash)?;
    let received = hex::decode(hash).map_err(|_| SigningError::Mismatch)?;
    keyed_mac(scheme, bot_token, &data_check_string(scheme, init_data)?)
        .verify_slice(&received)
        .map_err(|_| SigningError::Mismatch)
}
