use std::collections::HashMap;
use std::env;
use std::fmt::Display;
use std::str::FromStr;

use tracing::warn;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_uri: String,
    pub database_name: String,
    pub campaign_list_limit: i64,
    pub campaign_list_minimum: usize,
    pub auth_tokens: HashMap<String, String>,
}

impl Config {
    pub fn load() -> Config {
        let config = Config {
            host: var_or("HOST", "127.0.0.1"),
            port: parse_var_or("PORT", 8080),
            database_uri: var_or("DATABASE_URI", "mongodb://localhost:27017"),
            database_name: var_or("DATABASE_NAME", "crowdfunding"),
            campaign_list_limit: parse_var_or("CAMPAIGN_LIST_LIMIT", 10),
            campaign_list_minimum: parse_var_or("CAMPAIGN_LIST_MINIMUM", 6),
            auth_tokens: parse_auth_tokens(&var_or("AUTH_TOKENS", "")),
        };

        if config.auth_tokens.is_empty() {
            warn!("AUTH_TOKENS is empty, no caller will be able to authenticate");
        }

        config
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display + Copy,
    T::Err: Display,
{
    match env::var(key) {
        Ok(value) => value.parse().unwrap_or_else(|err| {
            warn!(
                "invalid {} value {:?}: {}, using default {}",
                key, value, err, default
            );
            default
        }),
        Err(_) => default,
    }
}

// AUTH_TOKENS holds comma-separated token=email pairs
fn parse_auth_tokens(raw: &str) -> HashMap<String, String> {
    let mut tokens = HashMap::new();
    for entry in raw.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
        match entry.split_once('=') {
            Some((token, email)) if !token.is_empty() && !email.is_empty() => {
                tokens.insert(token.to_string(), email.to_string());
            }
            _ => warn!("ignoring malformed AUTH_TOKENS entry: {:?}", entry),
        }
    }

    tokens
}
