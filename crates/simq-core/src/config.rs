use std::{env, fs, path::Path, time::Duration};

use crate::{errors::Error, Result};

/// Typed configuration.
///
/// Everything is env-driven with production defaults; only the Telegram bot
/// token is required. A `.env` file in the working directory is honored
/// without overriding variables already set.
#[derive(Clone, Debug)]
pub struct Config {
    pub telegram_bot_token: String,

    /// Deadline applied to every upstream HTTP call.
    pub upstream_timeout: Duration,

    pub cmlink: CmlinkConfig,
    pub three_hk: ThreeHkConfig,
    pub holafly: HolaflyConfig,
}

/// CMLink endpoints and the fixed service identity used for its login flow.
#[derive(Clone, Debug)]
pub struct CmlinkConfig {
    pub login_url: String,
    /// Generic RPC gateway used for both the token exchange and the data fetch.
    pub api_url: String,
    pub account_code: String,
    pub password_hash: String,
    pub login_timestamp: String,
    /// MSISDN presented as the device identity in the token exchange.
    pub device_msisdn: String,
}

impl Default for CmlinkConfig {
    fn default() -> Self {
        Self {
            login_url: "https://global.cmlink.com/api/login".to_string(),
            api_url: "https://global.cmlink.com/api/user-login/ApiGetGws".to_string(),
            account_code: "sugsqwer1725003007000".to_string(),
            password_hash: "4ea9060a6201c04035b9d7bb3a34d4c5".to_string(),
            login_timestamp: "1725003007000".to_string(),
            device_msisdn: "8618922393096".to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ThreeHkConfig {
    pub msisdn_url: String,
    pub customer_url: String,
}

impl Default for ThreeHkConfig {
    fn default() -> Self {
        Self {
            msisdn_url: "https://www.three.com.hk/account-pro/sim/getMsisdnByIccid".to_string(),
            customer_url: "https://www.three.com.hk/account-pro/user/existingCustDipping"
                .to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct HolaflyConfig {
    /// Base URL; the ICCID is appended as a path segment.
    pub card_url: String,
}

impl Default for HolaflyConfig {
    fn default() -> Self {
        Self {
            card_url: "https://customers-api.holafly.com/api/customerCard/getByIccid".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let telegram_bot_token = env_str("TELEGRAM_BOT_TOKEN").unwrap_or_default();
        if telegram_bot_token.trim().is_empty() {
            return Err(Error::Config(
                "TELEGRAM_BOT_TOKEN environment variable is required".to_string(),
            ));
        }

        let upstream_timeout =
            Duration::from_millis(env_u64("UPSTREAM_TIMEOUT_MS").unwrap_or(15_000));

        let mut cmlink = CmlinkConfig::default();
        if let Some(v) = env_str("CMLINK_LOGIN_URL").and_then(non_empty) {
            cmlink.login_url = v;
        }
        if let Some(v) = env_str("CMLINK_API_URL").and_then(non_empty) {
            cmlink.api_url = v;
        }
        if let Some(v) = env_str("CMLINK_ACCOUNT_CODE").and_then(non_empty) {
            cmlink.account_code = v;
        }
        if let Some(v) = env_str("CMLINK_PASSWORD_HASH").and_then(non_empty) {
            cmlink.password_hash = v;
        }
        if let Some(v) = env_str("CMLINK_LOGIN_TIMESTAMP").and_then(non_empty) {
            cmlink.login_timestamp = v;
        }
        if let Some(v) = env_str("CMLINK_DEVICE_MSISDN").and_then(non_empty) {
            cmlink.device_msisdn = v;
        }

        let mut three_hk = ThreeHkConfig::default();
        if let Some(v) = env_str("HK3_MSISDN_URL").and_then(non_empty) {
            three_hk.msisdn_url = v;
        }
        if let Some(v) = env_str("HK3_CUSTOMER_URL").and_then(non_empty) {
            three_hk.customer_url = v;
        }

        let mut holafly = HolaflyConfig::default();
        if let Some(v) = env_str("HOLAFLY_CARD_URL").and_then(non_empty) {
            holafly.card_url = v;
        }

        Ok(Self {
            telegram_bot_token,
            upstream_timeout,
            cmlink,
            three_hk,
            holafly,
        })
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

fn env_u64(key: &str) -> Option<u64> {
    env_str(key).and_then(|s| s.trim().parse::<u64>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
