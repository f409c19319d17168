//! CMLink adapter: three-step authenticated flow.
//!
//! Step order is a hard data dependency: login yields the bearer token the
//! token exchange needs, which yields the access token the data fetch
//! needs. Both tokens are request-scoped and never cached.

use serde::Deserialize;
use serde_json::json;

use simq_core::{
    config::CmlinkConfig,
    domain::{Iccid, ProviderKind},
    errors::Stage,
    providers::CmlinkBundle,
    Error, Result,
};

#[derive(Clone, Debug)]
pub struct CmlinkClient {
    http: reqwest::Client,
    cfg: CmlinkConfig,
}

#[derive(Deserialize)]
struct LoginResponse {
    content: Option<String>,
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(rename = "accessToken")]
    access_token: Option<String>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct BundleListResponse {
    #[serde(rename = "userDataBundles")]
    user_data_bundles: Vec<CmlinkBundle>,
}

impl CmlinkClient {
    pub fn new(http: reqwest::Client, cfg: CmlinkConfig) -> Self {
        Self { http, cfg }
    }

    /// Run the full flow and return the first subscribed bundle, or `None`
    /// when the card has no bundle on record.
    pub async fn subscribed_bundle(&self, iccid: &Iccid) -> Result<Option<CmlinkBundle>> {
        let bearer = self.login().await?;
        let token = self.access_token(&bearer).await?;
        self.first_bundle(&bearer, &token, iccid).await
    }

    /// Step 1: fixed service credentials, bearer token out of `content`.
    async fn login(&self) -> Result<String> {
        let body = json!({
            "code": self.cfg.account_code,
            "password": self.cfg.password_hash,
            "timestamp": self.cfg.login_timestamp,
        });

        let resp = self
            .http
            .post(&self.cfg.login_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| unreachable(Stage::Login, e))?;

        let login: LoginResponse = resp
            .json()
            .await
            .map_err(|e| malformed(Stage::Login, format!("body is not json: {e}")))?;

        match login.content {
            Some(bearer) if !bearer.is_empty() => Ok(bearer),
            _ => Err(malformed(Stage::Login, "missing content field".to_string())),
        }
    }

    /// Step 2: exchange the bearer + device identity for an access token.
    async fn access_token(&self, bearer: &str) -> Result<String> {
        let inner = json!({"id": self.cfg.device_msisdn, "type": 104}).to_string();
        let body = json!({
            "url_type": "APP_getAccessToken_SBO",
            "json": inner,
            "method": "https",
        });

        let resp = self
            .http
            .post(&self.cfg.api_url)
            .bearer_auth(bearer)
            .json(&body)
            .send()
            .await
            .map_err(|e| unreachable(Stage::AccessToken, e))?;

        let token: TokenResponse = resp
            .json()
            .await
            .map_err(|e| malformed(Stage::AccessToken, format!("body is not json: {e}")))?;

        match token.access_token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(malformed(
                Stage::AccessToken,
                "missing accessToken field".to_string(),
            )),
        }
    }

    /// Step 3: fetch the subscribed bundle list and take the first entry.
    async fn first_bundle(
        &self,
        bearer: &str,
        token: &str,
        iccid: &Iccid,
    ) -> Result<Option<CmlinkBundle>> {
        let inner = json!({
            "iccid": iccid.as_str(),
            "accessToken": token,
            "language": "0",
            "beginIndex": 0,
            "count": 100,
        })
        .to_string();
        let body = json!({
            "url_type": "APP_getSubedUserDataBundle_SBO",
            "json": inner,
            "method": "http",
        });

        let resp = self
            .http
            .post(&self.cfg.api_url)
            .bearer_auth(bearer)
            .json(&body)
            .send()
            .await
            .map_err(|e| unreachable(Stage::BundleFetch, e))?;

        let list: BundleListResponse = resp
            .json()
            .await
            .map_err(|e| malformed(Stage::BundleFetch, format!("body is not json: {e}")))?;

        // Absent or empty list means "no active bundle", not an error.
        Ok(list.user_data_bundles.into_iter().next())
    }
}

fn unreachable(stage: Stage, err: reqwest::Error) -> Error {
    tracing::warn!("CMLink request failed during {stage:?}: {err}");
    Error::Unreachable {
        provider: ProviderKind::Cmlink,
        stage,
        detail: err.to_string(),
    }
}

fn malformed(stage: Stage, detail: String) -> Error {
    Error::Malformed {
        provider: ProviderKind::Cmlink,
        stage,
        detail,
    }
}
