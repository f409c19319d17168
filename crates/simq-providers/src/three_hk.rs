//! 3HK adapter: MSISDN lookup, then customer-info lookup.

use serde_json::{json, Value};

use simq_core::{
    config::ThreeHkConfig,
    domain::{Iccid, ProviderKind},
    errors::Stage,
    providers::ThreeHkInfo,
    Error, Result,
};

#[derive(Clone, Debug)]
pub struct ThreeHkClient {
    http: reqwest::Client,
    cfg: ThreeHkConfig,
}

impl ThreeHkClient {
    pub fn new(http: reqwest::Client, cfg: ThreeHkConfig) -> Self {
        Self { http, cfg }
    }

    /// Resolve the MSISDN for the card, then look up customer info with it.
    /// Without a string `msisdn` in step 1 the flow aborts and step 2 is
    /// never attempted.
    pub async fn customer_info(&self, iccid: &Iccid) -> Result<ThreeHkInfo> {
        let resp = self
            .http
            .get(&self.cfg.msisdn_url)
            .query(&[("iccid", iccid.as_str())])
            .send()
            .await
            .map_err(|e| unreachable(Stage::Msisdn, e))?;

        let lookup: Value = resp.json().await.map_err(|e| {
            malformed(Stage::Msisdn, format!("body is not json: {e}"))
        })?;

        let Some(msisdn) = lookup.get("msisdn").and_then(Value::as_str) else {
            return Err(malformed(
                Stage::Msisdn,
                "missing or non-string msisdn field".to_string(),
            ));
        };
        let msisdn = msisdn.to_string();

        let resp = self
            .http
            .post(&self.cfg.customer_url)
            .json(&json!({"id": msisdn}))
            .send()
            .await
            .map_err(|e| unreachable(Stage::CustomerInfo, e))?;

        // The customer body has no required fields; an unparseable body just
        // leaves every display field unset.
        let customer: Value = resp.json().await.unwrap_or(Value::Null);

        Ok(ThreeHkInfo::from_responses(msisdn, &lookup, &customer))
    }
}

fn unreachable(stage: Stage, err: reqwest::Error) -> Error {
    tracing::warn!("3HK request failed during {stage:?}: {err}");
    Error::Unreachable {
        provider: ProviderKind::ThreeHk,
        stage,
        detail: err.to_string(),
    }
}

fn malformed(stage: Stage, detail: String) -> Error {
    Error::Malformed {
        provider: ProviderKind::ThreeHk,
        stage,
        detail,
    }
}
