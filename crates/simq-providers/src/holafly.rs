//! Holafly adapter: single card-by-ICCID lookup.

use serde_json::Value;

use simq_core::{
    config::HolaflyConfig,
    domain::{Iccid, ProviderKind},
    errors::Stage,
    providers::HolaflyCard,
    Error, Result,
};

#[derive(Clone, Debug)]
pub struct HolaflyClient {
    http: reqwest::Client,
    cfg: HolaflyConfig,
}

impl HolaflyClient {
    pub fn new(http: reqwest::Client, cfg: HolaflyConfig) -> Self {
        Self { http, cfg }
    }

    pub async fn card(&self, iccid: &Iccid) -> Result<HolaflyCard> {
        let url = format!("{}/{}", self.cfg.card_url.trim_end_matches('/'), iccid);

        let resp = self
            .http
            .get(&url)
            .query(&[("includeProvider", "true")])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Holafly request failed: {e}");
                Error::Unreachable {
                    provider: ProviderKind::Holafly,
                    stage: Stage::Card,
                    detail: e.to_string(),
                }
            })?;

        // No field is required for display; an unparseable body renders as
        // all placeholders.
        let body: Value = resp.json().await.unwrap_or(Value::Null);
        Ok(HolaflyCard::from_response(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn iccid() -> Iccid {
        Iccid::parse("8999999999999999999").unwrap()
    }

    #[tokio::test]
    async fn fetches_card_with_provider_flag() {
        let mut server = mockito::Server::new_async().await;

        let card = server
            .mock("GET", "/api/customerCard/getByIccid/8999999999999999999")
            .match_query(Matcher::UrlEncoded(
                "includeProvider".into(),
                "true".into(),
            ))
            .with_body(
                r#"{"order_name":"HF-1","destination":{"en":"Japan"},
                    "boundle":{"en":"10 days"},"remainingDays":7,"totalDays":10}"#,
            )
            .create_async()
            .await;

        let cfg = HolaflyConfig {
            card_url: format!("{}/api/customerCard/getByIccid", server.url()),
        };
        let client = HolaflyClient::new(reqwest::Client::new(), cfg);

        let out = client.card(&iccid()).await.unwrap();
        assert_eq!(out.order_name.as_deref(), Some("HF-1"));
        assert_eq!(out.destination.as_deref(), Some("Japan"));
        assert_eq!(out.remaining_days.as_deref(), Some("7"));
        card.assert_async().await;
    }

    #[tokio::test]
    async fn unparseable_body_yields_empty_card() {
        let mut server = mockito::Server::new_async().await;

        let _m1 = server
            .mock("GET", "/api/customerCard/getByIccid/8999999999999999999")
            .match_query(Matcher::Any)
            .with_body("gateway timeout")
            .create_async()
            .await;

        let cfg = HolaflyConfig {
            card_url: format!("{}/api/customerCard/getByIccid", server.url()),
        };
        let client = HolaflyClient::new(reqwest::Client::new(), cfg);

        let out = client.card(&iccid()).await.unwrap();
        assert_eq!(out, HolaflyCard::default());
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_classified_unreachable() {
        let cfg = HolaflyConfig {
            card_url: "http://127.0.0.1:9/api/customerCard/getByIccid".to_string(),
        };
        let client = HolaflyClient::new(reqwest::Client::new(), cfg);

        let err = client.card(&iccid()).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Unreachable {
                provider: ProviderKind::Holafly,
                stage: Stage::Card,
                ..
            }
        ));
    }
}
