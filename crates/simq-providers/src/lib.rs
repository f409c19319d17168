//! Upstream provider adapters (reqwest).
//!
//! This crate implements the `simq-core` ProviderGateway over the three
//! providers' HTTP APIs. One shared client carries the configured timeout;
//! a hung upstream surfaces as `Error::Unreachable` instead of stalling a
//! chat forever.

use std::sync::Arc;

use async_trait::async_trait;

use simq_core::{
    config::Config,
    domain::Iccid,
    providers::{CmlinkBundle, HolaflyCard, ProviderGateway, ThreeHkInfo},
    Error, Result,
};

pub mod cmlink;
pub mod holafly;
pub mod three_hk;

pub use cmlink::CmlinkClient;
pub use holafly::HolaflyClient;
pub use three_hk::ThreeHkClient;

/// The real provider gateway: one client per upstream over a shared
/// transport.
pub struct UpstreamProviders {
    cmlink: CmlinkClient,
    three_hk: ThreeHkClient,
    holafly: HolaflyClient,
}

impl UpstreamProviders {
    pub fn new(cfg: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(cfg.upstream_timeout)
            .build()
            .map_err(|e| Error::External(format!("http client build failed: {e}")))?;

        Ok(Self {
            cmlink: CmlinkClient::new(http.clone(), cfg.cmlink.clone()),
            three_hk: ThreeHkClient::new(http.clone(), cfg.three_hk.clone()),
            holafly: HolaflyClient::new(http, cfg.holafly.clone()),
        })
    }

    pub fn into_gateway(self) -> Arc<dyn ProviderGateway> {
        Arc::new(self)
    }
}

#[async_trait]
impl ProviderGateway for UpstreamProviders {
    async fn cmlink_bundle(&self, iccid: &Iccid) -> Result<Option<CmlinkBundle>> {
        self.cmlink.subscribed_bundle(iccid).await
    }

    async fn three_hk_info(&self, iccid: &Iccid) -> Result<ThreeHkInfo> {
        self.three_hk.customer_info(iccid).await
    }

    async fn holafly_card(&self, iccid: &Iccid) -> Result<HolaflyCard> {
        self.holafly.card(iccid).await
    }
}
