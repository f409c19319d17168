//! Top-level lookup flow: validate → route → query → normalize → reply.

use std::sync::Arc;

use crate::{
    domain::{ChatId, Iccid, ProviderKind},
    errors::{Error, Stage},
    messaging::port::MessagingPort,
    providers::{cmlink, holafly, three_hk, ProviderGateway},
    reply,
    report::Report,
    Result,
};

/// Per-message lookup service.
///
/// Stateless: each inbound message is processed independently and failures
/// are always converted into a reply, never propagated to the dispatch
/// loop.
pub struct LookupService {
    providers: Arc<dyn ProviderGateway>,
}

impl LookupService {
    pub fn new(providers: Arc<dyn ProviderGateway>) -> Self {
        Self { providers }
    }

    /// Process one inbound message and produce the single reply for it.
    pub async fn handle(&self, text: &str) -> Report {
        let Some(iccid) = Iccid::parse(text.trim()) else {
            return Report::text(reply::INVALID_ICCID);
        };

        match iccid.provider() {
            ProviderKind::Cmlink => self.cmlink(&iccid).await,
            ProviderKind::ThreeHk => self.three_hk(&iccid).await,
            ProviderKind::Holafly => self.holafly(&iccid).await,
        }
    }

    /// Process one inbound message and deliver exactly one outbound reply.
    pub async fn respond(
        &self,
        chat_id: ChatId,
        text: &str,
        messenger: Arc<dyn MessagingPort>,
    ) -> Result<()> {
        let report = self.handle(text).await;
        match report.keyboard {
            Some(keyboard) => {
                messenger
                    .send_html_with_keyboard(chat_id, &report.html, keyboard)
                    .await
            }
            None => messenger.send_html(chat_id, &report.html).await,
        }
    }

    async fn cmlink(&self, iccid: &Iccid) -> Report {
        match self.providers.cmlink_bundle(iccid).await {
            Ok(Some(bundle)) => {
                Report::with_keyboard(cmlink::render(iccid, &bundle), cmlink::actions(iccid))
            }
            Ok(None) => {
                Report::with_keyboard(cmlink::render_no_bundle(iccid), cmlink::actions(iccid))
            }
            Err(err) => failure_report(iccid, &err),
        }
    }

    async fn three_hk(&self, iccid: &Iccid) -> Report {
        match self.providers.three_hk_info(iccid).await {
            Ok(info) => Report::text(three_hk::render(iccid, &info)),
            Err(err) => failure_report(iccid, &err),
        }
    }

    async fn holafly(&self, iccid: &Iccid) -> Report {
        match self.providers.holafly_card(iccid).await {
            Ok(card) => Report::text(holafly::render(iccid, &card)),
            Err(err) => failure_report(iccid, &err),
        }
    }
}

fn failure_report(iccid: &Iccid, err: &Error) -> Report {
    tracing::warn!("lookup for {iccid} failed: {err}");
    Report::text(failure_text(err))
}

/// Map a typed upstream failure to its static user-facing template.
fn failure_text(err: &Error) -> &'static str {
    match err {
        Error::Unreachable {
            provider, stage, ..
        }
        | Error::Malformed {
            provider, stage, ..
        } => match (provider, stage) {
            (ProviderKind::Cmlink, Stage::Login) => reply::CMLINK_LOGIN_FAILED,
            (ProviderKind::Cmlink, Stage::AccessToken) => reply::CMLINK_TOKEN_FAILED,
            (ProviderKind::Cmlink, _) => reply::CMLINK_NETWORK_ERROR,
            (ProviderKind::ThreeHk, Stage::Msisdn) => reply::HK3_MSISDN_FAILED,
            (ProviderKind::ThreeHk, _) => reply::HK3_NETWORK_ERROR,
            (ProviderKind::Holafly, _) => reply::HOLAFLY_NETWORK_ERROR,
        },
        _ => reply::GENERIC_ERROR,
    }
}
