use std::sync::Arc;

use simq_core::{config::Config, service::LookupService, Error};
use simq_providers::UpstreamProviders;

#[tokio::main]
async fn main() -> Result<(), Error> {
    simq_core::logging::init("simq")?;

    let cfg = Arc::new(Config::load()?);
    let providers = UpstreamProviders::new(&cfg)?.into_gateway();
    let service = Arc::new(LookupService::new(providers));

    simq_telegram::router::run_polling(cfg, service)
        .await
        .map_err(|e| Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
