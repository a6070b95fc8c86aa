use aws_config::{BehaviorVersion, SdkConfig};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use shared::s3::client_for_region;
use tokio::sync::OnceCell;
use tracing::info;

use crate::config::Config;
use crate::handler::handle;
use crate::response::Envelope;

mod config;
mod error;
mod event;
mod handler;
mod response;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;
    shared::log::init(config.log_level);

    let config = &config;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move { func(config, event).await })).await?;
    Ok(())
}

static SDK_CONFIG: OnceCell<SdkConfig> = OnceCell::const_new();
async fn get_sdk_config() -> &'static SdkConfig {
    SDK_CONFIG
        .get_or_init(|| async { aws_config::load_defaults(BehaviorVersion::latest()).await })
        .await
}

async fn func(config: &Config, event: LambdaEvent<Value>) -> Result<Envelope, Error> {
    info!(request_id = %event.context.request_id, "Invocation started");

    let sdk_config = get_sdk_config().await;
    let endpoint = config.endpoint_url.as_deref();
    let envelope = handle(event.payload, config, |region| client_for_region(sdk_config, region, endpoint)).await;
    info!(function = envelope.function(), "Invocation finished");

    Ok(envelope)
}
