use serde_json::Value;
use shared::s3::BucketStore;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::HandlerError;
use crate::event::{BucketRequest, InvocationEvent, Operation};
use crate::response::{format_response, Envelope};

pub const ERROR_HANDLER: &str = "error_handler";

/// S3 refuses `us-east-1` as a LocationConstraint; buckets there are created without one.
const UNCONSTRAINED_REGION: &str = "us-east-1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    /// Nothing went wrong but nothing was changed either.
    Informational(String),
}

impl Outcome {
    pub fn into_message(self) -> String {
        match self {
            Outcome::Success(message) | Outcome::Informational(message) => message,
        }
    }
}

/// Runs one invocation end to end. Every path, failures included, ends in an envelope.
///
/// `connect` builds the store for the requested region and is only called once the
/// event has been validated.
pub async fn handle<S, F>(payload: Value, config: &Config, connect: F) -> Envelope
where
    S: BucketStore,
    F: FnOnce(&str) -> S,
{
    info!(event = %payload, "Event received");

    match dispatch(payload, config, connect).await {
        Ok((operation, outcome)) => {
            match &outcome {
                Outcome::Success(message) => info!(function = operation.name(), "{}", message),
                Outcome::Informational(message) => warn!(function = operation.name(), "{}", message),
            }
            format_response(&config.action_group, operation.name(), &outcome.into_message())
        }
        Err(e) => {
            let message = format!("❌ Error: {}", e);
            error!("{}", message);
            format_response(&config.action_group, ERROR_HANDLER, &message)
        }
    }
}

async fn dispatch<S, F>(payload: Value, config: &Config, connect: F) -> Result<(Operation, Outcome), HandlerError>
where
    S: BucketStore,
    F: FnOnce(&str) -> S,
{
    let event: InvocationEvent = serde_json::from_value(payload)?;
    let parameters = event.parameter_map();
    let request = BucketRequest::from_parameters(&parameters, &config.default_region)?;
    let operation: Operation = event.function_name().parse()?;

    let store = connect(&request.region);
    let outcome = match operation {
        Operation::Create => create_bucket(&store, &request).await?,
        Operation::Delete => delete_bucket(&store, &request).await?,
    };

    Ok((operation, outcome))
}

async fn create_bucket(store: &dyn BucketStore, request: &BucketRequest) -> Result<Outcome, HandlerError> {
    let BucketRequest { bucket_name, region } = request;

    info!("Checking if bucket '{}' already exists", bucket_name);
    let existing = store.list_bucket_names().await?;
    if existing.iter().any(|name| name == bucket_name) {
        return Ok(Outcome::Informational(format!(
            "⚠️ Bucket '{}' already exists in your account.",
            bucket_name
        )));
    }

    info!("Creating bucket '{}' in '{}'", bucket_name, region);
    let location_constraint = if region == UNCONSTRAINED_REGION {
        None
    } else {
        Some(region.clone())
    };
    store.create_bucket(bucket_name, location_constraint).await?;

    Ok(Outcome::Success(format!(
        "✅ S3 bucket '{}' created successfully in region '{}'.",
        bucket_name, region
    )))
}

async fn delete_bucket(store: &dyn BucketStore, request: &BucketRequest) -> Result<Outcome, HandlerError> {
    let BucketRequest { bucket_name, region } = request;

    info!("Attempting to delete bucket '{}' in '{}'", bucket_name, region);
    match store.delete_bucket(bucket_name).await {
        Ok(()) => Ok(Outcome::Success(format!(
            "🗑️ S3 bucket '{}' deleted successfully from region '{}'.",
            bucket_name, region
        ))),
        Err(e) if e.is_no_such_bucket() => Ok(Outcome::Informational(format!(
            "⚠️ Bucket '{}' does not exist.",
            bucket_name
        ))),
        Err(e) => Err(e.into()),
    }
}
