use std::collections::HashMap;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::HandlerError;

pub const CREATE_BUCKET: &str = "create_bucket_1";
pub const DELETE_BUCKET: &str = "delete_bucket_1";

const BUCKET_NAME: &str = "bucket_name";
const REGION: &str = "region";

/// Action group invocation as sent by the agent runtime. Only the fields the
/// handler reads are modelled; the rest of the payload is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct InvocationEvent {
    #[serde(default)]
    pub function: Option<String>,
    #[serde(default)]
    pub parameters: Option<Vec<Parameter>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value: String,
}

impl InvocationEvent {
    pub fn function_name(&self) -> &str {
        self.function.as_deref().unwrap_or(CREATE_BUCKET)
    }

    /// Later duplicates overwrite earlier ones.
    pub fn parameter_map(&self) -> HashMap<&str, &str> {
        self.parameters
            .iter()
            .flatten()
            .map(|p| (p.name.as_str(), p.value.as_str()))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Delete,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Create => CREATE_BUCKET,
            Operation::Delete => DELETE_BUCKET,
        }
    }
}

impl FromStr for Operation {
    type Err = HandlerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CREATE_BUCKET => Ok(Operation::Create),
            DELETE_BUCKET => Ok(Operation::Delete),
            other => Err(HandlerError::UnknownOperation(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketRequest {
    pub bucket_name: String,
    pub region: String,
}

impl BucketRequest {
    pub fn from_parameters(parameters: &HashMap<&str, &str>, default_region: &str) -> Result<Self, HandlerError> {
        let bucket_name = parameters
            .get(BUCKET_NAME)
            .filter(|v| !v.is_empty())
            .ok_or(HandlerError::MissingParameter(BUCKET_NAME))?;

        let region = parameters
            .get(REGION)
            .filter(|v| !v.is_empty())
            .copied()
            .unwrap_or(default_region);

        Ok(Self {
            bucket_name: bucket_name.to_string(),
            region: region.to_string(),
        })
    }
}
