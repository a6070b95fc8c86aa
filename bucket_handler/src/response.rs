use serde::Serialize;

/// The shape the agent runtime expects back from an action group function.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    pub response: ActionResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    pub action_group: String,
    pub function: String,
    pub function_response: FunctionResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub response_body: ResponseBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseBody {
    #[serde(rename = "TEXT")]
    pub text: TextBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBody {
    pub body: String,
}

impl Envelope {
    pub fn function(&self) -> &str {
        &self.response.function
    }

    pub fn message(&self) -> &str {
        &self.response.function_response.response_body.text.body
    }
}

pub fn format_response(action_group: &str, function: &str, message: &str) -> Envelope {
    Envelope {
        response: ActionResponse {
            action_group: action_group.to_string(),
            function: function.to_string(),
            function_response: FunctionResponse {
                response_body: ResponseBody {
                    text: TextBody {
                        body: message.to_string(),
                    },
                },
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_to_the_agent_wire_shape() -> anyhow::Result<()> {
        let envelope = format_response("storage_bucket", "delete_bucket_1", "gone");

        assert_eq!(
            serde_json::to_value(&envelope)?,
            json!({
                "response": {
                    "actionGroup": "storage_bucket",
                    "function": "delete_bucket_1",
                    "functionResponse": {
                        "responseBody": { "TEXT": { "body": "gone" } }
                    }
                }
            })
        );
        assert_eq!(envelope.function(), "delete_bucket_1");
        assert_eq!(envelope.message(), "gone");
        Ok(())
    }
}
