use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};

const NO_SUCH_BUCKET: &str = "NoSuchBucket";

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("An error occurred (NoSuchBucket) when calling the {operation} operation: The specified bucket '{bucket}' does not exist")]
    NoSuchBucket {
        operation: &'static str,
        bucket: String,
    },

    #[error("An error occurred ({code}) when calling the {operation} operation: {message}")]
    Service {
        operation: &'static str,
        code: String,
        message: String,
    },

    /// Failures that never reached S3 or came back unparseable (dispatch, timeout, ...).
    #[error("An error occurred when calling the {operation} operation: {detail}")]
    Sdk {
        operation: &'static str,
        detail: String,
    },
}

impl StoreError {
    pub fn is_no_such_bucket(&self) -> bool {
        matches!(self, StoreError::NoSuchBucket { .. })
    }

    /// Classifies an SDK failure by its structured error code.
    pub(crate) fn from_sdk<E, R>(operation: &'static str, bucket: &str, err: SdkError<E, R>) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error + 'static,
        R: std::fmt::Debug,
    {
        match err.as_service_error() {
            Some(service) => Self::from_service(operation, bucket, service),
            None => StoreError::Sdk {
                operation,
                detail: DisplayErrorContext(&err).to_string(),
            },
        }
    }

    pub(crate) fn from_service(
        operation: &'static str,
        bucket: &str,
        service: &impl ProvideErrorMetadata,
    ) -> Self {
        match service.code() {
            Some(NO_SUCH_BUCKET) => StoreError::NoSuchBucket {
                operation,
                bucket: bucket.to_string(),
            },
            code => StoreError::Service {
                operation,
                code: code.unwrap_or("Unknown").to_string(),
                message: service.message().unwrap_or_default().to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::error::ErrorMetadata;
    use aws_sdk_s3::operation::delete_bucket::DeleteBucketError;

    fn service_error(code: &str, message: &str) -> DeleteBucketError {
        DeleteBucketError::generic(ErrorMetadata::builder().code(code).message(message).build())
    }

    #[test]
    fn no_such_bucket_code_is_classified() {
        let err = StoreError::from_service(
            "DeleteBucket",
            "gone-bkt",
            &service_error("NoSuchBucket", "The specified bucket does not exist"),
        );

        assert!(err.is_no_such_bucket());
        assert!(err.to_string().contains("gone-bkt"));
    }

    #[test]
    fn no_such_bucket_names_the_failing_operation() {
        let err = StoreError::from_service(
            "CreateBucket",
            "b",
            &service_error("NoSuchBucket", "The specified bucket does not exist"),
        );

        assert_eq!(
            err.to_string(),
            "An error occurred (NoSuchBucket) when calling the CreateBucket operation: The specified bucket 'b' does not exist"
        );
    }

    #[test]
    fn other_codes_keep_code_and_message() {
        let err = StoreError::from_service(
            "DeleteBucket",
            "full-bkt",
            &service_error("BucketNotEmpty", "The bucket you tried to delete is not empty"),
        );

        assert!(!err.is_no_such_bucket());
        assert_eq!(
            err.to_string(),
            "An error occurred (BucketNotEmpty) when calling the DeleteBucket operation: The bucket you tried to delete is not empty"
        );
    }

    #[test]
    fn message_mentioning_no_such_bucket_is_not_enough() {
        let err = StoreError::from_service(
            "DeleteBucket",
            "bkt",
            &service_error("AccessDenied", "NoSuchBucket lookups are denied"),
        );

        assert!(!err.is_no_such_bucket());
    }
}
