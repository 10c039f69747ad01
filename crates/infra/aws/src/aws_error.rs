use aws_sdk_rds::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use rdslogs_core::error::Error;

pub(crate) fn map_aws_error<E>(operation_name: &'static str, sdk_error: SdkError<E>) -> Error
where
    E: std::error::Error + Send + Sync + 'static + ProvideErrorMetadata,
{
    match sdk_error {
        SdkError::ServiceError(service_error) => {
            let error = service_error.into_err();
            map_error_code(
                operation_name,
                error.code(),
                error.message().unwrap_or_default(),
            )
        }

        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => Error::Transient {
            operation_name: operation_name.to_string(),
            detail: DisplayErrorContext(&sdk_error).to_string(),
        },

        other => Error::Unknown {
            operation_name: operation_name.to_string(),
            detail: DisplayErrorContext(&other).to_string(),
        },
    }
}

fn map_error_code(operation_name: &str, code: Option<&str>, message: &str) -> Error {
    match code.unwrap_or_default() {
        "AccessDenied" | "AccessDeniedException" | "UnauthorizedOperation" => {
            Error::Authorization {
                operation: operation_name.to_string(),
            }
        }
        "InvalidClientTokenId" | "SignatureDoesNotMatch" | "ExpiredToken" => {
            Error::Authentication {
                detail: message.to_string(),
            }
        }
        "Throttling" | "ThrottlingException" | "RequestLimitExceeded" => Error::Quota {
            operation_name: operation_name.to_string(),
        },
        code => Error::Unknown {
            operation_name: operation_name.to_string(),
            detail: if code.is_empty() {
                message.to_string()
            } else {
                format!("{code}: {message}")
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use aws_sdk_rds::operation::describe_db_log_files::DescribeDBLogFilesError;

    use super::*;

    fn missing_credentials() -> io::Error {
        io::Error::other("no credentials found in the provider chain")
    }

    #[test]
    fn transient_errors_keep_their_cause() {
        let sdk_error: SdkError<DescribeDBLogFilesError> =
            SdkError::timeout_error(missing_credentials());
        let error = map_aws_error("DescribeDBLogFiles", sdk_error);
        assert!(matches!(
            &error,
            Error::Transient { operation_name, detail }
                if operation_name == "DescribeDBLogFiles"
                    && detail.contains("no credentials found in the provider chain")
        ));
    }

    #[test]
    fn unclassified_errors_keep_their_cause() {
        let sdk_error: SdkError<DescribeDBLogFilesError> =
            SdkError::construction_failure(missing_credentials());
        let error = map_aws_error("DescribeDBLogFiles", sdk_error);
        assert!(matches!(
            &error,
            Error::Unknown { detail, .. }
                if detail.contains("no credentials found in the provider chain")
        ));
    }

    #[test]
    fn maps_known_codes() {
        let error = map_error_code("DescribeDBInstances", Some("AccessDenied"), "nope");
        assert!(
            matches!(error, Error::Authorization { operation } if operation == "DescribeDBInstances")
        );

        let error = map_error_code("DescribeDBInstances", Some("ExpiredToken"), "expired");
        assert!(matches!(error, Error::Authentication { .. }));

        let error = map_error_code("DescribeDBInstances", Some("Throttling"), "slow down");
        assert!(matches!(error, Error::Quota { .. }));
    }

    #[test]
    fn unknown_codes_keep_the_service_message() {
        let error = map_error_code("DescribeDBLogFiles", Some("InvalidParameterValue"), "bad id");
        assert_eq!(
            error.to_string(),
            "unexpected error during DescribeDBLogFiles: InvalidParameterValue: bad id"
        );

        let error = map_error_code("DescribeDBLogFiles", None, "no code");
        assert_eq!(
            error.to_string(),
            "unexpected error during DescribeDBLogFiles: no code"
        );
    }
}
