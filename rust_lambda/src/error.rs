use thiserror::Error;

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Every failure that can end an invocation. None of them are recovered
/// locally; the handler surfaces them to the Lambda runtime as-is.
#[derive(Error, Debug)]
pub(crate) enum ProcessorError {
    #[error("malformed S3 event: {0}")]
    MalformedEvent(String),

    #[error("failed to read s3://{bucket}/{key}: {source}")]
    StorageRead {
        bucket: String,
        key: String,
        #[source]
        source: BoxError,
    },

    #[error("object {key} is not valid UTF-8 text: {source}")]
    Decode {
        key: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("failed to write s3://{bucket}/{key}: {source}")]
    StorageWrite {
        bucket: String,
        key: String,
        #[source]
        source: BoxError,
    },
}

impl ProcessorError {
    pub(crate) fn storage_read(
        bucket: &str,
        key: &str,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::StorageRead {
            bucket: bucket.to_string(),
            key: key.to_string(),
            source: source.into(),
        }
    }

    pub(crate) fn storage_write(
        bucket: &str,
        key: &str,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::StorageWrite {
            bucket: bucket.to_string(),
            key: key.to_string(),
            source: source.into(),
        }
    }
}
