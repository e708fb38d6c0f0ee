use std::path::Path;

use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use lambda_runtime::tracing;

use crate::error::ProcessorError;

const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Fetches `bucket/key` and writes its bytes to `local_path`.
pub(crate) async fn download(
    s3_client: &S3Client,
    bucket: &str,
    key: &str,
    local_path: &Path,
) -> Result<(), ProcessorError> {
    let output = s3_client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| ProcessorError::storage_read(bucket, key, e))?;
    let bytes = output
        .body
        .collect()
        .await
        .map_err(|e| ProcessorError::storage_read(bucket, key, e))?
        .into_bytes();
    tokio::fs::write(local_path, &bytes)
        .await
        .map_err(|e| ProcessorError::storage_read(bucket, key, e))?;
    tracing::debug!(
        bucket,
        key,
        bytes = bytes.len(),
        path = %local_path.display(),
        "downloaded object"
    );
    Ok(())
}

/// Puts the contents of `local_path` at `bucket/key`.
pub(crate) async fn upload(
    s3_client: &S3Client,
    local_path: &Path,
    bucket: &str,
    key: &str,
) -> Result<(), ProcessorError> {
    let body = tokio::fs::read(local_path)
        .await
        .map_err(|e| ProcessorError::storage_write(bucket, key, e))?;
    s3_client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_type(TEXT_CONTENT_TYPE)
        .body(ByteStream::from(body))
        .send()
        .await
        .map_err(|e| ProcessorError::storage_write(bucket, key, e))?;
    Ok(())
}
