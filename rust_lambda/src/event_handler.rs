use aws_lambda_events::event::s3::S3Event;
use aws_sdk_s3::Client as S3Client;
use lambda_runtime::{tracing, Error, LambdaEvent};
use serde::Serialize;

use crate::config::ProcessorConfig;
use crate::error::ProcessorError;
use crate::storage::{download, upload};
use crate::transform::{
    basename, decode_object_key, destination_key, processed_file_name, uppercase_text,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InvocationEvent {
    pub bucket_name: String,
    pub object_key: String,
}

impl InvocationEvent {
    pub(crate) fn from_s3_event(event: &S3Event) -> Result<Self, ProcessorError> {
        let record = event
            .records
            .first()
            .ok_or_else(|| ProcessorError::MalformedEvent("event has no records".to_string()))?;
        let bucket_name = record
            .s3
            .bucket
            .name
            .clone()
            .ok_or_else(|| ProcessorError::MalformedEvent("missing s3.bucket.name".to_string()))?;
        let raw_key = record
            .s3
            .object
            .key
            .as_deref()
            .ok_or_else(|| ProcessorError::MalformedEvent("missing s3.object.key".to_string()))?;
        let object_key = decode_object_key(raw_key)?;
        if matches!(basename(&object_key), "" | "." | "..") {
            return Err(ProcessorError::MalformedEvent(format!(
                "object key {object_key:?} does not name a file"
            )));
        }
        Ok(Self {
            bucket_name,
            object_key,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ProcessedResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

async fn process_object(
    s3_client: &S3Client,
    config: &ProcessorConfig,
    event: &InvocationEvent,
) -> Result<ProcessedResponse, ProcessorError> {
    let InvocationEvent {
        bucket_name,
        object_key,
    } = event;
    tracing::info!(bucket = %bucket_name, key = %object_key, "Received object");

    let file_name = basename(object_key);
    let local_path = config.scratch_dir.join(file_name);
    download(s3_client, bucket_name, object_key, &local_path).await?;

    let source = tokio::fs::read(&local_path)
        .await
        .map_err(|e| ProcessorError::storage_read(bucket_name, object_key, e))?;
    let transformed = uppercase_text(object_key, source)?;

    let output_key = destination_key(&config.output_prefix, object_key);
    let processed_path = config.scratch_dir.join(processed_file_name(file_name));
    tokio::fs::write(&processed_path, transformed.as_bytes())
        .await
        .map_err(|e| ProcessorError::storage_write(&config.output_bucket, &output_key, e))?;
    upload(s3_client, &processed_path, &config.output_bucket, &output_key).await?;

    tracing::info!(
        location = %format!("s3://{}/{}", config.output_bucket, output_key),
        "Processed object saved"
    );
    Ok(ProcessedResponse {
        status_code: 200,
        body: format!("Processado: {object_key}"),
    })
}

pub(crate) async fn function_handler(
    event: LambdaEvent<S3Event>,
    s3_client: &S3Client,
    config: &ProcessorConfig,
) -> Result<ProcessedResponse, Error> {
    let result = async {
        let invocation = InvocationEvent::from_s3_event(&event.payload)?;
        process_object(s3_client, config, &invocation).await
    }
    .await;
    result.map_err(|e| {
        tracing::error!(error = %e, "Failed to process object");
        Error::from(e)
    })
}
