use std::borrow::Cow;
use std::sync::Arc;

use anyhow::Context;
use anyhow::Result;
use aws::polly::SpeechSynthesizer;
use aws::polly::SynthesizeRequest;
use aws::s3::ObjectStorage;
use aws::s3::object_url;
use framework::fs::scratch::write_scratch_file;
use framework::json::from_json;
use framework::json::to_json_spaced;
use tracing::debug;
use tracing::info;
use uuid::Uuid;

use crate::config::Config;
use crate::event::InvocationRequest;
use crate::event::InvocationResponse;
use crate::event::SpeechRequest;
use crate::event::SpeechResponse;

pub const DEFAULT_TEXT: &str = "Default text";
pub const OUTPUT_FORMAT: &str = "mp3";
pub const VOICE_ID: &str = "Joanna";
pub const SUCCESS_MESSAGE: &str = "Audio file generated";

pub struct SpeechHandler {
    config: Config,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    storage: Arc<dyn ObjectStorage>,
}

impl SpeechHandler {
    pub fn new(config: Config, synthesizer: Arc<dyn SpeechSynthesizer>, storage: Arc<dyn ObjectStorage>) -> Self {
        SpeechHandler {
            config,
            synthesizer,
            storage,
        }
    }

    // any failure aborts the invocation, scratch files already written are left in place
    pub async fn handle(&self, request: InvocationRequest) -> Result<InvocationResponse> {
        let body = request.body.context("request body is required")?;
        let speech: SpeechRequest = from_json(&body)?;
        // "text": null also falls back to the default instead of failing the synthesis call
        let text = speech.text.map(Cow::Owned).unwrap_or(Cow::Borrowed(DEFAULT_TEXT));
        debug!("synthesize text, text={text}");

        let audio = self
            .synthesizer
            .synthesize(SynthesizeRequest {
                text,
                output_format: OUTPUT_FORMAT,
                voice: VOICE_ID,
            })
            .await?;

        let name = artifact_name();
        let path = write_scratch_file(&self.config.scratch_dir, &name, &audio).await?;

        let bucket = &self.config.bucket_name;
        self.storage.upload_file(&path, bucket, &name).await?;

        let file_url = object_url(bucket, &name);
        info!("audio file generated, file_url={file_url}, bytes={}", audio.len());

        let body = to_json_spaced(&SpeechResponse {
            message: SUCCESS_MESSAGE.to_string(),
            file_url,
        })?;
        Ok(InvocationResponse { status_code: 200, body })
    }
}

pub fn artifact_name() -> String {
    format!("audio-{}.{OUTPUT_FORMAT}", Uuid::new_v4())
}
