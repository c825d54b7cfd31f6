use std::borrow::Cow;

use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_polly::error::DisplayErrorContext;
use aws_sdk_polly::types::OutputFormat;
use aws_sdk_polly::types::VoiceId;
use aws_sdk_polly::Client;
use bytes::Bytes;
use tracing::debug;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizeRequest<'a> {
    pub text: Cow<'a, str>,
    pub output_format: &'a str,
    pub voice: &'a str,
}

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, request: SynthesizeRequest<'_>) -> Result<Bytes>;
}

pub struct Polly {
    client: Client,
}

impl Polly {
    pub fn new(config: &SdkConfig) -> Self {
        Polly {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for Polly {
    async fn synthesize(&self, request: SynthesizeRequest<'_>) -> Result<Bytes> {
        info!(
            "call polly synthesize api, voice={}, format={}, chars={}",
            request.voice,
            request.output_format,
            request.text.chars().count()
        );

        let response = self
            .client
            .synthesize_speech()
            .text(request.text)
            .output_format(OutputFormat::from(request.output_format))
            .voice_id(VoiceId::from(request.voice))
            .send()
            .await
            .map_err(|err| anyhow!("failed to call polly api, error={}", DisplayErrorContext(&err)))?;

        let audio = response
            .audio_stream
            .collect()
            .await
            .context("failed to read polly audio stream")?
            .into_bytes();
        debug!("polly audio received, content_type={:?}, bytes={}", response.content_type, audio.len());

        Ok(audio)
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_polly::types::OutputFormat;
    use aws_sdk_polly::types::VoiceId;

    #[test]
    fn request_values_map_to_known_sdk_variants() {
        assert_eq!(OutputFormat::from("mp3"), OutputFormat::Mp3);
        assert_eq!(VoiceId::from("Joanna"), VoiceId::Joanna);
    }
}
