#![allow(dead_code)]

use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;

use anyhow::Result;
use anyhow::anyhow;
use async_trait::async_trait;
use aws::polly::SpeechSynthesizer;
use aws::polly::SynthesizeRequest;
use aws::s3::ObjectStorage;
use bytes::Bytes;
use speech::config::Config;
use speech::handler::SpeechHandler;
use tempfile::TempDir;

pub const BUCKET: &str = "my-audio-bucket";

#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizeCall {
    pub text: String,
    pub output_format: String,
    pub voice: String,
}

pub struct MockSynthesizer {
    audio: Option<&'static [u8]>,
    pub calls: Mutex<Vec<SynthesizeCall>>,
}

impl MockSynthesizer {
    pub fn returning(audio: &'static [u8]) -> Self {
        MockSynthesizer {
            audio: Some(audio),
            calls: Mutex::new(vec![]),
        }
    }

    pub fn failing() -> Self {
        MockSynthesizer {
            audio: None,
            calls: Mutex::new(vec![]),
        }
    }

    pub fn calls(&self) -> Vec<SynthesizeCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSynthesizer {
    async fn synthesize(&self, request: SynthesizeRequest<'_>) -> Result<Bytes> {
        self.calls.lock().unwrap().push(SynthesizeCall {
            text: request.text.into_owned(),
            output_format: request.output_format.to_string(),
            voice: request.voice.to_string(),
        });
        match self.audio {
            Some(audio) => Ok(Bytes::from_static(audio)),
            None => Err(anyhow!("failed to call polly api, error=throttled")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadCall {
    pub path: PathBuf,
    pub bucket: String,
    pub key: String,
    pub content: Vec<u8>,
}

pub struct MockStorage {
    fail: bool,
    pub calls: Mutex<Vec<UploadCall>>,
}

impl MockStorage {
    pub fn new() -> Self {
        MockStorage {
            fail: false,
            calls: Mutex::new(vec![]),
        }
    }

    pub fn failing() -> Self {
        MockStorage {
            fail: true,
            calls: Mutex::new(vec![]),
        }
    }

    pub fn calls(&self) -> Vec<UploadCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStorage for MockStorage {
    async fn upload_file(&self, path: &Path, bucket: &str, key: &str) -> Result<()> {
        let content = tokio::fs::read(path).await?;
        self.calls.lock().unwrap().push(UploadCall {
            path: path.to_path_buf(),
            bucket: bucket.to_string(),
            key: key.to_string(),
            content,
        });
        if self.fail {
            return Err(anyhow!("failed to put object, bucket={bucket}, key={key}, error=access denied"));
        }
        Ok(())
    }
}

pub struct Fixture {
    pub handler: SpeechHandler,
    pub synthesizer: Arc<MockSynthesizer>,
    pub storage: Arc<MockStorage>,
    pub scratch_dir: TempDir,
}

pub fn fixture(synthesizer: MockSynthesizer, storage: MockStorage) -> Fixture {
    let scratch_dir = tempfile::tempdir().unwrap();
    let synthesizer = Arc::new(synthesizer);
    let storage = Arc::new(storage);
    let config = Config {
        bucket_name: BUCKET.to_string(),
        scratch_dir: scratch_dir.path().to_path_buf(),
    };
    let handler = SpeechHandler::new(config, synthesizer.clone(), storage.clone());
    Fixture {
        handler,
        synthesizer,
        storage,
        scratch_dir,
    }
}
