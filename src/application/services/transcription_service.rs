use std::path::PathBuf;
use std::sync::Arc;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::application::ports::{AudioUpload, TranscriptionEngine};
use crate::domain::{AudioClip, AudioFormat, MAX_AUDIO_BYTES, Transcript};

use super::request_classifier::MISSING_AUDIO_FIELDS;
use super::{PipelineError, TempAudioFile};

pub const NO_SPEECH_DETECTED: &str = "No speech detected or audio unclear";

const AUDIO_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decoded audio that passed the size and format checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedAudio {
    pub bytes: Vec<u8>,
    pub format: AudioFormat,
}

pub struct TranscriptionService {
    engine: Arc<dyn TranscriptionEngine>,
    scratch_dir: PathBuf,
}

impl TranscriptionService {
    pub fn new(engine: Arc<dyn TranscriptionEngine>, scratch_dir: PathBuf) -> Self {
        Self {
            engine,
            scratch_dir,
        }
    }

    pub fn model(&self) -> &str {
        self.engine.model()
    }

    pub fn validate(clip: &AudioClip) -> Result<ValidatedAudio, PipelineError> {
        if clip.audio_data.trim().is_empty()
            || clip.file_name.trim().is_empty()
            || clip.mime_type.trim().is_empty()
        {
            return Err(PipelineError::validation(MISSING_AUDIO_FIELDS));
        }

        let compact: String = clip
            .audio_data
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        let bytes = AUDIO_BASE64
            .decode(compact)
            .map_err(|e| PipelineError::validation(format!("Invalid base64 audio data: {}", e)))?;

        if bytes.len() > MAX_AUDIO_BYTES {
            tracing::warn!(
                size = bytes.len(),
                limit = MAX_AUDIO_BYTES,
                "Audio payload exceeds size limit"
            );
            return Err(PipelineError::validation("File too large (max 25MB)"));
        }

        let format = AudioFormat::from_file_name(&clip.file_name).ok_or_else(|| {
            PipelineError::validation(format!(
                "Unsupported format. Supported: {}",
                AudioFormat::supported_extensions().join(", ")
            ))
        })?;

        Ok(ValidatedAudio { bytes, format })
    }

    /// Validates, stages and transcribes one clip. The staged file never outlives this call.
    #[tracing::instrument(skip(self, clip), fields(file_name = %clip.file_name, mime_type = %clip.mime_type))]
    pub async fn transcribe(&self, clip: &AudioClip) -> Result<Transcript, PipelineError> {
        let audio = Self::validate(clip)?;

        let staged = TempAudioFile::create(&self.scratch_dir, &clip.file_name, &audio.bytes)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to stage audio file");
                PipelineError::transcription(format!("Failed to stage audio file: {}", e))
            })?;

        tracing::info!(
            path = %staged.path().display(),
            bytes = audio.bytes.len(),
            format = %audio.format,
            "Audio file saved"
        );

        let upload = AudioUpload {
            path: staged.path(),
            file_name: staged.file_name(),
            mime_type: &clip.mime_type,
        };

        let text = self.engine.transcribe(upload).await.map_err(|e| {
            tracing::error!(error = %e, "Transcription provider call failed");
            PipelineError::transcription(e.to_string())
        })?;

        Transcript::new(text).ok_or_else(|| {
            tracing::warn!("Received empty transcription");
            PipelineError::transcription(NO_SPEECH_DETECTED)
        })
    }
}
