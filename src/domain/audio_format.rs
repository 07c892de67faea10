use std::fmt;

/// Upper bound on a decoded audio clip, matching the speech provider's limit.
pub const MAX_AUDIO_BYTES: usize = 25 * 1024 * 1024;

/// Container formats accepted by the speech-to-text provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    Mp3,
    Mp4,
    Mpeg,
    Mpga,
    M4a,
    Wav,
    Webm,
}

impl AudioFormat {
    pub const SUPPORTED: [AudioFormat; 7] = [
        AudioFormat::Mp3,
        AudioFormat::Mp4,
        AudioFormat::Mpeg,
        AudioFormat::Mpga,
        AudioFormat::M4a,
        AudioFormat::Wav,
        AudioFormat::Webm,
    ];

    /// Resolves the format from the lower-cased text after the last `.` of a file name.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let extension = file_name.rsplit('.').next()?.to_lowercase();
        Self::SUPPORTED
            .into_iter()
            .find(|format| format.extension() == extension)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Mp4 => "mp4",
            AudioFormat::Mpeg => "mpeg",
            AudioFormat::Mpga => "mpga",
            AudioFormat::M4a => "m4a",
            AudioFormat::Wav => "wav",
            AudioFormat::Webm => "webm",
        }
    }

    pub fn supported_extensions() -> Vec<&'static str> {
        Self::SUPPORTED.iter().map(AudioFormat::extension).collect()
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}
