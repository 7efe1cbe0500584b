//! Audio file loading.
//!
//! WAV files are decoded natively; compressed containers are delegated to
//! an external ffmpeg step that emits mono PCM at the engine's sample
//! rate. Both paths normalize into the same [`AudioBuffer`]
//! representation.

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
    process::Command,
};

use crate::error::LoadError;

/// Full scale of a 16-bit PCM sample, used to normalize into [-1, 1].
const PCM16_FULL_SCALE: f32 = 32_768.0;

/// Immutable mono sample buffer produced by [`load`].
#[derive(Debug, Clone, Default)]
pub struct AudioBuffer {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl AudioBuffer {
    /// Wraps already-normalized mono samples.
    pub fn from_samples(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// An empty buffer for overlay-only operation.
    pub fn silent(sample_rate: u32) -> Self {
        Self::from_samples(Vec::new(), sample_rate)
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Buffer length in seconds.
    pub fn duration_seconds(&self) -> f32 {
        if self.sample_rate == 0 {
            0.0
        } else {
            self.samples.len() as f32 / self.sample_rate as f32
        }
    }
}

/// Container family a path maps to, one variant per decode capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerFormat {
    /// PCM WAV, decoded natively.
    Wav,
    /// Compressed container (mp3, m4a or ogg), handed to the external
    /// decode step.
    Compressed,
}

impl ContainerFormat {
    /// Picks the decode capability for a path by its extension,
    /// case-insensitively.
    pub fn for_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "wav" => Ok(Self::Wav),
            "mp3" | "m4a" | "ogg" => Ok(Self::Compressed),
            _ => Err(LoadError::UnsupportedExtension(extension)),
        }
    }
}

/// Decodes `path` into a normalized mono buffer.
///
/// Compressed containers are resampled to `sample_rate` by the external
/// decoder; WAV input keeps the rate recorded in its header.
pub fn load(path: &Path, sample_rate: u32) -> Result<AudioBuffer, LoadError> {
    match ContainerFormat::for_path(path)? {
        ContainerFormat::Wav => {
            let file = File::open(path)?;
            decode_wav(BufReader::new(file))
        }
        ContainerFormat::Compressed => {
            let samples = decode_via_ffmpeg(path, sample_rate)?;
            Ok(AudioBuffer::from_samples(samples, sample_rate))
        }
    }
}

/// Decodes 16-bit PCM WAV from any reader, averaging multi-channel frames
/// down to mono.
pub fn decode_wav<R: Read>(reader: R) -> Result<AudioBuffer, LoadError> {
    let mut wav = hound::WavReader::new(reader)
        .map_err(|err| LoadError::DecodeFailure(err.to_string()))?;
    let spec = wav.spec();
    if spec.sample_format != hound::SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(LoadError::DecodeFailure(format!(
            "expected 16-bit PCM, found {}-bit {:?}",
            spec.bits_per_sample, spec.sample_format
        )));
    }

    let channels = spec.channels.max(1) as usize;
    let mut samples = Vec::with_capacity(wav.len() as usize / channels);
    let mut frame_sum = 0.0f32;
    let mut frame_fill = 0usize;
    for sample in wav.samples::<i16>() {
        let sample = sample.map_err(|err| LoadError::DecodeFailure(err.to_string()))?;
        frame_sum += sample as f32;
        frame_fill += 1;
        if frame_fill == channels {
            samples.push(frame_sum / channels as f32 / PCM16_FULL_SCALE);
            frame_sum = 0.0;
            frame_fill = 0;
        }
    }

    Ok(AudioBuffer::from_samples(samples, spec.sample_rate))
}

/// External decode step for compressed containers: ffmpeg emits raw
/// signed 16-bit little-endian mono PCM at `sample_rate` on stdout.
fn decode_via_ffmpeg(path: &Path, sample_rate: u32) -> Result<Vec<f32>, LoadError> {
    let output = Command::new("ffmpeg")
        .args(["-v", "error", "-i"])
        .arg(path)
        .args(["-f", "s16le", "-acodec", "pcm_s16le", "-ac", "1", "-ar"])
        .arg(sample_rate.to_string())
        .arg("-")
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(LoadError::DecodeFailure(format!(
            "ffmpeg exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    Ok(output
        .stdout
        .chunks_exact(2)
        .map(|bytes| i16::from_le_bytes([bytes[0], bytes[1]]) as f32 / PCM16_FULL_SCALE)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn wav_bytes(channels: u16, samples: &[i16]) -> Vec<u8> {
        let spec = hound::WavSpec {
            channels,
            sample_rate: 44_100,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
            for &sample in samples {
                writer.write_sample(sample).unwrap();
            }
            writer.finalize().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn decodes_mono_pcm16_and_normalizes() {
        let bytes = wav_bytes(1, &[0, 16_384, -32_768, 32_767]);
        let buffer = decode_wav(Cursor::new(bytes)).unwrap();

        assert_eq!(buffer.len(), 4);
        assert_eq!(buffer.sample_rate(), 44_100);
        assert!((buffer.samples()[1] - 0.5).abs() < 1e-4);
        assert!(buffer.samples().iter().all(|s| (-1.0..=1.0).contains(s)));
    }

    #[test]
    fn downmixes_stereo_by_averaging_frames() {
        let bytes = wav_bytes(2, &[16_384, -16_384, 16_384, 16_384]);
        let buffer = decode_wav(Cursor::new(bytes)).unwrap();

        assert_eq!(buffer.len(), 2);
        assert!(buffer.samples()[0].abs() < 1e-6);
        assert!((buffer.samples()[1] - 0.5).abs() < 1e-4);
    }

    #[test]
    fn rejects_non_pcm16_wav() {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 44_100,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
            writer.write_sample(0.25f32).unwrap();
            writer.finalize().unwrap();
        }

        let err = decode_wav(Cursor::new(cursor.into_inner())).unwrap_err();
        assert!(matches!(err, LoadError::DecodeFailure(_)));
    }

    #[test]
    fn routes_known_extensions_case_insensitively() {
        assert_eq!(
            ContainerFormat::for_path(Path::new("track.WAV")).unwrap(),
            ContainerFormat::Wav
        );
        assert_eq!(
            ContainerFormat::for_path(Path::new("track.Mp3")).unwrap(),
            ContainerFormat::Compressed
        );
        assert_eq!(
            ContainerFormat::for_path(Path::new("track.ogg")).unwrap(),
            ContainerFormat::Compressed
        );
    }

    #[test]
    fn rejects_unknown_extensions() {
        let err = ContainerFormat::for_path(Path::new("track.xyz")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedExtension(ext) if ext == "xyz"));
    }

    #[test]
    fn missing_wav_file_surfaces_as_io_failure() {
        let err = load(Path::new("definitely-not-here.wav"), 44_100).unwrap_err();
        assert!(matches!(err, LoadError::IoFailure(_)));
    }

    #[test]
    fn silent_buffer_reports_zero_duration() {
        let buffer = AudioBuffer::silent(44_100);
        assert!(buffer.is_empty());
        assert_eq!(buffer.duration_seconds(), 0.0);
    }
}
