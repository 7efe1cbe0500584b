//! Spectral analysis of sample chunks.
//!
//! Spectrum and Equalizer modes consume the same transform through two
//! deliberately different policies: compressed magnitudes picked by index
//! decimation for the 64 spectrum bars, and raw magnitudes averaged over
//! contiguous ranges for the 32 equalizer bands. The asymmetry is part of
//! each mode's visual character and is kept as-is.

use std::{fmt, sync::Arc};

use realfft::{num_complex::Complex32, RealFftPlanner, RealToComplex};

use crate::Result;

/// Number of bars rendered in Spectrum mode.
pub const SPECTRUM_BARS: usize = 64;
/// Number of bands rendered in Equalizer mode.
pub const EQUALIZER_BANDS: usize = 32;

/// Real-input FFT front end with a cached per-size plan and buffers.
///
/// Chunk lengths vary at the buffer tail; the cached resources are
/// rebuilt whenever the length changes and reused otherwise.
pub struct SpectralAnalyzer {
    planner: RealFftPlanner<f32>,
    fft: Option<FftResources>,
}

impl SpectralAnalyzer {
    pub fn new() -> Self {
        Self {
            planner: RealFftPlanner::new(),
            fft: None,
        }
    }

    /// Transforms a chunk into non-negative magnitudes, one per real FFT
    /// bin. Chunks shorter than two samples produce an empty vector
    /// rather than an error.
    pub fn magnitudes(&mut self, chunk: &[f32]) -> Result<Vec<f32>> {
        if chunk.len() < 2 {
            return Ok(Vec::new());
        }

        let fft = self.prepare(chunk.len());
        fft.input.copy_from_slice(chunk);
        fft.plan
            .process_with_scratch(&mut fft.input, &mut fft.spectrum, &mut fft.scratch)?;
        Ok(fft.spectrum.iter().map(|bin| bin.norm()).collect())
    }

    /// Bucketing policy for Spectrum mode: `log10(m + 1)` compression,
    /// then one decimated pick per bar at index `i * len / 64`, clamped
    /// into the valid range. No averaging.
    pub fn spectrum_bars(&mut self, chunk: &[f32]) -> Result<Vec<f32>> {
        let magnitudes = self.magnitudes(chunk)?;
        let compressed: Vec<f32> = magnitudes
            .iter()
            .map(|magnitude| (magnitude + 1.0).log10())
            .collect();

        Ok((0..SPECTRUM_BARS)
            .map(|bar| {
                if compressed.is_empty() {
                    0.0
                } else {
                    let index =
                        (bar * compressed.len() / SPECTRUM_BARS).min(compressed.len() - 1);
                    compressed[index]
                }
            })
            .collect())
    }

    /// Bucketing policy for Equalizer mode: raw magnitudes averaged over
    /// each band's contiguous index range. Empty ranges contribute zero.
    pub fn equalizer_bands(&mut self, chunk: &[f32]) -> Result<Vec<f32>> {
        let magnitudes = self.magnitudes(chunk)?;

        Ok((0..EQUALIZER_BANDS)
            .map(|band| {
                let start = band * magnitudes.len() / EQUALIZER_BANDS;
                let end = (band + 1) * magnitudes.len() / EQUALIZER_BANDS;
                if end > start {
                    magnitudes[start..end].iter().sum::<f32>() / (end - start) as f32
                } else {
                    0.0
                }
            })
            .collect())
    }

    fn prepare(&mut self, size: usize) -> &mut FftResources {
        let rebuild = self
            .fft
            .as_ref()
            .map(|fft| fft.size != size)
            .unwrap_or(true);

        if rebuild {
            let plan = self.planner.plan_fft_forward(size);
            let scratch = plan.make_scratch_vec();
            let spectrum = plan.make_output_vec();
            let input = plan.make_input_vec();
            self.fft = Some(FftResources {
                size,
                plan,
                scratch,
                spectrum,
                input,
            });
        }

        self.fft.as_mut().expect("fft resources were just prepared")
    }
}

impl Default for SpectralAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

struct FftResources {
    size: usize,
    plan: Arc<dyn RealToComplex<f32>>,
    scratch: Vec<Complex32>,
    spectrum: Vec<Complex32>,
    input: Vec<f32>,
}

impl fmt::Debug for SpectralAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpectralAnalyzer")
            .field("fft", &self.fft)
            .finish()
    }
}

impl fmt::Debug for FftResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FftResources")
            .field("size", &self.size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    fn sine_chunk(frequency_hz: f32, sample_rate: f32, len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| (TAU * frequency_hz * i as f32 / sample_rate).sin())
            .collect()
    }

    #[test]
    fn sine_peaks_near_the_expected_bin() {
        let mut analyzer = SpectralAnalyzer::new();
        let chunk = sine_chunk(440.0, 44_100.0, 2048);

        let magnitudes = analyzer.magnitudes(&chunk).unwrap();
        assert_eq!(magnitudes.len(), 2048 / 2 + 1);

        let peak = magnitudes
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(index, _)| index)
            .unwrap();
        // 440 / (44100 / 2048) is roughly bin 20.4
        assert!((19..=21).contains(&peak), "peak landed at bin {peak}");
    }

    #[test]
    fn spectrum_always_yields_64_bars() {
        let mut analyzer = SpectralAnalyzer::new();
        for len in [0, 1, 5, 100, 1337, 2048] {
            let chunk = vec![0.25_f32; len];
            let bars = analyzer.spectrum_bars(&chunk).unwrap();
            assert_eq!(bars.len(), SPECTRUM_BARS, "chunk length {len}");
        }
    }

    #[test]
    fn equalizer_always_yields_32_bands() {
        let mut analyzer = SpectralAnalyzer::new();
        for len in [0, 1, 5, 100, 1337, 2048] {
            let chunk = vec![0.25_f32; len];
            let bands = analyzer.equalizer_bands(&chunk).unwrap();
            assert_eq!(bands.len(), EQUALIZER_BANDS, "chunk length {len}");
        }
    }

    #[test]
    fn zero_chunk_yields_zero_bands() {
        let mut analyzer = SpectralAnalyzer::new();
        let chunk = vec![0.0_f32; 2048];

        let bands = analyzer.equalizer_bands(&chunk).unwrap();
        assert!(bands.iter().all(|band| *band == 0.0));

        // log10(0 + 1) is also zero, so the compressed bars agree.
        let bars = analyzer.spectrum_bars(&chunk).unwrap();
        assert!(bars.iter().all(|bar| *bar == 0.0));
    }

    #[test]
    fn decimation_is_deterministic() {
        let mut analyzer = SpectralAnalyzer::new();
        let chunk = sine_chunk(880.0, 44_100.0, 2048);

        let first = analyzer.spectrum_bars(&chunk).unwrap();
        // A different chunk length in between forces a plan rebuild.
        analyzer.magnitudes(&chunk[..500]).unwrap();
        let second = analyzer.spectrum_bars(&chunk).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn tail_chunks_are_analysed_without_error() {
        let mut analyzer = SpectralAnalyzer::new();
        let chunk = sine_chunk(440.0, 44_100.0, 301);

        let magnitudes = analyzer.magnitudes(&chunk).unwrap();
        assert_eq!(magnitudes.len(), 301 / 2 + 1);
        assert!(magnitudes.iter().all(|magnitude| *magnitude >= 0.0));
    }
}
