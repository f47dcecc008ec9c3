//! WAV file generation result type.

use std::io;

use crate::error::{AudioError, AudioResult};

use super::format::{WavFormat, HEADER_SIZE};
use super::pcm::hash_pcm;
use super::writer::{data_chunk_size, write_header};

/// An encoded WAV file and its identifying metadata.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes mono 16-bit samples.
    pub fn from_mono(samples: &[i16], sample_rate: u32) -> AudioResult<Self> {
        Self::from_samples(sample_rate, samples.len(), samples.iter().copied())
    }

    /// Encodes `num_samples` mono samples pulled from `samples`.
    ///
    /// The header and the little-endian samples go into a single buffer
    /// allocated at its final size, so a rendering never holds a second
    /// full-length copy of its audio. The iterator must yield exactly
    /// `num_samples` values.
    pub fn from_samples<I>(sample_rate: u32, num_samples: usize, samples: I) -> AudioResult<Self>
    where
        I: IntoIterator<Item = i16>,
    {
        if sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate { rate: sample_rate });
        }

        let format = WavFormat::mono(sample_rate);
        let data_len = num_samples
            .checked_mul(format.block_align() as usize)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{} samples exceed WAV size limit", num_samples),
                )
            })?;
        data_chunk_size(data_len)?;

        let mut wav_data = Vec::with_capacity(HEADER_SIZE + data_len);
        write_header(&mut wav_data, &format, data_len)?;
        for sample in samples.into_iter().take(num_samples) {
            wav_data.extend_from_slice(&sample.to_le_bytes());
        }

        let written = (wav_data.len() - HEADER_SIZE) / 2;
        if written != num_samples {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("expected {} samples, got {}", num_samples, written),
            )
            .into());
        }

        let pcm_hash = hash_pcm(&wav_data[HEADER_SIZE..]);
        Ok(Self {
            wav_data,
            pcm_hash,
            sample_rate,
            num_samples,
        })
    }

    /// The PCM payload following the header.
    pub fn pcm(&self) -> &[u8] {
        &self.wav_data[HEADER_SIZE..]
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }

    /// Total length of the encoded file in bytes.
    pub fn len(&self) -> usize {
        self.wav_data.len()
    }

    /// Returns true if the encoded file is empty (never the case for a
    /// successfully encoded result).
    pub fn is_empty(&self) -> bool {
        self.wav_data.is_empty()
    }
}
