//! Canonical 44-byte WAV header parsing.

use crate::error::{AudioError, AudioResult};

use super::format::HEADER_SIZE;

/// Fields of a canonical PCM WAV header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// RIFF chunk size (file size minus 8).
    pub chunk_size: u32,
    /// fmt chunk size (16 for PCM).
    pub fmt_size: u32,
    /// Audio format code (1 = PCM).
    pub audio_format: u16,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes per second.
    pub byte_rate: u32,
    /// Bytes per sample frame.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// data chunk size in bytes.
    pub data_size: u32,
}

fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn expect_tag(data: &[u8], offset: usize, tag: &[u8; 4]) -> AudioResult<()> {
    if &data[offset..offset + 4] != tag {
        return Err(AudioError::invalid_container(
            offset,
            format!(
                "expected '{}', got {:?}",
                String::from_utf8_lossy(tag),
                &data[offset..offset + 4]
            ),
        ));
    }
    Ok(())
}

/// Parses the canonical 44-byte header at the start of `data`.
///
/// Only the layout produced by [`write_wav`](super::write_wav) is accepted:
/// `RIFF`, `WAVE`, a 16-byte `fmt ` chunk and a `data` chunk at offset 36.
pub fn parse_header(data: &[u8]) -> AudioResult<WavHeader> {
    if data.len() < HEADER_SIZE {
        return Err(AudioError::invalid_container(
            0,
            format!(
                "file too short: {} bytes (minimum {} required)",
                data.len(),
                HEADER_SIZE
            ),
        ));
    }

    expect_tag(data, 0, b"RIFF")?;
    expect_tag(data, 8, b"WAVE")?;
    expect_tag(data, 12, b"fmt ")?;
    expect_tag(data, 36, b"data")?;

    Ok(WavHeader {
        chunk_size: read_u32(data, 4),
        fmt_size: read_u32(data, 16),
        audio_format: read_u16(data, 20),
        channels: read_u16(data, 22),
        sample_rate: read_u32(data, 24),
        byte_rate: read_u32(data, 28),
        block_align: read_u16(data, 32),
        bits_per_sample: read_u16(data, 34),
        data_size: read_u32(data, 40),
    })
}

impl WavHeader {
    /// Number of sample frames described by the data chunk.
    pub fn num_samples(&self) -> usize {
        if self.block_align == 0 {
            return 0;
        }
        self.data_size as usize / self.block_align as usize
    }

    /// Duration in seconds described by the data chunk.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_samples() as f64 / self.sample_rate as f64
    }

    /// Checks the header against the total byte length of the file.
    ///
    /// The RIFF chunk size must equal `total_len - 8`, the data chunk size
    /// must equal `total_len - 44`, and the derived fmt fields must agree with
    /// the channel count and bit depth.
    pub fn verify_sizes(&self, total_len: usize) -> AudioResult<()> {
        let expected_chunk = total_len.saturating_sub(8);
        if self.chunk_size as usize != expected_chunk {
            return Err(AudioError::invalid_container(
                4,
                format!(
                    "RIFF chunk size {} does not match file length (expected {})",
                    self.chunk_size, expected_chunk
                ),
            ));
        }

        let expected_data = total_len.saturating_sub(HEADER_SIZE);
        if self.data_size as usize != expected_data {
            return Err(AudioError::invalid_container(
                40,
                format!(
                    "data chunk size {} does not match payload length (expected {})",
                    self.data_size, expected_data
                ),
            ));
        }

        let expected_align = self.channels as u32 * (self.bits_per_sample as u32 / 8);
        if self.block_align as u32 != expected_align {
            return Err(AudioError::invalid_container(
                32,
                format!(
                    "block align {} does not match channels and bit depth (expected {})",
                    self.block_align, expected_align
                ),
            ));
        }

        let expected_rate = self.sample_rate as u64 * expected_align as u64;
        if self.byte_rate as u64 != expected_rate {
            return Err(AudioError::invalid_container(
                28,
                format!(
                    "byte rate {} does not match sample rate and block align (expected {})",
                    self.byte_rate, expected_rate
                ),
            ));
        }

        Ok(())
    }
}
