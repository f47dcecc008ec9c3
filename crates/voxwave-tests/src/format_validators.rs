//! Binary format validators for test infrastructure.
//!
//! The validator here walks RIFF chunks generically instead of assuming the
//! canonical 44-byte layout, so it cross-checks the encoder rather than
//! mirroring it.

use std::fmt;

/// Error type for format validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    /// The format being validated.
    pub format: &'static str,
    /// Description of what went wrong.
    pub message: String,
    /// Byte offset where the error occurred, if applicable.
    pub offset: Option<usize>,
}

impl FormatError {
    /// Create a new format error.
    pub fn new(format: &'static str, message: impl Into<String>) -> Self {
        Self {
            format,
            message: message.into(),
            offset: None,
        }
    }

    /// Create a format error with a byte offset.
    pub fn at_offset(format: &'static str, message: impl Into<String>, offset: usize) -> Self {
        Self {
            format,
            message: message.into(),
            offset: Some(offset),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(offset) = self.offset {
            write!(
                f,
                "{} error at offset {}: {}",
                self.format, offset, self.message
            )
        } else {
            write!(f, "{} error: {}", self.format, self.message)
        }
    }
}

impl std::error::Error for FormatError {}

/// Information extracted from a WAV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavInfo {
    /// Number of audio channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Total number of sample frames.
    pub num_samples: usize,
    /// Audio format code (1 = PCM).
    pub audio_format: u16,
    /// Byte rate declared in the fmt chunk.
    pub byte_rate: u32,
    /// Block alignment declared in the fmt chunk.
    pub block_align: u16,
    /// RIFF chunk size declared at offset 4.
    pub riff_size: u32,
    /// Offset of the first PCM byte.
    pub data_offset: usize,
    /// data chunk size.
    pub data_size: usize,
}

impl WavInfo {
    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_samples as f64 / self.sample_rate as f64
    }

    /// The PCM payload of `data`.
    pub fn pcm<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        &data[self.data_offset..self.data_offset + self.data_size]
    }

    /// Decodes the payload as little-endian signed 16-bit samples.
    pub fn samples_i16(&self, data: &[u8]) -> Vec<i16> {
        self.pcm(data)
            .chunks_exact(2)
            .map(|b| i16::from_le_bytes([b[0], b[1]]))
            .collect()
    }
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

/// Validate WAV file format and extract header information.
///
/// Checks:
/// - RIFF chunk identifier and a RIFF size equal to the file length minus 8
/// - WAVE format identifier
/// - fmt sub-chunk with internally consistent byte rate and block align
/// - data sub-chunk that fits inside the file
pub fn validate_wav(data: &[u8]) -> Result<WavInfo, FormatError> {
    const MIN_HEADER_SIZE: usize = 44;

    if data.len() < MIN_HEADER_SIZE {
        return Err(FormatError::new(
            "WAV",
            format!(
                "File too short: {} bytes (minimum {} required)",
                data.len(),
                MIN_HEADER_SIZE
            ),
        ));
    }

    if &data[0..4] != b"RIFF" {
        return Err(FormatError::at_offset(
            "WAV",
            format!(
                "Invalid RIFF header: expected 'RIFF', got {:?}",
                &data[0..4]
            ),
            0,
        ));
    }

    let riff_size = read_u32(data, 4);
    if riff_size as usize != data.len() - 8 {
        return Err(FormatError::at_offset(
            "WAV",
            format!(
                "RIFF size {} does not match file length {} - 8",
                riff_size,
                data.len()
            ),
            4,
        ));
    }

    if &data[8..12] != b"WAVE" {
        return Err(FormatError::at_offset(
            "WAV",
            format!(
                "Invalid WAVE format: expected 'WAVE', got {:?}",
                &data[8..12]
            ),
            8,
        ));
    }

    let mut offset = 12;
    let mut fmt: Option<(u16, u16, u32, u32, u16, u16)> = None;

    while offset + 8 <= data.len() {
        let chunk_id = &data[offset..offset + 4];
        let chunk_size = read_u32(data, offset + 4) as usize;
        let body = offset + 8;

        if chunk_id == b"fmt " {
            if chunk_size < 16 || body + 16 > data.len() {
                return Err(FormatError::at_offset("WAV", "Truncated fmt chunk", offset));
            }
            fmt = Some((
                read_u16(data, body),
                read_u16(data, body + 2),
                read_u32(data, body + 4),
                read_u32(data, body + 8),
                read_u16(data, body + 12),
                read_u16(data, body + 14),
            ));
        }

        if chunk_id == b"data" {
            let Some((audio_format, channels, sample_rate, byte_rate, block_align, bits)) = fmt
            else {
                return Err(FormatError::at_offset(
                    "WAV",
                    "data chunk found before fmt chunk",
                    offset,
                ));
            };

            let expected_align = channels as u32 * bits as u32 / 8;
            if block_align as u32 != expected_align || byte_rate != sample_rate * expected_align {
                return Err(FormatError::new(
                    "WAV",
                    format!(
                        "Inconsistent fmt chunk: block_align {}, byte_rate {}",
                        block_align, byte_rate
                    ),
                ));
            }

            if body + chunk_size > data.len() {
                return Err(FormatError::at_offset(
                    "WAV",
                    format!(
                        "data chunk of {} bytes runs past end of file ({} bytes)",
                        chunk_size,
                        data.len()
                    ),
                    offset,
                ));
            }

            let num_samples = if block_align > 0 {
                chunk_size / block_align as usize
            } else {
                0
            };

            return Ok(WavInfo {
                channels,
                sample_rate,
                bits_per_sample: bits,
                num_samples,
                audio_format,
                byte_rate,
                block_align,
                riff_size,
                data_offset: body,
                data_size: chunk_size,
            });
        }

        // Chunks are word-aligned
        offset = body + ((chunk_size + 1) & !1);
    }

    if fmt.is_none() {
        return Err(FormatError::new("WAV", "Missing fmt chunk"));
    }

    Err(FormatError::new("WAV", "Missing data chunk"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxwave_backend_audio::WavResult;

    fn encoded(samples: &[i16]) -> Vec<u8> {
        WavResult::from_mono(samples, 44100).unwrap().wav_data
    }

    #[test]
    fn test_validate_wav_valid_mono() {
        let wav = encoded(&[0; 100]);
        let info = validate_wav(&wav).expect("Should parse valid WAV");

        assert_eq!(info.channels, 1);
        assert_eq!(info.sample_rate, 44100);
        assert_eq!(info.bits_per_sample, 16);
        assert_eq!(info.audio_format, 1);
        assert_eq!(info.num_samples, 100);
        assert_eq!(info.data_offset, 44);
        assert_eq!(info.riff_size as usize, wav.len() - 8);
    }

    #[test]
    fn test_samples_round_trip() {
        let samples = [1i16, -1, 32767, -32768, 0];
        let wav = encoded(&samples);
        let info = validate_wav(&wav).unwrap();
        assert_eq!(info.samples_i16(&wav), samples.to_vec());
    }

    #[test]
    fn test_skips_unknown_chunks() {
        let wav = encoded(&[7; 4]);
        // Splice a LIST chunk between fmt and data
        let mut spliced = wav[..36].to_vec();
        spliced.extend_from_slice(b"LIST");
        spliced.extend_from_slice(&3u32.to_le_bytes());
        spliced.extend_from_slice(&[0, 0, 0, 0]);
        spliced.extend_from_slice(&wav[36..]);
        let riff = (spliced.len() - 8) as u32;
        spliced[4..8].copy_from_slice(&riff.to_le_bytes());

        let info = validate_wav(&spliced).unwrap();
        assert_eq!(info.data_offset, 56);
        assert_eq!(info.samples_i16(&spliced), vec![7; 4]);
    }

    #[test]
    fn test_validate_wav_too_short() {
        let err = validate_wav(&[0u8; 10]).unwrap_err();
        assert_eq!(err.format, "WAV");
        assert!(err.message.contains("too short"));
    }

    #[test]
    fn test_validate_wav_invalid_riff() {
        let mut wav = encoded(&[0; 10]);
        wav[0..4].copy_from_slice(b"XXXX");
        assert!(validate_wav(&wav).unwrap_err().message.contains("RIFF"));
    }

    #[test]
    fn test_validate_wav_invalid_wave() {
        let mut wav = encoded(&[0; 10]);
        wav[8..12].copy_from_slice(b"XXXX");
        assert!(validate_wav(&wav).unwrap_err().message.contains("WAVE"));
    }

    #[test]
    fn test_validate_wav_truncated() {
        let wav = encoded(&[0; 10]);
        let err = validate_wav(&wav[..wav.len() - 2]).unwrap_err();
        assert_eq!(err.offset, Some(4));
    }
}
