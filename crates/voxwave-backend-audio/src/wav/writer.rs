//! Core WAV writing and PCM conversion functions.

use std::io::{self, Write};

use super::format::{WavFormat, HEADER_SIZE};

/// Checks that a payload of `data_len` bytes fits the 32-bit RIFF size fields
/// and returns the data chunk size.
pub fn data_chunk_size(data_len: usize) -> io::Result<u32> {
    u32::try_from(data_len)
        .ok()
        .filter(|size| size.checked_add(HEADER_SIZE as u32 - 8).is_some())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("PCM payload of {} bytes exceeds WAV size limit", data_len),
            )
        })
}

/// Writes the 44-byte header for a payload of `data_len` bytes.
///
/// The RIFF chunk size and data chunk size are both derived from `data_len`,
/// so the caller must follow the header with exactly that many bytes.
pub fn write_header<W: Write>(writer: &mut W, format: &WavFormat, data_len: usize) -> io::Result<()> {
    let data_size = data_chunk_size(data_len)?;
    let file_size = (HEADER_SIZE as u32 - 8) + data_size; // Total file size minus RIFF id and size

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;

    Ok(())
}

/// Writes a complete WAV file to a writer.
///
/// A payload too large for the 32-bit size fields is refused.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    write_header(writer, format, pcm_data.len())?;
    writer.write_all(pcm_data)
}

/// Quantizes one normalized sample to 16-bit signed PCM.
///
/// Computes `round(sample * 32767)` and clamps to the i16 range, so overshoot
/// saturates instead of wrapping. NaN quantizes to 0.
pub fn quantize_sample(sample: f64) -> i16 {
    (sample * 32767.0).round().clamp(-32768.0, 32767.0) as i16
}
