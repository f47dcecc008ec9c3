//! PCM payload access and hashing.

use super::format::HEADER_SIZE;
use super::header::parse_header;

/// Returns the PCM payload of a canonical WAV file.
///
/// The header must parse and the data chunk it declares must lie entirely
/// inside `wav_data`. Trailing bytes after the declared payload are ignored.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    let header = parse_header(wav_data).ok()?;
    let end = HEADER_SIZE.checked_add(header.data_size as usize)?;
    wav_data.get(HEADER_SIZE..end)
}

/// Computes the BLAKE3 hash of a PCM payload as lowercase hex.
pub fn hash_pcm(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}

/// Hash of the PCM payload of a WAV file, or None if the header is invalid.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(hash_pcm)
}
