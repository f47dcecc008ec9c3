//! WAV container encoder.
//!
//! Writes 16-bit PCM RIFF/WAVE files with a fixed 44-byte header and no
//! variable metadata, and parses that header back for verification. The
//! hash of the PCM payload identifies a rendering independently of the header.

mod format;
mod header;
mod pcm;
mod result;
mod writer;


pub use format::{WavFormat, HEADER_SIZE};
pub use header::{parse_header, WavHeader};
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::WavResult;
pub use writer::{data_chunk_size, quantize_sample, write_header, write_wav};
