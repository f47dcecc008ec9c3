//! End-to-end generation tests: request in, WAV bytes out.
//!
//! Every WAV produced here is checked with the chunk-walking validator from
//! `voxwave_tests::format_validators`, independently of the backend's own
//! header parser.

use pretty_assertions::assert_eq;
use voxwave_backend_audio::{generate, generate_placeholder, parse_header, AudioError};
use voxwave_spec::{ErrorCode, SynthesisRequest, VoiceParameters, SAMPLE_RATE};
use voxwave_tests::validate_wav;

fn words(n: usize) -> String {
    vec!["word"; n].join(" ")
}

#[test]
fn hello_world_neutral_voice() {
    let request = SynthesisRequest::new("Hello world");
    let result = generate(&request).unwrap();

    assert_eq!(result.duration_seconds, 2);
    assert_eq!(result.wav.wav_data.len(), 176_444);

    let info = validate_wav(&result.wav.wav_data).unwrap();
    assert_eq!(info.channels, 1);
    assert_eq!(info.sample_rate, SAMPLE_RATE);
    assert_eq!(info.bits_per_sample, 16);
    assert_eq!(info.num_samples, 88_200);
    assert_eq!(info.data_size, 176_400);
    assert_eq!(info.riff_size, 176_436);
}

#[test]
fn both_parsers_agree() {
    let request = SynthesisRequest::new("Parsers should agree on every field").with_seed(11);
    let wav = generate(&request).unwrap().wav.wav_data;

    let info = validate_wav(&wav).unwrap();
    let header = parse_header(&wav).unwrap();

    assert_eq!(header.chunk_size, info.riff_size);
    assert_eq!(header.data_size as usize, info.data_size);
    assert_eq!(header.byte_rate, info.byte_rate);
    assert_eq!(header.block_align, info.block_align);
    assert_eq!(header.num_samples(), info.num_samples);
}

#[test]
fn duration_grows_with_word_count() {
    // 155 words at rate 1 is one minute
    let result = generate_placeholder(&SynthesisRequest::new(words(155))).unwrap();
    assert_eq!(result.duration_seconds, 60);

    let result = generate_placeholder(&SynthesisRequest::new(words(156))).unwrap();
    assert_eq!(result.duration_seconds, 61);
}

#[test]
fn faster_rate_shortens_audio() {
    let text = words(40);
    let slow = generate_placeholder(
        &SynthesisRequest::new(text.clone()).with_voice(VoiceParameters::new(0.5, 1.0, 1.0)),
    )
    .unwrap();
    let fast = generate_placeholder(
        &SynthesisRequest::new(text).with_voice(VoiceParameters::new(2.0, 1.0, 1.0)),
    )
    .unwrap();

    // 40 / 77.5 * 60 = 30.97 -> 31, 40 / 310 * 60 = 7.74 -> 8
    assert_eq!(slow.duration_seconds, 31);
    assert_eq!(fast.duration_seconds, 8);
}

#[test]
fn long_vowel_text_at_slowest_rate_does_not_overflow() {
    let text = "a".repeat(5000);
    let request = SynthesisRequest::new(text).with_voice(VoiceParameters::new(0.1, 1.0, 1.0));

    // One word at 15.5 wpm = 3.87 s -> 4 s
    let result = generate(&request).unwrap();
    assert_eq!(result.duration_seconds, 4);
    let info = validate_wav(&result.wav.wav_data).unwrap();
    assert_eq!(info.num_samples, 4 * 44_100);
}

#[test]
fn envelope_starts_and_ends_silent() {
    let request = SynthesisRequest::new("aeiou").with_seed(0);
    let wav = generate(&request).unwrap().wav.wav_data;
    let info = validate_wav(&wav).unwrap();
    let samples = info.samples_i16(&wav);

    assert_eq!(samples[0], 0);
    assert!(samples.iter().any(|&s| s != 0));
    // The last sample sits one sample period before the end of the fade
    assert!(samples[samples.len() - 1].abs() < 10);
}

#[test]
fn whitespace_only_regions_are_silent() {
    // Four characters over 88200 samples: 'a', ' ', ' ', 'z' get a quarter each
    let request = SynthesisRequest::new("a  z").with_seed(8);
    let wav = generate(&request).unwrap().wav.wav_data;
    let info = validate_wav(&wav).unwrap();
    let samples = info.samples_i16(&wav);
    assert_eq!(samples.len(), 88_200);

    assert!(samples[..22_050].iter().any(|&s| s != 0));
    assert!(samples[22_050..66_150].iter().all(|&s| s == 0));
    assert!(samples[66_150..].iter().any(|&s| s != 0));
}

#[test]
fn zero_volume_is_silent() {
    let request = SynthesisRequest::new("Loud consonants!")
        .with_voice(VoiceParameters::new(1.0, 1.0, 0.0))
        .with_seed(5);
    let wav = generate(&request).unwrap().wav.wav_data;
    let info = validate_wav(&wav).unwrap();
    assert!(info.samples_i16(&wav).iter().all(|&s| s == 0));
}

#[test]
fn invalid_text_is_rejected_with_codes() {
    let cases = [
        (SynthesisRequest::from_json("{}").unwrap(), ErrorCode::MissingText),
        (SynthesisRequest::new(""), ErrorCode::EmptyText),
        (SynthesisRequest::new(" \t\n"), ErrorCode::EmptyText),
        (SynthesisRequest::new("x".repeat(5001)), ErrorCode::TextTooLong),
    ];

    for (request, expected) in cases {
        match generate(&request) {
            Err(AudioError::InvalidInput(e)) => assert_eq!(e.code, expected),
            other => panic!("expected {:?}, got {:?}", expected, other.map(|r| r.duration_seconds)),
        }
    }
}

#[test]
fn text_at_limit_after_trim_is_accepted() {
    let text = format!("   {}   ", "b".repeat(5000));
    assert!(generate_placeholder(&SynthesisRequest::new(text)).is_ok());
}

#[test]
fn request_from_json_file_form() {
    let json = r#"{
        "text": "Good morning",
        "voice": { "rate": 1.2, "pitch": 0.8, "volume": 0.5, "voice_name": "Karen" },
        "seed": 2024
    }"#;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("morning.json");
    std::fs::write(&path, json).unwrap();

    let request = SynthesisRequest::from_file(&path).unwrap();
    let result = generate(&request).unwrap();

    assert_eq!(result.voice_name(), Some("Karen"));
    assert_eq!(result.voice.rate, 1.2);
    validate_wav(&result.wav.wav_data).unwrap();
}
