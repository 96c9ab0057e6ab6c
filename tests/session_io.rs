//! End-to-end tests for the session adapter: file input, validation and
//! saving the result.

use std::fs;

use railfence::config::{Config, Operation};
use railfence::session::{run, Source};
use railfence::SessionError;
use tempfile::TempDir;

const PLAIN: &str = "WEAREDISCOVEREDFLEEATONCE";
const CIPHER_3: &str = "WECRLTEERDSOEEFEAOCAIVDEN";

#[test]
fn encode_file_and_save() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("message.txt");
    fs::write(&input, PLAIN).unwrap();

    let config = Config::new(Operation::Encode);
    let outcome = run(&config, &Source::File(input)).unwrap();
    assert_eq!(outcome.input, PLAIN);
    assert_eq!(outcome.output, CIPHER_3);

    let saved = outcome.save(dir.path()).unwrap();
    assert_eq!(saved, dir.path().join("ciphertext.txt"));
    assert_eq!(fs::read_to_string(saved).unwrap(), CIPHER_3);
}

#[test]
fn decode_saved_ciphertext() {
    let dir = TempDir::new().unwrap();
    let encoded = run(
        &Config::new(Operation::Encode)
            .with_rails(5)
            .with_output_name("secret.txt"),
        &Source::Inline("Meet me at the old mill\nat dawn.".to_string()),
    )
    .unwrap();
    let path = encoded.save(dir.path()).unwrap();

    let decoded = run(
        &Config::new(Operation::Decode).with_rails(5),
        &Source::File(path),
    )
    .unwrap();
    assert_eq!(decoded.output, "Meet me at the old mill\nat dawn.");
    assert_eq!(decoded.output_name, "plaintext.txt");
}

#[test]
fn non_utf8_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("binary.txt");
    fs::write(&input, [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let result = run(&Config::new(Operation::Encode), &Source::File(input.clone()));
    match result {
        Err(SessionError::Read { path, .. }) => assert_eq!(path, input),
        other => panic!("expected read error, got {:?}", other),
    }
}

#[test]
fn blank_output_name_rejected() {
    let config = Config::new(Operation::Encode).with_output_name("   ");
    assert_eq!(
        run(&config, &Source::Inline(PLAIN.to_string())),
        Err(SessionError::BlankOutputName)
    );
}

#[test]
fn rails_above_front_end_limit_rejected() {
    let config = Config::new(Operation::Decode).with_rails(101);
    assert_eq!(
        run(&config, &Source::Inline(CIPHER_3.to_string())),
        Err(SessionError::RailsOutOfRange {
            rails: 101,
            min: 2,
            max: 100
        })
    );
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let outcome = run(
        &Config::new(Operation::Encode),
        &Source::Inline(PLAIN.to_string()),
    )
    .unwrap();
    let missing = dir.path().join("does").join("not").join("exist");
    match outcome.save(&missing) {
        Err(SessionError::Write { path, .. }) => {
            assert_eq!(path, missing.join("ciphertext.txt"))
        }
        other => panic!("expected write error, got {:?}", other),
    }
}

#[test]
fn grid_text_shows_every_reached_rail() {
    let outcome = run(
        &Config::new(Operation::Encode).with_rails(4),
        &Source::Inline(PLAIN.to_string()),
    )
    .unwrap();
    let grid = outcome.grid_text.unwrap();
    // Title, underline, then one line per rail.
    assert_eq!(grid.lines().count(), 2 + 4);
    assert!(grid.lines().nth(2).unwrap().starts_with("W . . . . . I"));
}
