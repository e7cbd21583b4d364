use hashbench::{BUFFER_LEN, Buffer, run};

use regex::Regex;

const ZERO_BUFFER_DIGEST: &str = "20492a4d0d84f8beb1767f6616229f85d44c2827b64bdbfb260ee12fa1109e0e";

fn run_to_string() -> String {
    let mut out = Vec::new();
    run(&mut out).unwrap();

    String::from_utf8(out).unwrap()
}

#[test]
fn buffer_len_is_100_mib() {
    assert_eq!(BUFFER_LEN, 104_857_600);
}

#[test]
fn zero_buffer_digest_matches_reference() {
    let buffer = Buffer::zeroed().unwrap();
    let measurement = hashbench::measure(&buffer);

    assert_eq!(measurement.digest.to_hex(), ZERO_BUFFER_DIGEST);
}

#[test]
fn output_line_format() {
    let line = run_to_string();
    let re = Regex::new(r"^[0-9a-f]{64} \(.+\)\n$").unwrap();

    assert!(re.is_match(&line), "unexpected line: {line:?}");
    assert!(line.starts_with(ZERO_BUFFER_DIGEST));
    assert_eq!(line.lines().count(), 1);
}

#[test]
fn elapsed_is_rendered_with_a_unit() {
    let line = run_to_string();
    let re = Regex::new(r"\(([0-9]+(\.[0-9]+)?)(ns|µs|ms|s)\)\n$").unwrap();

    assert!(re.is_match(&line), "unexpected duration in {line:?}");
}

#[test]
fn repeated_runs_produce_identical_digests() {
    let first = run_to_string();
    let second = run_to_string();

    assert_eq!(&first[..64], &second[..64]);
}

#[test]
fn measured_digest_matches_portable_implementation() {
    let buffer = Buffer::with_len(64 * 1024).unwrap();

    let measurement = hashbench::measure(&buffer);

    assert_eq!(measurement.digest, hashbench::hash::sha256(buffer.as_bytes()));
}
