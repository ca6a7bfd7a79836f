//! End-to-end session behaviour through the public API.

use astra_core::{AstraError, Output, Profile, Session};

// ============================================================
// Scenarios
// ============================================================

#[test]
fn test_strict_session_walkthrough() {
    let profile = Profile::default().with_upper(true).with_dedup(true);
    let mut session = Session::new(profile);

    let a = session.transform(b"  hola mundo  ").unwrap();
    assert_eq!(a.as_str(), Some("HOLA MUNDO"));

    let b = session.transform(b"hola mundo").unwrap();
    assert!(b.is_suppressed());

    let c = session.transform(b"rust y c").unwrap();
    assert_eq!(c.as_str(), Some("RUST Y C"));

    let stats = session.close();
    assert_eq!((stats.read, stats.written, stats.skipped), (3, 2, 1));
}

#[test]
fn test_whitespace_line_suppressed() {
    let mut session = Session::new(Profile::default());
    assert_eq!(session.transform(b"   ").unwrap(), Output::Suppressed);
}

#[test]
fn test_profile_from_json_drives_session() {
    let profile = Profile::from_json(r#"{"trim": false, "drop_empty": false}"#).unwrap();
    let mut session = Session::new(profile);
    assert_eq!(session.transform(b" x ").unwrap(), Output::Text(" x ".into()));
    assert_eq!(session.transform(b"").unwrap(), Output::Empty);
}

// ============================================================
// Dedup history
// ============================================================

#[test]
fn test_history_never_shrinks() {
    let mut session = Session::new(Profile::strict());
    let mut last = 0;
    let lines: [&[u8]; 7] = [b"a", b"b", b"a", b" ", b"c", b"B", b"\xff"];
    for line in lines {
        let _ = session.transform(line);
        assert!(session.history_len() >= last);
        last = session.history_len();
    }
    assert_eq!(last, 3);
}

#[test]
fn test_dedup_ignores_raw_differences() {
    let mut session = Session::new(Profile::strict());
    let variants: [&[u8]; 4] = [b"Mixed Case", b"  mixed case", b"MIXED CASE\r\n", b"\tmIxEd cAsE "];
    let outcomes: Vec<bool> = variants
        .iter()
        .map(|v| session.transform(v).unwrap().is_suppressed())
        .collect();
    assert_eq!(outcomes, vec![false, true, true, true]);
}

// ============================================================
// Errors
// ============================================================

#[test]
fn test_invalid_encoding_reports_offset() {
    let mut session = Session::new(Profile::default());
    match session.transform(b"abc\x80def") {
        Err(AstraError::InvalidEncoding { valid_up_to }) => assert_eq!(valid_up_to, 3),
        other => panic!("expected InvalidEncoding, got {other:?}"),
    }
}

#[test]
fn test_error_messages() {
    let err = AstraError::InvalidEncoding { valid_up_to: 5 };
    assert!(err.to_string().contains("byte 5"));
    assert_eq!(AstraError::AllocationFailure.to_string(), "Allocation failure");
}
