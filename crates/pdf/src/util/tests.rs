// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The scoremeta authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use scoremeta_core::music::key::KeyMode;

use super::*;

#[test]
fn parse_key_signature_spellings() {
    for (expected, inputs) in [
        (
            KeyCode::Csmaj,
            &[
                "C Sharp Major",
                "C\u{266F} Major",
                "C \u{266F} Major",
                "c \u{266F}    major",
                "c     \u{266F}major",
                "csharpmajor",
            ][..],
        ),
        (
            KeyCode::Bbmin,
            &[
                "B Flat Minor",
                "B\u{266D} Minor",
                "B \u{266D} Minor",
                "b \u{266D} minor",
                "b \u{266D}    minor",
                "b     \u{266D}minor",
                "B FLAT MINOR",
            ][..],
        ),
        (KeyCode::Fmaj, &["F Major", "f major", "F  MAJOR"][..]),
        (KeyCode::Amin, &["A Minor", "a minor"][..]),
    ] {
        for input in inputs {
            assert_eq!(
                Some(KeySignature::new(expected)),
                parse_key_signature(input),
                "failed to parse {input:?}"
            );
        }
    }
}

#[test]
fn parse_key_signature_all_canonical_names() {
    use strum::IntoEnumIterator as _;

    for key_code in KeyCode::iter() {
        assert_eq!(
            Some(KeySignature::new(key_code)),
            parse_key_signature(key_code.as_canonical_str())
        );
    }
}

#[test]
fn parse_key_signature_mode_defaults_to_major() {
    assert_eq!(
        Some(KeyMode::Major),
        parse_key_signature("B\u{266D}").map(KeySignature::mode)
    );
    assert_eq!(
        Some(KeyMode::Major),
        parse_key_signature("c sharp").map(KeySignature::mode)
    );
}

#[test]
fn parse_key_signature_enharmonic_miss() {
    // G# major = Ab major, but only the latter is a canonical name.
    assert_eq!(None, parse_key_signature("G Sharp Major"));
    assert_eq!(None, parse_key_signature("g\u{266F} major"));
    assert_eq!(None, parse_key_signature("F Flat Major"));
}

#[test]
fn parse_key_signature_garbage() {
    assert_eq!(None, parse_key_signature(""));
    assert_eq!(None, parse_key_signature("   "));
    assert_eq!(None, parse_key_signature("H Major"));
    assert_eq!(None, parse_key_signature("1d"));
    assert_eq!(None, parse_key_signature("something else"));
}
