// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The scoremeta authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use strum::IntoEnumIterator as _;

use super::*;

#[test]
fn from_to_value() {
    for key_code in KeyCode::iter() {
        assert_eq!(
            key_code,
            KeyCode::try_from_value(key_code.to_value()).unwrap()
        );
    }
}

#[test]
fn canonical_str_round_trip() {
    for key_code in KeyCode::iter() {
        assert_eq!(
            key_code,
            KeyCode::try_from_canonical_str(key_code.as_canonical_str()).unwrap()
        );
    }
}

#[test]
fn accidentals_mode_round_trip() {
    for key_code in KeyCode::iter() {
        assert_eq!(
            key_code,
            KeyCode::try_from_accidentals_mode(key_code.accidentals(), key_code.mode()).unwrap()
        );
    }
}

#[test]
fn accidentals_in_range() {
    for key_code in KeyCode::iter() {
        assert!(key_code.accidentals() >= ACCIDENTALS_MIN);
        assert!(key_code.accidentals() <= ACCIDENTALS_MAX);
    }
}

#[test]
fn accidentals_mode_out_of_range() {
    assert_eq!(None, KeyCode::try_from_accidentals_mode(-8, KeyMode::Major));
    assert_eq!(None, KeyCode::try_from_accidentals_mode(8, KeyMode::Major));
    assert_eq!(None, KeyCode::try_from_accidentals_mode(-8, KeyMode::Minor));
    assert_eq!(None, KeyCode::try_from_accidentals_mode(8, KeyMode::Minor));
}

#[test]
fn accidentals_mode_bijection() {
    // 15 accidental counts per mode, all distinct.
    let mut seen = Vec::with_capacity(30);
    for key_code in KeyCode::iter() {
        let pair = (key_code.accidentals(), key_code.mode());
        assert!(!seen.contains(&pair));
        seen.push(pair);
    }
    assert_eq!(30, seen.len());
}

#[test]
fn well_known_codes() {
    assert_eq!(0, KeyCode::Cmaj.accidentals());
    assert_eq!(KeyMode::Major, KeyCode::Cmaj.mode());
    assert_eq!(0, KeyCode::Amin.accidentals());
    assert_eq!(KeyMode::Minor, KeyCode::Amin.mode());
    assert_eq!(-5, KeyCode::Bbmin.accidentals());
    assert_eq!(KeyMode::Minor, KeyCode::Bbmin.mode());
    assert_eq!(7, KeyCode::Csmaj.accidentals());
    assert_eq!(-7, KeyCode::Cbmaj.accidentals());
    assert_eq!(7, KeyCode::Asmin.accidentals());
    assert_eq!(-7, KeyCode::Abmin.accidentals());
}

#[test]
fn key_signature_display() {
    assert_eq!(
        "B Flat Minor",
        KeySignature::new(KeyCode::Bbmin).to_string()
    );
    assert_eq!("C Major", KeySignature::new(KeyCode::Cmaj).to_string());
}

#[test]
fn enharmonic_names_not_in_table() {
    // G# major = Ab major, only the flat spelling is canonical.
    assert_eq!(None, KeyCode::try_from_canonical_str("G Sharp Major"));
    assert_eq!(None, KeyCode::try_from_canonical_str("D Flat Minor"));
}
