// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The scoremeta authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use scoremeta_core::music::key::{KeyCode, KeySignature};

const FLAT: char = '\u{266D}';
const SHARP: char = '\u{266F}';

/// Parse a free-form key name like "B\u{266D} Minor" or "c sharp major".
///
/// Whitespace and letter case are insignificant. Accidentals are
/// accepted as glyph or word, checked in that order with flats taking
/// precedence. A missing mode word defaults to major, matching the
/// behavior of existing input data.
///
/// Returns `None` for names outside the 30 canonical keys, including
/// enharmonic spellings like "G Sharp Major".
#[must_use]
pub(crate) fn parse_key_signature(input: &str) -> Option<KeySignature> {
    let condensed: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let mut chars = condensed.chars();
    let note_letter = chars.next()?.to_ascii_uppercase();
    let rest = chars.as_str().to_lowercase();

    let accidental = if rest.starts_with(FLAT) || rest.starts_with("flat") {
        Some("Flat")
    } else if rest.starts_with(SHARP) || rest.starts_with("sharp") {
        Some("Sharp")
    } else {
        None
    };

    let mode = if rest.ends_with("minor") {
        "Minor"
    } else {
        "Major"
    };

    let canonical_name = match accidental {
        Some(accidental) => format!("{note_letter} {accidental} {mode}"),
        None => format!("{note_letter} {mode}"),
    };
    KeyCode::try_from_canonical_str(&canonical_name).map(Into::into)
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests;
