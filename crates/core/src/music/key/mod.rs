// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The scoremeta authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

pub type KeyCodeValue = u8;

/// Signed number of accidentals in a key signature.
///
/// Counts sharps (positive) or flats (negative) in the circle of
/// fifths; `0` is no accidentals.
pub type KeyAccidentals = i8;

pub const ACCIDENTALS_MIN: KeyAccidentals = -7;
pub const ACCIDENTALS_MAX: KeyAccidentals = 7;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyMode {
    Major,
    Minor,
}

/// The 30 canonical key names, ordered by mode and then by the
/// number of accidentals along the circle of fifths.
///
/// The discriminant encodes both components:
/// `mode * 15 + (accidentals + 7)`.
///
/// Enharmonic equivalents outside this set (e.g. G\u{266F} major for
/// A\u{266D} major) are intentionally not represented.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, strum::FromRepr, strum::EnumIter)]
#[repr(u8)]
pub enum KeyCode {
    /// C\u{266D} major
    Cbmaj = 0,

    /// G\u{266D} major
    Gbmaj = 1,

    /// D\u{266D} major
    Dbmaj = 2,

    /// A\u{266D} major
    Abmaj = 3,

    /// E\u{266D} major
    Ebmaj = 4,

    /// B\u{266D} major
    Bbmaj = 5,

    /// F major
    Fmaj = 6,

    /// C major
    Cmaj = 7,

    /// G major
    Gmaj = 8,

    /// D major
    Dmaj = 9,

    /// A major
    Amaj = 10,

    /// E major
    Emaj = 11,

    /// B major
    Bmaj = 12,

    /// F\u{266F} major
    Fsmaj = 13,

    /// C\u{266F} major
    Csmaj = 14,

    /// A\u{266D} minor
    Abmin = 15,

    /// E\u{266D} minor
    Ebmin = 16,

    /// B\u{266D} minor
    Bbmin = 17,

    /// F minor
    Fmin = 18,

    /// C minor
    Cmin = 19,

    /// G minor
    Gmin = 20,

    /// D minor
    Dmin = 21,

    /// A minor
    Amin = 22,

    /// E minor
    Emin = 23,

    /// B minor
    Bmin = 24,

    /// F\u{266F} minor
    Fsmin = 25,

    /// C\u{266F} minor
    Csmin = 26,

    /// G\u{266F} minor
    Gsmin = 27,

    /// D\u{266F} minor
    Dsmin = 28,

    /// A\u{266F} minor
    Asmin = 29,
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_canonical_str())
    }
}

impl KeyCode {
    #[must_use]
    pub const fn as_canonical_str(self) -> &'static str {
        #[allow(clippy::enum_glob_use)]
        use KeyCode::*;
        match self {
            Cbmaj => "C Flat Major",
            Gbmaj => "G Flat Major",
            Dbmaj => "D Flat Major",
            Abmaj => "A Flat Major",
            Ebmaj => "E Flat Major",
            Bbmaj => "B Flat Major",
            Fmaj => "F Major",
            Cmaj => "C Major",
            Gmaj => "G Major",
            Dmaj => "D Major",
            Amaj => "A Major",
            Emaj => "E Major",
            Bmaj => "B Major",
            Fsmaj => "F Sharp Major",
            Csmaj => "C Sharp Major",
            Abmin => "A Flat Minor",
            Ebmin => "E Flat Minor",
            Bbmin => "B Flat Minor",
            Fmin => "F Minor",
            Cmin => "C Minor",
            Gmin => "G Minor",
            Dmin => "D Minor",
            Amin => "A Minor",
            Emin => "E Minor",
            Bmin => "B Minor",
            Fsmin => "F Sharp Minor",
            Csmin => "C Sharp Minor",
            Gsmin => "G Sharp Minor",
            Dsmin => "D Sharp Minor",
            Asmin => "A Sharp Minor",
        }
    }

    #[must_use]
    pub fn try_from_canonical_str(s: &str) -> Option<Self> {
        #[allow(clippy::enum_glob_use)]
        use KeyCode::*;
        let code = match s {
            "C Flat Major" => Cbmaj,
            "G Flat Major" => Gbmaj,
            "D Flat Major" => Dbmaj,
            "A Flat Major" => Abmaj,
            "E Flat Major" => Ebmaj,
            "B Flat Major" => Bbmaj,
            "F Major" => Fmaj,
            "C Major" => Cmaj,
            "G Major" => Gmaj,
            "D Major" => Dmaj,
            "A Major" => Amaj,
            "E Major" => Emaj,
            "B Major" => Bmaj,
            "F Sharp Major" => Fsmaj,
            "C Sharp Major" => Csmaj,
            "A Flat Minor" => Abmin,
            "E Flat Minor" => Ebmin,
            "B Flat Minor" => Bbmin,
            "F Minor" => Fmin,
            "C Minor" => Cmin,
            "G Minor" => Gmin,
            "D Minor" => Dmin,
            "A Minor" => Amin,
            "E Minor" => Emin,
            "B Minor" => Bmin,
            "F Sharp Minor" => Fsmin,
            "C Sharp Minor" => Csmin,
            "G Sharp Minor" => Gsmin,
            "D Sharp Minor" => Dsmin,
            "A Sharp Minor" => Asmin,
            _ => {
                return None;
            }
        };
        Some(code)
    }
}

impl KeyCode {
    #[must_use]
    pub const fn to_value(self) -> KeyCodeValue {
        self as _
    }

    #[must_use]
    pub const fn try_from_value(val: KeyCodeValue) -> Option<Self> {
        Self::from_repr(val)
    }

    #[must_use]
    pub const fn accidentals(self) -> KeyAccidentals {
        (self.to_value() % 15) as KeyAccidentals - 7
    }

    #[must_use]
    pub const fn mode(self) -> KeyMode {
        if self.to_value() < 15 {
            KeyMode::Major
        } else {
            KeyMode::Minor
        }
    }

    /// Recombine an accidental count and mode into the corresponding code.
    ///
    /// Total over `[ACCIDENTALS_MIN, ACCIDENTALS_MAX]` combined with either
    /// mode, `None` outside that range.
    #[must_use]
    pub const fn try_from_accidentals_mode(
        accidentals: KeyAccidentals,
        mode: KeyMode,
    ) -> Option<Self> {
        if accidentals < ACCIDENTALS_MIN || accidentals > ACCIDENTALS_MAX {
            return None;
        }
        let value = (accidentals + 7) as KeyCodeValue
            + match mode {
                KeyMode::Major => 0,
                KeyMode::Minor => 15,
            };
        Self::try_from_value(value)
    }
}

impl TryFrom<KeyCodeValue> for KeyCode {
    type Error = ();

    fn try_from(from: KeyCodeValue) -> Result<Self, Self::Error> {
        Self::try_from_value(from).ok_or(())
    }
}

impl From<KeyCode> for KeyCodeValue {
    fn from(from: KeyCode) -> Self {
        from.to_value()
    }
}

/// A key signature, identified by its canonical key name.
///
/// The underlying code enumerates the circle of fifths per mode,
/// i.e. the accidental count and mode are recoverable without any
/// further lookup.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct KeySignature(KeyCode);

impl KeySignature {
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self(code)
    }

    #[must_use]
    pub const fn code(self) -> KeyCode {
        let Self(code) = self;
        code
    }

    #[must_use]
    pub const fn accidentals(self) -> KeyAccidentals {
        self.code().accidentals()
    }

    #[must_use]
    pub const fn mode(self) -> KeyMode {
        self.code().mode()
    }
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.code().fmt(f)
    }
}

impl From<KeyCode> for KeySignature {
    fn from(from: KeyCode) -> Self {
        KeySignature::new(from)
    }
}

impl From<KeySignature> for KeyCode {
    fn from(from: KeySignature) -> Self {
        from.code()
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests;
