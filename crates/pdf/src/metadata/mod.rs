// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The scoremeta authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{collections::HashMap, fmt};

/// The distinguished input column naming the target file.
pub const FILE_NAME_COLUMN: &str = "Filename";

/// The input column carrying a free-form key name.
///
/// Maps onto both [`InfoField::KeySharps`] and [`InfoField::KeyMinor`]
/// and is therefore absent from the bidirectional column table.
pub const KEY_COLUMN: &str = "Key";

/// The closed vocabulary of info dictionary fields consumed by forScore.
///
/// See also: <https://forscore.co/developers-pdf-metadata/>
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum InfoField {
    /// Fills in the "composer" field
    Author,

    Title,

    /// Fills in the "genre" field
    Subject,

    /// Fills in the "tags" field
    Keywords,

    /// 1 to 5
    Rating,

    /// 1 to 3
    Difficulty,

    Duration,

    /// Number of sharps (positive) or flats (negative) in the key signature
    KeySharps,

    /// 0 for major, 1 for minor
    KeyMinor,
}

impl InfoField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        #[allow(clippy::enum_glob_use)]
        use InfoField::*;
        match self {
            Author => "/Author",
            Title => "/Title",
            Subject => "/Subject",
            Keywords => "/Keywords",
            Rating => "/rating",
            Difficulty => "/difficulty",
            Duration => "/duration",
            KeySharps => "/keysf",
            KeyMinor => "/keysmi",
        }
    }

    #[must_use]
    pub fn try_from_str(s: &str) -> Option<Self> {
        #[allow(clippy::enum_glob_use)]
        use InfoField::*;
        let field = match s {
            "/Author" => Author,
            "/Title" => Title,
            "/Subject" => Subject,
            "/Keywords" => Keywords,
            "/rating" => Rating,
            "/difficulty" => Difficulty,
            "/duration" => Duration,
            "/keysf" => KeySharps,
            "/keysmi" => KeyMinor,
            _ => {
                return None;
            }
        };
        Some(field)
    }

    /// The human-facing input column that feeds this field.
    #[must_use]
    pub const fn column_name(self) -> &'static str {
        #[allow(clippy::enum_glob_use)]
        use InfoField::*;
        match self {
            Author => "Composer",
            Title => "Title",
            Subject => "Genre",
            Keywords => "Tags",
            Rating => "Rating",
            Difficulty => "Difficulty",
            Duration => "Duration",
            KeySharps | KeyMinor => KEY_COLUMN,
        }
    }

    /// Reverse lookup of [`Self::column_name`] for all pass-through
    /// columns.
    ///
    /// [`KEY_COLUMN`] is deliberately not resolved here since it feeds
    /// two fields at once.
    #[must_use]
    pub fn try_from_column_name(name: &str) -> Option<Self> {
        #[allow(clippy::enum_glob_use)]
        use InfoField::*;
        let field = match name {
            "Composer" => Author,
            "Title" => Title,
            "Genre" => Subject,
            "Tags" => Keywords,
            "Rating" => Rating,
            "Difficulty" => Difficulty,
            "Duration" => Duration,
            _ => {
                return None;
            }
        };
        Some(field)
    }
}

impl fmt::Display for InfoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single info dictionary value.
///
/// All pass-through columns remain verbatim text, only the two key
/// signature fields are numeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(i8),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => number.fmt(f),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(from: &str) -> Self {
        Self::Text(from.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(from: String) -> Self {
        Self::Text(from)
    }
}

impl From<i8> for FieldValue {
    fn from(from: i8) -> Self {
        Self::Number(from)
    }
}

/// The per-file mapping handed to a metadata sink.
///
/// Field order is not significant, info fields are unique per file.
pub type FileMetadata = HashMap<InfoField, FieldValue>;

/// One input record: the target file name and the human-facing
/// column/value pairs to apply to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub file_name: String,
    pub fields: Vec<(String, String)>,
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests;
