// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The scoremeta authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use scoremeta_core::music::key::{KeyMode, KeySignature};

use crate::{
    Result,
    metadata::{FieldValue, FileMetadata, InfoField, KEY_COLUMN, Row},
    util::parse_key_signature,
};

/// Recoverable errors and warnings
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Issues {
    messages: Vec<String>,
}

impl Issues {
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        let Self { messages } = self;
        messages.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        let Self { messages } = self;
        messages.len()
    }

    pub fn add_message(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug_assert!(!message.trim().is_empty());
        self.messages.push(message);
    }

    #[must_use]
    pub fn into_messages(self) -> Vec<String> {
        let Self { messages } = self;
        messages
    }
}

/// Collects recoverable issues while transforming a single row.
///
/// A failed field degrades to "field omitted + issue", it never
/// aborts the remaining fields of the row.
#[derive(Debug)]
pub struct Exporter {
    issues: Issues,
}

impl Exporter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            issues: Issues::new(),
        }
    }

    pub(crate) fn add_issue(&mut self, message: impl Into<String>) {
        self.issues.add_message(message);
    }

    #[must_use]
    pub fn finish(self) -> Issues {
        let Self { issues } = self;
        issues
    }

    #[must_use]
    pub fn export_key_signature(&mut self, input: &str) -> Option<KeySignature> {
        let key_signature = parse_key_signature(input);
        if key_signature.is_none() {
            self.issues
                .add_message(format!("Unrecognized key signature: {input}"));
        }
        key_signature
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Transform the columns of a single row into info dictionary fields.
///
/// The key column feeds both key signature fields through the codec.
/// All other known columns pass through verbatim. Unknown columns are
/// dropped with an issue while the remaining columns are still
/// processed.
#[must_use]
pub fn export_row_metadata(exporter: &mut Exporter, row: &Row) -> FileMetadata {
    let mut metadata = FileMetadata::with_capacity(row.fields.len() + 1);
    for (name, value) in &row.fields {
        if name == KEY_COLUMN {
            if let Some(key_signature) = exporter.export_key_signature(value) {
                metadata.insert(
                    InfoField::KeySharps,
                    FieldValue::Number(key_signature.accidentals()),
                );
                let minor_flag = match key_signature.mode() {
                    KeyMode::Major => 0,
                    KeyMode::Minor => 1,
                };
                metadata.insert(InfoField::KeyMinor, FieldValue::Number(minor_flag));
            }
            continue;
        }
        if let Some(field) = InfoField::try_from_column_name(name) {
            metadata.insert(field, FieldValue::Text(value.clone()));
        } else {
            exporter.add_issue(format!("Unrecognized field name: {name}"));
        }
    }
    metadata
}

/// Persists per-file metadata mappings.
///
/// Implementations must merge the given fields into any pre-existing
/// metadata of the file, preserving existing keys unless overwritten.
pub trait MetadataSink {
    fn merge_metadata(&mut self, file_name: &str, metadata: &FileMetadata) -> Result<()>;
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub exported: usize,
    pub skipped: usize,
}

/// Transform and persist a batch of rows.
///
/// Row-local failures are logged and never abort the batch: rows the
/// sink rejects (e.g. the target file is missing) are counted as
/// skipped and processing continues with the next row.
pub fn export_rows(
    rows: impl IntoIterator<Item = Row>,
    sink: &mut dyn MetadataSink,
) -> BatchSummary {
    let mut summary = BatchSummary::default();
    for row in rows {
        let mut exporter = Exporter::new();
        let metadata = export_row_metadata(&mut exporter, &row);
        for message in exporter.finish().into_messages() {
            log::warn!("{file_name}: {message}", file_name = row.file_name);
        }
        if let Err(err) = sink.merge_metadata(&row.file_name, &metadata) {
            log::warn!(
                "Skipping {file_name}: {err}",
                file_name = row.file_name
            );
            summary.skipped += 1;
        } else {
            summary.exported += 1;
        }
    }
    summary
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
