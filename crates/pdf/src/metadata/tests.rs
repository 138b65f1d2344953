// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The scoremeta authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use strum::IntoEnumIterator as _;

use super::*;

#[test]
fn info_field_str_round_trip() {
    for field in InfoField::iter() {
        assert_eq!(field, InfoField::try_from_str(field.as_str()).unwrap());
    }
}

#[test]
fn info_field_column_round_trip() {
    for field in InfoField::iter() {
        let column_name = field.column_name();
        if column_name == KEY_COLUMN {
            // One column feeds two fields, no unique reverse mapping.
            assert_eq!(None, InfoField::try_from_column_name(column_name));
        } else {
            assert_eq!(
                field,
                InfoField::try_from_column_name(column_name).unwrap()
            );
        }
    }
}

#[test]
fn unknown_names() {
    assert_eq!(None, InfoField::try_from_str("/Producer"));
    assert_eq!(None, InfoField::try_from_str("Author"));
    assert_eq!(None, InfoField::try_from_column_name("Reference"));
    assert_eq!(None, InfoField::try_from_column_name(FILE_NAME_COLUMN));
}

#[test]
fn field_value_display() {
    assert_eq!("Glam Rock", FieldValue::from("Glam Rock").to_string());
    assert_eq!("-5", FieldValue::from(-5i8).to_string());
    assert_eq!("0", FieldValue::from(0i8).to_string());
}
