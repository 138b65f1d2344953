// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The scoremeta authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, str::FromStr, sync::LazyLock};

use anyhow::anyhow;
use jiff::{Zoned, civil::DateTime, tz::Offset};
use regex::Regex;
use semval::prelude::*;

/// A local date-time with second precision and an optional UTC offset.
///
/// Corresponds to the PDF date string format `D:YYYYMMDDHHMMSS`
/// with an optional `±HH'mm'` suffix. An absent offset means the
/// relationship of the local time to universal time is unknown,
/// which is distinct from a zero offset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PdfDateTime {
    date_time: DateTime,
    utc_offset: Option<Offset>,
}

impl PdfDateTime {
    #[must_use]
    pub const fn new(date_time: DateTime, utc_offset: Option<Offset>) -> Self {
        Self {
            date_time,
            utc_offset,
        }
    }

    /// A local date-time with an unknown relationship to universal time.
    #[must_use]
    pub const fn from_local(date_time: DateTime) -> Self {
        Self::new(date_time, None)
    }

    #[must_use]
    pub fn now_local() -> Self {
        let zoned = Zoned::now();
        let date_time = zoned.datetime();
        // Truncate to second precision.
        let date_time = date_time
            .with()
            .subsec_nanosecond(0)
            .build()
            .unwrap_or(date_time);
        Self::new(date_time, Some(zoned.offset()))
    }

    #[must_use]
    pub const fn date_time(&self) -> DateTime {
        self.date_time
    }

    #[must_use]
    pub const fn utc_offset(&self) -> Option<Offset> {
        self.utc_offset
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        <Self as IsValid>::is_valid(self)
    }
}

// The quote characters after the offset hours and minutes are part
// of the wire format.
static PDF_DATE_TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^D:(\d{4})(\d{2})(\d{2})(\d{2})(\d{2})(\d{2})(?:([+-])(\d{2})'(\d{2})')?$")
        .expect("valid regex")
});

impl FromStr for PdfDateTime {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let captures = PDF_DATE_TIME_PATTERN
            .captures(input)
            .ok_or_else(|| anyhow!("malformed PDF date string: {input:?}"))?;
        // The pattern guarantees all-digit groups of fixed width,
        // only the field ranges remain to be checked.
        let year = captures[1].parse::<i16>()?;
        let month = captures[2].parse::<i8>()?;
        let day = captures[3].parse::<i8>()?;
        let hour = captures[4].parse::<i8>()?;
        let minute = captures[5].parse::<i8>()?;
        let second = captures[6].parse::<i8>()?;
        let date_time = DateTime::new(year, month, day, hour, minute, second, 0)
            .map_err(|err| anyhow!("malformed PDF date string: {input:?}: {err}"))?;
        let utc_offset = if let Some(sign) = captures.get(7) {
            let offset_hours = captures[8].parse::<i32>()?;
            let offset_minutes = captures[9].parse::<i32>()?;
            let mut offset_seconds = offset_hours * 3600 + offset_minutes * 60;
            if sign.as_str() == "-" {
                offset_seconds = -offset_seconds;
            }
            let offset = Offset::from_seconds(offset_seconds)
                .map_err(|err| anyhow!("malformed PDF date string: {input:?}: {err}"))?;
            Some(offset)
        } else {
            None
        };
        Ok(Self::new(date_time, utc_offset))
    }
}

impl fmt::Display for PdfDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            date_time,
            utc_offset,
        } = self;
        write!(
            f,
            "D:{year:04}{month:02}{day:02}{hour:02}{minute:02}{second:02}",
            year = date_time.year(),
            month = date_time.month(),
            day = date_time.day(),
            hour = date_time.hour(),
            minute = date_time.minute(),
            second = date_time.second(),
        )?;
        if let Some(offset) = utc_offset {
            let offset_seconds = offset.seconds();
            let sign = if offset_seconds < 0 { '-' } else { '+' };
            let abs_minutes = offset_seconds.unsigned_abs() / 60;
            write!(
                f,
                "{sign}{hours:02}'{minutes:02}'",
                hours = abs_minutes / 60,
                minutes = abs_minutes % 60,
            )?;
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug)]
pub enum PdfDateTimeInvalidity {
    YearOutOfRange,
    SubSecondPrecision,
    OffsetSubMinutePrecision,
    OffsetHoursOutOfRange,
}

impl Validate for PdfDateTime {
    type Invalidity = PdfDateTimeInvalidity;

    /// Values outside the round-trip contract of the date string
    /// format are considered invalid, even though they could still
    /// be formatted lossily.
    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let mut context = ValidationContext::new()
            .invalidate_if(self.date_time.year() < 0, Self::Invalidity::YearOutOfRange)
            .invalidate_if(
                self.date_time.subsec_nanosecond() != 0,
                Self::Invalidity::SubSecondPrecision,
            );
        if let Some(offset) = self.utc_offset {
            context = context
                .invalidate_if(
                    offset.seconds() % 60 != 0,
                    Self::Invalidity::OffsetSubMinutePrecision,
                )
                .invalidate_if(
                    offset.seconds().unsigned_abs() / 3600 > 23,
                    Self::Invalidity::OffsetHoursOutOfRange,
                );
        }
        context.into()
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
