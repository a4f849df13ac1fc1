use core::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use log::warn;
use thiserror::Error;

/// Why a single field fell back to its neutral default.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("failed to parse {kind} from {text:?}")]
    Number { kind: &'static str, text: String },
    #[error("failed to parse time from {0:?}")]
    Time(String),
    #[error("unrecognized {kind} code {text:?}")]
    Code { kind: &'static str, text: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LatitudeHemisphere {
    #[default]
    North,
    South,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LongitudeHemisphere {
    #[default]
    West,
    East,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataStatus {
    #[default]
    Invalid,
    Valid,
}

/// GGA fix quality and the position mode indicator of GLL, RMC and VTG share
/// one closed set of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionFix {
    #[default]
    NoFix = 0,
    AutonomousGnssFix = 1,
    DifferentialGnssFix = 2,
    EstimatedFix = 6,
}

impl PositionFix {
    /// Numeric GGA quality code.
    pub fn from_quality(text: &str) -> Self {
        match text {
            "" => PositionFix::NoFix,
            "0" => PositionFix::NoFix,
            "1" => PositionFix::AutonomousGnssFix,
            "2" => PositionFix::DifferentialGnssFix,
            "6" => PositionFix::EstimatedFix,
            _ => {
                log_field_error(FieldError::Code {
                    kind: "fix quality",
                    text: text.into(),
                });
                PositionFix::NoFix
            }
        }
    }

    /// Single letter mode indicator (`N`, `E`, `A`, `D`).
    pub fn from_mode(text: &str) -> Self {
        match text {
            "" | "N" => PositionFix::NoFix,
            "E" => PositionFix::EstimatedFix,
            "A" => PositionFix::AutonomousGnssFix,
            "D" => PositionFix::DifferentialGnssFix,
            _ => {
                log_field_error(FieldError::Code {
                    kind: "position mode",
                    text: text.into(),
                });
                PositionFix::NoFix
            }
        }
    }
}

/// Returns the field at `index`, or `""` when the sentence was too short.
pub(crate) fn field(fields: &[String], index: usize) -> &str {
    fields.get(index).map(String::as_str).unwrap_or("")
}

pub(crate) fn log_field_error(error: FieldError) {
    warn!("{}", error);
}

fn parse_or_default<T: FromStr + Default>(text: &str, kind: &'static str) -> T {
    if text.is_empty() {
        return T::default();
    }
    text.parse::<T>().unwrap_or_else(|_| {
        log_field_error(FieldError::Number {
            kind,
            text: text.into(),
        });
        T::default()
    })
}

pub fn parse_f64(text: &str) -> f64 {
    parse_or_default(text, "decimal")
}

pub fn parse_u8(text: &str) -> u8 {
    parse_or_default(text, "integer")
}

pub fn parse_u16(text: &str) -> u16 {
    parse_or_default(text, "integer")
}

pub fn parse_i16(text: &str) -> i16 {
    parse_or_default(text, "integer")
}

pub fn parse_latitude_hemisphere(text: &str) -> LatitudeHemisphere {
    if text == "S" {
        LatitudeHemisphere::South
    } else {
        LatitudeHemisphere::North
    }
}

pub fn parse_longitude_hemisphere(text: &str) -> LongitudeHemisphere {
    if text == "E" {
        LongitudeHemisphere::East
    } else {
        LongitudeHemisphere::West
    }
}

pub fn parse_data_status(text: &str) -> DataStatus {
    if text == "A" {
        DataStatus::Valid
    } else {
        DataStatus::Invalid
    }
}

/// `HHMMSS` with an optional fraction, e.g. `123456.78`.
fn parse_hhmmss(text: &str) -> Option<NaiveTime> {
    let (hms, fraction) = text.split_once('.').unwrap_or((text, ""));
    if hms.len() != 6
        || !hms.bytes().all(|b| b.is_ascii_digit())
        || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let hour = hms[0..2].parse::<u32>().ok()?;
    let minute = hms[2..4].parse::<u32>().ok()?;
    let second = hms[4..6].parse::<u32>().ok()?;
    let milli = fraction
        .bytes()
        .chain(core::iter::repeat(b'0'))
        .take(3)
        .fold(0u32, |acc, digit| acc * 10 + (digit - b'0') as u32);
    NaiveTime::from_hms_milli_opt(hour, minute, second, milli)
}

/// `DDMMYY`, two digit years are in the 2000s.
fn parse_ddmmyy(text: &str) -> Option<NaiveDate> {
    if text.len() != 6 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let day = text[0..2].parse::<u32>().ok()?;
    let month = text[2..4].parse::<u32>().ok()?;
    let year = 2000 + text[4..6].parse::<i32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Time-only field anchored on the current UTC date. Empty or malformed text
/// gives the unset sentinel, `NaiveDateTime::default()`.
pub fn parse_time(text: &str) -> NaiveDateTime {
    if text.is_empty() {
        return NaiveDateTime::default();
    }
    match parse_hhmmss(text) {
        Some(time) => Utc::now().date_naive().and_time(time),
        None => {
            log_field_error(FieldError::Time(text.into()));
            NaiveDateTime::default()
        }
    }
}

/// RMC style time plus `DDMMYY` date.
pub fn parse_date_time(time_text: &str, date_text: &str) -> NaiveDateTime {
    if time_text.is_empty() && date_text.is_empty() {
        return NaiveDateTime::default();
    }
    match (parse_ddmmyy(date_text), parse_hhmmss(time_text)) {
        (Some(date), Some(time)) => date.and_time(time),
        _ => {
            log_field_error(FieldError::Time(format!("{}{}", date_text, time_text)));
            NaiveDateTime::default()
        }
    }
}

/// Converts a raw NMEA coordinate (`ddmm.mmmm` / `dddmm.mmmm`) into signed
/// decimal degrees.
pub fn latitude_to_degrees(raw: f64, hemisphere: LatitudeHemisphere) -> f64 {
    let degrees = to_decimal_degrees(raw);
    match hemisphere {
        LatitudeHemisphere::South if degrees != 0.0 => -degrees,
        _ => degrees,
    }
}

pub fn longitude_to_degrees(raw: f64, hemisphere: LongitudeHemisphere) -> f64 {
    let degrees = to_decimal_degrees(raw);
    match hemisphere {
        LongitudeHemisphere::West if degrees != 0.0 => -degrees,
        _ => degrees,
    }
}

fn to_decimal_degrees(raw: f64) -> f64 {
    let degrees = (raw / 100.0).floor();
    let minutes = raw - degrees * 100.0;
    degrees + minutes / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{Datelike, Timelike};

    #[test]
    fn time_only() {
        let time = parse_time("123456.78");
        assert_eq!(time.date(), Utc::now().date_naive());
        assert_eq!(
            time.time(),
            NaiveTime::from_hms_milli_opt(12, 34, 56, 780).unwrap()
        );
    }

    #[test]
    fn time_without_fraction() {
        let time = parse_time("123519");
        assert_eq!((time.hour(), time.minute(), time.second()), (12, 35, 19));
    }

    #[test]
    fn invalid_time_is_unset() {
        assert_eq!(parse_time("xxxxxx.yy"), NaiveDateTime::default());
        assert_eq!(parse_time("2513"), NaiveDateTime::default());
        assert_eq!(parse_time(""), NaiveDateTime::default());

        // the unset time is the Unix epoch, not the minimum date
        assert_eq!(
            parse_time(""),
            NaiveDate::from_ymd_opt(1970, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
        assert_ne!(parse_time(""), NaiveDateTime::MIN);
    }

    #[test]
    fn date_and_time() {
        let time = parse_date_time("123456.78", "010203");
        assert_eq!((time.year(), time.month(), time.day()), (2003, 2, 1));
        assert_eq!(
            time.time(),
            NaiveTime::from_hms_milli_opt(12, 34, 56, 780).unwrap()
        );
    }

    #[test]
    fn invalid_date_and_time_is_unset() {
        assert_eq!(
            parse_date_time("xxxxxx.yy", "kkkkkk"),
            NaiveDateTime::default()
        );
        assert_eq!(parse_date_time("123456.78", "320125"), NaiveDateTime::default());
    }

    #[test]
    fn numbers_fall_back_to_zero() {
        assert_relative_eq!(parse_f64("123.456"), 123.456);
        assert_eq!(parse_f64("xxx.xxx"), 0.0);
        assert_eq!(parse_f64(""), 0.0);
        assert_eq!(parse_u16("123"), 123);
        assert_eq!(parse_u16("xxx"), 0);
        assert_eq!(parse_u8("300"), 0);
        assert_eq!(parse_i16("-5"), -5);
    }

    #[test]
    fn position_mode() {
        assert_eq!(PositionFix::from_mode("N"), PositionFix::NoFix);
        assert_eq!(PositionFix::from_mode("E"), PositionFix::EstimatedFix);
        assert_eq!(PositionFix::from_mode("A"), PositionFix::AutonomousGnssFix);
        assert_eq!(PositionFix::from_mode("D"), PositionFix::DifferentialGnssFix);
        assert_eq!(PositionFix::from_mode(""), PositionFix::NoFix);
        assert_eq!(PositionFix::from_mode("Q"), PositionFix::NoFix);
    }

    #[test]
    fn quality_outside_closed_set() {
        assert_eq!(PositionFix::from_quality("2"), PositionFix::DifferentialGnssFix);
        assert_eq!(PositionFix::from_quality("4"), PositionFix::NoFix);
        assert_eq!(PositionFix::from_quality("x"), PositionFix::NoFix);
    }

    #[test]
    fn hemispheres_and_status() {
        assert_eq!(parse_latitude_hemisphere("N"), LatitudeHemisphere::North);
        assert_eq!(parse_latitude_hemisphere("S"), LatitudeHemisphere::South);
        assert_eq!(parse_latitude_hemisphere(""), LatitudeHemisphere::North);
        assert_eq!(parse_longitude_hemisphere("E"), LongitudeHemisphere::East);
        assert_eq!(parse_longitude_hemisphere("W"), LongitudeHemisphere::West);
        assert_eq!(parse_longitude_hemisphere(""), LongitudeHemisphere::West);
        assert_eq!(parse_data_status("A"), DataStatus::Valid);
        assert_eq!(parse_data_status("V"), DataStatus::Invalid);
        assert_eq!(parse_data_status(""), DataStatus::Invalid);
    }

    #[test]
    fn decimal_degrees() {
        assert_relative_eq!(
            latitude_to_degrees(3723.2475, LatitudeHemisphere::North),
            37.387458333333336,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            longitude_to_degrees(12158.3416, LongitudeHemisphere::West),
            -121.97236,
            epsilon = 1e-9
        );
        assert_eq!(
            longitude_to_degrees(0.0, LongitudeHemisphere::West).to_string(),
            "0"
        );
    }
}
