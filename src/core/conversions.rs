//! Conversions for the compact date, time and number encodings the TSETMC servers use.

use chrono::{NaiveDate, NaiveTime};

use crate::core::TsError;

/// `dEven` values encode a Gregorian date as the integer `yyyymmdd`.
pub fn deven_to_date(deven: i64) -> Result<NaiveDate, TsError> {
    let year = i32::try_from(deven / 10_000)
        .map_err(|_| TsError::Data(format!("dEven out of range: {deven}")))?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (month, day) = (((deven / 100) % 100) as u32, (deven % 100) as u32);
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| TsError::Data(format!("invalid dEven: {deven}")))
}

/// `hEven` values encode a wall-clock time as the integer `hhmmss` (leading zero dropped).
pub fn heven_to_time(heven: i64) -> Result<NaiveTime, TsError> {
    if heven < 0 {
        return Err(TsError::Data(format!("invalid hEven: {heven}")));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (h, m, s) = (
        (heven / 10_000) as u32,
        ((heven / 100) % 100) as u32,
        (heven % 100) as u32,
    );
    NaiveTime::from_hms_opt(h, m, s).ok_or_else(|| TsError::Data(format!("invalid hEven: {heven}")))
}

/// Parse one integer field of a delimiter-separated row.
pub(crate) fn parse_int(raw: &str, what: &str) -> Result<i64, TsError> {
    let t = raw.trim();
    if let Ok(v) = t.parse::<i64>() {
        return Ok(v);
    }
    // Some feeds render integral values as `1234.0`.
    match t.parse::<f64>() {
        #[allow(clippy::cast_possible_truncation)]
        Ok(f) if f.fract() == 0.0 && f.is_finite() => Ok(f as i64),
        _ => Err(TsError::Data(format!("{what}: expected integer, got {raw:?}"))),
    }
}

/// Like [`parse_int`], but an empty field reads as `None`.
pub(crate) fn parse_opt_int(raw: &str, what: &str) -> Result<Option<i64>, TsError> {
    if raw.trim().is_empty() {
        Ok(None)
    } else {
        parse_int(raw, what).map(Some)
    }
}

/// Split a delimiter-separated payload, dropping the empty trailing entries the servers emit.
pub(crate) fn split_rows(body: &str, sep: char) -> impl Iterator<Item = &str> {
    body.split(sep).map(str::trim).filter(|r| !r.is_empty())
}
