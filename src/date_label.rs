//! Holds the Jalali date labels and their conversion to fa-IR text.

use jelal::{IYear, Month, MonthDay, UMonth, UMonthDay};
use jiff::civil;
use thiserror::Error;

use crate::dom::Document;
use crate::locale;

/// Class marking an element as a date label.
pub const DATE_LABEL_CLASS: &str = "jalali-date";

/// Attribute holding the raw `"jY/jM/jD"` date string.
pub const DATE_ATTR: &str = "data-date";

/// Why one label's date could not be converted.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("{0} is not a supported Jalali year")]
    YearOutOfRange(i32),
    #[error("{0} is not a Jalali month (1 to 12)")]
    MonthOutOfRange(i32),
    #[error("{0} is not a day of that month")]
    DayOutOfRange(i32),
    #[error(transparent)]
    Gregorian(#[from] jiff::Error),
}

/// Parse the leading base-10 integer of a string, `parseInt` style.
///
/// Leading whitespace and an optional sign are consumed, then the longest run
/// of ASCII digits; whatever trails is ignored. No digits means `None`.
pub fn parse_leading_int(s: &str) -> Option<i32> {
    let s = s.trim_start();
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return None;
    }

    let mut value: i64 = 0;
    for digit in s[..end].bytes() {
        value = value.saturating_mul(10).saturating_add((digit - b'0') as i64);
    }
    if negative {
        value = -value;
    }

    Some(value.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
}

/// Convert a Jalali date to its Gregorian day.
///
/// `jelal` is authoritative for the calendar arithmetic but saturates instead
/// of failing, so the month and day are range-checked here first and anything
/// outside the calendar is an error rather than a silently clamped date.
pub fn jalali_to_gregorian(jy: i32, jm: i32, jd: i32) -> Result<civil::Date, ConvertError> {
    let year = IYear::try_from(jy).map_err(|_| ConvertError::YearOutOfRange(jy))?;

    let month = UMonth::try_from(jm)
        .ok()
        .filter(|m| (Month::MIN.get()..=Month::MAX.get()).contains(m))
        .ok_or(ConvertError::MonthOutOfRange(jm))?;

    // MAX_DAY saturates to the end of this month
    let month_end = MonthDay::from(jelal::Date::from((year, month, MonthDay::MAX_DAY))).day();
    let day = UMonthDay::try_from(jd)
        .ok()
        .filter(|d| (MonthDay::MIN_DAY..=month_end).contains(d))
        .ok_or(ConvertError::DayOutOfRange(jd))?;

    Ok(jelal::Date::from((year, month, day)).try_into()?)
}

/// Rewrite every date label's text to its fa-IR month+day form.
///
/// Labels with a missing or empty attribute, or a shape other than three
/// `/`-separated parts, are skipped without a word. A label that fails
/// conversion is logged and skipped; it never stops the others from
/// processing. Reruns are idempotent since only the text is written, never
/// the attribute.
pub fn format_date_labels(doc: &mut Document) {
    for id in doc.select(DATE_LABEL_CLASS) {
        let Some(raw) = doc.attr(id, DATE_ATTR) else {
            continue;
        };
        if raw.is_empty() {
            continue;
        }
        let raw = raw.to_owned();

        let parts: Vec<&str> = raw.split('/').collect();
        if parts.len() != 3 {
            // unlike conversion failures, a malformed shape is quietly ignored
            continue;
        }

        match convert(&parts) {
            Ok(text) => doc.set_text(id, &text),
            Err(e) => log::error!("could not convert date `{raw}`: {e}"),
        }
    }
}

/// One label's pipeline past the shape check: parse, convert, render.
fn convert(parts: &[&str]) -> Result<String, ConvertError> {
    // a part without digits is NaN in the original and only blows up here
    let int = |s: &str| parse_leading_int(s).ok_or_else(|| ConvertError::NotANumber(s.to_owned()));
    let gregorian = jalali_to_gregorian(int(parts[0])?, int(parts[1])?, int(parts[2])?)?;
    Ok(locale::month_day_fa_ir(gregorian))
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::dom::Element;

    fn label(doc: &mut Document, raw: &str) -> crate::dom::ElementId {
        doc.push(Element::new().class(DATE_LABEL_CLASS).attr(DATE_ATTR, raw))
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("1402"), Some(1402));
        assert_eq!(parse_leading_int("  7"), Some(7));
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("+3"), Some(3));
        assert_eq!(parse_leading_int("-5x"), Some(-5));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("99999999999"), Some(i32::MAX));
    }

    #[test]
    fn test_jalali_to_gregorian_nowruz() {
        assert_eq!(jalali_to_gregorian(1402, 1, 1).unwrap(), date(2023, 3, 21));
    }

    #[test]
    fn test_jalali_to_gregorian_leap_year_end() {
        // 1403 is a leap year so Esfand has 30 days
        assert_eq!(
            jalali_to_gregorian(1403, 12, 30).unwrap(),
            date(2025, 3, 20)
        );
    }

    #[test]
    fn test_jalali_to_gregorian_out_of_range() {
        assert!(matches!(
            jalali_to_gregorian(1402, 13, 40),
            Err(ConvertError::MonthOutOfRange(13))
        ));
        assert!(matches!(
            jalali_to_gregorian(1402, -1, 5),
            Err(ConvertError::MonthOutOfRange(-1))
        ));
        // 1402 is not a leap year so Esfand ends on the 29th
        assert!(matches!(
            jalali_to_gregorian(1402, 12, 30),
            Err(ConvertError::DayOutOfRange(30))
        ));
        assert!(matches!(
            jalali_to_gregorian(1402, 1, 0),
            Err(ConvertError::DayOutOfRange(0))
        ));
    }

    #[test]
    fn test_format_valid_label() {
        let mut doc = Document::new();
        let id = label(&mut doc, "1402/1/1");

        format_date_labels(&mut doc);
        assert_eq!(doc.text(id), "۱ فروردین");
    }

    #[test]
    fn test_format_ignores_trailing_garbage_in_parts() {
        let mut doc = Document::new();
        let id = label(&mut doc, "1402x/1/1y");

        format_date_labels(&mut doc);
        assert_eq!(doc.text(id), "۱ فروردین");
    }

    #[test]
    fn test_malformed_shape_left_untouched() {
        let mut doc = Document::new();
        let two = label(&mut doc, "1402/1");
        let four = label(&mut doc, "1402/1/1/1");
        let empty = label(&mut doc, "");
        let plain = doc.push(Element::new().class(DATE_LABEL_CLASS).text("keep me"));

        format_date_labels(&mut doc);
        assert_eq!(doc.text(two), "");
        assert_eq!(doc.text(four), "");
        assert_eq!(doc.text(empty), "");
        assert_eq!(doc.text(plain), "keep me");
    }

    #[test]
    fn test_failed_conversion_does_not_stop_the_rest() {
        let mut doc = Document::new();
        let bad = label(&mut doc, "1402/13/40");
        let nan = label(&mut doc, "1402/x/1");
        let good = label(&mut doc, "1402/6/1");

        format_date_labels(&mut doc);
        assert_eq!(doc.text(bad), "");
        assert_eq!(doc.text(nan), "");
        assert_eq!(doc.text(good), "۱ شهریور");
    }

    #[test]
    fn test_format_is_idempotent() {
        let mut doc = Document::new();
        let id = label(&mut doc, "1402/12/10");

        format_date_labels(&mut doc);
        let once = doc.text(id).to_owned();
        format_date_labels(&mut doc);
        assert_eq!(doc.text(id), once);
        assert_eq!(once, "۱۰ اسفند");
    }
}
