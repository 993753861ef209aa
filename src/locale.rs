//! Holds fa-IR rendering of dates, the slice of it the labels need.
//!
//! The Persian (Iran) locale shows civil dates in the Jalali calendar with
//! Persian-script month names and Persian digits, so rendering a Gregorian
//! date goes back through [`jelal`] first.

use jelal::MonthDay;
use jiff::civil;

use crate::PERSIAN_MONTHS;

/// U+06F0..U+06F9, the Extended (Persian) Arabic-Indic digits fa-IR uses.
const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Replace every ASCII digit with its Persian counterpart.
pub fn to_persian_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.is_ascii_digit() {
            true => PERSIAN_DIGITS[(c as u8 - b'0') as usize],
            false => c,
        })
        .collect()
}

/// Render a Gregorian date as fa-IR does with long month and numeric day.
///
/// `2023-03-21` comes out as `"۱ فروردین"`: bare day (no leading zero), then
/// the full Jalali month name.
pub fn month_day_fa_ir(date: civil::Date) -> String {
    let md = MonthDay::from(jelal::Date::from(date));
    format!(
        "{} {}",
        to_persian_digits(&md.day().to_string()),
        PERSIAN_MONTHS[md.month().get() as usize - 1],
    )
}
