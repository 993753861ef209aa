//! Page behaviors of the booking help guide over a synthetic document tree.
//!
//! The two behaviors are independent and touch disjoint parts of the tree:
//! - [`accordion`]: single-open toggling of the help-guide panels.
//! - [`date_label`]: rewrites `data-date` Jalali dates into fa-IR month+day
//!   labels.
//!
//! The hosting environment calls [`initialize`] once per page load with the
//! loaded document. There is no implicit global registration so everything is
//! testable against a hand-built [`dom::Document`].
pub mod accordion;
pub mod date_label;
pub mod dom;
pub mod locale;

use accordion::Accordion;
use dom::Document;

/// Jalali months in Persian script, as fa-IR renders them.
// Note to future self: these are the official spellings as ICU has them.
// do NOT change!
pub const PERSIAN_MONTHS: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Run both page-load behaviors once against the given document.
///
/// Formats every Jalali date label in place, then binds the accordion. The
/// returned [`Accordion`] is what the host wires click events into.
pub fn initialize(doc: &mut Document) -> Accordion {
    date_label::format_date_labels(doc);
    Accordion::bind(doc)
}
