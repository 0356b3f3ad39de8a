//! Measurement units recognized in blood panel reports.

use std::sync::LazyLock;

use regex::Regex;

/// Units that mark a numeric token as a lab measurement.
///
/// Vendor reports are inconsistent about micro signs, so both "µ" and "u"
/// spellings appear.
pub const RECOGNIZED_UNITS: &[&str] = &[
    "ng/mL",
    "pg/mL",
    "ng/dL",
    "mg/dL",
    "g/dL",
    "g/L",
    "mg/L",
    "mmol/L",
    "µmol/L",
    "umol/L",
    "nmol/L",
    "pmol/L",
    "mIU/L",
    "mIU/mL",
    "µIU/mL",
    "uIU/mL",
    "IU/L",
    "IU/mL",
    "U/L",
    "mEq/L",
    "mcg/dL",
    "µg/dL",
    "ug/dL",
    "µg/mL",
    "ug/mL",
    "cells/µL",
    "cells/uL",
    "x10^3/µL",
    "x10^3/uL",
    "10^3/uL",
    "x10^6/µL",
    "x10^6/uL",
    "K/uL",
    "M/uL",
    "mm/hr",
    "fL",
    "pg",
    "%",
];

/// Alternation over all recognized units, longest first so e.g. "ng/mL" wins
/// over the trailing "pg" fragment.
pub(crate) fn unit_alternation() -> String {
    let mut units: Vec<&str> = RECOGNIZED_UNITS.to_vec();
    units.sort_by_key(|u| std::cmp::Reverse(u.len()));
    units
        .iter()
        .map(|u| regex::escape(u))
        .collect::<Vec<_>>()
        .join("|")
}

/// Any recognized unit, case-insensitive
pub static UNIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)({})", unit_alternation())).expect("static pattern")
});

/// Numeric token immediately followed by a recognized unit
pub static NUMBER_UNIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)(\d+(?:\.\d+)?)\s*({})",
        unit_alternation()
    ))
    .expect("static pattern")
});

/// Check whether a token is a recognized measurement unit.
#[must_use]
pub fn is_recognized_unit(s: &str) -> bool {
    let s = s.trim();
    RECOGNIZED_UNITS.iter().any(|u| u.eq_ignore_ascii_case(s))
}
