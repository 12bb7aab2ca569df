//! Plausibility checks for partial date strings.
//!
//! Enrichment sources encode unknown birth dates with sentinel values
//! ("0000-..." years, "-00-00" month/day) or BCE-style negative years.
//! The predicate here works on the raw string on purpose: it validates a
//! plausibility window, not a real calendar date, so it must behave the
//! same everywhere regardless of any date-parsing library.

/// Earliest birth year considered plausible for a catalog creator.
const MIN_YEAR: i32 = 1000;
/// Latest birth year considered plausible.
const MAX_YEAR: i32 = 2100;

/// Whether `value` is a displayable birth date.
///
/// Accepts partial dates of the form `YYYY[-MM[-DD]]`. Rejects absent or
/// empty values, negative years, sentinel zero segments, and years outside
/// `[1000, 2100]`.
pub fn is_valid_birth_date(value: Option<&str>) -> bool {
    let Some(date) = value else {
        return false;
    };
    if date.is_empty() || date.starts_with('-') {
        return false;
    }
    if date.contains("0000-") || date.contains("-00-00") {
        return false;
    }

    let year_segment = date.split('-').next().unwrap_or_default();
    match year_segment.parse::<i32>() {
        Ok(year) => (MIN_YEAR..=MAX_YEAR).contains(&year),
        Err(_) => false,
    }
}
