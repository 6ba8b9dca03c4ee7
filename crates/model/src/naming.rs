//! Export file-name convention.

use chrono::NaiveDate;

/// Build the conventional export file name:
/// `<name-with-spaces-replaced-by-underscore>_CV_<ISO-date>.<ext>`.
///
/// Whitespace runs in the name collapse to a single underscore. The
/// date belongs to the file name only; document bodies carry no
/// timestamps so renders stay deterministic.
pub fn cv_file_name(name: &str, date: NaiveDate, extension: &str) -> String {
    let stem = name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{stem}_CV_{}.{extension}", date.format("%Y-%m-%d"))
}
