//! Country record domain model.
//!
//! A [`CountryRecord`] pairs a country or territory with its international
//! dial code and flag. Records are compiled into the binary (see
//! [`crate::domain::dataset`]) and never mutated, so every field borrows
//! `'static` data and the type is `Copy`.

use serde::Serialize;

/// One entry of the compiled-in country table.
///
/// # Fields
///
/// - `id`: lowercase ISO 3166-1 alpha-2 code, unique across the table
/// - `name`: English display name
/// - `code`: dial code without the leading `+`, ASCII digits only
/// - `flag`: regional-indicator flag emoji
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CountryRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub code: &'static str,
    pub flag: &'static str,
}

impl CountryRecord {
    /// Returns the dial code formatted for display, e.g. `"+44"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dialpick::domain::CountryRecord;
    ///
    /// let uk = CountryRecord { id: "gb", name: "United Kingdom", code: "44", flag: "🇬🇧" };
    /// assert_eq!(uk.dial_code(), "+44");
    /// ```
    #[must_use]
    pub fn dial_code(&self) -> String {
        format_dial_code(self.code)
    }
}

/// Formats a bare dial code for display by prefixing `+`.
///
/// The code is not validated; an unknown code renders the same way as a
/// known one.
#[must_use]
pub fn format_dial_code(code: &str) -> String {
    format!("+{code}")
}
