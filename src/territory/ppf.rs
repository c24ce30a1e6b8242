//! Country-code normalization for PPF transmission.

use super::table::is_drom_com;

/// Map a country code to the code transmitted to the PPF.
///
/// The platform only recognizes `"FR"` for French territories, so every
/// DROM and COM code collapses to `"FR"`. Foreign codes — and anything
/// the territory table does not know, including the empty string — pass
/// through unchanged. This is the single normalization point before a
/// payload leaves the pipeline; a nullable country on the caller's side
/// is `country.map(ppf_country_code)`.
pub fn ppf_country_code(code: &str) -> &str {
    if is_drom_com(code) { "FR" } else { code }
}
