//! Dropping name records outside the canonical locales.

use write_fonts::tables::name::Name;

use crate::ids::Locale;

/// Retain only records in the language of one of the [canonical locales].
///
/// Records for any other language or platform, including the Unicode, ISO and
/// custom platforms, are discarded. Returns the number of records removed.
///
/// [canonical locales]: Locale::CANONICAL
pub fn prune(table: &mut Name) -> usize {
    let before = table.name_record.len();
    table.name_record.retain(|record| {
        Locale::CANONICAL
            .iter()
            .any(|locale| locale.same_language(record.platform_id, record.language_id))
    });
    let removed = before - table.name_record.len();
    log::info!("Removed {removed} of {before} name records outside canonical locales");
    removed
}
