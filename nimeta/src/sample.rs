//! The sample text name (ID 19).

use write_fonts::tables::name::Name;

use crate::{
    ids::{Locale, NameField},
    table::{check_encodable, NameTable},
    NamingError,
};

/// A pangram, shown by font pickers that read name ID 19.
pub const DEFAULT_SAMPLE_TEXT: &str = "Realigned equestrian fez bewilders picky monarch";

/// Write `text` as the sample text of every canonical locale.
pub fn set_sample_text(table: &mut Name, text: &str) -> Result<(), NamingError> {
    log::debug!("Setting sample text '{text}'");
    for locale in Locale::CANONICAL {
        check_encodable(text, NameField::SampleText, locale)?;
    }
    for locale in Locale::CANONICAL {
        table.set_name(text, NameField::SampleText, locale);
    }
    Ok(())
}
