//! Keyed access to the records of an owned name table.

use write_fonts::{
    read::tables::name::MacRomanMapping,
    tables::name::{Name, NameRecord},
    types::NameId,
};

use crate::{
    ids::{Locale, MacEncoding, NameField, Platform},
    NamingError,
};

/// Get and set name records by their identity key.
///
/// A record is identified by (name id, platform id, encoding id, language id).
pub trait NameTable {
    /// The string for this field in this locale, if a record exists.
    fn get_name(&self, field: NameField, locale: Locale) -> Option<&str>;

    /// Insert a record, or replace the string of the record with the same key.
    ///
    /// The records are kept sorted, as required for compilation.
    fn set_name(&mut self, value: &str, field: NameField, locale: Locale);
}

/// Returns an error if `value` cannot be stored in a record for `locale`.
///
/// Macintosh Roman records can only hold characters in the Mac Roman
/// character set; everything else is stored as UTF-16.
pub fn check_encodable(value: &str, field: NameField, locale: Locale) -> Result<(), NamingError> {
    let mac_roman = locale.platform == Platform::Macintosh
        && locale.encoding == u16::from(MacEncoding::Roman);
    if mac_roman && value.chars().any(|c| MacRomanMapping.encode(c).is_none()) {
        return Err(NamingError::NotMacRoman {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

fn matches_key(record: &NameRecord, name_id: NameId, locale: Locale) -> bool {
    record.name_id == name_id
        && record.platform_id == locale.platform_id()
        && record.encoding_id == locale.encoding
        && record.language_id == locale.language
}

impl NameTable for Name {
    fn get_name(&self, field: NameField, locale: Locale) -> Option<&str> {
        let name_id = field.into();
        self.name_record
            .iter()
            .find(|record| matches_key(record, name_id, locale))
            .map(|record| record.string.as_str())
    }

    fn set_name(&mut self, value: &str, field: NameField, locale: Locale) {
        let name_id = field.into();
        match self
            .name_record
            .iter_mut()
            .find(|record| matches_key(record, name_id, locale))
        {
            Some(record) => record.string = value.to_string().into(),
            None => self.name_record.push(NameRecord::new(
                locale.platform_id(),
                locale.encoding,
                locale.language,
                name_id,
                value.to_string().into(),
            )),
        }
        self.name_record.sort();
    }
}
