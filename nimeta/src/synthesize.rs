//! Deriving the full set of family and style names.

use std::fmt::Display;

use write_fonts::tables::name::Name;

use crate::{
    ids::{Locale, NameField},
    table::{check_encodable, NameTable},
    text::{collapse_spaces, postscript_safe, remove_regular, shrink},
    NamingError,
};

/// How the PostScript name (ID 6) is derived from the full name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PostScriptPolicy {
    /// Copy the full font name unchanged.
    #[default]
    Verbatim,
    /// Drop characters not allowed in a PostScript name.
    Sanitized,
}

/// The author-supplied pieces every derived name is built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamingInputs {
    base_name: String,
    class_name: String,
    style_name: String,
}

/// A single record to be written into the name table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivedName {
    pub field: NameField,
    pub locale: Locale,
    pub value: String,
}

impl NamingInputs {
    /// Returns an error if `base_name` contains "Regular".
    pub fn new(
        base_name: impl Into<String>,
        class_name: impl Into<String>,
        style_name: impl Into<String>,
    ) -> Result<Self, NamingError> {
        let base_name = base_name.into();
        check_base_name(&base_name)?;
        Ok(NamingInputs {
            base_name,
            class_name: class_name.into(),
            style_name: style_name.into(),
        })
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn style_name(&self) -> &str {
        &self.style_name
    }
}

impl Display for NamingInputs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "base '{}', class '{}', style '{}'",
            self.base_name, self.class_name, self.style_name
        )
    }
}

/// The base name must not include things like "Regular".
pub fn check_base_name(base_name: &str) -> Result<(), NamingError> {
    if remove_regular(base_name) != base_name {
        return Err(NamingError::RegularInBaseName(base_name.to_string()));
    }
    Ok(())
}

/// Compute every record derived from `inputs`, in write order.
pub fn derive_names(inputs: &NamingInputs, policy: PostScriptPolicy) -> Vec<DerivedName> {
    let NamingInputs {
        base_name: base,
        class_name: class,
        style_name: style,
    } = inputs;
    let mac = Locale::MAC_ENGLISH;
    let win = Locale::WINDOWS_ENGLISH;

    let full_name = format!("{base}{class}-{style}");
    let postscript_name = match policy {
        PostScriptPolicy::Verbatim => full_name.clone(),
        PostScriptPolicy::Sanitized => postscript_safe(&full_name),
    };

    let names = [
        (
            NameField::Family,
            mac,
            collapse_spaces(format!("{base} {class}").trim()),
        ),
        (
            NameField::Family,
            win,
            format!("{base} {class} {}", shrink(style)),
        ),
        (NameField::Subfamily, mac, style.clone()),
        (NameField::FullFont, win, full_name.clone()),
        (NameField::FullFont, mac, full_name),
        (NameField::PostScript, mac, postscript_name.clone()),
        (NameField::PostScript, win, postscript_name),
        (
            NameField::TypographicFamily,
            mac,
            format!("{base} {}", remove_regular(class)).trim().to_string(),
        ),
        (
            NameField::TypographicFamily,
            win,
            format!("{base} {class}").trim().to_string(),
        ),
        (NameField::TypographicSubfamily, win, style.clone()),
        // only read by legacy macOS font menus
        (
            NameField::CompatibleFull,
            mac,
            collapse_spaces(&format!("{base} {class} {}", shrink(class))),
        ),
        // blank WWS names mark IDs 16 and 17 as already WWS-compliant
        (NameField::WwsFamily, mac, String::new()),
        (NameField::WwsFamily, win, String::new()),
        (NameField::WwsSubfamily, mac, String::new()),
        (NameField::WwsSubfamily, win, String::new()),
    ];

    names
        .into_iter()
        .map(|(field, locale, value)| DerivedName {
            field,
            locale,
            value,
        })
        .collect()
}

/// Write every derived name into `table`, replacing existing records.
///
/// Returns an error, leaving `table` untouched, if a derived name cannot be
/// encoded for its locale.
pub fn synthesize(
    table: &mut Name,
    inputs: &NamingInputs,
    policy: PostScriptPolicy,
) -> Result<(), NamingError> {
    log::info!("Deriving names from {inputs}");
    let names = derive_names(inputs, policy);
    for name in &names {
        check_encodable(&name.value, name.field, name.locale)?;
    }
    for name in names {
        log::debug!(
            "{:?} ({:?}) = '{}'",
            name.field,
            name.locale.platform,
            name.value
        );
        table.set_name(&name.value, name.field, name.locale);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lookup(names: &[DerivedName], field: NameField, locale: Locale) -> Option<&str> {
        names
            .iter()
            .find(|name| name.field == field && name.locale == locale)
            .map(|name| name.value.as_str())
    }

    fn derive(base: &str, class: &str, style: &str) -> Vec<DerivedName> {
        let inputs = NamingInputs::new(base, class, style).unwrap();
        derive_names(&inputs, PostScriptPolicy::Verbatim)
    }

    const MAC: Locale = Locale::MAC_ENGLISH;
    const WIN: Locale = Locale::WINDOWS_ENGLISH;

    #[test]
    fn almarai_sans_bold() {
        let names = derive("Almarai", "Sans", "Bold");
        assert_eq!(lookup(&names, NameField::Family, MAC), Some("Almarai Sans"));
        assert_eq!(
            lookup(&names, NameField::Family, WIN),
            Some("Almarai Sans Bold")
        );
        assert_eq!(lookup(&names, NameField::Subfamily, MAC), Some("Bold"));
        assert_eq!(lookup(&names, NameField::Subfamily, WIN), None);
        for locale in Locale::CANONICAL {
            assert_eq!(
                lookup(&names, NameField::FullFont, locale),
                Some("AlmaraiSans-Bold")
            );
            assert_eq!(
                lookup(&names, NameField::PostScript, locale),
                Some("AlmaraiSans-Bold")
            );
            assert_eq!(lookup(&names, NameField::WwsFamily, locale), Some(""));
            assert_eq!(lookup(&names, NameField::WwsSubfamily, locale), Some(""));
        }
        assert_eq!(
            lookup(&names, NameField::TypographicFamily, MAC),
            Some("Almarai Sans")
        );
        assert_eq!(
            lookup(&names, NameField::TypographicSubfamily, WIN),
            Some("Bold")
        );
        assert_eq!(lookup(&names, NameField::TypographicSubfamily, MAC), None);
        assert_eq!(
            lookup(&names, NameField::CompatibleFull, MAC),
            Some("Almarai Sans Sans")
        );
        assert_eq!(lookup(&names, NameField::CompatibleFull, WIN), None);
        assert_eq!(names.len(), 15);
    }

    #[test]
    fn windows_family_abbreviates_style() {
        let names = derive("Almarai", "Sans", "ExtraBold Italic");
        assert_eq!(
            lookup(&names, NameField::Family, WIN),
            Some("Almarai Sans XBoldItalic")
        );
        assert_eq!(lookup(&names, NameField::Family, MAC), Some("Almarai Sans"));
    }

    #[test]
    fn compatible_full_abbreviates_class() {
        let names = derive("X", "ExtraBold", "Italic");
        assert_eq!(
            lookup(&names, NameField::CompatibleFull, MAC),
            Some("X ExtraBold XBold")
        );
    }

    #[test]
    fn regular_class_elided_on_mac_only() {
        let names = derive("Y", "Regular", "Italic");
        assert_eq!(lookup(&names, NameField::TypographicFamily, MAC), Some("Y"));
        assert_eq!(
            lookup(&names, NameField::TypographicFamily, WIN),
            Some("Y Regular")
        );
    }

    #[test]
    fn empty_class() {
        let names = derive("Diwani", "", "Bold");
        assert_eq!(lookup(&names, NameField::Family, MAC), Some("Diwani"));
        assert_eq!(lookup(&names, NameField::FullFont, MAC), Some("Diwani-Bold"));
        assert_eq!(
            lookup(&names, NameField::TypographicFamily, WIN),
            Some("Diwani")
        );
        assert_eq!(
            lookup(&names, NameField::CompatibleFull, MAC),
            Some("Diwani ")
        );
    }

    #[test]
    fn sanitized_postscript_name() {
        let inputs = NamingInputs::new("Almarai", "Sans", "Bold Italic").unwrap();
        let names = derive_names(&inputs, PostScriptPolicy::Sanitized);
        assert_eq!(
            lookup(&names, NameField::FullFont, MAC),
            Some("AlmaraiSans-Bold Italic")
        );
        assert_eq!(
            lookup(&names, NameField::PostScript, MAC),
            Some("AlmaraiSans-BoldItalic")
        );
    }

    #[test]
    fn regular_in_base_name_is_rejected() {
        let err = NamingInputs::new("Foo Regular", "Sans", "Bold").unwrap_err();
        assert!(matches!(err, NamingError::RegularInBaseName(name) if name == "Foo Regular"));
        // surrounding whitespace also changes the name after elision
        assert!(check_base_name(" Foo").is_err());
        assert!(check_base_name("Foo").is_ok());
    }

    #[test]
    fn synthesize_upserts_into_table() {
        let mut table = Name::default();
        table.set_name("Old Family", NameField::Family, MAC);
        table.set_name("Old Copyright", NameField::Copyright, MAC);
        let inputs = NamingInputs::new("Almarai", "Sans", "Bold").unwrap();
        synthesize(&mut table, &inputs, PostScriptPolicy::Verbatim).unwrap();

        assert_eq!(table.get_name(NameField::Family, MAC), Some("Almarai Sans"));
        assert_eq!(
            table.get_name(NameField::Copyright, MAC),
            Some("Old Copyright")
        );
        // 15 derived records plus the untouched copyright
        assert_eq!(table.name_record.len(), 16);
    }

    #[test]
    fn non_mac_roman_style_leaves_table_untouched() {
        let mut table = Name::default();
        table.set_name("Old Family", NameField::Family, MAC);
        let before = table.clone();
        // Arabic is fine on Windows, but the Macintosh subfamily is Mac Roman
        let inputs = NamingInputs::new("Almarai", "Sans", "عريض").unwrap();
        let err = synthesize(&mut table, &inputs, PostScriptPolicy::Verbatim).unwrap_err();
        assert!(matches!(err, NamingError::NotMacRoman { .. }));
        assert_eq!(table, before);
    }
}
