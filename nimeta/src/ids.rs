//! Identifiers from the OpenType naming and OS/2 specifications.
//!
//! Every platform, encoding, language and name identifier used by this crate
//! is defined here exactly once.
//!
//! See <https://learn.microsoft.com/en-us/typography/opentype/spec/name>

use num_enum::{IntoPrimitive, TryFromPrimitive};
use write_fonts::types::NameId;

/// Named values of `usWeightClass`.
///
/// See <https://learn.microsoft.com/en-us/typography/opentype/spec/os2#usweightclass>
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum FontWeight {
    Thin = 100,
    /// aka UltraLight
    ExtraLight = 200,
    Light = 300,
    /// aka Regular
    Normal = 400,
    Medium = 500,
    /// aka DemiBold
    SemiBold = 600,
    Bold = 700,
    /// aka UltraBold
    ExtraBold = 800,
    /// aka Heavy
    Black = 900,
    /// aka UltraBlack
    ExtraBlack = 950,
}

/// Named font widths, in thousandths of the normal width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum FontWidth {
    UltraCondensed = 500,
    /// aka Compressed, but not always
    ExtraCondensed = 625,
    Condensed = 750,
    SemiCondensed = 875,
    /// aka Normal
    Medium = 1000,
    SemiExpanded = 1125,
    Expanded = 1250,
    ExtraExpanded = 1500,
    UltraExpanded = 2000,
}

impl FontWidth {
    /// Map an OS/2 `usWidthClass` (1 through 9) to a named width.
    ///
    /// See <https://learn.microsoft.com/en-us/typography/opentype/spec/os2#uswidthclass>
    pub fn from_width_class(class: u16) -> Option<Self> {
        Some(match class {
            1 => FontWidth::UltraCondensed,
            2 => FontWidth::ExtraCondensed,
            3 => FontWidth::Condensed,
            4 => FontWidth::SemiCondensed,
            5 => FontWidth::Medium,
            6 => FontWidth::SemiExpanded,
            7 => FontWidth::Expanded,
            8 => FontWidth::ExtraExpanded,
            9 => FontWidth::UltraExpanded,
            _ => return None,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum Platform {
    Unicode = 0,
    Macintosh = 1,
    /// deprecated
    Iso = 2,
    Windows = 3,
    Custom = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum MacEncoding {
    Roman = 0,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum WindowsEncoding {
    Symbol = 0,
    /// UCS-2, stored as UTF-16BE
    Ucs2 = 1,
    Utf32 = 10,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum MacLanguage {
    English = 0,
    French = 1,
    Arabic = 12,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum WindowsLanguage {
    ArabicSaudi = 0x0401,
    EnglishUs = 0x0409,
    ArabicJordan = 0x2C01,
}

/// The predefined name identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum NameField {
    Copyright = 0,
    Family = 1,
    Subfamily = 2,
    Unique = 3,
    /// human-readable
    FullFont = 4,
    Version = 5,
    PostScript = 6,
    Trademark = 7,
    Manufacturer = 8,
    Designer = 9,
    Description = 10,
    VendorUrl = 11,
    DesignerUrl = 12,
    License = 13,
    LicenseUrl = 14,
    Reserved = 15,
    /// aka Preferred Family
    TypographicFamily = 16,
    /// aka Preferred Subfamily
    TypographicSubfamily = 17,
    CompatibleFull = 18,
    SampleText = 19,
    PostScriptCid = 20,
    WwsFamily = 21,
    WwsSubfamily = 22,
    LightBackgroundPalette = 23,
    DarkBackgroundPalette = 24,
    VariationsPostScriptPrefix = 25,
}

impl From<NameField> for NameId {
    fn from(field: NameField) -> Self {
        NameId::new(field.into())
    }
}

/// A (platform, encoding, language) triplet scoping a name record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Locale {
    pub platform: Platform,
    pub encoding: u16,
    pub language: u16,
}

impl Locale {
    pub const MAC_ENGLISH: Locale = Locale {
        platform: Platform::Macintosh,
        encoding: MacEncoding::Roman as u16,
        language: MacLanguage::English as u16,
    };

    pub const WINDOWS_ENGLISH: Locale = Locale {
        platform: Platform::Windows,
        encoding: WindowsEncoding::Ucs2 as u16,
        language: WindowsLanguage::EnglishUs as u16,
    };

    /// The only locales retained in a fixed font, one per platform.
    pub const CANONICAL: [Locale; 2] = [Locale::MAC_ENGLISH, Locale::WINDOWS_ENGLISH];

    pub fn platform_id(&self) -> u16 {
        self.platform.into()
    }

    /// `true` if a record with this platform and language belongs to this
    /// locale's language, regardless of encoding.
    pub fn same_language(&self, platform_id: u16, language_id: u16) -> bool {
        self.platform_id() == platform_id && self.language == language_id
    }
}
