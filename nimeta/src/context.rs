//! What the operator is shown before naming a font.

use std::fmt::Display;

use write_fonts::{
    read::{FontRef, TableProvider},
    tables::name::Name,
};

use crate::{
    ids::{FontWeight, FontWidth, Locale, NameField},
    table::NameTable,
};

/// The existing style description of a font.
///
/// This is only ever displayed; none of it feeds into the derived names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleContext {
    /// The existing Macintosh English subfamily name.
    pub subfamily: Option<String>,
    pub weight: Option<FontWeight>,
    pub width: Option<FontWidth>,
}

impl StyleContext {
    pub fn new(font: &FontRef, name: &Name) -> Self {
        let subfamily = name
            .get_name(NameField::Subfamily, Locale::MAC_ENGLISH)
            .map(str::to_string);
        if subfamily.is_none() {
            log::warn!("font has no Macintosh English subfamily name");
        }
        let (weight, width) = match font.os2() {
            Ok(os2) => (
                FontWeight::try_from(os2.us_weight_class()).ok(),
                FontWidth::from_width_class(os2.us_width_class()),
            ),
            Err(e) => {
                log::debug!("no usable OS/2 table: {e}");
                (None, None)
            }
        };
        StyleContext {
            subfamily,
            weight,
            width,
        }
    }
}

impl Display for StyleContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.subfamily {
            Some(subfamily) => write!(f, "{subfamily}")?,
            None => write!(f, "<missing>")?,
        }
        match (self.weight, self.width) {
            (None, None) => Ok(()),
            (Some(weight), None) => write!(f, " ({weight:?})"),
            (None, Some(width)) => write!(f, " ({width:?})"),
            (Some(weight), Some(width)) => write!(f, " ({weight:?}, {width:?})"),
        }
    }
}
