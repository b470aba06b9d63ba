//! Rewrite the naming records of a font.
//!
//! Given a base family name, a class qualifier and a style name, every
//! family, subfamily, full, PostScript, typographic and WWS name is derived
//! and written for the Macintosh English and Windows English (US) locales.
//! Records for every other locale are then dropped, and a sample text is set.
//!
//! The name table is read and written with [write_fonts]; all other tables of
//! the font are copied through unchanged.

mod context;
pub mod ids;
mod prune;
mod sample;
mod synthesize;
pub mod table;
pub mod text;

pub use context::StyleContext;
pub use prune::prune;
pub use sample::{set_sample_text, DEFAULT_SAMPLE_TEXT};
pub use synthesize::{
    check_base_name, derive_names, synthesize, DerivedName, NamingInputs, PostScriptPolicy,
};

use std::path::{Path, PathBuf};

use thiserror::Error;
use write_fonts::{
    from_obj::ToOwnedTable,
    read::{FontRef, ReadError, TableProvider},
    tables::name::Name,
    BuilderError, FontBuilder,
};

use ids::{Locale, NameField};
use table::NameTable;

/// The directory fixed fonts are written to, unless another is requested.
pub const DEFAULT_OUTPUT_DIR: &str = "Fixed";

#[derive(Debug, Error)]
pub enum NamingError {
    #[error("Base name '{0}' must not include 'Regular'")]
    RegularInBaseName(String),

    #[error("{field:?} name '{value}' cannot be encoded as Mac Roman")]
    NotMacRoman { field: NameField, value: String },

    #[error("Error reading font data: {0}")]
    Read(#[from] ReadError),

    #[error(transparent)]
    Build(#[from] BuilderError),

    #[error("Error accessing '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading input: {0}")]
    Prompt(#[source] std::io::Error),
}

/// A source for the class and style names of a font.
///
/// The binary asks on the terminal; tests and scripted callers use
/// [`FixedStyle`].
pub trait StylePrompt {
    fn class_name(&mut self, context: &StyleContext) -> Result<String, NamingError>;
    fn style_name(&mut self, context: &StyleContext) -> Result<String, NamingError>;
}

/// Class and style names known up front.
#[derive(Clone, Debug, Default)]
pub struct FixedStyle {
    pub class_name: String,
    pub style_name: String,
}

impl FixedStyle {
    pub fn new(class_name: impl Into<String>, style_name: impl Into<String>) -> Self {
        FixedStyle {
            class_name: class_name.into(),
            style_name: style_name.into(),
        }
    }
}

impl StylePrompt for FixedStyle {
    fn class_name(&mut self, _: &StyleContext) -> Result<String, NamingError> {
        Ok(self.class_name.clone())
    }

    fn style_name(&mut self, _: &StyleContext) -> Result<String, NamingError> {
        Ok(self.style_name.clone())
    }
}

/// Settings for [`fix_names`].
#[derive(Clone, Debug)]
pub struct FixOptions {
    /// The family root; taken from the font's own family name if `None` or
    /// empty.
    pub base_name: Option<String>,
    pub sample_text: String,
    pub postscript: PostScriptPolicy,
}

impl Default for FixOptions {
    fn default() -> Self {
        FixOptions {
            base_name: None,
            sample_text: DEFAULT_SAMPLE_TEXT.to_string(),
            postscript: PostScriptPolicy::default(),
        }
    }
}

/// Rewrite the names of `font`, returning the bytes of the new font.
///
/// Either every step succeeds or an error is returned; the input is never
/// partially modified.
pub fn fix_names(
    font: FontRef,
    options: &FixOptions,
    prompt: &mut impl StylePrompt,
) -> Result<Vec<u8>, NamingError> {
    let mut name: Name = font.name()?.to_owned_table();

    let base_name = match options.base_name.as_deref().filter(|b| !b.is_empty()) {
        Some(base_name) => base_name.to_string(),
        None => match name.get_name(NameField::Family, Locale::MAC_ENGLISH) {
            Some(family) => family.to_string(),
            None => {
                log::warn!("font has no Macintosh English family name, using an empty base name");
                String::new()
            }
        },
    };
    check_base_name(&base_name)?;

    let context = StyleContext::new(&font, &name);
    let class_name = prompt.class_name(&context)?;
    let style_name = prompt.style_name(&context)?;
    let inputs = NamingInputs::new(base_name, class_name, style_name)?;

    synthesize(&mut name, &inputs, options.postscript)?;
    prune(&mut name);
    set_sample_text(&mut name, &options.sample_text)?;

    Ok(FontBuilder::new()
        .add_table(&name)?
        .copy_missing_tables(font)
        .build())
}

/// The path a fixed copy of `input` is written to.
pub fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    match input.file_name() {
        Some(file_name) => output_dir.join(file_name),
        None => output_dir.join(input),
    }
}

pub fn read_font_file(path: &Path) -> Result<Vec<u8>, NamingError> {
    std::fs::read(path).map_err(|source| NamingError::Io {
        path: path.to_owned(),
        source,
    })
}

/// Write `bytes` to `path`, creating the parent directory if necessary.
pub fn write_font_file(path: &Path, bytes: &[u8]) -> Result<(), NamingError> {
    let io_err = |source| NamingError::Io {
        path: path.to_owned(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, bytes).map_err(io_err)
}
