//! binary naming tool
//!
//! Takes a font file, asks for the class and style names, and writes a copy of
//! the font with rewritten names to the output directory.

use std::io::{BufRead, ErrorKind, Write};
use std::path::PathBuf;

use clap::Parser;
use nimeta::{
    fix_names, output_path, read_font_file, write_font_file, FixOptions, NamingError,
    PostScriptPolicy, StyleContext, StylePrompt, DEFAULT_OUTPUT_DIR, DEFAULT_SAMPLE_TEXT,
};
use write_fonts::read::FontRef;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The input font file.
    input: PathBuf,

    /// The family root; defaults to the font's Macintosh English family name
    #[arg(long)]
    base_name: Option<String>,

    /// The class name; asked for interactively if missing
    #[arg(long)]
    class_name: Option<String>,

    /// The style name; asked for interactively if missing
    #[arg(long)]
    style_name: Option<String>,

    /// Text written to the sample text name (ID 19)
    #[arg(long, default_value = DEFAULT_SAMPLE_TEXT)]
    sample_text: String,

    /// Directory the fixed font is written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Drop characters not allowed in PostScript names from name ID 6
    #[arg(long)]
    postscript_safe: bool,
}

/// Asks on stdin for whatever was not given on the command line.
struct Terminal {
    class_name: Option<String>,
    style_name: Option<String>,
}

impl Terminal {
    fn ask(question: &str, context: &StyleContext) -> Result<String, NamingError> {
        print!("nameID2 is {context}, what is the {question}? ");
        std::io::stdout().flush().map_err(NamingError::Prompt)?;
        read_answer(&mut std::io::stdin().lock())
    }
}

/// Read one line, without its line ending.
///
/// Running out of input is an error, not an empty answer.
fn read_answer(reader: &mut impl BufRead) -> Result<String, NamingError> {
    let mut line = String::new();
    if reader.read_line(&mut line).map_err(NamingError::Prompt)? == 0 {
        return Err(NamingError::Prompt(ErrorKind::UnexpectedEof.into()));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

impl StylePrompt for Terminal {
    fn class_name(&mut self, context: &StyleContext) -> Result<String, NamingError> {
        match self.class_name.take() {
            Some(class_name) => Ok(class_name),
            None => Self::ask("class name", context),
        }
    }

    fn style_name(&mut self, context: &StyleContext) -> Result<String, NamingError> {
        match self.style_name.take() {
            Some(style_name) => Ok(style_name),
            None => Self::ask("style name", context),
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), NamingError> {
    let options = FixOptions {
        base_name: args.base_name,
        sample_text: args.sample_text,
        postscript: if args.postscript_safe {
            PostScriptPolicy::Sanitized
        } else {
            PostScriptPolicy::Verbatim
        },
    };
    let mut prompt = Terminal {
        class_name: args.class_name,
        style_name: args.style_name,
    };

    let font_bytes = read_font_file(&args.input)?;
    let font = FontRef::new(&font_bytes)?;
    println!("Font: {}", args.input.display());

    let output_bytes = fix_names(font, &options, &mut prompt)?;
    let output_file = output_path(&args.input, &args.output_dir);
    write_font_file(&output_file, &output_bytes)?;
    log::info!("Wrote {}", output_file.display());
    Ok(())
}
