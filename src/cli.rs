// std imports
use std::path::PathBuf;

// third-party imports
use clap::Parser;

// local imports
use crate::settings::{ColorOption, OutputFormat};

// ---

/// Parses section documents and prints the resulting value tree.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Color options for diagnostics, overrides the configured value.
    #[arg(long, env = "SECTIONAL_COLOR", overrides_with = "color")]
    #[arg(value_enum)]
    pub color: Option<ColorOption>,

    /// Output format of the value tree, overrides the configured value.
    #[arg(short, long, env = "SECTIONAL_OUTPUT", overrides_with = "output")]
    #[arg(value_enum)]
    pub output: Option<OutputFormat>,

    /// Print the token sequence instead of the value tree.
    #[arg(long)]
    pub tokens: bool,

    /// Keep tokens of the given types that would otherwise be discarded, requires --tokens.
    #[arg(long, value_name = "TYPE", num_args = 1.., requires = "tokens")]
    pub keep: Vec<String>,

    /// Additional configuration file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Input file, use '-' or omit to read from stdin.
    #[arg(name = "FILE")]
    pub input: Option<PathBuf>,
}

impl Opt {
    /// Returns the input file path unless input should be read from stdin.
    pub fn input_file(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|path| path.as_os_str() != "-")
    }
}
