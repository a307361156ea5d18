// std imports
use std::io::{self, Write};

// third-party imports
use config::ConfigError;
use owo_colors::OwoColorize;
use thiserror::Error;

// ---

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to serialize output: {0}")]
    Json(#[from] json::Error),
    #[error("{source}")]
    Syntax {
        #[source]
        source: lexkit::Error,
        text: String,
    },
    #[error("unknown token type {name:?}, use any of {known:?}")]
    UnknownTokenType { name: String, known: Vec<String> },
}

impl Error {
    /// Wraps a lexing or parsing error together with the source text it refers to.
    pub fn syntax(source: lexkit::Error, text: impl Into<String>) -> Self {
        Self::Syntax {
            source,
            text: text.into(),
        }
    }

    pub fn log(&self, colored: bool) {
        // nothing sensible can be done if stderr is gone
        let _ = self.log_to(&mut io::stderr(), colored);
    }

    pub fn log_to<W: Write>(&self, w: &mut W, colored: bool) -> io::Result<()> {
        match self {
            Self::Syntax { source, text } => {
                let rendered = source.pretty_print(text);
                let (header, rest) = rendered.split_once('\n').unwrap_or((&rendered, ""));
                if colored {
                    writeln!(w, "{}", header.bright_red().bold())?;
                } else {
                    writeln!(w, "{}", header)?;
                }
                write!(w, "{}", rest)
            }
            _ => {
                if colored {
                    writeln!(w, "{} {}", "error:".bright_red().bold(), self)
                } else {
                    writeln!(w, "error: {}", self)
                }
            }
        }
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
