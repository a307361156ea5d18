// std imports
use std::io::Write;

// third-party imports
use lexkit::{Lexer, Token, TokenType};

// local imports
use crate::{
    error::*,
    parse::parse,
    settings::OutputFormat,
    syntax,
    value::{Section, Value},
};

// ---

#[derive(Debug, Clone)]
pub struct Options {
    pub discard: Vec<TokenType>,
    pub output: OutputFormat,
    pub tokens_only: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            discard: syntax::DEFAULT_DISCARD.to_vec(),
            output: OutputFormat::Debug,
            tokens_only: false,
        }
    }
}

pub struct App {
    options: Options,
}

impl App {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Lexes and parses `text` and writes the result to `output`.
    pub fn run(&self, text: &str, mut output: impl Write) -> Result<()> {
        let tokens = self.lexer().lex(text).map_err(|err| Error::syntax(err, text))?;

        if self.options.tokens_only {
            return self.write_tokens(&tokens, &mut output);
        }

        let section = parse(&tokens).map_err(|err| Error::syntax(err, text))?;
        self.write_section(section, &mut output)
    }

    fn lexer(&self) -> Lexer {
        syntax::lexer()
            .keeping(syntax::DEFAULT_DISCARD)
            .discarding(self.options.discard.iter().copied())
    }

    fn write_tokens<W: Write>(&self, tokens: &[Token], output: &mut W) -> Result<()> {
        for token in tokens {
            writeln!(output, "{}", token)?;
        }
        Ok(())
    }

    fn write_section<W: Write>(&self, section: Section, output: &mut W) -> Result<()> {
        match self.options.output {
            OutputFormat::Debug => writeln!(output, "{}", Value::Section(section))?,
            OutputFormat::Json => {
                json::to_writer_pretty(&mut *output, &section)?;
                writeln!(output)?;
            }
        }
        Ok(())
    }
}
