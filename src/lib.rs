//! Parser for section documents: nested `{ "key": value }` mappings of
//! strings, integers and floats, built on the rule-driven [`lexkit`] lexer.
//!
//! ```
//! use sectional::{Value, parse_str};
//!
//! let section = parse_str(r#"{"a": 1, "b": {"c": 2.5}}"#).unwrap();
//! assert_eq!(Value::Section(section).to_string(), r#"{"a": 1, "b": {"c": 2.5}}"#);
//! ```

// public modules
pub mod app;
pub mod cli;
pub mod error;
pub mod iter;
pub mod parse;
pub mod settings;
pub mod syntax;
pub mod value;

// public uses
pub use app::{App, Options};
pub use iter::TokenIterator;
pub use parse::{Parser, parse, parse_str};
pub use settings::Settings;
pub use value::{Section, Value};
