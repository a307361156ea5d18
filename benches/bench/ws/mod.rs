// workspace imports
use super::{ND, samples};

const GROUP: &str = "ws";

pub mod lex;
pub mod parse;
