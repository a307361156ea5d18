// std imports
use std::fmt::{self, Display};

// third-party imports
use indexmap::IndexMap;
use lexkit::Scalar;
use serde::Serialize;

// ---

/// Section is a mapping of field names to values in insertion order.
pub type Section = IndexMap<String, Value>;

/// Value is a node of the parsed document tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Int(i64),
    Float(f64),
    Section(Section),
}

impl Value {
    #[inline]
    pub fn as_section(&self) -> Option<&Section> {
        match self {
            Self::Section(section) => Some(section),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value at the given path of nested field names.
    pub fn lookup<'a, I>(&self, path: I) -> Option<&Value>
    where
        I: IntoIterator<Item = &'a str>,
    {
        path.into_iter()
            .try_fold(self, |value, key| value.as_section().and_then(|section| section.get(key)))
    }
}

impl From<Scalar> for Value {
    #[inline]
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::String(s) => Self::String(s),
            Scalar::Int(i) => Self::Int(i),
            Scalar::Float(x) => Self::Float(x),
        }
    }
}

impl From<Section> for Value {
    #[inline]
    fn from(section: Section) -> Self {
        Self::Section(section)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{:?}", s),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{:?}", x),
            Self::Section(section) => {
                f.write_str("{")?;
                for (i, (key, value)) in section.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}
