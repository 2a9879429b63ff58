use std::fmt;
use serde::{Deserialize, Serialize};

/// Selects which user record to fetch. Always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Identifier(u8);

impl Identifier {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    /// Loaded at start-up when nothing else is configured.
    pub const DEFAULT: Self = Self(1);

    /// Returns `None` when `value` lies outside `MIN..=MAX`.
    pub fn new(value: i64) -> Option<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            u8::try_from(value).ok().map(Self)
        } else {
            None
        }
    }

    /// Parses field text, yielding a value only when it is an in-range integer.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<i64>().ok().and_then(Self::new)
    }
}

impl TryFrom<i64> for Identifier {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| {
            format!("identifier must be between {} and {}, got {}", Self::MIN, Self::MAX, value)
        })
    }
}

impl From<Identifier> for u8 {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What an empty identifier field means.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyInputPolicy {
    /// Clearing the field is ignored like any other unparsable text.
    #[default]
    Retain,
    /// Clearing the field empties the identifier.
    Clear,
}

/// Computes the identifier that results from the field's raw text.
///
/// Text that does not parse as a base-10 integer, or parses to a value
/// outside `1..=10`, leaves `current` untouched. Empty text follows `policy`.
pub fn next_identifier(
    current: Option<Identifier>,
    raw: &str,
    policy: EmptyInputPolicy,
) -> Option<Identifier> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return match policy {
            EmptyInputPolicy::Retain => current,
            EmptyInputPolicy::Clear => None,
        };
    }

    Identifier::parse(trimmed).or(current)
}

/// Text shown in the identifier field.
pub fn field_text(identifier: Option<Identifier>) -> String {
    identifier.map(|id| id.to_string()).unwrap_or_default()
}
