//! Selector parse errors.

use strum_macros::IntoStaticStr;
use thiserror::Error;

/// Why a selector string was rejected.
///
/// Only [`parse_selector`](crate::parse_selector) surfaces these. The query
/// entry points treat every parse error as "matches nothing".
#[derive(Debug, Clone, PartialEq, Eq, Error, IntoStaticStr)]
pub enum ParseError {
    /// The selector is blank, or one of its compounds has no usable part
    /// (no type name, `*`, `#`, `.` or `[` at all).
    #[error("empty selector")]
    Empty,

    /// A bracketed attribute clause could not be parsed.
    #[error("bad attribute selector in `{token}`: {fault}")]
    BadAttribute {
        /// The whitespace-delimited compound containing the clause.
        token: String,
        /// What was wrong with the clause.
        fault: AttributeFault,
    },

    /// A `#` or `.` that is not followed by a name.
    #[error("`{marker}` without a name in `{token}`")]
    MissingName {
        /// The offending compound.
        token: String,
        /// Either `#` or `.`.
        marker: char,
    },

    /// A character that cannot continue a compound selector.
    #[error("unexpected `{found}` at offset {offset} in `{token}`")]
    UnexpectedChar {
        /// The offending compound.
        token: String,
        /// The character that was not understood.
        found: char,
        /// Byte offset of `found` within `token`.
        offset: usize,
    },
}

impl ParseError {
    /// The variant name, without any of the offending input: `Empty`,
    /// `MissingName`, `BadAttribute(Unclosed)` and so on.
    ///
    /// There are finitely many kinds, so this can key diagnostics without
    /// growing with the input.
    #[must_use]
    pub fn kind(&self) -> String {
        let kind: &'static str = self.into();
        match self {
            Self::BadAttribute { fault, .. } => {
                let fault: &'static str = fault.into();
                format!("{kind}({fault})")
            }
            _ => kind.to_string(),
        }
    }
}

/// The specific defect in an `[attr...]` clause.
#[derive(Debug, Clone, PartialEq, Eq, Error, IntoStaticStr)]
pub enum AttributeFault {
    /// `[]` or `[=x]`.
    #[error("missing attribute name")]
    MissingName,
    /// Anything other than `]`, `=`, `~=`, `^=`, `$=`, `*=` or `|=` after the name.
    #[error("unknown operator `{0}`")]
    UnknownOperator(String),
    /// An operator with nothing after it, as in `[a=]`.
    #[error("missing value")]
    MissingValue,
    /// A quoted value whose closing quote never appears.
    #[error("unterminated string")]
    UnterminatedString,
    /// No closing `]`.
    #[error("missing `]`")]
    Unclosed,
    /// Extra characters between the value and the closing `]`.
    #[error("unexpected `{0}` before `]`")]
    Trailing(char),
}
