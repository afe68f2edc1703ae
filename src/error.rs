use std::fmt;

use thiserror::Error;

/// What kind of name a failed lookup was for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup {
    Term,
    InputVariable,
    OutputVariable,
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Term => f.write_str("term"),
            Self::InputVariable => f.write_str("input variable"),
            Self::OutputVariable => f.write_str("output variable"),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FuzzyError {
    /// A term or variable name that is not registered. Always a configuration bug.
    #[error("{kind} '{name}' not found in {owner}")]
    NotFound {
        kind: Lookup,
        name: String,
        owner: String,
    },

    /// Label sequences or matrix dimensions that do not line up.
    #[error("{operation}: incompatible shapes (expected {expected}, found {found})")]
    IncompatibleShape {
        operation: &'static str,
        expected: String,
        found: String,
    },

    #[error("invalid domain for '{name}': {reason}")]
    InvalidDomain { name: String, reason: String },
}

impl FuzzyError {
    pub(crate) fn not_found(kind: Lookup, name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
            owner: owner.into(),
        }
    }

    pub(crate) fn incompatible(
        operation: &'static str,
        expected: impl fmt::Debug,
        found: impl fmt::Debug,
    ) -> Self {
        Self::IncompatibleShape {
            operation,
            expected: format!("{expected:?}"),
            found: format!("{found:?}"),
        }
    }
}

pub type Result<T, E = FuzzyError> = std::result::Result<T, E>;

#[test]
fn test_error_messages_name_the_culprit() {
    let err = FuzzyError::not_found(Lookup::Term, "Lukewarm", "linguistic variable 'Temperature'");

    assert_eq!(
        err.to_string(),
        "term 'Lukewarm' not found in linguistic variable 'Temperature'"
    );

    let err = FuzzyError::incompatible("compose_max_min", ["a", "b"], ["a", "c"]);

    assert_eq!(
        err.to_string(),
        "compose_max_min: incompatible shapes (expected [\"a\", \"b\"], found [\"a\", \"c\"])"
    );
}
