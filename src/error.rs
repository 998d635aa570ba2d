//! Error taxonomy for the numeric tower.

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure an arithmetic call can surface. Callers are expected to
/// match on the variant; an indeterminate form is recoverable in a way an
/// invalid construction is not.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("argument {given:?} is not a valid {kind}")]
    InvalidConstruction {
        kind: &'static str,
        given: String,
    },

    #[error("the {op} operation has no defined result ({detail})")]
    Indeterminate {
        op: &'static str,
        detail: String,
    },

    #[error("{op} is not implemented for {kind} values")]
    NotImplemented {
        kind: &'static str,
        op: &'static str,
    },

    #[error("the {op} operation overflows its native range")]
    Overflow {
        op: &'static str,
    },

    #[error("precision backend rejected {op}: {message}")]
    Backend {
        op: &'static str,
        message: String,
    },
}
