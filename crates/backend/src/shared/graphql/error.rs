use thiserror::Error;

/// Failures while parsing or executing a storefront query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphQlError {
    #[error("Syntax Error: {0}")]
    Syntax(String),

    #[error("{0} are not supported by this endpoint")]
    Unsupported(&'static str),

    #[error("Cannot query field \"{field}\" on type \"{type_name}\".")]
    UnknownField {
        field: String,
        type_name: &'static str,
    },

    #[error("Field \"{field}\" of type \"{type_name}\" must have a selection of subfields.")]
    MissingSelection {
        field: String,
        type_name: &'static str,
    },

    #[error("Field \"{field}\" must not have a selection since type \"{type_name}\" has no subfields.")]
    UnexpectedSelection {
        field: String,
        type_name: &'static str,
    },
}
