use strum::EnumMessage;
use strum_macros::{Display, EnumMessage, IntoStaticStr};

/// The operation that rejected its input.
///
/// Only operations that have a non-empty precondition show up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Operation {
    Head,
    Last,
    Tail,
    Init,
    Foldl1,
    Foldr1,
    Maximum,
    Minimum,
}

/// Prelude error.
///
/// Every failure the library can produce is a precondition failure on an
/// empty sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, EnumMessage)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// Empty sequence.
    ///
    /// The operation is only defined for sequences with at least one
    /// element, and an empty sequence was given.
    #[error("Prelude.{0}: empty list")]
    EmptySequence(Operation),
}

impl Error {
    pub(crate) fn empty_sequence(operation: Operation) -> Self {
        tracing::debug!(%operation, "empty sequence rejected");
        Error::EmptySequence(operation)
    }

    /// The operation that failed.
    pub fn operation(&self) -> Operation {
        match self {
            Error::EmptySequence(operation) => *operation,
        }
    }

    /// A stable code for this error, independent of the operation.
    pub fn code(&self) -> &'static str {
        match self {
            Error::EmptySequence(_) => "EmptySequence",
        }
    }

    pub fn message(&self) -> &str {
        self.documentation_pieces().0
    }

    pub fn note(&self) -> &str {
        self.documentation_pieces().1
    }

    fn documentation_pieces(&self) -> (&str, &str) {
        if let Some(documentation) = self.get_documentation() {
            let mut pieces = documentation.splitn(2, "\n\n");
            let first = pieces.next().unwrap_or("");
            let second = pieces.next().unwrap_or("");
            (first, second)
        } else {
            ("", "")
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    #[test]
    fn test_display() {
        assert_snapshot!(
            Error::EmptySequence(Operation::Foldr1).to_string(),
            @"Prelude.foldr1: empty list"
        );
    }

    #[test]
    fn test_operation_name() {
        let name: &'static str = Operation::Maximum.into();
        assert_eq!(name, "maximum");
    }

    #[test]
    fn test_operation_and_code() {
        let error = Error::empty_sequence(Operation::Init);
        assert_eq!(error.operation(), Operation::Init);
        assert_eq!(error.code(), "EmptySequence");
    }

    #[test]
    fn test_message_from_documentation() {
        let error = Error::EmptySequence(Operation::Head);
        assert!(error.message().contains("Empty sequence"));
        assert!(error.note().contains("at least one"));
    }
}
