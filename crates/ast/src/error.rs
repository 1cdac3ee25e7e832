use crate::node::{Capability, NodeKind};
use global_common::SourceLocation;
use std::{
    borrow::Cow,
    fmt::{self, Display, Formatter},
};

pub type PResult<T> = Result<T, Error>;

/// Note: this struct is 8 bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    error: Box<(SourceLocation, SyntaxError)>,
}

impl Error {
    #[cold]
    pub fn new(loc: SourceLocation, error: SyntaxError) -> Self {
        Self {
            error: Box::new((loc, error)),
        }
    }

    /// Location of the offending value. Unset when the offending value had no
    /// location of its own, e.g. an absent entry.
    pub fn loc(&self) -> SourceLocation {
        self.error.0
    }

    pub fn kind(&self) -> &SyntaxError {
        &self.error.1
    }

    pub fn into_kind(self) -> SyntaxError {
        self.error.1
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kind().msg())?;
        if let Some(start) = self.loc().start() {
            write!(f, " at {}", start)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SyntaxError {
    /// An absent entry (elision) in a collection that does not allow them.
    AbsentElement {
        field: &'static str,
        index: usize,
    },
    /// A node that lacks the capability the field requires.
    MissingCapability {
        field: &'static str,
        index: Option<usize>,
        expected: Capability,
        found: NodeKind,
    },
    NotAnArray {
        field: &'static str,
    },
    /// A value that is not a node at all.
    NotANode {
        field: &'static str,
        index: Option<usize>,
    },
    UnknownNodeType(String),
    UnknownTokenType(String),
    MissingField {
        node: &'static str,
        field: &'static str,
    },
    InvalidField {
        node: &'static str,
        field: &'static str,
        expected: &'static str,
    },
}

impl SyntaxError {
    pub fn msg(&self) -> Cow<'static, str> {
        match self {
            SyntaxError::AbsentElement { field, index } => {
                format!("`{}[{}]` must not be empty", field, index).into()
            }
            SyntaxError::MissingCapability {
                field,
                index: Some(index),
                expected,
                found,
            } => format!(
                "`{}[{}]` must be a {}, found {}",
                field,
                index,
                expected.name(),
                found
            )
            .into(),
            SyntaxError::MissingCapability {
                field,
                index: None,
                expected,
                found,
            } => format!("`{}` must be a {}, found {}", field, expected.name(), found).into(),
            SyntaxError::NotAnArray { field } => format!("`{}` must be an array", field).into(),
            SyntaxError::NotANode {
                field,
                index: Some(index),
            } => format!("`{}[{}]` is not a node", field, index).into(),
            SyntaxError::NotANode { field, index: None } => {
                format!("`{}` is not a node", field).into()
            }
            SyntaxError::UnknownNodeType(ty) => format!("unknown node type `{}`", ty).into(),
            SyntaxError::UnknownTokenType(ty) => format!("unknown token type `{}`", ty).into(),
            SyntaxError::MissingField { node, field } => {
                format!("{} is missing the `{}` field", node, field).into()
            }
            SyntaxError::InvalidField {
                node,
                field,
                expected,
            } => format!("`{}` of {} must be {}", field, node, expected).into(),
        }
    }

    /// Returns `true` for the errors raised when a collection or a child does
    /// not have the shape its field requires.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            SyntaxError::AbsentElement { .. }
                | SyntaxError::MissingCapability { .. }
                | SyntaxError::NotAnArray { .. }
                | SyntaxError::NotANode { .. }
        )
    }
}
