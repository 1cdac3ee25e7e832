//! Source positions and locations shared by tokens and AST nodes.
#![deny(unused)]

pub use self::pos::{BytePos, Located, Position, SourceLocation};

mod pos;
