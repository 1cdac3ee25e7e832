#![deny(unreachable_patterns)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unreachable_pub)]

pub use self::{
    error::{Error, PResult, SyntaxError},
    expr::{Expr, MemberExpression},
    ident::Identifier,
    lit::{LitValue, Literal},
    node::{
        assert_array_of, assert_list_of, assert_node_of, AnyNode, Capability, Capable, Node,
        NodeKind,
    },
    pat::{
        ArrayPattern, AssignmentPattern, AssignmentProperty, ObjectPatProp, ObjectPattern, Pat,
        RestElement,
    },
    token::{Token, TokenType},
};
pub use atoms::JsWord;
pub use global_common::{BytePos, Located, Position, SourceLocation};

pub mod error;
mod expr;
mod ident;
mod lit;
mod node;
mod pat;
pub mod token;
