//! Tokens emitted by the scanner.

use crate::error::{Error, PResult, SyntaxError};
use ast_node::Located;
use atoms::{js_word, JsWord};
use global_common::SourceLocation;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// `true` or `false`.
    Boolean,
    Identifier,
    Keyword,
    /// `null`.
    Null,
    Numeric,
    Punctuator,
    String,
    RegularExpression,
    /// A template chunk, including its delimiters.
    Template,
}

impl TokenType {
    pub const ALL: [TokenType; 9] = [
        TokenType::Boolean,
        TokenType::Identifier,
        TokenType::Keyword,
        TokenType::Null,
        TokenType::Numeric,
        TokenType::Punctuator,
        TokenType::String,
        TokenType::RegularExpression,
        TokenType::Template,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            TokenType::Boolean => "Boolean",
            TokenType::Identifier => "Identifier",
            TokenType::Keyword => "Keyword",
            TokenType::Null => "Null",
            TokenType::Numeric => "Numeric",
            TokenType::Punctuator => "Punctuator",
            TokenType::String => "String",
            TokenType::RegularExpression => "RegularExpression",
            TokenType::Template => "Template",
        }
    }
}

impl Display for TokenType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenType {
    type Err = Error;

    fn from_str(s: &str) -> PResult<Self> {
        TokenType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| {
                Error::new(
                    SourceLocation::default(),
                    SyntaxError::UnknownTokenType(s.to_string()),
                )
            })
    }
}

/// A token and the span of source it was scanned from.
///
/// Type and value are fixed at construction. The location is attached
/// afterwards with [`set_start_position`] and [`set_end_position`] from
/// [`Located`](global_common::Located).
///
/// [`set_start_position`]: global_common::Located::set_start_position
/// [`set_end_position`]: global_common::Located::set_end_position
#[derive(Debug, Clone, PartialEq, Located)]
pub struct Token {
    ty: TokenType,
    value: JsWord,
    loc: SourceLocation,
}

impl Token {
    pub fn new(ty: TokenType, value: impl Into<JsWord>) -> Self {
        Token {
            ty,
            value: value.into(),
            loc: SourceLocation::default(),
        }
    }

    /// Creates a token from a string tag such as `"Punctuator"`.
    pub fn from_raw(ty: &str, value: impl Into<JsWord>) -> PResult<Self> {
        Ok(Token::new(ty.parse()?, value))
    }

    #[inline]
    pub fn ty(&self) -> TokenType {
        self.ty
    }

    /// The exact source text of the token.
    #[inline]
    pub fn value(&self) -> &JsWord {
        &self.value
    }

    /// Returns `true` if this is a punctuator spelled `p`.
    pub fn is_punctuator(&self, p: &str) -> bool {
        self.ty == TokenType::Punctuator && &*self.value == p
    }

    /// `...`, which starts a rest element or a spread.
    pub fn is_ellipsis(&self) -> bool {
        self.ty == TokenType::Punctuator && self.value == js_word!("...")
    }

    /// `,`, which separates array pattern elements. Two in a row mark an
    /// elision.
    pub fn is_comma(&self) -> bool {
        self.ty == TokenType::Punctuator && self.value == js_word!(",")
    }
}
