use ast_node::ast_node;
use atoms::JsWord;
use global_common::SourceLocation;
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LitValue {
    #[default]
    Null,
    Bool(bool),
    /// **Note**: This should not be `NaN`; it has no literal form.
    Num(f64),
    Str(JsWord),
}

impl Display for LitValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LitValue::Null => f.write_str("null"),
            LitValue::Bool(v) => Display::fmt(v, f),
            LitValue::Num(v) if v.is_infinite() => {
                if v.is_sign_positive() {
                    f.write_str("Infinity")
                } else {
                    f.write_str("-Infinity")
                }
            }
            LitValue::Num(v) => Display::fmt(v, f),
            LitValue::Str(v) => Display::fmt(v, f),
        }
    }
}

/// A literal value together with the exact source text it was written as.
#[ast_node]
#[derive(Default)]
pub struct Literal {
    loc: SourceLocation,
    value: LitValue,
    raw: JsWord,
}

impl Literal {
    pub fn new(value: LitValue, raw: impl Into<JsWord>) -> Self {
        Literal {
            loc: SourceLocation::default(),
            value,
            raw: raw.into(),
        }
    }

    #[inline]
    pub fn value(&self) -> &LitValue {
        &self.value
    }

    #[inline]
    pub fn raw(&self) -> &JsWord {
        &self.raw
    }
}
