use ast_node::ast_node;
use atoms::JsWord;
use global_common::SourceLocation;

/// A name, used both as an expression and as a binding pattern.
#[ast_node]
#[derive(Default)]
pub struct Identifier {
    loc: SourceLocation,
    name: JsWord,
}

impl Identifier {
    pub fn new(name: impl Into<JsWord>) -> Self {
        Identifier {
            loc: SourceLocation::default(),
            name: name.into(),
        }
    }

    #[inline]
    pub fn name(&self) -> &JsWord {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<JsWord>) -> &mut Self {
        self.name = name.into();
        self
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.name
    }
}
