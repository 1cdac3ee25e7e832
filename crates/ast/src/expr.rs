use crate::{
    error::PResult,
    ident::Identifier,
    lit::Literal,
    node::{assert_node_of, AnyNode},
};
use ast_node::ast_node;
use global_common::SourceLocation;

#[ast_node]
pub enum Expr {
    Ident(Identifier),

    Lit(Literal),

    Member(MemberExpression),
}

/// `object.property` or `object[property]`.
///
/// A member expression is also a valid assignment target, so it is a
/// [`Pat`](crate::Pat) as well.
#[ast_node]
#[derive(Default)]
pub struct MemberExpression {
    loc: SourceLocation,
    object: Option<Box<Expr>>,
    property: Option<Box<Expr>>,
    /// `true` for `object[property]`.
    computed: bool,
}

impl MemberExpression {
    pub fn object(&self) -> Option<&Expr> {
        self.object.as_deref()
    }

    pub fn set_object(&mut self, object: Expr) -> &mut Self {
        self.object = Some(Box::new(object));
        self
    }

    pub fn try_set_object(&mut self, object: AnyNode) -> PResult<&mut Self> {
        let object = assert_node_of("object", object)?;
        Ok(self.set_object(object))
    }

    pub fn property(&self) -> Option<&Expr> {
        self.property.as_deref()
    }

    pub fn set_property(&mut self, property: Expr) -> &mut Self {
        self.property = Some(Box::new(property));
        self
    }

    pub fn try_set_property(&mut self, property: AnyNode) -> PResult<&mut Self> {
        let property = assert_node_of("property", property)?;
        Ok(self.set_property(property))
    }

    #[inline]
    pub fn computed(&self) -> bool {
        self.computed
    }

    pub fn set_computed(&mut self, computed: bool) -> &mut Self {
        self.computed = computed;
        self
    }
}
