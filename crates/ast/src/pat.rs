use crate::{
    error::PResult,
    expr::{Expr, MemberExpression},
    ident::Identifier,
    node::{assert_array_of, assert_list_of, assert_node_of, AnyNode},
};
use ast_node::ast_node;
use global_common::SourceLocation;

/// A node in binding or destructuring position.
#[ast_node]
pub enum Pat {
    Ident(Identifier),

    Array(ArrayPattern),

    Object(ObjectPattern),

    Assign(AssignmentPattern),

    Rest(RestElement),

    /// Only as an assignment target, e.g. `[a.b] = c`.
    Member(MemberExpression),
}

/// `[a, , ...b]`
#[ast_node]
#[derive(Default)]
pub struct ArrayPattern {
    loc: SourceLocation,
    /// `None` is an elision.
    elements: Vec<Option<Pat>>,
}

impl ArrayPattern {
    #[inline]
    pub fn elements(&self) -> &[Option<Pat>] {
        &self.elements
    }

    pub fn set_elements(&mut self, elements: Vec<Option<Pat>>) -> &mut Self {
        self.elements = elements;
        self
    }

    /// Sets elements whose kinds are only known at runtime.
    ///
    /// Fails if a present element is not a pattern; the current elements are
    /// left untouched in that case.
    pub fn try_set_elements(&mut self, elements: Vec<Option<AnyNode>>) -> PResult<&mut Self> {
        let elements = assert_array_of("elements", elements, true)?;
        Ok(self.set_elements(elements))
    }
}

#[ast_node]
#[derive(Default)]
pub struct ObjectPattern {
    loc: SourceLocation,
    properties: Vec<ObjectPatProp>,
}

impl ObjectPattern {
    #[inline]
    pub fn properties(&self) -> &[ObjectPatProp] {
        &self.properties
    }

    pub fn set_properties(&mut self, properties: Vec<ObjectPatProp>) -> &mut Self {
        self.properties = properties;
        self
    }

    /// Object patterns have no elisions, so absent entries are rejected.
    pub fn try_set_properties(&mut self, properties: Vec<Option<AnyNode>>) -> PResult<&mut Self> {
        let properties = assert_list_of("properties", properties)?;
        Ok(self.set_properties(properties))
    }
}

#[ast_node]
pub enum ObjectPatProp {
    Assign(AssignmentProperty),

    Rest(RestElement),
}

/// `{key: value}`, `{key}` or `{[key]: value}` inside an object pattern.
#[ast_node]
#[derive(Default)]
pub struct AssignmentProperty {
    loc: SourceLocation,
    key: Option<Box<Expr>>,
    value: Option<Box<Pat>>,
    shorthand: bool,
    computed: bool,
}

impl AssignmentProperty {
    pub fn key(&self) -> Option<&Expr> {
        self.key.as_deref()
    }

    pub fn set_key(&mut self, key: Expr) -> &mut Self {
        self.key = Some(Box::new(key));
        self
    }

    pub fn try_set_key(&mut self, key: AnyNode) -> PResult<&mut Self> {
        let key = assert_node_of("key", key)?;
        Ok(self.set_key(key))
    }

    pub fn value(&self) -> Option<&Pat> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Pat) -> &mut Self {
        self.value = Some(Box::new(value));
        self
    }

    pub fn try_set_value(&mut self, value: AnyNode) -> PResult<&mut Self> {
        let value = assert_node_of("value", value)?;
        Ok(self.set_value(value))
    }

    #[inline]
    pub fn shorthand(&self) -> bool {
        self.shorthand
    }

    pub fn set_shorthand(&mut self, shorthand: bool) -> &mut Self {
        self.shorthand = shorthand;
        self
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

/// `left = right`, a pattern with a default value.
#[ast_node]
#[derive(Default)]
pub struct AssignmentPattern {
    loc: SourceLocation,
    left: Option<Box<Pat>>,
    right: Option<Box<Expr>>,
}

impl AssignmentPattern {
    pub fn left(&self) -> Option<&Pat> {
        self.left.as_deref()
    }

    pub fn set_left(&mut self, left: Pat) -> &mut Self {
        self.left = Some(Box::new(left));
        self
    }

    pub fn try_set_left(&mut self, left: AnyNode) -> PResult<&mut Self> {
        let left = assert_node_of("left", left)?;
        Ok(self.set_left(left))
    }

    pub fn right(&self) -> Option<&Expr> {
        self.right.as_deref()
    }

    pub fn set_right(&mut self, right: Expr) -> &mut Self {
        self.right = Some(Box::new(right));
        self
    }

    pub fn try_set_right(&mut self, right: AnyNode) -> PResult<&mut Self> {
        let right = assert_node_of("right", right)?;
        Ok(self.set_right(right))
    }
}

/// EsTree `RestElement`, `...argument`.
#[ast_node]
#[derive(Default)]
pub struct RestElement {
    loc: SourceLocation,
    argument: Option<Box<Pat>>,
}

impl RestElement {
    pub fn argument(&self) -> Option<&Pat> {
        self.argument.as_deref()
    }

    pub fn set_argument(&mut self, argument: Pat) -> &mut Self {
        self.argument = Some(Box::new(argument));
        self
    }

    pub fn try_set_argument(&mut self, argument: AnyNode) -> PResult<&mut Self> {
        let argument = assert_node_of("argument", argument)?;
        Ok(self.set_argument(argument))
    }
}
