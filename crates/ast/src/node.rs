use crate::{
    error::{Error, PResult, SyntaxError},
    expr::{Expr, MemberExpression},
    ident::Identifier,
    lit::Literal,
    pat::{
        ArrayPattern, AssignmentPattern, AssignmentProperty, ObjectPatProp, ObjectPattern, Pat,
        RestElement,
    },
};
use ast_node::ast_node;
use global_common::{Located, SourceLocation};
use std::fmt::{self, Display, Formatter};
use tracing::{debug, trace};

/// Every kind of node that can appear in a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Identifier,
    Literal,
    MemberExpression,
    ArrayPattern,
    ObjectPattern,
    AssignmentProperty,
    AssignmentPattern,
    RestElement,
}

impl NodeKind {
    pub const ALL: [NodeKind; 8] = [
        NodeKind::Identifier,
        NodeKind::Literal,
        NodeKind::MemberExpression,
        NodeKind::ArrayPattern,
        NodeKind::ObjectPattern,
        NodeKind::AssignmentProperty,
        NodeKind::AssignmentPattern,
        NodeKind::RestElement,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            NodeKind::Identifier => "Identifier",
            NodeKind::Literal => "Literal",
            NodeKind::MemberExpression => "MemberExpression",
            NodeKind::ArrayPattern => "ArrayPattern",
            NodeKind::ObjectPattern => "ObjectPattern",
            NodeKind::AssignmentProperty => "AssignmentProperty",
            NodeKind::AssignmentPattern => "AssignmentPattern",
            NodeKind::RestElement => "RestElement",
        }
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role a node can play in its parent.
///
/// Each capability is backed by a closed sum type that only holds the node
/// kinds it admits: [`Pat`], [`Expr`] and [`ObjectPatProp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Usable in a binding or destructuring position.
    Pattern,
    Expression,
    /// Usable as an entry of an object pattern.
    PatternProperty,
}

impl Capability {
    pub const fn name(self) -> &'static str {
        match self {
            Capability::Pattern => "Pattern",
            Capability::Expression => "Expression",
            Capability::PatternProperty => "PatternProperty",
        }
    }

    pub const fn admits(self, kind: NodeKind) -> bool {
        match self {
            Capability::Pattern => matches!(
                kind,
                NodeKind::Identifier
                    | NodeKind::MemberExpression
                    | NodeKind::ArrayPattern
                    | NodeKind::ObjectPattern
                    | NodeKind::AssignmentPattern
                    | NodeKind::RestElement
            ),
            Capability::Expression => matches!(
                kind,
                NodeKind::Identifier | NodeKind::Literal | NodeKind::MemberExpression
            ),
            Capability::PatternProperty => {
                matches!(kind, NodeKind::AssignmentProperty | NodeKind::RestElement)
            }
        }
    }
}

impl Display for Capability {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The base of every AST element.
///
/// # Derive
/// This trait can be derived with `#[derive(Node)]` (or `#[ast_node]`).
pub trait Node: Located {
    fn kind(&self) -> NodeKind;

    #[inline]
    fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }

    #[inline]
    fn implements(&self, capability: Capability) -> bool {
        capability.admits(self.kind())
    }
}

/// A sum type standing for one [`Capability`].
pub trait Capable: Node + Sized + Into<AnyNode> {
    const CAPABILITY: Capability;

    /// Narrows `node`, handing it back unchanged if its kind is not admitted.
    fn from_node(node: AnyNode) -> Result<Self, AnyNode>;
}

/// Any node, regardless of capability.
///
/// This is the form in which children arrive when their kind is only known at
/// runtime. Setters named `try_set_*` accept it and narrow it through
/// [`assert_array_of`] and friends.
#[ast_node]
pub enum AnyNode {
    Identifier(Identifier),
    Literal(Literal),
    MemberExpression(MemberExpression),
    ArrayPattern(ArrayPattern),
    ObjectPattern(ObjectPattern),
    AssignmentProperty(AssignmentProperty),
    AssignmentPattern(AssignmentPattern),
    RestElement(RestElement),
}

impl From<Pat> for AnyNode {
    fn from(pat: Pat) -> Self {
        match pat {
            Pat::Ident(n) => AnyNode::Identifier(n),
            Pat::Member(n) => AnyNode::MemberExpression(n),
            Pat::Array(n) => AnyNode::ArrayPattern(n),
            Pat::Object(n) => AnyNode::ObjectPattern(n),
            Pat::Assign(n) => AnyNode::AssignmentPattern(n),
            Pat::Rest(n) => AnyNode::RestElement(n),
        }
    }
}

impl From<Expr> for AnyNode {
    fn from(expr: Expr) -> Self {
        match expr {
            Expr::Ident(n) => AnyNode::Identifier(n),
            Expr::Lit(n) => AnyNode::Literal(n),
            Expr::Member(n) => AnyNode::MemberExpression(n),
        }
    }
}

impl From<ObjectPatProp> for AnyNode {
    fn from(prop: ObjectPatProp) -> Self {
        match prop {
            ObjectPatProp::Assign(n) => AnyNode::AssignmentProperty(n),
            ObjectPatProp::Rest(n) => AnyNode::RestElement(n),
        }
    }
}

impl Capable for Pat {
    const CAPABILITY: Capability = Capability::Pattern;

    fn from_node(node: AnyNode) -> Result<Self, AnyNode> {
        match node {
            AnyNode::Identifier(n) => Ok(Pat::Ident(n)),
            AnyNode::MemberExpression(n) => Ok(Pat::Member(n)),
            AnyNode::ArrayPattern(n) => Ok(Pat::Array(n)),
            AnyNode::ObjectPattern(n) => Ok(Pat::Object(n)),
            AnyNode::AssignmentPattern(n) => Ok(Pat::Assign(n)),
            AnyNode::RestElement(n) => Ok(Pat::Rest(n)),
            AnyNode::Literal(..) | AnyNode::AssignmentProperty(..) => Err(node),
        }
    }
}

impl Capable for Expr {
    const CAPABILITY: Capability = Capability::Expression;

    fn from_node(node: AnyNode) -> Result<Self, AnyNode> {
        match node {
            AnyNode::Identifier(n) => Ok(Expr::Ident(n)),
            AnyNode::Literal(n) => Ok(Expr::Lit(n)),
            AnyNode::MemberExpression(n) => Ok(Expr::Member(n)),
            _ => Err(node),
        }
    }
}

impl Capable for ObjectPatProp {
    const CAPABILITY: Capability = Capability::PatternProperty;

    fn from_node(node: AnyNode) -> Result<Self, AnyNode> {
        match node {
            AnyNode::AssignmentProperty(n) => Ok(ObjectPatProp::Assign(n)),
            AnyNode::RestElement(n) => Ok(ObjectPatProp::Rest(n)),
            _ => Err(node),
        }
    }
}

/// Checks that every entry of `candidates` has the capability of `T` and
/// narrows them.
///
/// Absent entries are kept in place if `allow_absent` is set and rejected
/// otherwise. The first offending entry aborts the whole operation, so the
/// caller never sees a partially checked collection and can commit the result
/// to its field as a unit.
pub fn assert_array_of<T: Capable>(
    field: &'static str,
    candidates: Vec<Option<AnyNode>>,
    allow_absent: bool,
) -> PResult<Vec<Option<T>>> {
    let mut checked = Vec::with_capacity(candidates.len());

    for (index, candidate) in candidates.into_iter().enumerate() {
        let node = match candidate {
            Some(node) => node,
            None if allow_absent => {
                checked.push(None);
                continue;
            }
            None => {
                debug!(field, index, "absent entry where none is allowed");
                return Err(Error::new(
                    SourceLocation::default(),
                    SyntaxError::AbsentElement { field, index },
                ));
            }
        };

        match T::from_node(node) {
            Ok(node) => checked.push(Some(node)),
            Err(node) => return Err(missing_capability::<T>(field, Some(index), &node)),
        }
    }

    trace!(field, len = checked.len(), capability = %T::CAPABILITY, "validated collection");
    Ok(checked)
}

/// [`assert_array_of`] for collections that must not contain absent entries.
pub fn assert_list_of<T: Capable>(
    field: &'static str,
    candidates: Vec<Option<AnyNode>>,
) -> PResult<Vec<T>> {
    Ok(assert_array_of(field, candidates, false)?
        .into_iter()
        .flatten()
        .collect())
}

/// Single-valued form of [`assert_array_of`].
pub fn assert_node_of<T: Capable>(field: &'static str, node: AnyNode) -> PResult<T> {
    T::from_node(node).map_err(|node| missing_capability::<T>(field, None, &node))
}

#[cold]
fn missing_capability<T: Capable>(
    field: &'static str,
    index: Option<usize>,
    node: &AnyNode,
) -> Error {
    debug!(
        field,
        ?index,
        expected = %T::CAPABILITY,
        found = %node.kind(),
        "node lacks the required capability"
    );

    Error::new(
        *node.loc(),
        SyntaxError::MissingCapability {
            field,
            index,
            expected: T::CAPABILITY,
            found: node.kind(),
        },
    )
}
