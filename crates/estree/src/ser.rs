use crate::config::EstreeConfig;
use ast::{
    token::Token, AnyNode, ArrayPattern, AssignmentPattern, AssignmentProperty, Expr, Identifier,
    LitValue, Literal, Located, MemberExpression, ObjectPatProp, ObjectPattern, Pat, Position,
    RestElement, SourceLocation,
};
use serde_json::{json, Map, Number, Value};

/// 2^53 - 1, the largest integer a JavaScript number holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Builds JSON documents for tokens and nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEmitter {
    config: EstreeConfig,
}

impl JsonEmitter {
    pub fn new(config: EstreeConfig) -> Self {
        JsonEmitter { config }
    }

    pub fn position(&self, pos: &Position) -> Value {
        json!({
            "line": pos.line,
            "column": pos.column,
            "offset": pos.offset.to_u32(),
        })
    }

    /// Unset ends are emitted as `null`.
    pub fn source_location(&self, loc: &SourceLocation) -> Value {
        json!({
            "start": loc.start().map(|pos| self.position(&pos)),
            "end": loc.end().map(|pos| self.position(&pos)),
        })
    }

    pub fn token(&self, token: &Token) -> Value {
        let mut obj = Map::new();
        obj.insert("type".into(), token.ty().as_str().into());
        obj.insert("value".into(), Value::String(token.value().to_string()));
        self.emit_loc(&mut obj, token.loc());
        Value::Object(obj)
    }

    pub fn node(&self, node: &AnyNode) -> Value {
        match node {
            AnyNode::Identifier(n) => self.identifier(n),
            AnyNode::Literal(n) => self.literal(n),
            AnyNode::MemberExpression(n) => self.member_expression(n),
            AnyNode::ArrayPattern(n) => self.array_pattern(n),
            AnyNode::ObjectPattern(n) => self.object_pattern(n),
            AnyNode::AssignmentProperty(n) => self.assignment_property(n),
            AnyNode::AssignmentPattern(n) => self.assignment_pattern(n),
            AnyNode::RestElement(n) => self.rest_element(n),
        }
    }

    pub fn pat(&self, pat: &Pat) -> Value {
        match pat {
            Pat::Ident(n) => self.identifier(n),
            Pat::Array(n) => self.array_pattern(n),
            Pat::Object(n) => self.object_pattern(n),
            Pat::Assign(n) => self.assignment_pattern(n),
            Pat::Rest(n) => self.rest_element(n),
            Pat::Member(n) => self.member_expression(n),
        }
    }

    pub fn expr(&self, expr: &Expr) -> Value {
        match expr {
            Expr::Ident(n) => self.identifier(n),
            Expr::Lit(n) => self.literal(n),
            Expr::Member(n) => self.member_expression(n),
        }
    }

    pub fn object_pat_prop(&self, prop: &ObjectPatProp) -> Value {
        match prop {
            ObjectPatProp::Assign(n) => self.assignment_property(n),
            ObjectPatProp::Rest(n) => self.rest_element(n),
        }
    }

    pub fn identifier(&self, n: &Identifier) -> Value {
        let mut fields = Map::new();
        fields.insert("name".into(), Value::String(n.name().to_string()));
        self.emit_node("Identifier", n.loc(), fields)
    }

    pub fn literal(&self, n: &Literal) -> Value {
        let value = match n.value() {
            LitValue::Null => Value::Null,
            LitValue::Bool(v) => Value::Bool(*v),
            LitValue::Num(v) => number(*v),
            LitValue::Str(v) => Value::String(v.to_string()),
        };

        let mut fields = Map::new();
        fields.insert("value".into(), value);
        fields.insert("raw".into(), Value::String(n.raw().to_string()));
        self.emit_node("Literal", n.loc(), fields)
    }

    pub fn member_expression(&self, n: &MemberExpression) -> Value {
        let mut fields = Map::new();
        fields.insert("object".into(), self.opt(n.object(), Self::expr));
        fields.insert("property".into(), self.opt(n.property(), Self::expr));
        fields.insert("computed".into(), n.computed().into());
        self.emit_node("MemberExpression", n.loc(), fields)
    }

    pub fn array_pattern(&self, n: &ArrayPattern) -> Value {
        let elements = n
            .elements()
            .iter()
            .map(|e| self.opt(e.as_ref(), Self::pat))
            .collect();

        let mut fields = Map::new();
        fields.insert("elements".into(), Value::Array(elements));
        self.emit_node("ArrayPattern", n.loc(), fields)
    }

    pub fn object_pattern(&self, n: &ObjectPattern) -> Value {
        let properties = n
            .properties()
            .iter()
            .map(|p| self.object_pat_prop(p))
            .collect();

        let mut fields = Map::new();
        fields.insert("properties".into(), Value::Array(properties));
        self.emit_node("ObjectPattern", n.loc(), fields)
    }

    pub fn assignment_property(&self, n: &AssignmentProperty) -> Value {
        let mut fields = Map::new();
        fields.insert("key".into(), self.opt(n.key(), Self::expr));
        fields.insert("value".into(), self.opt(n.value(), Self::pat));
        fields.insert("kind".into(), "init".into());
        fields.insert("method".into(), false.into());
        fields.insert("shorthand".into(), n.shorthand().into());
        fields.insert("computed".into(), n.computed().into());
        self.emit_node("Property", n.loc(), fields)
    }

    pub fn assignment_pattern(&self, n: &AssignmentPattern) -> Value {
        let mut fields = Map::new();
        fields.insert("left".into(), self.opt(n.left(), Self::pat));
        fields.insert("right".into(), self.opt(n.right(), Self::expr));
        self.emit_node("AssignmentPattern", n.loc(), fields)
    }

    pub fn rest_element(&self, n: &RestElement) -> Value {
        let mut fields = Map::new();
        fields.insert("argument".into(), self.opt(n.argument(), Self::pat));
        self.emit_node("RestElement", n.loc(), fields)
    }

    fn opt<T>(&self, value: Option<&T>, op: impl FnOnce(&Self, &T) -> Value) -> Value {
        match value {
            Some(value) => op(self, value),
            None => Value::Null,
        }
    }

    fn emit_node(&self, ty: &str, loc: &SourceLocation, fields: Map<String, Value>) -> Value {
        let mut obj = Map::new();
        obj.insert("type".into(), ty.into());
        self.emit_loc(&mut obj, loc);
        obj.extend(fields);
        Value::Object(obj)
    }

    fn emit_loc(&self, obj: &mut Map<String, Value>, loc: &SourceLocation) {
        if self.config.locations {
            obj.insert("location".into(), self.source_location(loc));
        }
        if self.config.ranges {
            if let (Some(start), Some(end)) = (loc.start(), loc.end()) {
                obj.insert(
                    "range".into(),
                    json!([start.offset.to_u32(), end.offset.to_u32()]),
                );
            }
        }
    }
}

/// Integral values are emitted as JSON integers, the way a JavaScript host
/// would print them. `NaN` and infinities have no JSON form and become `null`.
fn number(v: f64) -> Value {
    if v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER {
        Value::from(v as i64)
    } else {
        Number::from_f64(v).map_or(Value::Null, Value::Number)
    }
}
