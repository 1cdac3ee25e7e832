use ast::{
    token::Token, AnyNode, ArrayPattern, AssignmentPattern, AssignmentProperty, Error, Identifier,
    LitValue, Literal, Located, MemberExpression, ObjectPattern, PResult, Position, RestElement,
    SourceLocation, SyntaxError,
};
use serde_json::{Map, Value};
use tracing::trace;

type Object = Map<String, Value>;

/// Reads a token written by [`JsonEmitter::token`](crate::JsonEmitter::token).
///
/// The type tag must be one of the nine token types.
pub fn token_from_value(value: &Value) -> PResult<Token> {
    let obj = value.as_object().ok_or_else(|| {
        Error::new(
            SourceLocation::default(),
            SyntaxError::InvalidField {
                node: "Token",
                field: "token",
                expected: "an object",
            },
        )
    })?;

    let loc = location("Token", obj)?;
    let ty = string("Token", "type", obj, &loc)?;
    let value = string("Token", "value", obj, &loc)?;

    let mut token = Token::from_raw(ty, value).map_err(|err| Error::new(loc, err.into_kind()))?;
    *token.loc_mut() = loc;
    Ok(token)
}

/// Reads a node tree.
///
/// Children arrive untyped and go through the same `try_set_*` setters a
/// parser would use, so a document that puts a node where its capability is
/// not allowed is rejected with the same structural error.
pub fn node_from_value(value: &Value) -> PResult<AnyNode> {
    node("root", None, value)
}

fn node(field: &'static str, index: Option<usize>, value: &Value) -> PResult<AnyNode> {
    let obj = value.as_object().ok_or_else(|| {
        Error::new(
            SourceLocation::default(),
            SyntaxError::NotANode { field, index },
        )
    })?;

    let ty = match obj.get("type") {
        Some(Value::String(ty)) => ty.as_str(),
        _ => {
            return Err(Error::new(
                SourceLocation::default(),
                SyntaxError::NotANode { field, index },
            ))
        }
    };
    trace!(ty, field, "reading node");

    let mut node: AnyNode = match ty {
        "Identifier" => {
            let loc = location("Identifier", obj)?;
            Identifier::new(string("Identifier", "name", obj, &loc)?).into()
        }
        "Literal" => literal(obj)?.into(),
        "MemberExpression" => {
            let mut n = MemberExpression::default();
            if let Some(object) = child("object", obj)? {
                n.try_set_object(object)?;
            }
            if let Some(property) = child("property", obj)? {
                n.try_set_property(property)?;
            }
            n.set_computed(flag("MemberExpression", "computed", obj)?);
            n.into()
        }
        "ArrayPattern" => {
            let mut n = ArrayPattern::default();
            n.try_set_elements(children("ArrayPattern", "elements", obj)?)?;
            n.into()
        }
        "ObjectPattern" => {
            let mut n = ObjectPattern::default();
            n.try_set_properties(children("ObjectPattern", "properties", obj)?)?;
            n.into()
        }
        "Property" | "AssignmentProperty" => {
            // Getters, setters and methods cannot appear in a pattern.
            match obj.get("kind") {
                None => {}
                Some(Value::String(kind)) if kind == "init" => {}
                Some(_) => {
                    return Err(invalid(
                        location("Property", obj)?,
                        "Property",
                        "kind",
                        "\"init\"",
                    ))
                }
            }
            if flag("Property", "method", obj)? {
                return Err(invalid(
                    location("Property", obj)?,
                    "Property",
                    "method",
                    "false",
                ));
            }

            let mut n = AssignmentProperty::default();
            if let Some(key) = child("key", obj)? {
                n.try_set_key(key)?;
            }
            if let Some(value) = child("value", obj)? {
                n.try_set_value(value)?;
            }
            n.set_shorthand(flag("Property", "shorthand", obj)?)
                .set_computed(flag("Property", "computed", obj)?);
            n.into()
        }
        "AssignmentPattern" => {
            let mut n = AssignmentPattern::default();
            if let Some(left) = child("left", obj)? {
                n.try_set_left(left)?;
            }
            if let Some(right) = child("right", obj)? {
                n.try_set_right(right)?;
            }
            n.into()
        }
        "RestElement" => {
            let mut n = RestElement::default();
            if let Some(argument) = child("argument", obj)? {
                n.try_set_argument(argument)?;
            }
            n.into()
        }
        _ => {
            return Err(Error::new(
                location("node", obj)?,
                SyntaxError::UnknownNodeType(ty.to_string()),
            ))
        }
    };

    *node.loc_mut() = location(node_name(ty), obj)?;
    Ok(node)
}

fn literal(obj: &Object) -> PResult<Literal> {
    let loc = location("Literal", obj)?;
    let value = match obj.get("value") {
        None => {
            return Err(Error::new(
                loc,
                SyntaxError::MissingField {
                    node: "Literal",
                    field: "value",
                },
            ))
        }
        Some(Value::Null) => LitValue::Null,
        Some(Value::Bool(v)) => LitValue::Bool(*v),
        Some(Value::String(v)) => LitValue::Str(v.as_str().into()),
        Some(Value::Number(v)) => match v.as_f64() {
            Some(v) => LitValue::Num(v),
            None => return Err(invalid(loc, "Literal", "value", "a finite number")),
        },
        Some(_) => {
            return Err(invalid(
                loc,
                "Literal",
                "value",
                "null, a boolean, a number or a string",
            ))
        }
    };
    let raw = string("Literal", "raw", obj, &loc)?;

    Ok(Literal::new(value, raw))
}

/// A missing or `null` child is left unset.
fn child(field: &'static str, obj: &Object) -> PResult<Option<AnyNode>> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => node(field, None, value).map(Some),
    }
}

/// `null` entries become absent entries; whether those are allowed is up to
/// the setter the result is handed to.
fn children(
    name: &'static str,
    field: &'static str,
    obj: &Object,
) -> PResult<Vec<Option<AnyNode>>> {
    let entries = match obj.get(field) {
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return Err(Error::new(
                location(name, obj)?,
                SyntaxError::NotAnArray { field },
            ))
        }
        None => {
            return Err(Error::new(
                location(name, obj)?,
                SyntaxError::MissingField { node: name, field },
            ))
        }
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Value::Null => Ok(None),
            entry => node(field, Some(index), entry).map(Some),
        })
        .collect()
}

fn location(name: &'static str, obj: &Object) -> PResult<SourceLocation> {
    let mut loc = SourceLocation::default();

    let location = match obj.get("location") {
        None | Some(Value::Null) => return Ok(loc),
        Some(Value::Object(location)) => location,
        Some(_) => {
            return Err(invalid(loc, name, "location", "an object"));
        }
    };

    if let Some(start) = position(name, location.get("start"))? {
        loc.set_start(start);
    }
    if let Some(end) = position(name, location.get("end"))? {
        loc.set_end(end);
    }
    Ok(loc)
}

fn position(name: &'static str, value: Option<&Value>) -> PResult<Option<Position>> {
    let obj = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Object(obj)) => obj,
        Some(_) => {
            return Err(invalid(
                SourceLocation::default(),
                name,
                "location",
                "a pair of positions",
            ))
        }
    };

    let read = |field: &'static str| -> PResult<u32> {
        obj.get(field)
            .and_then(Value::as_u64)
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| invalid(SourceLocation::default(), name, field, "an unsigned integer"))
    };

    Ok(Some(Position::new(
        read("line")?,
        read("column")?,
        read("offset")?,
    )))
}

fn string<'a>(
    name: &'static str,
    field: &'static str,
    obj: &'a Object,
    loc: &SourceLocation,
) -> PResult<&'a str> {
    match obj.get(field) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(invalid(*loc, name, field, "a string")),
        None => Err(Error::new(
            *loc,
            SyntaxError::MissingField { node: name, field },
        )),
    }
}

/// Missing flags default to `false`.
fn flag(name: &'static str, field: &'static str, obj: &Object) -> PResult<bool> {
    match obj.get(field) {
        None => Ok(false),
        Some(Value::Bool(v)) => Ok(*v),
        Some(_) => Err(invalid(location(name, obj)?, name, field, "a boolean")),
    }
}

fn invalid(
    loc: SourceLocation,
    name: &'static str,
    field: &'static str,
    expected: &'static str,
) -> Error {
    Error::new(
        loc,
        SyntaxError::InvalidField {
            node: name,
            field,
            expected,
        },
    )
}

fn node_name(ty: &str) -> &'static str {
    match ty {
        "Identifier" => "Identifier",
        "Literal" => "Literal",
        "MemberExpression" => "MemberExpression",
        "ArrayPattern" => "ArrayPattern",
        "ObjectPattern" => "ObjectPattern",
        "AssignmentPattern" => "AssignmentPattern",
        "RestElement" => "RestElement",
        _ => "Property",
    }
}
