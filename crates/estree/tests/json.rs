use ast::{
    token::{Token, TokenType},
    AnyNode, ArrayPattern, Capability, Identifier, LitValue, Literal, Located, NodeKind, Pat,
    Position, SyntaxError,
};
use estree::{node_from_value, token_from_value, EstreeConfig, JsonEmitter};
use serde_json::json;
use testing::assert_eq;

fn ident(name: &str, start: u32) -> Identifier {
    let end = start + name.len() as u32;
    let mut id = Identifier::new(name);
    id.set_start_position(Position::new(1, start, start))
        .set_end_position(Position::new(1, end, end));
    id
}

#[test]
fn token_document() {
    let mut token = Token::new(TokenType::Identifier, "x");
    token
        .set_start_position(Position::new(1, 0, 0))
        .set_end_position(Position::new(1, 1, 1));

    let value = JsonEmitter::default().token(&token);
    assert_eq!(
        value,
        json!({
            "type": "Identifier",
            "value": "x",
            "location": {
                "start": {"line": 1, "column": 0, "offset": 0},
                "end": {"line": 1, "column": 1, "offset": 1},
            },
        })
    );

    assert_eq!(token_from_value(&value).unwrap(), token);
}

#[test]
fn unset_location_is_null() {
    let value = JsonEmitter::default().token(&Token::new(TokenType::Punctuator, "=>"));

    assert_eq!(value["location"], json!({"start": null, "end": null}));
}

#[test]
fn locations_can_be_turned_off() {
    let config: EstreeConfig = serde_json::from_value(json!({"locations": false})).unwrap();
    let value = JsonEmitter::new(config).identifier(&ident("a", 0));

    assert_eq!(value, json!({"type": "Identifier", "name": "a"}));
}

#[test]
fn elision_is_emitted_as_null() {
    testing::run_test(|| {
        let mut pat = ArrayPattern::default();
        pat.set_elements(vec![
            Some(Identifier::new("a").into()),
            None,
            Some(Identifier::new("b").into()),
        ]);

        let emitter = JsonEmitter::new(EstreeConfig {
            locations: false,
            ranges: false,
        });
        let value = emitter.array_pattern(&pat);
        assert_eq!(
            value,
            json!({
                "type": "ArrayPattern",
                "elements": [
                    {"type": "Identifier", "name": "a"},
                    null,
                    {"type": "Identifier", "name": "b"},
                ],
            })
        );

        let read = node_from_value(&value).unwrap();
        assert_eq!(read, AnyNode::from(pat));
    });
}

#[test]
fn nested_tree_is_read_back() {
    let value = json!({
        "type": "ArrayPattern",
        "location": {
            "start": {"line": 1, "column": 0, "offset": 0},
            "end": {"line": 1, "column": 22, "offset": 22},
        },
        "elements": [
            {
                "type": "AssignmentPattern",
                "left": {"type": "Identifier", "name": "x"},
                "right": {"type": "Literal", "value": 1, "raw": "1"},
            },
            {
                "type": "ObjectPattern",
                "properties": [
                    {
                        "type": "Property",
                        "key": {"type": "Identifier", "name": "y"},
                        "value": {"type": "Identifier", "name": "y"},
                        "kind": "init",
                        "method": false,
                        "shorthand": true,
                        "computed": false,
                    },
                    {
                        "type": "RestElement",
                        "argument": {"type": "Identifier", "name": "z"},
                    },
                ],
            },
            {
                "type": "RestElement",
                "argument": {
                    "type": "MemberExpression",
                    "object": {"type": "Identifier", "name": "o"},
                    "property": {"type": "Identifier", "name": "p"},
                    "computed": false,
                },
            },
        ],
    });

    let node = node_from_value(&value).unwrap();
    assert_eq!(node.loc().end(), Some(Position::new(1, 22, 22)));

    let pat = match node {
        AnyNode::ArrayPattern(pat) => pat,
        other => panic!("expected an array pattern, got {:?}", other),
    };
    assert_eq!(pat.elements().len(), 3);
    match &pat.elements()[0] {
        Some(Pat::Assign(assign)) => {
            assert_eq!(
                assign.right().map(|r| ast::Node::kind(r)),
                Some(NodeKind::Literal)
            );
        }
        other => panic!("expected an assignment pattern, got {:?}", other),
    }

    let emitter = JsonEmitter::new(EstreeConfig {
        locations: false,
        ranges: false,
    });
    let again = emitter.array_pattern(&pat);
    assert_eq!(again["elements"][1]["properties"][0]["shorthand"], json!(true));
    assert_eq!(again["elements"][2]["argument"]["type"], json!("MemberExpression"));
}

#[test]
fn literal_values() {
    let read = |value: serde_json::Value| match node_from_value(&value).unwrap() {
        AnyNode::Literal(lit) => lit,
        other => panic!("expected a literal, got {:?}", other),
    };

    assert_eq!(
        read(json!({"type": "Literal", "value": null, "raw": "null"})),
        Literal::new(LitValue::Null, "null")
    );
    assert_eq!(
        read(json!({"type": "Literal", "value": true, "raw": "true"})),
        Literal::new(LitValue::Bool(true), "true")
    );
    assert_eq!(
        read(json!({"type": "Literal", "value": 0.5, "raw": ".5"})),
        Literal::new(LitValue::Num(0.5), ".5")
    );
    assert_eq!(
        read(json!({"type": "Literal", "value": "s", "raw": "'s'"})),
        Literal::new(LitValue::Str("s".into()), "'s'")
    );
}

#[test]
fn element_that_is_not_a_node() {
    let err = node_from_value(&json!({
        "type": "ArrayPattern",
        "elements": [{"type": "Identifier", "name": "a"}, "not-a-node"],
    }))
    .unwrap_err();

    assert_eq!(
        err.kind(),
        &SyntaxError::NotANode {
            field: "elements",
            index: Some(1),
        }
    );
    assert!(err.kind().is_structural());
}

#[test]
fn elements_that_are_not_an_array() {
    let err = node_from_value(&json!({
        "type": "ArrayPattern",
        "elements": {"type": "Identifier", "name": "a"},
    }))
    .unwrap_err();

    assert_eq!(err.kind(), &SyntaxError::NotAnArray { field: "elements" });
}

#[test]
fn missing_elements() {
    let err = node_from_value(&json!({"type": "ArrayPattern"})).unwrap_err();

    assert_eq!(
        err.kind(),
        &SyntaxError::MissingField {
            node: "ArrayPattern",
            field: "elements",
        }
    );
}

#[test]
fn element_without_pattern_capability() {
    let err = node_from_value(&json!({
        "type": "ArrayPattern",
        "elements": [
            {"type": "Identifier", "name": "a"},
            {
                "type": "Literal",
                "value": 1,
                "raw": "1",
                "location": {
                    "start": {"line": 1, "column": 4, "offset": 4},
                    "end": {"line": 1, "column": 5, "offset": 5},
                },
            },
        ],
    }))
    .unwrap_err();

    assert_eq!(
        err.kind(),
        &SyntaxError::MissingCapability {
            field: "elements",
            index: Some(1),
            expected: Capability::Pattern,
            found: NodeKind::Literal,
        }
    );
    assert_eq!(err.loc().start(), Some(Position::new(1, 4, 4)));
}

#[test]
fn object_pattern_rejects_null_entries() {
    let err = node_from_value(&json!({
        "type": "ObjectPattern",
        "properties": [null],
    }))
    .unwrap_err();

    assert_eq!(
        err.kind(),
        &SyntaxError::AbsentElement {
            field: "properties",
            index: 0,
        }
    );
}

#[test]
fn unknown_node_type() {
    let err = node_from_value(&json!({"type": "FunctionExpression"})).unwrap_err();

    assert_eq!(
        err.kind(),
        &SyntaxError::UnknownNodeType("FunctionExpression".into())
    );
}

#[test]
fn root_must_be_a_node() {
    let err = node_from_value(&json!([1, 2])).unwrap_err();

    assert_eq!(
        err.kind(),
        &SyntaxError::NotANode {
            field: "root",
            index: None,
        }
    );
}

#[test]
fn unknown_token_type() {
    let err = token_from_value(&json!({"type": "RegExp", "value": "/a/"})).unwrap_err();

    assert_eq!(err.kind(), &SyntaxError::UnknownTokenType("RegExp".into()));
}

#[test]
fn token_value_must_be_a_string() {
    let err = token_from_value(&json!({"type": "Numeric", "value": 1})).unwrap_err();

    assert_eq!(
        err.kind(),
        &SyntaxError::InvalidField {
            node: "Token",
            field: "value",
            expected: "a string",
        }
    );
}

#[test]
fn getter_property_is_not_a_pattern_property() {
    let err = node_from_value(&json!({
        "type": "ObjectPattern",
        "properties": [{
            "type": "Property",
            "key": {"type": "Identifier", "name": "a"},
            "value": {"type": "Identifier", "name": "a"},
            "kind": "get",
            "method": false,
            "shorthand": false,
            "computed": false,
        }],
    }))
    .unwrap_err();

    assert_eq!(
        err.kind(),
        &SyntaxError::InvalidField {
            node: "Property",
            field: "kind",
            expected: "\"init\"",
        }
    );
}

#[test]
fn method_property_is_not_a_pattern_property() {
    let err = node_from_value(&json!({
        "type": "ObjectPattern",
        "properties": [{
            "type": "Property",
            "key": {"type": "Identifier", "name": "a"},
            "value": {"type": "Identifier", "name": "a"},
            "kind": "init",
            "method": true,
        }],
    }))
    .unwrap_err();

    assert_eq!(
        err.kind(),
        &SyntaxError::InvalidField {
            node: "Property",
            field: "method",
            expected: "false",
        }
    );
}

#[test]
fn literal_without_value() {
    let err = node_from_value(&json!({"type": "Literal", "raw": "42"})).unwrap_err();

    assert_eq!(
        err.kind(),
        &SyntaxError::MissingField {
            node: "Literal",
            field: "value",
        }
    );
}
