use ast::*;
use testing::assert_eq;

fn ident(name: &str, start: u32) -> Identifier {
    let mut id = Identifier::new(name);
    id.set_start_position(Position::new(1, start, start))
        .set_end_position(Position::new(1, start + name.len() as u32, start + name.len() as u32));
    id
}

/// `[a, , b]`
fn elided() -> Vec<Option<Pat>> {
    vec![Some(ident("a", 1).into()), None, Some(ident("b", 6).into())]
}

#[test]
fn elements_default_to_empty() {
    assert!(ArrayPattern::default().elements().is_empty());
}

#[test]
fn set_elements_preserves_order_and_contents() {
    let elements = vec![
        Some(Pat::from(ident("x", 1))),
        Some(Pat::from(RestElement::default())),
        Some(Pat::from(ArrayPattern::default())),
    ];

    let mut pat = ArrayPattern::default();
    pat.set_elements(elements.clone());

    assert_eq!(pat.elements(), &elements[..]);
}

#[test]
fn elision_is_kept_in_place() {
    testing::run_test(|| {
        let mut pat = ArrayPattern::default();
        pat.set_start_position(Position::new(1, 0, 0))
            .set_end_position(Position::new(1, 9, 9));
        pat.try_set_elements(elided().into_iter().map(|e| e.map(AnyNode::from)).collect())
            .unwrap();

        let elements = pat.elements();
        assert_eq!(elements.len(), 3);
        assert!(elements[1].is_none());
        match (&elements[0], &elements[2]) {
            (Some(Pat::Ident(a)), Some(Pat::Ident(b))) => {
                assert_eq!(a.as_ref(), "a");
                assert_eq!(b.as_ref(), "b");
            }
            other => panic!("expected two identifiers, got {:?}", other),
        }
        assert_eq!(pat.loc().end(), Some(Position::new(1, 9, 9)));
    });
}

#[test]
fn only_absent_entries() {
    let mut pat = ArrayPattern::default();
    pat.try_set_elements(vec![None, None, None]).unwrap();

    let expected: Vec<Option<Pat>> = vec![None, None, None];
    assert_eq!(pat.elements(), &expected[..]);
}

#[test]
fn non_pattern_entry_is_rejected_without_mutation() {
    testing::run_test(|| {
        let mut pat = ArrayPattern::default();
        pat.set_elements(elided());
        let before = pat.clone();

        let err = pat
            .try_set_elements(vec![
                Some(ident("a", 1).into()),
                Some(Literal::new(LitValue::Str("not-a-node".into()), "'not-a-node'").into()),
            ])
            .unwrap_err();

        assert!(err.kind().is_structural());
        assert_eq!(
            *err.kind(),
            SyntaxError::MissingCapability {
                field: "elements",
                index: Some(1),
                expected: Capability::Pattern,
                found: NodeKind::Literal,
            }
        );
        assert_eq!(pat, before);
    });
}

#[test]
fn nested_patterns_are_accepted() {
    let mut inner = ArrayPattern::default();
    inner.set_elements(vec![Some(ident("c", 2).into())]);

    let mut default = AssignmentPattern::default();
    default
        .set_left(ident("d", 6).into())
        .set_right(Literal::new(LitValue::Num(1.0), "1").into());

    let mut member = MemberExpression::default();
    member
        .set_object(ident("o", 12).into())
        .set_property(ident("p", 14).into());

    let mut pat = ArrayPattern::default();
    pat.try_set_elements(vec![
        Some(inner.into()),
        Some(default.into()),
        Some(member.into()),
    ])
    .unwrap();

    let kinds: Vec<_> = pat
        .elements()
        .iter()
        .map(|e| e.as_ref().map(Node::kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            Some(NodeKind::ArrayPattern),
            Some(NodeKind::AssignmentPattern),
            Some(NodeKind::MemberExpression),
        ]
    );
}

#[test]
fn node_reports_its_type() {
    let pat = ArrayPattern::default();

    assert_eq!(pat.type_name(), "ArrayPattern");
    assert!(pat.implements(Capability::Pattern));
    assert!(!pat.implements(Capability::Expression));
}
