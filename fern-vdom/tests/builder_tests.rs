use fern_vdom::{Attrs, Child, VNode, fragment, h, text};

#[test]
fn no_children_builds_empty_sequence() {
    let node = h("span", (), vec![]);
    assert_eq!(node, VNode::Element {
        tag: "span".into(),
        attrs: Attrs::new(),
        children: vec![],
    });
}

#[test]
fn child_list_flattens_one_level() {
    let items = vec![
        h("li", (), vec!["one".into()]),
        h("li", (), vec!["two".into()]),
    ];
    let node = h("ul", (), vec![items.into()]);
    assert_eq!(node.children().len(), 2);
    assert_eq!(node.children()[0], h("li", (), vec!["one".into()]));
    assert_eq!(node.children()[1], h("li", (), vec!["two".into()]));
}

#[test]
fn mixed_children_keep_order() {
    let node = h(
        "p",
        (),
        vec![
            "lead ".into(),
            h("em", (), vec!["mid".into()]).into(),
            Child::Many(vec![text("tail")]),
        ],
    );
    assert_eq!(node.children(), &[
        VNode::Text("lead ".into()),
        h("em", (), vec!["mid".into()]),
        VNode::Text("tail".into()),
    ]);
}

#[test]
fn builders_produce_independent_nodes() {
    let a = h("li", (), vec!["one".into()]);
    let b = h("li", (), vec!["two".into()]);
    assert_eq!(a.children().len(), 1);
    assert_eq!(b.children().len(), 1);
    assert_ne!(a, b);
}

#[test]
fn fragment_splices_prebuilt_lists_too() {
    let items = vec![text("a"), text("b")];
    let f = fragment(vec![items.into(), text("c").into()]);
    assert_eq!(f.children().len(), 3);
}

#[test]
fn bad_tag_is_accepted_at_build_time() {
    // Validation is deferred to render; building never fails.
    let node = h("not a tag", (), vec![]);
    assert!(matches!(node, VNode::Element { ref tag, .. } if tag == "not a tag"));
}
