use serde::{Deserialize, Serialize};

pub mod attrs;

pub use attrs::Attrs;

/// Immutable description of one display-tree node, prior to materialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VNode {
    Text(String),
    Element {
        tag: String,
        attrs: Attrs,
        children: Vec<VNode>,
    },
    /// Grouping marker: children are spliced into the parent unwrapped,
    /// no wrapping element is ever created for it.
    Fragment(Vec<VNode>),
}

impl VNode {
    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Text(_) => &[],
            VNode::Element { children, .. } | VNode::Fragment(children) => children,
        }
    }
}

/// One entry in a builder child list: a text leaf, a single node, or a
/// pre-built sequence of nodes to splice in (one level of flattening).
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Text(String),
    Node(VNode),
    Many(Vec<VNode>),
}

impl From<&str> for Child {
    fn from(s: &str) -> Self {
        Child::Text(s.to_string())
    }
}
impl From<String> for Child {
    fn from(s: String) -> Self {
        Child::Text(s)
    }
}
impl From<VNode> for Child {
    fn from(n: VNode) -> Self {
        Child::Node(n)
    }
}
impl From<Vec<VNode>> for Child {
    fn from(nodes: Vec<VNode>) -> Self {
        Child::Many(nodes)
    }
}

// Splice `Many` entries in place; exactly one level deep.
fn normalize(children: Vec<Child>) -> Vec<VNode> {
    let mut out = Vec::with_capacity(children.len());
    for c in children {
        match c {
            Child::Text(t) => out.push(VNode::Text(t)),
            Child::Node(n) => out.push(n),
            Child::Many(nodes) => out.extend(nodes),
        }
    }
    out
}

/// Build an element node. No validation happens here; a bad tag is accepted
/// and fails later at render time.
pub fn h(tag: impl Into<String>, attrs: impl Into<Attrs>, children: Vec<Child>) -> VNode {
    VNode::Element {
        tag: tag.into(),
        attrs: attrs.into(),
        children: normalize(children),
    }
}

/// Group sibling nodes without a synthetic wrapping element.
pub fn fragment(children: Vec<Child>) -> VNode {
    VNode::Fragment(normalize(children))
}

pub fn text(t: impl Into<String>) -> VNode {
    VNode::Text(t.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_tree() {
        let node = h(
            "div",
            vec![("class", "app")],
            vec!["hello".into(), h("span", (), vec![text("world").into()]).into()],
        );
        if let VNode::Element {
            tag,
            attrs,
            children,
        } = node
        {
            assert_eq!(tag, "div");
            assert_eq!(attrs.get("class").unwrap(), "app");
            assert_eq!(children.len(), 2);
            assert_eq!(children[0], VNode::Text("hello".into()));
        } else {
            panic!("expected element");
        }
    }

    #[test]
    fn fragment_carries_no_attrs() {
        let f = fragment(vec![text("a").into(), text("b").into()]);
        assert_eq!(
            f,
            VNode::Fragment(vec![VNode::Text("a".into()), VNode::Text("b".into())])
        );
    }
}
