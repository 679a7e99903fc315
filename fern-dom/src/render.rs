use crate::{DomError, Element, Node};
use fern_vdom::VNode;

/// Materialize a virtual tree into a live node.
///
/// Depth-first; an element is created before its children are rendered and
/// attached. Fails fast on the first invalid tag, nothing already built is
/// rolled back. Rendering never mutates the input, and rendering the same
/// tree twice yields two independent live trees.
pub fn render(vnode: &VNode) -> Result<Node, DomError> {
    match vnode {
        VNode::Text(t) => Ok(Node::Text(t.clone())),
        VNode::Fragment(children) => {
            let mut out = Vec::with_capacity(children.len());
            for c in children {
                // Appending to a fragment splices nested fragments, same as
                // appending to an element.
                match render(c)? {
                    Node::Fragment(nested) => out.extend(nested),
                    node => out.push(node),
                }
            }
            Ok(Node::Fragment(out))
        }
        VNode::Element {
            tag,
            attrs,
            children,
        } => {
            let mut el = Element::create(tag.as_str())?;
            for (k, v) in attrs.iter() {
                el.set_attribute(k, v);
            }
            for c in children {
                el.append_child(render(c)?);
            }
            Ok(Node::Element(el))
        }
    }
}
