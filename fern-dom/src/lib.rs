use indexmap::IndexMap;
use thiserror::Error;

pub mod html;
pub mod render;

pub use render::render;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomError {
    /// The tag is not a legal element identifier; raised by element creation,
    /// never by the virtual-node builders.
    #[error("invalid tag name: {0:?}")]
    InvalidTag(String),
}

/// A real, mutable node in the host display tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Container whose children are spliced into the parent on insertion.
    Fragment(Vec<Node>),
}

impl Node {
    pub fn text(t: impl Into<String>) -> Node {
        Node::Text(t.into())
    }

    /// Depth-first lookup of an element carrying `id="..."`, the
    /// `getElementById` analogue.
    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        match self {
            Node::Element(el) => {
                if el.attribute("id") == Some(id) {
                    return Some(el);
                }
                el.children.iter_mut().find_map(|c| c.element_by_id_mut(id))
            }
            Node::Fragment(children) => {
                children.iter_mut().find_map(|c| c.element_by_id_mut(id))
            }
            Node::Text(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attributes: IndexMap<String, String>,
    children: Vec<Node>,
}

// Approximates what a host createElement accepts; anything else raises
// InvalidTag at creation time.
fn is_valid_tag(tag: &str) -> bool {
    let mut bytes = tag.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

impl Element {
    pub fn create(tag: impl Into<String>) -> Result<Element, DomError> {
        let tag = tag.into();
        if !is_valid_tag(&tag) {
            return Err(DomError::InvalidTag(tag));
        }
        Ok(Element {
            tag,
            attributes: IndexMap::new(),
            children: Vec::new(),
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn set_attribute(&mut self, k: impl Into<String>, v: impl Into<String>) {
        self.attributes.insert(k.into(), v.into());
    }

    pub fn attribute(&self, k: &str) -> Option<&str> {
        self.attributes.get(k).map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The `appendChild` equivalent. A fragment argument is spliced: its
    /// children land directly in this element and the fragment itself
    /// leaves no trace.
    pub fn append_child(&mut self, node: Node) {
        match node {
            Node::Fragment(children) => {
                for c in children {
                    self.append_child(c);
                }
            }
            other => self.children.push(other),
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

/// The host display tree: a single root element the caller mounts into.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new() -> Document {
        Document {
            root: Element {
                tag: "html".to_string(),
                attributes: IndexMap::new(),
                children: Vec::new(),
            },
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.root.attribute("id") == Some(id) {
            return Some(&mut self.root);
        }
        self.root
            .children
            .iter_mut()
            .find_map(|c| c.element_by_id_mut(id))
    }
}

impl Default for Document {
    fn default() -> Self {
        Document::new()
    }
}
