//! Diagnostic HTML-ish text writer for live trees.
//!
//! Text content is written verbatim (no entity escaping), matching what the
//! materializer stored; this is a debugging surface, not a safe serializer.

use crate::{Document, Element, Node};
use std::fmt;

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(t) => f.write_str(t),
            Node::Element(el) => el.fmt(f),
            // A detached fragment prints as its children back to back.
            Node::Fragment(children) => {
                for c in children {
                    c.fmt(f)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag())?;
        for (k, v) in self.attributes() {
            write!(f, " {}=\"{}\"", k, v)?;
        }
        f.write_str(">")?;
        for c in self.children() {
            c.fmt(f)?;
        }
        write!(f, "</{}>", self.tag())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root().fmt(f)
    }
}
