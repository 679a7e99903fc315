use anyhow::{Context, Result};
use fern_dom::{Document, Element, Node, render};
use fern_vdom::{VNode, fragment, h};

/// The demo virtual tree: a greeting plus one `<li>` per word.
pub fn demo_vdom(words: &str) -> VNode {
    let items: Vec<VNode> = words
        .split_whitespace()
        .map(|w| h("li", (), vec![w.into()]))
        .collect();
    fragment(vec![
        h("div", vec![("id", "foo")], vec!["Hello!".into()]).into(),
        h("ul", (), vec![items.into()]).into(),
    ])
}

/// Render the demo tree into the `#app` element of a fresh document and
/// return the document as HTML text. With `dump_json` set, a `<pre id="vdom">`
/// holding the JSON dump of the virtual tree is mounted as well.
pub fn render_cmd(words: &str, dump_json: bool) -> Result<String> {
    let vdom = demo_vdom(words);
    let live = render(&vdom).context("failed to render demo tree")?;

    let mut doc = Document::new();
    let mut app = Element::create("div").context("failed to create #app")?;
    app.set_attribute("id", "app");
    doc.root_mut().append_child(Node::Element(app));

    let app = doc
        .element_by_id_mut("app")
        .context("no #app element in document")?;
    app.append_child(live);

    if dump_json {
        let json = serde_json::to_string_pretty(&vdom)
            .context("failed to serialize demo tree")?;
        let pre = render(&h("pre", vec![("id", "vdom")], vec![json.into()]))
            .context("failed to render JSON dump")?;
        app.append_child(pre);
    }

    Ok(doc.to_string())
}

/// Print the demo virtual tree as pretty JSON, `JSON.stringify` style.
pub fn dump_cmd(words: &str) -> Result<String> {
    serde_json::to_string_pretty(&demo_vdom(words)).context("failed to serialize demo tree")
}
