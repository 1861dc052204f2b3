//! One-way HTML projection of a document tree.
//!
//! Rendering is depth-first with children in array order and is never parsed
//! back. Unrecognised node types render a visible fallback marker instead of
//! raising; a container with no children emits nothing rather than an empty
//! wrapper.

use super::{Document, Node, sanitize_url};

/// Marker emitted for node types this renderer does not recognise.
const UNKNOWN_NODE_MARKER: &str = r#"<span style="font-weight: bold">Unknown Node</span>"#;

/// Render a document's block children to read-only HTML.
#[must_use]
pub fn render_html(document: &Document) -> String {
    let mut out = String::new();
    render_node(&document.root, &mut out);
    out
}

fn render_node(node: &Node, out: &mut String) {
    match node {
        Node::Root { children } => render_children(children, out),
        Node::Paragraph { children } => render_wrapped(children, "p", out),
        Node::Heading { tag, children } => render_wrapped(children, tag.as_str(), out),
        Node::Bullet { children } => render_wrapped(children, "ul", out),
        Node::Number { children } => render_wrapped(children, "ol", out),
        Node::ListItem { children } => render_wrapped(children, "li", out),
        Node::Quote { children } => render_wrapped(children, "blockquote", out),
        Node::Link { url, children } => {
            if children.is_empty() {
                return;
            }
            out.push_str("<a href=\"");
            escape_into(&sanitize_url(url), out);
            out.push_str("\">");
            render_children(children, out);
            out.push_str("</a>");
        }
        Node::Text { text, format } => {
            out.push_str("<span>");
            if format.is_bold() {
                out.push_str("<strong>");
            }
            if format.is_italic() {
                out.push_str("<em>");
            }
            if format.is_underline() {
                out.push_str("<u>");
            }
            escape_into(text, out);
            if format.is_underline() {
                out.push_str("</u>");
            }
            if format.is_italic() {
                out.push_str("</em>");
            }
            if format.is_bold() {
                out.push_str("</strong>");
            }
            out.push_str("</span>");
        }
        Node::Unknown { .. } => out.push_str(UNKNOWN_NODE_MARKER),
    }
}

fn render_wrapped(children: &[Node], tag: &str, out: &mut String) {
    if children.is_empty() {
        return;
    }
    out.push('<');
    out.push_str(tag);
    out.push('>');
    render_children(children, out);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn render_children(children: &[Node], out: &mut String) {
    for child in children {
        render_node(child, out);
    }
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
