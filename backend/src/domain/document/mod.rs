//! Rich-text document model.
//!
//! Job descriptions are authored in a block editor and persisted as a JSON
//! document tree. This module owns that tree: a tagged-union node type, a
//! lossless JSON round trip ([`Document::from_json`] / [`Document::to_json`]),
//! a one-way HTML projection ([`render::render_html`]), and the toolbar
//! reducer driving the interactive editor.
//!
//! Only [`Node::Text`] leaves carry literal content; every other node is a
//! pure container owning its children exclusively. Unrecognised node types
//! from richer editors deserialise to [`Node::Unknown`] rather than failing,
//! so stored documents stay readable.

use serde::{Deserialize, Serialize};

mod link;
pub mod render;
pub mod toolbar;

pub use link::sanitize_url;
pub use render::render_html;

/// Heading level tag, `h1` through `h6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingTag {
    #[default]
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingTag {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }

    /// Parse a serialized tag; anything unrecognised falls back to `h1`,
    /// matching the renderer's default level.
    #[must_use]
    pub fn parse_or_default(tag: &str) -> Self {
        match tag {
            "h2" => Self::H2,
            "h3" => Self::H3,
            "h4" => Self::H4,
            "h5" => Self::H5,
            "h6" => Self::H6,
            _ => Self::H1,
        }
    }
}

/// Inline format flags on a text run, stored as the editor's bitmask.
///
/// Unknown bits are preserved verbatim so documents written by a richer
/// editor round-trip untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextFormat(u32);

impl TextFormat {
    pub const BOLD: u32 = 1;
    pub const ITALIC: u32 = 1 << 1;
    pub const UNDERLINE: u32 = 1 << 3;

    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn is_bold(self) -> bool {
        self.0 & Self::BOLD != 0
    }

    #[must_use]
    pub const fn is_italic(self) -> bool {
        self.0 & Self::ITALIC != 0
    }

    #[must_use]
    pub const fn is_underline(self) -> bool {
        self.0 & Self::UNDERLINE != 0
    }
}

/// One node of the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Root { children: Vec<Node> },
    Paragraph { children: Vec<Node> },
    Heading { tag: HeadingTag, children: Vec<Node> },
    /// Unordered list container.
    Bullet { children: Vec<Node> },
    /// Ordered list container.
    Number { children: Vec<Node> },
    ListItem { children: Vec<Node> },
    Quote { children: Vec<Node> },
    Link { url: String, children: Vec<Node> },
    /// The only node kind carrying literal content.
    Text { text: String, format: TextFormat },
    /// Node type this model does not know; kept so rendering can degrade
    /// visibly and serialisation stays lossless.
    Unknown { kind: String, children: Vec<Node> },
}

impl Node {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            format: TextFormat::default(),
        }
    }

    #[must_use]
    pub fn formatted_text(text: impl Into<String>, format: TextFormat) -> Self {
        Self::Text {
            text: text.into(),
            format,
        }
    }

    #[must_use]
    pub fn paragraph(children: Vec<Node>) -> Self {
        Self::Paragraph { children }
    }

    #[must_use]
    pub fn heading(tag: HeadingTag, children: Vec<Node>) -> Self {
        Self::Heading { tag, children }
    }

    #[must_use]
    pub fn list_item(children: Vec<Node>) -> Self {
        Self::ListItem { children }
    }

    fn to_draft(&self) -> NodeDraft {
        match self {
            Self::Root { children } => NodeDraft::container("root", children),
            Self::Paragraph { children } => NodeDraft::container("paragraph", children),
            Self::Heading { tag, children } => NodeDraft {
                tag: Some(tag.as_str().to_owned()),
                ..NodeDraft::container("heading", children)
            },
            Self::Bullet { children } => NodeDraft::container("bullet", children),
            Self::Number { children } => NodeDraft::container("number", children),
            Self::ListItem { children } => NodeDraft::container("listitem", children),
            Self::Quote { children } => NodeDraft::container("quote", children),
            Self::Link { url, children } => NodeDraft {
                url: Some(url.clone()),
                ..NodeDraft::container("link", children)
            },
            Self::Text { text, format } => NodeDraft {
                kind: "text".to_owned(),
                children: None,
                text: Some(text.clone()),
                tag: None,
                url: None,
                format: (format.bits() != 0).then(|| serde_json::Value::from(format.bits())),
            },
            Self::Unknown { kind, children } => NodeDraft::container(kind, children),
        }
    }
}

/// Loose wire shape shared by every node kind. Fields absent from a given
/// kind are skipped on output and ignored on input.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct NodeDraft {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<NodeDraft>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    /// The editor serialises element format as a string and text format as a
    /// number; only the numeric text bitmask is meaningful here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    format: Option<serde_json::Value>,
}

impl NodeDraft {
    fn container(kind: &str, children: &[Node]) -> Self {
        Self {
            kind: kind.to_owned(),
            children: Some(children.iter().map(Node::to_draft).collect()),
            text: None,
            tag: None,
            url: None,
            format: None,
        }
    }
}

impl From<NodeDraft> for Node {
    fn from(draft: NodeDraft) -> Self {
        let children: Vec<Node> = draft
            .children
            .unwrap_or_default()
            .into_iter()
            .map(Node::from)
            .collect();
        match draft.kind.as_str() {
            "root" => Self::Root { children },
            "paragraph" => Self::Paragraph { children },
            "heading" => Self::Heading {
                tag: draft
                    .tag
                    .as_deref()
                    .map(HeadingTag::parse_or_default)
                    .unwrap_or_default(),
                children,
            },
            "bullet" => Self::Bullet { children },
            "number" => Self::Number { children },
            "listitem" => Self::ListItem { children },
            "quote" => Self::Quote { children },
            "link" => Self::Link {
                url: draft.url.unwrap_or_default(),
                children,
            },
            "text" => Self::Text {
                text: draft.text.unwrap_or_default(),
                format: TextFormat::from_bits(
                    draft
                        .format
                        .and_then(|value| value.as_u64())
                        .and_then(|bits| u32::try_from(bits).ok())
                        .unwrap_or(0),
                ),
            },
            _ => Self::Unknown {
                kind: draft.kind,
                children,
            },
        }
    }
}

impl Serialize for Node {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_draft().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        NodeDraft::deserialize(deserializer).map(Self::from)
    }
}

/// Failures loading or storing a document tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    /// The stored string is not a document-shaped JSON payload.
    #[error("invalid document JSON: {message}")]
    Json { message: String },
}

impl DocumentError {
    fn json(message: impl Into<String>) -> Self {
        Self::Json {
            message: message.into(),
        }
    }
}

/// A whole document: the root node plus the storage round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub root: Node,
}

impl Document {
    /// A document holding a single empty paragraph, the editor's initial
    /// state.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            root: Node::Root {
                children: vec![Node::Paragraph { children: vec![] }],
            },
        }
    }

    /// Load a stored document.
    ///
    /// Unknown node types are preserved as [`Node::Unknown`]; only malformed
    /// JSON or a payload without a `root` object is an error.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Json`] when the string cannot be parsed.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(json).map_err(|err| DocumentError::json(err.to_string()))
    }

    /// Serialize for storage. Exact inverse of [`Document::from_json`]:
    /// `from_json(to_json(t)) == t` for every tree this model produces.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Json`] if serialisation fails; with this
    /// tree shape that does not happen in practice.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        serde_json::to_string(self).map_err(|err| DocumentError::json(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Document, HeadingTag, Node, TextFormat};

    fn sample_tree() -> Document {
        Document {
            root: Node::Root {
                children: vec![
                    Node::heading(HeadingTag::H2, vec![Node::text("Line Cook")]),
                    Node::paragraph(vec![
                        Node::formatted_text("Evenings", TextFormat::from_bits(TextFormat::BOLD)),
                        Node::text(" and weekends."),
                    ]),
                    Node::Bullet {
                        children: vec![
                            Node::list_item(vec![Node::text("Prep")]),
                            Node::list_item(vec![Node::Link {
                                url: "https://example.com".into(),
                                children: vec![Node::text("Menu")],
                            }]),
                        ],
                    },
                    Node::Quote {
                        children: vec![Node::text("Great team")],
                    },
                ],
            },
        }
    }

    #[rstest]
    fn json_round_trip_is_lossless() {
        let document = sample_tree();
        let json = document.to_json().expect("serialises");
        let restored = Document::from_json(&json).expect("parses");
        assert_eq!(restored, document);
    }

    #[rstest]
    fn empty_document_round_trips() {
        let document = Document::empty();
        let json = document.to_json().expect("serialises");
        assert_eq!(Document::from_json(&json).expect("parses"), document);
    }

    #[rstest]
    fn unknown_node_types_survive_the_round_trip() {
        let json = r#"{"root":{"type":"root","children":[{"type":"table","children":[{"type":"text","text":"cell"}]}]}}"#;
        let document = Document::from_json(json).expect("parses");
        let Node::Root { children } = &document.root else {
            panic!("root expected");
        };
        assert_eq!(
            children[0],
            Node::Unknown {
                kind: "table".into(),
                children: vec![Node::text("cell")],
            }
        );
        let restored =
            Document::from_json(&document.to_json().expect("serialises")).expect("parses");
        assert_eq!(restored, document);
    }

    #[rstest]
    fn editor_extras_are_ignored_on_input() {
        // Real editor output carries version/direction/detail fields and a
        // string-typed format on element nodes.
        let json = r#"{"root":{"type":"root","format":"","indent":0,"version":1,"children":[{"type":"paragraph","format":"","version":1,"children":[{"type":"text","text":"Hi","format":1,"mode":"normal","detail":0}]}]}}"#;
        let document = Document::from_json(json).expect("parses");
        let expected = Document {
            root: Node::Root {
                children: vec![Node::paragraph(vec![Node::formatted_text(
                    "Hi",
                    TextFormat::from_bits(TextFormat::BOLD),
                )])],
            },
        };
        assert_eq!(document, expected);
    }

    #[rstest]
    fn heading_tag_defaults_to_h1() {
        let json = r#"{"root":{"type":"root","children":[{"type":"heading","children":[]}]}}"#;
        let document = Document::from_json(json).expect("parses");
        let Node::Root { children } = &document.root else {
            panic!("root expected");
        };
        assert_eq!(
            children[0],
            Node::Heading {
                tag: HeadingTag::H1,
                children: vec![],
            }
        );
    }

    #[rstest]
    fn format_bitmask_preserves_unknown_bits() {
        // Bit 4 is strikethrough in the editor; this model does not render it
        // but must not drop it.
        let format = TextFormat::from_bits(TextFormat::BOLD | 4);
        let document = Document {
            root: Node::Root {
                children: vec![Node::paragraph(vec![Node::formatted_text("x", format)])],
            },
        };
        let restored =
            Document::from_json(&document.to_json().expect("serialises")).expect("parses");
        assert_eq!(restored, document);
        assert!(format.is_bold());
        assert!(!format.is_italic());
    }

    #[rstest]
    #[case("")]
    #[case("not json")]
    #[case(r#"{"noRoot":true}"#)]
    fn malformed_payloads_are_errors(#[case] json: &str) {
        assert!(Document::from_json(json).is_err());
    }
}
