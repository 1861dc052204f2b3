//! Toolbar state machine for the interactive editor.
//!
//! The editor delivers a single stream of events, one at a time in arrival
//! order: user commands (toggle a format, change the block type, work the
//! link editor, undo/redo) and selection-change notifications that recompute
//! what is active at the cursor. [`ToolbarState::apply`] is the explicit
//! `(state, event) -> state` reducer over that stream; nothing here touches
//! the document itself.

use super::{TextFormat, sanitize_url};

/// Block type of the paragraph under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockType {
    #[default]
    Paragraph,
    Heading1,
    Heading2,
    Bullet,
    Number,
    Quote,
}

impl BlockType {
    /// Label shown in the block-type dropdown.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Paragraph => "Normal",
            Self::Heading1 => "Heading 1",
            Self::Heading2 => "Heading 2",
            Self::Bullet => "Bulleted List",
            Self::Number => "Number List",
            Self::Quote => "Quote",
        }
    }

    const fn is_list(self) -> bool {
        matches!(self, Self::Bullet | Self::Number)
    }
}

/// Where the floating link editor currently is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LinkMode {
    /// No link at the selection; the editor is hidden.
    #[default]
    Closed,
    /// Selection sits inside a link; the URL is shown read-only.
    Viewing { url: String },
    /// The URL field is open for editing; `url` is what commit falls back to
    /// on cancel, `draft` is the text being typed.
    Editing { url: String, draft: String },
}

/// Default URL prefilled when inserting a fresh link.
const DEFAULT_LINK_URL: &str = "https://";

/// Everything the toolbar reflects about the selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolbarState {
    pub block: BlockType,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub link: LinkMode,
    pub can_undo: bool,
    pub can_redo: bool,
}

/// A single toolbar event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarEvent {
    ToggleBold,
    ToggleItalic,
    ToggleUnderline,
    /// Block-type button or dropdown choice.
    SetBlock(BlockType),
    /// The cursor moved; the editor reports what is active there.
    SelectionChanged {
        block: BlockType,
        format: TextFormat,
        /// URL of the link containing the selection, if any.
        link_url: Option<String>,
    },
    /// Turn the selection into a link and open the URL field.
    InsertLink,
    /// Strip the link from the selection.
    RemoveLink,
    /// Switch the floating editor from viewing to editing.
    BeginLinkEdit,
    /// Keystroke in the URL field.
    SetLinkDraft(String),
    /// Enter or the confirm button: re-apply the link with a sanitised URL.
    CommitLinkEdit,
    /// Escape or the cancel button: discard the draft, keep the old URL.
    CancelLinkEdit,
    Undo,
    Redo,
    /// The history stack changed; refresh undo/redo availability.
    HistoryChanged { can_undo: bool, can_redo: bool },
}

impl ToolbarState {
    /// Advance the state machine by one event.
    #[must_use]
    pub fn apply(mut self, event: ToolbarEvent) -> Self {
        match event {
            ToolbarEvent::ToggleBold => self.bold = !self.bold,
            ToolbarEvent::ToggleItalic => self.italic = !self.italic,
            ToolbarEvent::ToggleUnderline => self.underline = !self.underline,
            ToolbarEvent::SetBlock(block) => {
                // Re-selecting the active list type reverts to a paragraph;
                // re-selecting the active heading or quote is a no-op.
                if block == self.block {
                    if block.is_list() {
                        self.block = BlockType::Paragraph;
                    }
                } else {
                    self.block = block;
                }
            }
            ToolbarEvent::SelectionChanged {
                block,
                format,
                link_url,
            } => {
                self.block = block;
                self.bold = format.is_bold();
                self.italic = format.is_italic();
                self.underline = format.is_underline();
                self.link = match (std::mem::take(&mut self.link), link_url) {
                    // Keep an in-progress edit open while the selection moves
                    // within the link.
                    (editing @ LinkMode::Editing { .. }, Some(_)) => editing,
                    (_, Some(url)) => LinkMode::Viewing { url },
                    (_, None) => LinkMode::Closed,
                };
            }
            ToolbarEvent::InsertLink => {
                self.link = LinkMode::Editing {
                    url: DEFAULT_LINK_URL.to_owned(),
                    draft: DEFAULT_LINK_URL.to_owned(),
                };
            }
            ToolbarEvent::RemoveLink => self.link = LinkMode::Closed,
            ToolbarEvent::BeginLinkEdit => {
                if let LinkMode::Viewing { url } = std::mem::take(&mut self.link) {
                    self.link = LinkMode::Editing {
                        draft: url.clone(),
                        url,
                    };
                }
            }
            ToolbarEvent::SetLinkDraft(draft) => {
                if let LinkMode::Editing { url, .. } = std::mem::take(&mut self.link) {
                    self.link = LinkMode::Editing { url, draft };
                }
            }
            ToolbarEvent::CommitLinkEdit => {
                if let LinkMode::Editing { url, draft } = std::mem::take(&mut self.link) {
                    let committed = if draft.trim().is_empty() {
                        url
                    } else {
                        sanitize_url(&draft)
                    };
                    self.link = LinkMode::Viewing { url: committed };
                }
            }
            ToolbarEvent::CancelLinkEdit => {
                if let LinkMode::Editing { url, .. } = std::mem::take(&mut self.link) {
                    self.link = LinkMode::Viewing { url };
                }
            }
            // Undo/redo mutate the document, not the toolbar; the editor
            // follows up with SelectionChanged and HistoryChanged events.
            ToolbarEvent::Undo | ToolbarEvent::Redo => {}
            ToolbarEvent::HistoryChanged { can_undo, can_redo } => {
                self.can_undo = can_undo;
                self.can_redo = can_redo;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::super::TextFormat;
    use super::{BlockType, LinkMode, ToolbarEvent, ToolbarState};

    fn run(events: impl IntoIterator<Item = ToolbarEvent>) -> ToolbarState {
        events
            .into_iter()
            .fold(ToolbarState::default(), ToolbarState::apply)
    }

    #[rstest]
    fn initial_state_is_an_empty_paragraph() {
        let state = ToolbarState::default();
        assert_eq!(state.block, BlockType::Paragraph);
        assert!(!state.bold && !state.italic && !state.underline);
        assert_eq!(state.link, LinkMode::Closed);
        assert!(!state.can_undo && !state.can_redo);
    }

    #[rstest]
    fn format_toggles_flip_independently() {
        let state = run([
            ToolbarEvent::ToggleBold,
            ToolbarEvent::ToggleItalic,
            ToolbarEvent::ToggleBold,
        ]);
        assert!(!state.bold);
        assert!(state.italic);
        assert!(!state.underline);
    }

    #[rstest]
    fn reselecting_the_active_list_reverts_to_paragraph() {
        let state = run([
            ToolbarEvent::SetBlock(BlockType::Bullet),
            ToolbarEvent::SetBlock(BlockType::Bullet),
        ]);
        assert_eq!(state.block, BlockType::Paragraph);
    }

    #[rstest]
    #[case(BlockType::Heading1)]
    #[case(BlockType::Quote)]
    fn reselecting_heading_or_quote_is_a_no_op(#[case] block: BlockType) {
        let state = run([ToolbarEvent::SetBlock(block), ToolbarEvent::SetBlock(block)]);
        assert_eq!(state.block, block);
    }

    #[rstest]
    fn selection_change_recomputes_formats_and_block() {
        let state = run([
            ToolbarEvent::ToggleBold,
            ToolbarEvent::SelectionChanged {
                block: BlockType::Heading2,
                format: TextFormat::from_bits(TextFormat::ITALIC | TextFormat::UNDERLINE),
                link_url: None,
            },
        ]);
        assert_eq!(state.block, BlockType::Heading2);
        assert!(!state.bold);
        assert!(state.italic);
        assert!(state.underline);
    }

    #[rstest]
    fn selecting_inside_a_link_opens_view_mode() {
        let state = run([ToolbarEvent::SelectionChanged {
            block: BlockType::Paragraph,
            format: TextFormat::default(),
            link_url: Some("https://example.com".into()),
        }]);
        assert_eq!(
            state.link,
            LinkMode::Viewing {
                url: "https://example.com".into()
            }
        );
    }

    #[rstest]
    fn commit_sanitises_the_draft() {
        let state = run([
            ToolbarEvent::SelectionChanged {
                block: BlockType::Paragraph,
                format: TextFormat::default(),
                link_url: Some("https://old.example".into()),
            },
            ToolbarEvent::BeginLinkEdit,
            ToolbarEvent::SetLinkDraft("example.com/apply".into()),
            ToolbarEvent::CommitLinkEdit,
        ]);
        assert_eq!(
            state.link,
            LinkMode::Viewing {
                url: "https://example.com/apply".into()
            }
        );
    }

    #[rstest]
    fn commit_rejects_javascript_urls() {
        let state = run([
            ToolbarEvent::InsertLink,
            ToolbarEvent::SetLinkDraft("javascript:alert(1)".into()),
            ToolbarEvent::CommitLinkEdit,
        ]);
        assert_eq!(
            state.link,
            LinkMode::Viewing {
                url: "about:blank".into()
            }
        );
    }

    #[rstest]
    fn cancel_discards_the_draft_and_keeps_the_old_url() {
        let state = run([
            ToolbarEvent::SelectionChanged {
                block: BlockType::Paragraph,
                format: TextFormat::default(),
                link_url: Some("https://old.example".into()),
            },
            ToolbarEvent::BeginLinkEdit,
            ToolbarEvent::SetLinkDraft("https://new.example".into()),
            ToolbarEvent::CancelLinkEdit,
        ]);
        assert_eq!(
            state.link,
            LinkMode::Viewing {
                url: "https://old.example".into()
            }
        );
    }

    #[rstest]
    fn moving_off_the_link_closes_the_editor() {
        let state = run([
            ToolbarEvent::SelectionChanged {
                block: BlockType::Paragraph,
                format: TextFormat::default(),
                link_url: Some("https://example.com".into()),
            },
            ToolbarEvent::SelectionChanged {
                block: BlockType::Paragraph,
                format: TextFormat::default(),
                link_url: None,
            },
        ]);
        assert_eq!(state.link, LinkMode::Closed);
    }

    #[rstest]
    fn insert_link_opens_edit_mode_with_the_default_url() {
        let state = run([ToolbarEvent::InsertLink]);
        assert_eq!(
            state.link,
            LinkMode::Editing {
                url: "https://".into(),
                draft: "https://".into()
            }
        );
    }

    #[rstest]
    fn history_changes_update_undo_redo_availability() {
        let state = run([
            ToolbarEvent::HistoryChanged {
                can_undo: true,
                can_redo: false,
            },
            ToolbarEvent::Undo,
        ]);
        assert!(state.can_undo);
        assert!(!state.can_redo);
    }
}
