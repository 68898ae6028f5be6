//! Row/cell filtering and the rectangular grid handed to extraction.
//!
//! The page's table bodies mix schedule cells with whitespace text nodes,
//! zone-change marker rows and hidden columns. Filtering happens once, here,
//! so extraction only ever sees the schedule grid.

/// The DOM operations extraction needs from an HTML node.
///
/// Implemented for the `scraper` document in [`super::html`]; tests use a
/// small in-memory tree.
pub trait TableNode: Sized {
    /// False for text, comment and other non-element nodes.
    fn is_element(&self) -> bool;

    /// Child nodes in document order, including non-element nodes.
    fn children(&self) -> Vec<Self>;

    /// Concatenated text of the node and its descendants.
    fn text(&self) -> String;

    /// Attribute value, if present.
    fn attr(&self, name: &str) -> Option<&str>;
}

/// Returns true if the node belongs in the schedule grid.
pub fn is_schedule_node<N: TableNode>(node: &N) -> bool {
    node.is_element() && !is_zone_change(node) && !is_hidden(node)
}

/// Zone-change marker rows carry a class like `zone-change`.
fn is_zone_change<N: TableNode>(node: &N) -> bool {
    node.attr("class").is_some_and(|class| {
        class.split_whitespace().any(|token| {
            let normalized: String = token
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .map(|c| c.to_ascii_lowercase())
                .collect();
            normalized == "zonechange"
        })
    })
}

/// Hidden via inline `display: none`.
fn is_hidden<N: TableNode>(node: &N) -> bool {
    node.attr("style").is_some_and(|style| {
        let compact: String = style
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        compact.contains("display:none")
    })
}

/// Trimmed cell text, row by row, after filtering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Build a grid from a table body element.
    pub fn from_table<N: TableNode>(table: &N) -> Self {
        let rows = table
            .children()
            .into_iter()
            .filter(is_schedule_node)
            .map(|row| {
                row.children()
                    .into_iter()
                    .filter(is_schedule_node)
                    .map(|cell| cell.text().trim().to_string())
                    .collect()
            })
            .collect();

        Self { rows }
    }

    /// Build a grid from already-clean rows.
    #[cfg(test)]
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory DOM for extraction tests.

    use super::TableNode;

    #[derive(Debug, Clone)]
    pub enum FakeNode {
        Text(String),
        Element {
            attrs: Vec<(&'static str, String)>,
            text: String,
            children: Vec<FakeNode>,
        },
    }

    impl FakeNode {
        pub fn text_node(s: &str) -> Self {
            FakeNode::Text(s.to_string())
        }

        pub fn cell(s: &str) -> Self {
            FakeNode::Element {
                attrs: Vec::new(),
                text: s.to_string(),
                children: vec![FakeNode::text_node(s)],
            }
        }

        pub fn row(cells: Vec<FakeNode>) -> Self {
            FakeNode::Element {
                attrs: Vec::new(),
                text: String::new(),
                children: cells,
            }
        }

        pub fn cells(texts: &[&str]) -> Self {
            Self::row(texts.iter().map(|t| Self::cell(t)).collect())
        }

        pub fn with_attr(self, name: &'static str, value: &str) -> Self {
            match self {
                FakeNode::Element {
                    mut attrs,
                    text,
                    children,
                } => {
                    attrs.push((name, value.to_string()));
                    FakeNode::Element {
                        attrs,
                        text,
                        children,
                    }
                }
                text => text,
            }
        }
    }

    impl TableNode for FakeNode {
        fn is_element(&self) -> bool {
            matches!(self, FakeNode::Element { .. })
        }

        fn children(&self) -> Vec<Self> {
            match self {
                FakeNode::Element { children, .. } => children.clone(),
                FakeNode::Text(_) => Vec::new(),
            }
        }

        fn text(&self) -> String {
            match self {
                FakeNode::Element { text, .. } => text.clone(),
                FakeNode::Text(text) => text.clone(),
            }
        }

        fn attr(&self, name: &str) -> Option<&str> {
            match self {
                FakeNode::Element { attrs, .. } => attrs
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| value.as_str()),
                FakeNode::Text(_) => None,
            }
        }
    }
}
