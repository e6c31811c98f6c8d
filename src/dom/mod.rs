//! Minimal host document the chart canvas is mounted into.
//!
//! Nodes live in an arena owned by [`Document`] and are addressed by
//! [`NodeId`]. Only what chart setup needs is modelled: tags, ordered
//! attributes, class lists, computed styles and element children.

mod markup;
mod selector;

use indexmap::IndexMap;

use crate::error::{ChartError, ChartResult};

pub use markup::escape_xml;
pub use selector::Selector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attributes: IndexMap<String, String>,
    styles: IndexMap<String, String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    fn new(tag: &str, parent: Option<NodeId>) -> Self {
        Self {
            tag: tag.to_owned(),
            attributes: IndexMap::new(),
            styles: IndexMap::new(),
            parent,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class))
    }

    #[must_use]
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    nodes: Vec<Element>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a document holding a single `body` element.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Element::new("body", None)],
        }
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of elements, `body` included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0)
    }

    fn element_mut(&mut self, node: NodeId) -> ChartResult<&mut Element> {
        self.nodes
            .get_mut(node.0)
            .ok_or_else(|| unknown_node(node))
    }

    /// Appends a new `tag` element as the last child of `parent`.
    pub fn create_element(&mut self, parent: NodeId, tag: &str) -> ChartResult<NodeId> {
        if tag.is_empty() {
            return Err(ChartError::InvalidData(
                "element tag must not be empty".to_owned(),
            ));
        }
        let id = NodeId(self.nodes.len());
        self.element_mut(parent)?.children.push(id);
        self.nodes.push(Element::new(tag, Some(parent)));
        Ok(id)
    }

    pub fn set_attr(
        &mut self,
        node: NodeId,
        name: &str,
        value: impl Into<String>,
    ) -> ChartResult<()> {
        self.element_mut(node)?
            .attributes
            .insert(name.to_owned(), value.into());
        Ok(())
    }

    #[must_use]
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)?.attr(name)
    }

    /// Adds `class` to the element's class list unless already present.
    pub fn add_class(&mut self, node: NodeId, class: &str) -> ChartResult<()> {
        let element = self.element_mut(node)?;
        if element.has_class(class) {
            return Ok(());
        }
        let classes = match element.attributes.get("class") {
            Some(existing) if !existing.trim().is_empty() => format!("{existing} {class}"),
            _ => class.to_owned(),
        };
        element.attributes.insert("class".to_owned(), classes);
        Ok(())
    }

    #[must_use]
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node)
            .is_some_and(|element| element.has_class(class))
    }

    /// Records a computed style value, e.g. `("width", "480px")`.
    pub fn set_style(
        &mut self,
        node: NodeId,
        property: &str,
        value: impl Into<String>,
    ) -> ChartResult<()> {
        self.element_mut(node)?
            .styles
            .insert(property.to_owned(), value.into());
        Ok(())
    }

    #[must_use]
    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.element(node)?.style(property)
    }

    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.element(node).map(Element::children).unwrap_or_default()
    }

    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.element(node)?.parent
    }

    #[must_use]
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(Element::tag)
    }

    /// All elements matching `selector`, in document order.
    #[must_use]
    pub fn select_all(&self, selector: &Selector) -> Vec<NodeId> {
        let mut matches = Vec::new();
        let mut stack = vec![self.root()];
        while let Some(node) = stack.pop() {
            let Some(element) = self.element(node) else {
                continue;
            };
            if selector.matches(element) {
                matches.push(node);
            }
            stack.extend(element.children.iter().rev().copied());
        }
        matches
    }

    #[must_use]
    pub fn select_first(&self, selector: &Selector) -> Option<NodeId> {
        self.select_all(selector).into_iter().next()
    }

    /// Serializes `node` and its subtree as XML markup.
    #[must_use]
    pub fn outer_markup(&self, node: NodeId) -> String {
        let mut out = String::new();
        markup::write_element(self, node, &mut out);
        out
    }
}

fn unknown_node(node: NodeId) -> ChartError {
    ChartError::InvalidData(format!("node {} does not belong to this document", node.0))
}
