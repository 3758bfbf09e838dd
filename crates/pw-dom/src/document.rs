//! The document arena.

use serde::Serialize;

use crate::element::{Element, ElementSpec, Layout, NodeId};
use crate::error::{DomError, Result};
use crate::selector::SelectorList;

/// Visible area of the browsing context in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 390,
            height: 844,
        }
    }
}

/// How a programmatic scroll should animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScrollBehavior {
    Auto,
    Smooth,
}

/// The last programmatic scroll issued by a controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    element: Element,
}

/// An element tree rooted at `<body>`, plus viewport, scroll, focus and
/// location state.
///
/// Removed nodes stay in the arena (their ids remain valid) but are no
/// longer reachable from the body, so queries skip them.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    body: NodeId,
    focused: Option<NodeId>,
    viewport: Viewport,
    scroll_y: f64,
    last_scroll: Option<ScrollRequest>,
    location: String,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document with a `<body>` root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                parent: None,
                children: Vec::new(),
                element: Element::new("body"),
            }],
            body: NodeId(0),
            focused: None,
            viewport: Viewport::default(),
            scroll_y: 0.0,
            last_scroll: None,
            location: "index.html".to_string(),
        }
    }

    /// The `<body>` element.
    #[inline]
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Number of nodes ever created, detached ones included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A document always has a body, so it is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    // =========================================================================
    // Tree
    // =========================================================================

    /// Append a new element as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, spec: ElementSpec) -> Result<NodeId> {
        self.node(parent)?;
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: Some(parent),
            children: Vec::new(),
            element: spec.element,
        });
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    /// Detach a node (and its subtree) from its parent.
    pub fn remove(&mut self, node: NodeId) -> Result<()> {
        if node == self.body {
            return Err(DomError::Detached(node));
        }
        let parent = self.node(node)?.parent;
        if let Some(parent) = parent {
            self.nodes[parent.0].children.retain(|c| *c != node);
        }
        self.nodes[node.0].parent = None;
        if self.focused.is_some_and(|f| self.contains(node, f)) {
            self.focused = None;
        }
        Ok(())
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Check if `node` is reachable from the body.
    pub fn is_connected(&self, node: NodeId) -> bool {
        self.contains(self.body, node)
    }

    /// Inclusive containment: a node contains itself.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// `node` followed by its ancestors up to the root.
    pub fn path(&self, node: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = Some(node);
        while let Some(id) = current {
            path.push(id);
            current = self.parent(id);
        }
        path
    }

    /// Descendants of `root` in document order, excluding `root`.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All connected elements matching `selector`, in document order.
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>> {
        let list = SelectorList::parse(selector)?;
        let mut matches = Vec::new();
        if list.matches(&self.nodes[self.body.0].element) {
            matches.push(self.body);
        }
        matches.extend(self.filter(self.descendants(self.body), &list));
        Ok(matches)
    }

    /// First connected element matching `selector`.
    pub fn query_selector(&self, selector: &str) -> Result<Option<NodeId>> {
        Ok(self.query_selector_all(selector)?.into_iter().next())
    }

    /// Descendants of `root` matching `selector`.
    pub fn query_all_within(&self, root: NodeId, selector: &str) -> Result<Vec<NodeId>> {
        self.node(root)?;
        let list = SelectorList::parse(selector)?;
        Ok(self.filter(self.descendants(root), &list))
    }

    /// First descendant of `root` matching `selector`.
    pub fn query_within(&self, root: NodeId, selector: &str) -> Result<Option<NodeId>> {
        Ok(self.query_all_within(root, selector)?.into_iter().next())
    }

    /// Nearest inclusive ancestor of `node` matching `selector`.
    pub fn closest(&self, node: NodeId, selector: &str) -> Result<Option<NodeId>> {
        self.node(node)?;
        let list = SelectorList::parse(selector)?;
        Ok(self
            .path(node)
            .into_iter()
            .find(|id| list.matches(&self.nodes[id.0].element)))
    }

    /// Check if `node` matches `selector`.
    pub fn matches(&self, node: NodeId, selector: &str) -> Result<bool> {
        let element = self.element(node)?;
        Ok(SelectorList::parse(selector)?.matches(element))
    }

    /// First connected element with the given id.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        std::iter::once(self.body)
            .chain(self.descendants(self.body))
            .find(|node| self.nodes[node.0].element.id() == Some(id))
    }

    fn filter(&self, nodes: Vec<NodeId>, list: &SelectorList) -> Vec<NodeId> {
        nodes
            .into_iter()
            .filter(|id| list.matches(&self.nodes[id.0].element))
            .collect()
    }

    // =========================================================================
    // Element access
    // =========================================================================

    pub fn element(&self, node: NodeId) -> Result<&Element> {
        self.node(node).map(|n| &n.element)
    }

    pub fn element_mut(&mut self, node: NodeId) -> Result<&mut Element> {
        self.nodes
            .get_mut(node.0)
            .map(|n| &mut n.element)
            .ok_or(DomError::UnknownNode(node))
    }

    fn node(&self, node: NodeId) -> Result<&Node> {
        self.nodes.get(node.0).ok_or(DomError::UnknownNode(node))
    }

    pub fn has_class(&self, node: NodeId, class_name: &str) -> bool {
        self.element(node).is_ok_and(|e| e.has_class(class_name))
    }

    pub fn add_class(&mut self, node: NodeId, class_name: &str) -> Result<()> {
        self.element_mut(node)?.add_class(class_name);
        Ok(())
    }

    pub fn remove_class(&mut self, node: NodeId, class_name: &str) -> Result<()> {
        self.element_mut(node)?.remove_class(class_name);
        Ok(())
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node).ok().and_then(|e| e.attr(name))
    }

    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) -> Result<()> {
        self.element_mut(node)?.set_attr(name, value);
        Ok(())
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.element(node).ok().and_then(|e| e.style(property))
    }

    /// Set an inline style; an empty value clears it.
    pub fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> Result<()> {
        self.element_mut(node)?.set_style(property, value);
        Ok(())
    }

    pub fn text(&self, node: NodeId) -> &str {
        self.element(node).map(Element::text).unwrap_or("")
    }

    pub fn set_text(&mut self, node: NodeId, text: &str) -> Result<()> {
        self.element_mut(node)?.set_text(text);
        Ok(())
    }

    pub fn value(&self, node: NodeId) -> &str {
        self.element(node).map(Element::value).unwrap_or("")
    }

    pub fn set_value(&mut self, node: NodeId, value: &str) -> Result<()> {
        self.element_mut(node)?.set_value(value);
        Ok(())
    }

    pub fn set_checked(&mut self, node: NodeId, checked: bool) -> Result<()> {
        self.element_mut(node)?.set_checked(checked);
        Ok(())
    }

    pub fn set_disabled(&mut self, node: NodeId, disabled: bool) -> Result<()> {
        self.element_mut(node)?.set_disabled(disabled);
        Ok(())
    }

    pub fn layout(&self, node: NodeId) -> Layout {
        self.element(node).map(Element::layout).unwrap_or_default()
    }

    pub fn set_layout(&mut self, node: NodeId, layout: Layout) -> Result<()> {
        self.element_mut(node)?.set_layout(layout);
        Ok(())
    }

    // =========================================================================
    // Focus, viewport, scrolling, location
    // =========================================================================

    /// Move focus to an attached element.
    pub fn focus(&mut self, node: NodeId) -> Result<()> {
        self.node(node)?;
        if !self.is_connected(node) {
            return Err(DomError::Detached(node));
        }
        self.focused = Some(node);
        Ok(())
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Current vertical scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Record a user-driven scroll position.
    pub fn set_scroll_y(&mut self, y: f64) {
        self.scroll_y = y.max(0.0);
    }

    /// Programmatic scroll. Headless scrolling completes immediately.
    pub fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        let top = top.max(0.0);
        self.scroll_y = top;
        self.last_scroll = Some(ScrollRequest { top, behavior });
    }

    pub fn last_scroll(&self) -> Option<ScrollRequest> {
        self.last_scroll
    }

    /// Current location of the browsing context.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Navigate the browsing context to `href`.
    pub fn navigate(&mut self, href: &str) {
        tracing::debug!(from = %self.location, to = href, "Navigating");
        self.location = href.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let nav = doc
            .append(doc.body(), ElementSpec::new("nav").class("navbar"))
            .unwrap();
        let toggle = doc
            .append(nav, ElementSpec::new("button").class("navbar-toggler"))
            .unwrap();
        let main = doc
            .append(doc.body(), ElementSpec::new("main").id("content"))
            .unwrap();
        (doc, nav, toggle, main)
    }

    #[test]
    fn test_query_in_document_order() {
        let (mut doc, nav, _, main) = sample();
        let first = doc.append(main, ElementSpec::new("p").class("x")).unwrap();
        let second = doc.append(nav, ElementSpec::new("p").class("x")).unwrap();

        // nav subtree precedes main in document order
        assert_eq!(doc.query_selector_all(".x").unwrap(), vec![second, first]);
        assert_eq!(doc.query_all_within(main, ".x").unwrap(), vec![first]);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let (doc, nav, toggle, main) = sample();
        assert!(doc.contains(nav, toggle));
        assert!(doc.contains(nav, nav));
        assert!(!doc.contains(nav, main));
    }

    #[test]
    fn test_remove_detaches_subtree() {
        let (mut doc, nav, toggle, _) = sample();
        doc.focus(toggle).unwrap();
        doc.remove(nav).unwrap();

        assert!(!doc.is_connected(toggle));
        assert_eq!(doc.focused(), None);
        assert_eq!(doc.query_selector(".navbar-toggler").unwrap(), None);
        assert!(doc.focus(toggle).is_err());
    }

    #[test]
    fn test_closest_and_get_by_id() {
        let (mut doc, nav, toggle, _) = sample();
        let icon = doc.append(toggle, ElementSpec::new("span")).unwrap();
        assert_eq!(doc.closest(icon, ".navbar").unwrap(), Some(nav));
        assert_eq!(doc.closest(icon, "form").unwrap(), None);
        assert!(doc.get_element_by_id("content").is_some());
        assert!(doc.get_element_by_id("missing").is_none());
    }

    #[test]
    fn test_scroll_to_clamps_and_records() {
        let mut doc = Document::new();
        doc.scroll_to(-40.0, ScrollBehavior::Smooth);
        assert_eq!(doc.scroll_y(), 0.0);
        assert_eq!(
            doc.last_scroll(),
            Some(ScrollRequest {
                top: 0.0,
                behavior: ScrollBehavior::Smooth
            })
        );
    }
}
