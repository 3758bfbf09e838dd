//! Element data and the builder used to create elements.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Handle to an element in a [`crate::Document`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Arena index of this node.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Box geometry in CSS pixels, supplied by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Layout {
    /// Offset from the top of the document.
    pub top: f64,
    /// Offset from the left of the document.
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

/// A single element: tag, attributes, inline styles and form state.
///
/// The `class` attribute is the single source for class tokens.
#[derive(Debug, Clone, Default)]
pub struct Element {
    tag_name: String,
    attrs: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    value: String,
    checked: bool,
    disabled: bool,
    text: String,
    layout: Layout,
}

impl Element {
    /// Create an element with the given tag (stored lowercase).
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            ..Default::default()
        }
    }

    /// Lowercase tag name.
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// The `id` attribute, if set.
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// Attribute value, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Check if an attribute is present (boolean attributes included).
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Set an attribute. `value`, `checked` and `disabled` also update
    /// the matching form state.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match name {
            "value" => self.value = value.to_string(),
            "checked" => self.checked = true,
            "disabled" => self.disabled = true,
            _ => {}
        }
        self.attrs.insert(name.to_string(), value.to_string());
    }

    /// Remove an attribute.
    pub fn remove_attr(&mut self, name: &str) {
        if name == "disabled" {
            self.disabled = false;
        }
        self.attrs.remove(name);
    }

    /// Class tokens in attribute order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_whitespace()
    }

    /// Check for a class token.
    pub fn has_class(&self, class_name: &str) -> bool {
        self.classes().any(|c| c == class_name)
    }

    /// Add a class token if missing.
    pub fn add_class(&mut self, class_name: &str) {
        if self.has_class(class_name) {
            return;
        }
        let mut tokens: Vec<String> = self.classes().map(str::to_string).collect();
        tokens.push(class_name.to_string());
        self.attrs.insert("class".to_string(), tokens.join(" "));
    }

    /// Remove a class token if present.
    pub fn remove_class(&mut self, class_name: &str) {
        if !self.has_class(class_name) {
            return;
        }
        let tokens: Vec<String> = self
            .classes()
            .filter(|c| *c != class_name)
            .map(str::to_string)
            .collect();
        self.attrs.insert("class".to_string(), tokens.join(" "));
    }

    /// Inline style property, if set.
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    /// Set an inline style property. An empty value removes it.
    pub fn set_style(&mut self, property: &str, value: &str) {
        if value.is_empty() {
            self.styles.remove(property);
        } else {
            self.styles.insert(property.to_string(), value.to_string());
        }
    }

    /// All inline styles.
    pub fn styles(&self) -> &BTreeMap<String, String> {
        &self.styles
    }

    /// Current form value.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    /// Checked state of checkboxes and radios.
    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Toggle the disabled state, keeping the attribute in sync.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.attrs.insert("disabled".to_string(), String::new());
        } else {
            self.attrs.remove("disabled");
        }
    }

    /// Text content (markup is kept verbatim).
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    /// The `data-*` attribute for `key`.
    pub fn data(&self, key: &str) -> Option<&str> {
        self.attr(&format!("data-{key}"))
    }
}

/// Builder for elements appended to a document.
#[derive(Debug, Clone)]
pub struct ElementSpec {
    pub(crate) element: Element,
}

impl ElementSpec {
    pub fn new(tag_name: &str) -> Self {
        Self {
            element: Element::new(tag_name),
        }
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    /// Add one or more whitespace-separated classes.
    pub fn class(mut self, classes: &str) -> Self {
        for class_name in classes.split_whitespace() {
            self.element.add_class(class_name);
        }
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        if name == "class" {
            return self.class(value);
        }
        self.element.set_attr(name, value);
        self
    }

    pub fn style(mut self, property: &str, value: &str) -> Self {
        self.element.set_style(property, value);
        self
    }

    pub fn value(mut self, value: &str) -> Self {
        self.element.set_value(value);
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.element.set_checked(checked);
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.element.set_text(text);
        self
    }

    /// Place the element at `top` with the given height.
    pub fn at(mut self, top: f64, height: f64) -> Self {
        self.element.layout.top = top;
        self.element.layout.height = height;
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.element.layout.width = width;
        self.element.layout.height = height;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_tokens() {
        let mut element = Element::new("DIV");
        assert_eq!(element.tag_name(), "div");

        element.add_class("card");
        element.add_class("shown");
        element.add_class("card");
        assert_eq!(element.attr("class"), Some("card shown"));

        element.remove_class("card");
        assert!(!element.has_class("card"));
        assert!(element.has_class("shown"));
    }

    #[test]
    fn test_attr_updates_form_state() {
        let spec = ElementSpec::new("input")
            .attr("value", "hello")
            .attr("checked", "")
            .attr("disabled", "");
        assert_eq!(spec.element.value(), "hello");
        assert!(spec.element.checked());
        assert!(spec.element.disabled());
    }

    #[test]
    fn test_empty_style_removes_property() {
        let mut element = Element::new("body");
        element.set_style("overflow", "hidden");
        assert_eq!(element.style("overflow"), Some("hidden"));
        element.set_style("overflow", "");
        assert_eq!(element.style("overflow"), None);
    }

    #[test]
    fn test_disabled_attribute_sync() {
        let mut element = Element::new("button");
        element.set_disabled(true);
        assert!(element.has_attr("disabled"));
        element.set_disabled(false);
        assert!(!element.has_attr("disabled"));
    }
}
