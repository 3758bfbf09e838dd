//! Compound selector parsing and matching.
//!
//! Supports selector lists of compound selectors. Combinators (descendant,
//! child, sibling) are rejected; callers scope queries with
//! [`crate::Document::query_all_within`] instead.

use std::str::FromStr;

use crate::element::Element;
use crate::error::{DomError, Result};

/// A parsed, comma-separated list of compound selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    selectors: Vec<Compound>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatcher>,
    negations: Vec<Compound>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrMatcher {
    name: String,
    op: AttrOp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrOp {
    Exists,
    Equals(String),
    Prefix(String),
    Contains(String),
    Suffix(String),
}

impl SelectorList {
    /// Parse a selector list such as `input, textarea, select`.
    pub fn parse(source: &str) -> Result<Self> {
        let parts = split_top_level(source);
        if parts.iter().all(|p| p.trim().is_empty()) {
            return Err(invalid(source, "empty selector"));
        }

        let mut selectors = Vec::with_capacity(parts.len());
        for part in parts {
            let part = part.trim();
            if part.is_empty() {
                return Err(invalid(source, "empty entry in selector list"));
            }
            let mut cursor = Cursor::new(part);
            let compound = parse_compound(&mut cursor, source)?;
            if !cursor.at_end() {
                let rest: String = cursor.rest();
                return Err(if rest.starts_with(char::is_whitespace)
                    || rest.starts_with(['>', '+', '~'])
                {
                    DomError::UnsupportedSelector {
                        selector: source.to_string(),
                        reason: "combinators are not supported".to_string(),
                    }
                } else {
                    invalid(source, &format!("unexpected input '{rest}'"))
                });
            }
            selectors.push(compound);
        }

        Ok(Self { selectors })
    }

    /// Check whether any selector in the list matches the element.
    pub fn matches(&self, element: &Element) -> bool {
        self.selectors.iter().any(|s| s.matches(element))
    }
}

impl FromStr for SelectorList {
    type Err = DomError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Compound {
    fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag
            && tag != element.tag_name()
        {
            return false;
        }
        if let Some(id) = &self.id
            && element.id() != Some(id.as_str())
        {
            return false;
        }
        if !self.classes.iter().all(|c| element.has_class(c)) {
            return false;
        }
        if !self.attrs.iter().all(|a| a.matches(element)) {
            return false;
        }
        !self.negations.iter().any(|n| n.matches(element))
    }

    fn is_empty(&self) -> bool {
        self.tag.is_none()
            && self.id.is_none()
            && self.classes.is_empty()
            && self.attrs.is_empty()
            && self.negations.is_empty()
    }
}

impl AttrMatcher {
    fn matches(&self, element: &Element) -> bool {
        let Some(value) = element.attr(&self.name) else {
            return false;
        };
        match &self.op {
            AttrOp::Exists => true,
            AttrOp::Equals(expected) => value == expected,
            AttrOp::Prefix(prefix) => !prefix.is_empty() && value.starts_with(prefix.as_str()),
            AttrOp::Contains(needle) => !needle.is_empty() && value.contains(needle.as_str()),
            AttrOp::Suffix(suffix) => !suffix.is_empty() && value.ends_with(suffix.as_str()),
        }
    }
}

struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_str(&mut self, expected: &str) -> bool {
        let len = expected.chars().count();
        let matches = self
            .chars
            .get(self.pos..self.pos + len)
            .is_some_and(|slice| slice.iter().copied().eq(expected.chars()));
        if matches {
            self.pos += len;
        }
        matches
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn rest(&self) -> String {
        self.chars[self.pos..].iter().collect()
    }

    fn ident(&mut self) -> String {
        let start = self.pos;
        while self.peek().is_some_and(is_ident_char) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn parse_compound(cursor: &mut Cursor, source: &str) -> Result<Compound> {
    let mut compound = Compound::default();

    let universal = cursor.eat('*');
    if !universal && cursor.peek().is_some_and(is_ident_char) {
        compound.tag = Some(cursor.ident().to_ascii_lowercase());
    }

    loop {
        match cursor.peek() {
            Some('#') => {
                cursor.bump();
                let id = cursor.ident();
                if id.is_empty() {
                    return Err(invalid(source, "expected id after '#'"));
                }
                compound.id = Some(id);
            }
            Some('.') => {
                cursor.bump();
                let class_name = cursor.ident();
                if class_name.is_empty() {
                    return Err(invalid(source, "expected class after '.'"));
                }
                compound.classes.push(class_name);
            }
            Some('[') => {
                cursor.bump();
                compound.attrs.push(parse_attr(cursor, source)?);
            }
            Some(':') => {
                cursor.bump();
                if !cursor.eat_str("not(") {
                    return Err(DomError::UnsupportedSelector {
                        selector: source.to_string(),
                        reason: "only :not(...) pseudo-classes are supported".to_string(),
                    });
                }
                cursor.skip_whitespace();
                let negated = parse_compound(cursor, source)?;
                cursor.skip_whitespace();
                if !cursor.eat(')') {
                    return Err(invalid(source, "unterminated :not("));
                }
                if negated.is_empty() {
                    return Err(invalid(source, "empty :not()"));
                }
                compound.negations.push(negated);
            }
            _ => break,
        }
    }

    if compound.is_empty() && !universal {
        return Err(invalid(source, "expected a selector"));
    }
    Ok(compound)
}

fn parse_attr(cursor: &mut Cursor, source: &str) -> Result<AttrMatcher> {
    cursor.skip_whitespace();
    let name = cursor.ident();
    if name.is_empty() {
        return Err(invalid(source, "expected attribute name"));
    }
    cursor.skip_whitespace();

    let op_kind = match cursor.peek() {
        Some(']') => {
            cursor.bump();
            return Ok(AttrMatcher {
                name,
                op: AttrOp::Exists,
            });
        }
        Some('=') => {
            cursor.bump();
            '='
        }
        Some(c @ ('^' | '*' | '$')) => {
            cursor.bump();
            if !cursor.eat('=') {
                return Err(invalid(source, "expected '=' in attribute matcher"));
            }
            c
        }
        _ => return Err(invalid(source, "unterminated attribute")),
    };

    cursor.skip_whitespace();
    let value = parse_attr_value(cursor, source)?;
    cursor.skip_whitespace();
    if !cursor.eat(']') {
        return Err(invalid(source, "unterminated attribute"));
    }

    let op = match op_kind {
        '^' => AttrOp::Prefix(value),
        '*' => AttrOp::Contains(value),
        '$' => AttrOp::Suffix(value),
        _ => AttrOp::Equals(value),
    };
    Ok(AttrMatcher { name, op })
}

fn parse_attr_value(cursor: &mut Cursor, source: &str) -> Result<String> {
    match cursor.peek() {
        Some(quote @ ('"' | '\'')) => {
            cursor.bump();
            let mut value = String::new();
            loop {
                match cursor.bump() {
                    Some(c) if c == quote => return Ok(value),
                    Some(c) => value.push(c),
                    None => return Err(invalid(source, "unterminated string")),
                }
            }
        }
        _ => {
            let start = cursor.pos;
            while cursor
                .peek()
                .is_some_and(|c| c != ']' && !c.is_whitespace())
            {
                cursor.pos += 1;
            }
            if cursor.pos == start {
                return Err(invalid(source, "expected attribute value"));
            }
            Ok(cursor.chars[start..cursor.pos].iter().collect())
        }
    }
}

/// Split on commas that are not inside brackets, parentheses or quotes.
fn split_top_level(source: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (idx, c) in source.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '[' | '(') => depth += 1,
            (None, ']' | ')') => depth -= 1,
            (None, ',') if depth == 0 => {
                parts.push(&source[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(&source[start..]);
    parts
}

fn invalid(selector: &str, reason: &str) -> DomError {
    DomError::InvalidSelector {
        selector: selector.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(tag: &str, attrs: &[(&str, &str)]) -> Element {
        let mut el = Element::new(tag);
        for (name, value) in attrs {
            el.set_attr(name, value);
        }
        el
    }

    #[test]
    fn test_tag_id_class() {
        let el = element("div", &[("id", "navbarNav"), ("class", "collapse show")]);
        assert!(SelectorList::parse("#navbarNav").unwrap().matches(&el));
        assert!(SelectorList::parse("div.collapse").unwrap().matches(&el));
        assert!(SelectorList::parse(".collapse.show").unwrap().matches(&el));
        assert!(!SelectorList::parse("span.collapse").unwrap().matches(&el));
        assert!(!SelectorList::parse(".navbar").unwrap().matches(&el));
    }

    #[test]
    fn test_attribute_operators() {
        let link = element("a", &[("class", "nav-link"), ("href", "#section-about")]);
        let parse = |s: &str| SelectorList::parse(s).unwrap();

        assert!(parse("a[href]").matches(&link));
        assert!(parse(r##"a[href^="#"]"##).matches(&link));
        assert!(parse(r##".nav-link[href^="#section-"]"##).matches(&link));
        assert!(parse("[href*=about]").matches(&link));
        assert!(parse("[href$='about']").matches(&link));
        assert!(!parse(r##"[href="#"]"##).matches(&link));
        assert!(!parse("[data-count]").matches(&link));
    }

    #[test]
    fn test_button_type_submit() {
        let button = element("button", &[("type", "submit")]);
        assert!(
            SelectorList::parse(r#"button[type="submit"]"#)
                .unwrap()
                .matches(&button)
        );
    }

    #[test]
    fn test_not_and_lists() {
        let lazy = element("img", &[("loading", "lazy")]);
        let eager = element("img", &[("src", "a.png")]);
        let selector = SelectorList::parse("img:not([loading])").unwrap();
        assert!(!selector.matches(&lazy));
        assert!(selector.matches(&eager));

        let fields = SelectorList::parse("input, textarea, select").unwrap();
        assert!(fields.matches(&element("textarea", &[])));
        assert!(!fields.matches(&element("button", &[])));
    }

    #[test]
    fn test_rejects_combinators_and_garbage() {
        assert!(matches!(
            SelectorList::parse(".navbar .nav-link"),
            Err(DomError::UnsupportedSelector { .. })
        ));
        assert!(matches!(
            SelectorList::parse("a[href"),
            Err(DomError::InvalidSelector { .. })
        ));
        assert!(matches!(
            SelectorList::parse(""),
            Err(DomError::InvalidSelector { .. })
        ));
        assert!(matches!(
            SelectorList::parse("a:hover"),
            Err(DomError::UnsupportedSelector { .. })
        ));
    }
}
