//! A minimal element tree produced by the view functions.
//!
//! The tree is rebuilt from state on every message and handed to a
//! [`Renderer`](crate::Renderer); nothing patches it in place.

use html_escape::{encode_double_quoted_attribute, encode_text};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Add `class` only when `enabled` holds.
    #[must_use]
    pub fn class_if(self, class: impl Into<String>, enabled: bool) -> Self {
        if enabled {
            self.class(class)
        } else {
            self
        }
    }

    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    #[must_use]
    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

const VOID_TAGS: [&str; 4] = ["input", "br", "hr", "img"];

impl Node {
    /// All elements carrying `class`, in document order.
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        if let Self::Element(element) = self {
            if element.has_class(class) {
                found.push(element);
            }
            for child in &element.children {
                child.collect_by_class(class, found);
            }
        }
    }

    /// Concatenated text of this node and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, text: &mut String) {
        match self {
            Self::Text(t) => text.push_str(t),
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(text);
                }
            }
        }
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        self.write_html(&mut html);
        html
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(&encode_text(text)),
            Self::Element(element) => {
                out.push('<');
                out.push_str(element.tag);
                if !element.classes.is_empty() {
                    push_attr(out, "class", &element.classes.join(" "));
                }
                for (name, value) in &element.attrs {
                    push_attr(out, name, value);
                }
                out.push('>');
                if VOID_TAGS.contains(&element.tag) {
                    return;
                }
                for child in &element.children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(element.tag);
                out.push('>');
            }
        }
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&encode_double_quoted_attribute(value));
    out.push('"');
}

impl Element {
    /// Descendants carrying `class`, in document order. The element itself
    /// is not included.
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Vec<&Self> {
        let mut found = Vec::new();
        for child in &self.children {
            child.collect_by_class(class, &mut found);
        }
        found
    }

    /// Concatenated text of this element's descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        for child in &self.children {
            child.collect_text(&mut text);
        }
        text
    }
}
