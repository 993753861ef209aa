//! Holds a minimal document tree for the behaviors to run against.
//!
//! This models just the surface the original markup exposes: class lists,
//! string attributes, text content and the inline `display` style. Elements
//! live in a flat arena in document order and are addressed by [`ElementId`]
//! handles that stay valid for the lifetime of the [`Document`].

/// Handle to an element inside a [`Document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementId(usize);

/// Inline `display` style of an element.
///
/// Only the values the behaviors ever read or write. [`Display::Inherit`] is
/// the unset default, whatever the stylesheet says.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Display {
    #[default]
    Inherit,
    None,
    Block,
}

/// One element of the tree.
#[derive(Clone, Debug, Default)]
pub struct Element {
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    text: String,
    display: Display,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class (builder style).
    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_owned());
        self
    }

    /// Set an attribute (builder style).
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set the text content (builder style).
    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_owned();
        self
    }

    fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_owned(),
            None => self.attrs.push((name.to_owned(), value.to_owned())),
        }
    }

    fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// A flat, append-only element arena.
#[derive(Clone, Debug, Default)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element and return its handle.
    pub fn push(&mut self, element: Element) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    /// All elements carrying the given class, in document order.
    pub fn select(&self, class: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.classes.iter().any(|c| c == class))
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    /// The first element whose `id` attribute equals the given value.
    pub fn by_html_id(&self, id: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|e| e.get_attr("id") == Some(id))
            .map(ElementId)
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.get(id).classes.iter().any(|c| c == class)
    }

    /// Add the class if not already present.
    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if !self.has_class(id, class) {
            self.get_mut(id).classes.push(class.to_owned());
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        self.get_mut(id).classes.retain(|c| c != class);
    }

    pub fn attr(&self, id: ElementId, name: &str) -> Option<&str> {
        self.get(id).get_attr(name)
    }

    pub fn set_attr(&mut self, id: ElementId, name: &str, value: &str) {
        self.get_mut(id).set_attr(name, value);
    }

    pub fn text(&self, id: ElementId) -> &str {
        &self.get(id).text
    }

    pub fn set_text(&mut self, id: ElementId, text: &str) {
        self.get_mut(id).text = text.to_owned();
    }

    pub fn display(&self, id: ElementId) -> Display {
        self.get(id).display
    }

    pub fn set_display(&mut self, id: ElementId, display: Display) {
        self.get_mut(id).display = display;
    }

    // handles only come out of push so indexing cannot fail
    fn get(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    fn get_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.0]
    }
}
