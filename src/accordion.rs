//! Holds the single-open accordion of the help guide.

use crate::dom::{Display, Document, ElementId};

/// Class marking an element as an accordion trigger.
pub const TRIGGER_CLASS: &str = "accordion-button";

/// Class marking a trigger as the open one.
pub const ACTIVE_CLASS: &str = "active";

/// Attribute on a trigger naming its panel's `id`.
pub const TARGET_ATTR: &str = "data-target";

/// All trigger/panel pairs of a document, with single-open click behavior.
///
/// Triggers are paired with their panel through [`TARGET_ATTR`] rather than
/// tree adjacency, so a trigger without a resolvable panel is simply not
/// bound instead of misbehaving on click.
#[derive(Clone, Debug)]
pub struct Accordion {
    /// `(trigger, panel)` pairs in document order.
    items: Vec<(ElementId, ElementId)>,
}

impl Accordion {
    /// Collect every trigger in the document and resolve its panel.
    pub fn bind(doc: &Document) -> Self {
        let items = doc
            .select(TRIGGER_CLASS)
            .into_iter()
            .filter_map(|trigger| {
                let panel = doc.by_html_id(doc.attr(trigger, TARGET_ATTR)?)?;
                Some((trigger, panel))
            })
            .collect();
        Self { items }
    }

    /// The bound `(trigger, panel)` pairs in document order.
    pub fn items(&self) -> &[(ElementId, ElementId)] {
        &self.items
    }

    /// Handle a click on the given trigger.
    ///
    /// Closes every other item unconditionally, then toggles the clicked one:
    /// open becomes closed, closed becomes the single open item. Clicks on
    /// ids that are not bound triggers do nothing.
    pub fn click(&self, doc: &mut Document, trigger: ElementId) {
        let Some(&(_, panel)) = self.items.iter().find(|(t, _)| *t == trigger) else {
            return;
        };

        let was_active = doc.has_class(trigger, ACTIVE_CLASS);

        // close all other items
        for &(other, other_panel) in self.items.iter().filter(|(t, _)| *t != trigger) {
            doc.remove_class(other, ACTIVE_CLASS);
            doc.set_display(other_panel, Display::None);
        }

        // toggle the clicked one
        if was_active {
            doc.remove_class(trigger, ACTIVE_CLASS);
            doc.set_display(panel, Display::None);
        } else {
            doc.add_class(trigger, ACTIVE_CLASS);
            doc.set_display(panel, Display::Block);
        }
    }
}
