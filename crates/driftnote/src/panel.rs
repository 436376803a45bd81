//! The panel element model.
//!
//! A [`Panel`] is the stand-in for one notification's visual element: its
//! rendered content, css classes, current style, and the horizontal drag
//! offset used for swipe feedback. Panels live in a [`PanelRegistry`], which
//! also keeps the panel-to-notification back-reference so input handlers can
//! recover the owning notification from an event target.
//!
//! A [`Container`] is the host element panels are attached into. It records
//! its left-edge position (the leftward bound for swipe tracking) and the
//! text-selection affordance of the scroll-ancestor, which is suppressed
//! while a swipe session is active.

use std::collections::HashMap;

use slotmap::{SlotMap, new_key_type};

use crate::notification::NotificationId;
use crate::style::Style;

new_key_type! {
    /// A unique identifier for a panel.
    pub struct PanelId;
}

new_key_type! {
    /// A unique identifier for a container.
    pub struct ContainerId;
}

/// One notification's visual element.
#[derive(Debug, Clone)]
pub struct Panel {
    /// Title heading text.
    pub title: String,
    /// Rendered message body.
    pub body: String,
    /// Entity identifier lifted out of the rendered content, if the message
    /// carried one. Recorded into the host's ignored-entities list on a
    /// confirmed swipe.
    pub entity_id: Option<u64>,
    /// CSS classes applied at construction.
    pub classes: Vec<String>,
    /// Current inline style.
    pub style: Style,
    /// Horizontal offset from the resting position, in pixels. Non-zero only
    /// while a swipe session is dragging this panel.
    pub drag_offset: f32,
}

impl Panel {
    /// Creates a panel with the given title and body and no styling.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            entity_id: None,
            classes: Vec::new(),
            style: Style::new(),
            drag_offset: 0.0,
        }
    }

    /// Adds a css class to the panel.
    pub fn add_class(&mut self, class: impl Into<String>) {
        self.classes.push(class.into());
    }

    /// Returns whether the panel carries the given css class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Storage for all live panels plus the panel-to-notification back-reference.
#[derive(Debug, Default)]
pub struct PanelRegistry {
    /// All live panels.
    panels: SlotMap<PanelId, Panel>,
    /// Maps panels to the notification that owns them.
    owners: HashMap<PanelId, NotificationId>,
}

impl PanelRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a panel and returns its ID.
    pub fn insert(&mut self, panel: Panel) -> PanelId {
        self.panels.insert(panel)
    }

    /// Removes a panel, clearing its back-reference.
    ///
    /// Returns the panel if it existed.
    pub fn remove(&mut self, id: PanelId) -> Option<Panel> {
        self.owners.remove(&id);
        self.panels.remove(id)
    }

    /// Gets a panel by ID.
    pub fn get(&self, id: PanelId) -> Option<&Panel> {
        self.panels.get(id)
    }

    /// Gets a panel mutably by ID.
    pub fn get_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        self.panels.get_mut(id)
    }

    /// Records which notification owns a panel.
    pub fn set_owner(&mut self, panel: PanelId, owner: NotificationId) {
        self.owners.insert(panel, owner);
    }

    /// Looks up the notification owning a panel.
    ///
    /// Returns `None` once the panel has been destroyed or its back-reference
    /// cleared.
    pub fn owner_of(&self, panel: PanelId) -> Option<NotificationId> {
        self.owners.get(&panel).copied()
    }

    /// Returns the number of live panels.
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Returns whether the registry holds no panels.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

/// Text-selection affordance of a container's scroll-ancestor.
///
/// Selection is suppressed through an `unselectable` attribute plus plain
/// and vendor-prefixed `user-select` properties; all of them must flip
/// together on suppress and on every restore path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionAffordance {
    /// `unselectable` attribute set to "on".
    pub unselectable: bool,
    /// `user-select: none`.
    pub user_select_none: bool,
    /// `-moz-user-select: none`.
    pub moz_user_select_none: bool,
    /// `-khtml-user-select: none`.
    pub khtml_user_select_none: bool,
    /// `-webkit-user-select: none`.
    pub webkit_user_select_none: bool,
}

impl SelectionAffordance {
    /// Suppresses text selection (all properties at once).
    pub fn suppress(&mut self) {
        self.unselectable = true;
        self.user_select_none = true;
        self.moz_user_select_none = true;
        self.khtml_user_select_none = true;
        self.webkit_user_select_none = true;
    }

    /// Restores text selection (all properties at once).
    pub fn restore(&mut self) {
        *self = Self::default();
    }

    /// Returns whether any suppression property is set.
    pub fn is_suppressed(&self) -> bool {
        self.unselectable
            || self.user_select_none
            || self.moz_user_select_none
            || self.khtml_user_select_none
            || self.webkit_user_select_none
    }
}

/// A host element notifications are attached into.
#[derive(Debug, Default)]
pub struct Container {
    /// Attached panels in display order.
    panels: Vec<PanelId>,
    /// Left-edge position of the container in page coordinates.
    pub left_edge: f32,
    /// Selection affordance of the nearest scroll-ancestor.
    pub selection: SelectionAffordance,
}

impl Container {
    /// Creates an empty container with the given left-edge position.
    pub fn new(left_edge: f32) -> Self {
        Self {
            panels: Vec::new(),
            left_edge,
            selection: SelectionAffordance::default(),
        }
    }

    /// Inserts a panel at the start of the display order.
    pub fn prepend(&mut self, panel: PanelId) {
        self.panels.insert(0, panel);
    }

    /// Inserts a panel at the end of the display order.
    pub fn append(&mut self, panel: PanelId) {
        self.panels.push(panel);
    }

    /// Removes a panel from the container.
    ///
    /// Returns `true` if the panel was attached.
    pub fn remove_panel(&mut self, panel: PanelId) -> bool {
        let before = self.panels.len();
        self.panels.retain(|&p| p != panel);
        before != self.panels.len()
    }

    /// Returns whether the panel is attached to this container.
    pub fn contains(&self, panel: PanelId) -> bool {
        self.panels.contains(&panel)
    }

    /// Attached panels in display order.
    pub fn panels(&self) -> &[PanelId] {
        &self.panels
    }
}
