//! Panel construction from message content.

use crate::panel::Panel;

/// The content a notification is created from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageContent {
    /// Message body text.
    pub body: String,
    /// Entity identifier carried by the message, recorded into the host's
    /// ignore list on a confirmed swipe.
    pub entity_id: Option<u64>,
}

impl MessageContent {
    /// Creates plain body content with no entity identifier.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            entity_id: None,
        }
    }

    /// Creates content tied to an entity.
    pub fn with_entity(body: impl Into<String>, entity_id: u64) -> Self {
        Self {
            body: body.into(),
            entity_id: Some(entity_id),
        }
    }
}

/// Builds the visual panel for a notification.
///
/// Implementations decide how title and content map onto panel fields; the
/// notification center applies classes and initial style afterwards.
pub trait PanelTemplate {
    /// Builds a fresh panel for the given title and content.
    fn build(&self, title: &str, content: &MessageContent) -> Panel;
}

/// The stock template: title heading plus body paragraph.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTemplate;

impl PanelTemplate for DefaultTemplate {
    fn build(&self, title: &str, content: &MessageContent) -> Panel {
        let mut panel = Panel::new(title, content.body.clone());
        panel.entity_id = content.entity_id;
        panel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_carries_entity_id() {
        let content = MessageContent::with_entity("server offline", 42);
        let panel = DefaultTemplate.build("Alert", &content);
        assert_eq!(panel.title, "Alert");
        assert_eq!(panel.body, "server offline");
        assert_eq!(panel.entity_id, Some(42));
    }

    #[test]
    fn test_plain_content_has_no_entity() {
        let panel = DefaultTemplate.build("Hi", &MessageContent::new("hello"));
        assert_eq!(panel.entity_id, None);
    }
}
