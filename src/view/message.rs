#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageKind {
    #[default]
    Info,
    Success,
    Error,
}

impl MessageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::Info => "info",
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// The `#message` status banner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageBanner {
    pub text: String,
    pub kind: MessageKind,
    pub visible: bool,
}

impl MessageBanner {
    pub fn show(&mut self, text: impl Into<String>, kind: MessageKind) {
        self.text = text.into();
        self.kind = kind;
        self.visible = true;
    }

    /// Idempotent; leaves the text in place like the `hidden` class does.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn class_list(&self) -> String {
        if self.visible {
            format!("message {}", self.kind.as_str())
        } else {
            format!("message {} hidden", self.kind.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let banner = MessageBanner::default();
        assert!(!banner.visible);
        assert_eq!(banner.class_list(), "message info hidden");
    }

    #[test]
    fn last_show_wins_and_hide_is_idempotent() {
        let mut banner = MessageBanner::default();
        banner.show("Signed up", MessageKind::Success);
        banner.show("not found", MessageKind::Error);
        assert_eq!(banner.text, "not found");
        assert_eq!(banner.class_list(), "message error");

        banner.hide();
        banner.hide();
        assert!(!banner.visible);
        assert_eq!(banner.text, "not found");
    }
}
