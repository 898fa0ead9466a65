use serde::Deserialize;

/// What a roster control does when used. Each rendered delete control owns
/// one of these, so the handler never has to work out which card it sits in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterAction {
    Unregister { activity: String, email: String },
}

/// Form fields posted by a roster delete control.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnregisterForm {
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub email: String,
}

impl From<UnregisterForm> for RosterAction {
    fn from(form: UnregisterForm) -> Self {
        RosterAction::Unregister {
            activity: form.activity,
            email: form.email,
        }
    }
}

/// Form fields posted by `#signup-form`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub email: String,
}
