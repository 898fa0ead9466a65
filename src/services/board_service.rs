use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::{info, warn};

use crate::error::{ApiError, ValidationError};
use crate::services::activities_api_service::ActivitiesApi;
use crate::view::{Board, CardView, MessageBanner, MessageKind, RosterAction, SignupForm};

const SIGNUP_OK: &str = "Signed up successfully!";
const SIGNUP_FAILED: &str = "Signup failed";
const UNREGISTER_OK: &str = "Unregistered successfully";
const UNREGISTER_FAILED: &str = "Unregister failed";
const REFRESH_FAILED: &str = "Unable to refresh activities.";

/// Everything one visitor's browser is shown.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub board: Board,
    pub banner: MessageBanner,
}

/// Owns the backend client and one [`Page`] per visitor.
#[derive(Clone)]
pub struct BoardService {
    api: Arc<dyn ActivitiesApi>,
    pages: Arc<Mutex<HashMap<String, Arc<Mutex<Page>>>>>,
    hide_after: Duration,
}

impl BoardService {
    pub fn new(api: Arc<dyn ActivitiesApi>, hide_after: Duration) -> Self {
        Self {
            api,
            pages: Arc::new(Mutex::new(HashMap::new())),
            hide_after,
        }
    }

    /// The board of `visitor`, created empty on first use.
    pub fn session(&self, visitor: &str) -> BoardSession {
        let page = self
            .pages
            .lock()
            .entry(visitor.to_string())
            .or_default()
            .clone();
        BoardSession {
            api: Arc::clone(&self.api),
            page,
            hide_after: self.hide_after,
        }
    }
}

/// Drives one visitor's board: loads it, runs signup/unregister against the
/// backend and patches the affected card from a fresh fetch.
///
/// Mutations are not sequenced against each other; whichever re-fetch
/// finishes last decides what a card shows.
#[derive(Clone)]
pub struct BoardSession {
    api: Arc<dyn ActivitiesApi>,
    page: Arc<Mutex<Page>>,
    hide_after: Duration,
}

impl BoardSession {
    pub fn snapshot(&self) -> Page {
        self.page.lock().clone()
    }

    pub fn banner(&self) -> MessageBanner {
        self.page.lock().banner.clone()
    }

    pub fn card(&self, name: &str) -> Option<CardView> {
        self.page.lock().board.card(name).cloned()
    }

    /// Fetches the whole collection and re-renders everything. A failed fetch
    /// leaves the load error in the list area; nothing is retried.
    pub async fn load(&self) {
        match self.api.list_activities().await {
            Ok(collection) => {
                info!(activities = collection.len(), "activities loaded");
                self.page.lock().board.render_all(&collection);
            }
            Err(e) => {
                warn!(error = %e, "loading activities failed");
                self.page.lock().board.show_load_error();
            }
        }
    }

    /// Shows `text` in the banner and hides the banner after the configured
    /// delay. Earlier pending hides are not cancelled.
    pub fn show_message(&self, text: impl Into<String>, kind: MessageKind) {
        self.page.lock().banner.show(text, kind);

        let page = Arc::clone(&self.page);
        let hide_after = self.hide_after;
        tokio::spawn(async move {
            tokio::time::sleep(hide_after).await;
            page.lock().banner.hide();
        });
    }

    /// Handles `#signup-form`. Returns the patched card, if any.
    pub async fn submit_signup(&self, form: &SignupForm) -> Option<CardView> {
        let (activity, email) = match validate_signup(form) {
            Ok(fields) => fields,
            Err(e) => {
                self.show_message(e.to_string(), MessageKind::Error);
                return None;
            }
        };

        match self.api.signup(activity, email).await {
            Ok(reply) => {
                self.show_message(
                    reply.message.unwrap_or_else(|| SIGNUP_OK.to_string()),
                    MessageKind::Success,
                );
                self.refresh_card(activity).await
            }
            Err(e) => {
                self.report_failure(&e, activity, email, SIGNUP_FAILED);
                None
            }
        }
    }

    /// Runs the action bound to a roster control. Returns the patched card, if any.
    pub async fn dispatch(&self, action: RosterAction) -> Option<CardView> {
        match action {
            RosterAction::Unregister { activity, email } => {
                self.unregister(&activity, &email).await
            }
        }
    }

    async fn unregister(&self, activity: &str, email: &str) -> Option<CardView> {
        if activity.is_empty() || email.is_empty() {
            return None;
        }

        match self.api.unregister(activity, email).await {
            Ok(reply) => {
                self.show_message(
                    reply.message.unwrap_or_else(|| UNREGISTER_OK.to_string()),
                    MessageKind::Success,
                );
                self.refresh_card(activity).await
            }
            Err(e) => {
                self.report_failure(&e, activity, email, UNREGISTER_FAILED);
                None
            }
        }
    }

    /// Re-fetches the collection and patches only `activity`'s card. The
    /// mutation already went through, so an error status keeps the success
    /// banner; only an unreachable backend or unreadable body is reported.
    async fn refresh_card(&self, activity: &str) -> Option<CardView> {
        let collection = match self.api.list_activities().await {
            Ok(c) => c,
            Err(e @ ApiError::Status { .. }) => {
                warn!(activity, error = %e, "refreshing activities returned an error status");
                return None;
            }
            Err(e) => {
                warn!(activity, error = %e, "refreshing activities failed");
                self.show_message(REFRESH_FAILED, MessageKind::Error);
                return None;
            }
        };

        let data = collection.get(activity)?;
        let mut page = self.page.lock();
        if page
            .board
            .update_one(activity, &data.participants, data.max_participants)
        {
            page.board.card(activity).cloned()
        } else {
            None
        }
    }

    fn report_failure(&self, err: &ApiError, activity: &str, email: &str, default_text: &str) {
        warn!(activity, email, error = %err, "activity mutation failed");
        let text = err.detail().unwrap_or(default_text).to_string();
        self.show_message(text, MessageKind::Error);
    }
}

fn validate_signup(form: &SignupForm) -> Result<(&str, &str), ValidationError> {
    let activity = form.activity.as_str();
    let email = form.email.trim();
    if activity.is_empty() {
        return Err(ValidationError::MissingActivity);
    }
    if email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    Ok((activity, email))
}
