//! The rendered activity list and selection control, held as plain data.
//!
//! Templates only ever read a [`Board`]; every change to what the browser
//! shows goes through [`Board::render_all`] or [`Board::update_one`].

use crate::models::{Activity, ActivityCollection};
use crate::view::actions::RosterAction;

pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";
pub const LOAD_ERROR_TEXT: &str = "Unable to load activities.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub email: String,
    pub mailto: String,
    pub delete: RosterAction,
}

impl RosterEntry {
    fn new(activity: &str, email: &str) -> Self {
        Self {
            email: email.to_string(),
            mailto: format!("mailto:{}", email),
            delete: RosterAction::Unregister {
                activity: activity.to_string(),
                email: email.to_string(),
            },
        }
    }

    pub fn confirm_prompt(&self) -> String {
        match &self.delete {
            RosterAction::Unregister { activity, email } => {
                format!("Unregister {} from {}?", email, activity)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub roster: Vec<RosterEntry>,
}

impl CardView {
    fn from_activity(name: &str, activity: &Activity) -> Self {
        let mut card = Self {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule_label().to_string(),
            max_participants: activity.max_participants,
            roster: Vec::new(),
        };
        card.set_roster(&activity.participants, activity.max_participants);
        card
    }

    fn set_roster(&mut self, participants: &[String], max: u32) {
        self.max_participants = max;
        self.roster = participants
            .iter()
            .map(|email| RosterEntry::new(&self.name, email))
            .collect();
    }

    pub fn participant_count(&self) -> usize {
        self.roster.len()
    }

    /// Element id used to swap this card alone. Hex of the name keeps it
    /// unique and valid whatever characters the name contains.
    pub fn dom_id(&self) -> String {
        card_dom_id(&self.name)
    }
}

pub fn card_dom_id(name: &str) -> String {
    let mut id = String::with_capacity(9 + name.len() * 2);
    id.push_str("activity-");
    for b in name.as_bytes() {
        id.push_str(&format!("{:02x}", b));
    }
    id
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pub cards: Vec<CardView>,
    pub options: Vec<SelectOption>,
    pub load_error: Option<String>,
}

impl Board {
    /// Throws away the current cards and options and rebuilds both from
    /// `collection`, in collection order.
    pub fn render_all(&mut self, collection: &ActivityCollection) {
        self.cards = collection
            .iter()
            .map(|(name, activity)| CardView::from_activity(name, activity))
            .collect();

        self.options = Vec::with_capacity(collection.len() + 1);
        self.options.push(SelectOption {
            value: String::new(),
            label: SELECT_PLACEHOLDER.to_string(),
        });
        self.options
            .extend(collection.keys().map(|name| SelectOption {
                value: name.clone(),
                label: name.clone(),
            }));

        self.load_error = None;
    }

    /// Replaces the count and roster of the card for `name`. Returns false and
    /// changes nothing when no such card is rendered.
    pub fn update_one(&mut self, name: &str, participants: &[String], max: u32) -> bool {
        match self.cards.iter_mut().find(|c| c.name == name) {
            Some(card) => {
                card.set_roster(participants, max);
                true
            }
            None => false,
        }
    }

    /// The list area shows a static error; options keep whatever they had.
    pub fn show_load_error(&mut self) {
        self.cards.clear();
        self.load_error = Some(LOAD_ERROR_TEXT.to_string());
    }

    pub fn card(&self, name: &str) -> Option<&CardView> {
        self.cards.iter().find(|c| c.name == name)
    }
}
