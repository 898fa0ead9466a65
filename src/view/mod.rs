pub mod actions;
pub mod board;
pub mod message;
pub mod templates;

pub use actions::{RosterAction, SignupForm, UnregisterForm};
pub use board::{Board, CardView, RosterEntry, SelectOption};
pub use message::{MessageBanner, MessageKind};
