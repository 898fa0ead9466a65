pub mod activity;
pub mod api_bodies;

pub use activity::{Activity, ActivityCollection};
pub use api_bodies::{ErrorBody, MutationReply};
