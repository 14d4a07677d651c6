pub mod activities;
pub mod activity_participants;

pub use activities::{ActivitiesRow, Activity, NewActivity};
pub use activity_participants::ActivityParticipantsRow;
