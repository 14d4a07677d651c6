use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::database::ActivityStore;
use crate::models::Activity;
use crate::services::inputs::{ActivityName, StudentEmail};

#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student already signed up for this activity")]
    AlreadyRegistered,
    #[error("Student is not registered for this activity")]
    NotRegistered,
    #[error("{0}")]
    InvalidInput(String),
    #[error("activity store unavailable: {0}")]
    StoreUnavailable(#[from] sqlx::Error),
}

/// Client-facing shape of one activity; the name is the listing key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
}

impl From<Activity> for ActivityDetails {
    fn from(activity: Activity) -> Self {
        Self {
            description: activity.description,
            schedule: activity.schedule,
            max_participants: activity.max_participants,
            participants: activity.participants,
        }
    }
}

/// Activity name to details, in storage order.
pub type ActivityListing = IndexMap<String, ActivityDetails>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct RegistrationService {
    store: ActivityStore,
}

impl RegistrationService {
    pub fn new(store: ActivityStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ActivityStore {
        &self.store
    }

    pub async fn list_activities(&self) -> Result<ActivityListing, RegistrationError> {
        let activities = self.store.list_all().await?;
        Ok(activities
            .into_iter()
            .map(|a| (a.name.clone(), ActivityDetails::from(a)))
            .collect())
    }

    /// Signs `email` up for `activity`.
    ///
    /// Capacity is not checked, so an activity can end up over-subscribed.
    /// The store insert is the commit point: if a concurrent request enrolled
    /// the same student after our lookup, the insert reports no change and
    /// this returns `AlreadyRegistered`.
    pub async fn enroll(
        &self,
        activity: &ActivityName,
        email: &StudentEmail,
    ) -> Result<Confirmation, RegistrationError> {
        let Some(current) = self.store.find_by_name(activity.as_str()).await? else {
            return Err(RegistrationError::NotFound);
        };
        if current.has_participant(email.as_str()) {
            return Err(RegistrationError::AlreadyRegistered);
        }

        let added = self
            .store
            .add_participant(activity.as_str(), email.as_str())
            .await?;
        if !added {
            debug!(activity = %activity, email = %email, "enroll lost race to a concurrent signup");
            return Err(RegistrationError::AlreadyRegistered);
        }

        info!(activity = %activity, email = %email, "student enrolled");
        Ok(Confirmation {
            message: format!("Signed up {} for {}", email, activity),
        })
    }

    /// Removes `email` from `activity`.
    ///
    /// Membership is checked on the lookup only; the delete's result is not
    /// re-validated.
    pub async fn withdraw(
        &self,
        activity: &ActivityName,
        email: &StudentEmail,
    ) -> Result<Confirmation, RegistrationError> {
        let Some(current) = self.store.find_by_name(activity.as_str()).await? else {
            return Err(RegistrationError::NotFound);
        };
        if !current.has_participant(email.as_str()) {
            return Err(RegistrationError::NotRegistered);
        }

        let removed = self
            .store
            .remove_participant(activity.as_str(), email.as_str())
            .await?;
        if !removed {
            debug!(activity = %activity, email = %email, "withdraw found nothing to remove");
        }

        info!(activity = %activity, email = %email, "student withdrawn");
        Ok(Confirmation {
            message: format!("Removed {} from {}", email, activity),
        })
    }
}
