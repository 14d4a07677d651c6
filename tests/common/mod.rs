#![allow(dead_code)]

use mergington::config::StoreConfig;
use mergington::database::{seed, ActivityStore};
use mergington::models::NewActivity;
use mergington::services::{ActivityName, RegistrationService, StudentEmail};

pub const CHESS_CLUB: NewActivity<'static> = NewActivity {
    name: "Chess Club",
    description: "Learn strategies and compete in chess tournaments",
    schedule: "Fridays, 3:30 PM - 5:00 PM",
    max_participants: 12,
    participants: &["michael@mergington.edu"],
};

pub async fn store_with(activities: &[NewActivity<'_>]) -> ActivityStore {
    let store = ActivityStore::open(&StoreConfig::in_memory()).await.unwrap();
    store.reset(activities).await.unwrap();
    store
}

pub async fn default_store() -> ActivityStore {
    store_with(seed::default_activities()).await
}

pub async fn chess_club_service() -> RegistrationService {
    RegistrationService::new(store_with(&[CHESS_CLUB]).await)
}

pub fn name(raw: &str) -> ActivityName {
    ActivityName::parse(raw).unwrap()
}

pub fn email(raw: &str) -> StudentEmail {
    StudentEmail::parse(raw).unwrap()
}
