use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::services::registration_service::{
    ActivityListing, Confirmation, RegistrationError, RegistrationService,
};
use crate::services::{ActivityName, StudentEmail};

#[derive(Debug, Deserialize, Default)]
pub struct StudentQuery {
    pub email: Option<String>,
}

pub async fn activities_handler(
    State(service): State<RegistrationService>,
) -> Result<Json<ActivityListing>, RegistrationError> {
    service.list_activities().await.map(Json)
}

pub async fn signup_handler(
    State(service): State<RegistrationService>,
    Path(activity_name): Path<String>,
    Query(query): Query<StudentQuery>,
) -> Result<Json<Confirmation>, RegistrationError> {
    let (activity, email) = parse_target(activity_name, query)?;
    service.enroll(&activity, &email).await.map(Json)
}

pub async fn unregister_handler(
    State(service): State<RegistrationService>,
    Path(activity_name): Path<String>,
    Query(query): Query<StudentQuery>,
) -> Result<Json<Confirmation>, RegistrationError> {
    let (activity, email) = parse_target(activity_name, query)?;
    service.withdraw(&activity, &email).await.map(Json)
}

fn parse_target(
    activity_name: String,
    query: StudentQuery,
) -> Result<(ActivityName, StudentEmail), RegistrationError> {
    let activity = ActivityName::parse(activity_name)?;
    let Some(email) = query.email else {
        return Err(RegistrationError::InvalidInput(
            "missing query parameter: email".to_string(),
        ));
    };
    Ok((activity, StudentEmail::parse(email)?))
}
