//! Factory functions for adoption applications.

use chrono::{NaiveDate, NaiveDateTime};
use paws::model::application::{ApplicationDto, ApplicationStatus};

/// Fixed submission time so tests don't depend on the clock.
pub fn submitted_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .and_then(|date| date.and_hms_opt(9, 30, 0))
        .unwrap_or_default()
}

/// Create an application for `pet_id` from `applicant_name`.
pub fn mock_application(
    id: i64,
    pet_id: i64,
    applicant_name: &str,
    status: ApplicationStatus,
) -> ApplicationDto {
    ApplicationDto {
        id,
        pet_id: Some(pet_id),
        applicant_name: applicant_name.to_string(),
        email: format!("{}@paws.test", applicant_name.to_lowercase().replace(' ', ".")),
        has_experience: id % 2 == 1,
        home_environment: "Apartment with a balcony".to_string(),
        status: Some(status),
        created_at: Some(submitted_at()),
    }
}
