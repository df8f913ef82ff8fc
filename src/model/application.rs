use std::borrow::Cow;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{
    error::validation::ValidationError,
    listing::{FilterField, Filterable},
    model::api::{flag, CodeRepr},
    validation::{check_email, FieldErrors},
};

/// Review state of an adoption application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CodeRepr", into = "i64")]
pub enum ApplicationStatus {
    Rejected,
    Pending,
    Approved,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    pub fn code(self) -> i64 {
        match self {
            Self::Rejected => -1,
            Self::Pending => 0,
            Self::Approved => 1,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            -1 => Some(Self::Rejected),
            0 => Some(Self::Pending),
            1 => Some(Self::Approved),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Rejected => "Rejected",
            Self::Pending => "Pending",
            Self::Approved => "Approved",
        }
    }
}

impl TryFrom<CodeRepr> for ApplicationStatus {
    type Error = String;

    fn try_from(repr: CodeRepr) -> Result<Self, Self::Error> {
        let code = repr.code()?;
        Self::from_code(code).ok_or_else(|| format!("unknown application status code {}", code))
    }
}

impl From<ApplicationStatus> for i64 {
    fn from(status: ApplicationStatus) -> Self {
        status.code()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApplicationDto {
    pub id: i64,
    #[serde(default)]
    pub pet_id: Option<i64>,
    #[serde(default, alias = "name")]
    pub applicant_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "flag")]
    pub has_experience: bool,
    #[serde(default)]
    pub home_environment: String,
    #[serde(default)]
    pub status: Option<ApplicationStatus>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl Filterable for ApplicationDto {
    fn field_value(&self, field: FilterField) -> Option<Cow<'_, str>> {
        match field {
            FilterField::Status => self.status.map(|s| Cow::Owned(s.code().to_string())),
            FilterField::Name => Some(Cow::Borrowed(self.applicant_name.as_str())),
            FilterField::Species | FilterField::Breed | FilterField::Gender | FilterField::Age => {
                None
            }
        }
    }
}

/// Body of `POST /applications`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ApplicationPayload {
    pub pet_id: i64,
    pub applicant_name: String,
    pub email: String,
    pub has_experience: bool,
    pub home_environment: String,
}

/// Body of `PUT /applications/{id}`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ApplicationStatusPayload {
    pub status: ApplicationStatus,
}

/// Raw input of the adoption inquiry form on a pet's page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicationForm {
    pub name: String,
    pub email: String,
    /// `None` until the applicant answers the prior-experience question.
    pub has_experience: Option<bool>,
    pub home_environment: String,
}

impl ApplicationForm {
    pub fn validate(&self, pet_id: i64) -> Result<ApplicationPayload, ValidationError> {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.required("name", "Your name");
        }
        if let Err(message) = check_email(&self.email) {
            errors.push("email", message);
        }
        if self.has_experience.is_none() {
            errors.push(
                "has_experience",
                "Tell us whether you have prior experience with pets.",
            );
        }
        if self.home_environment.trim().is_empty() {
            errors.required("home_environment", "A description of your home");
        }

        match self.has_experience {
            Some(has_experience) if errors.is_empty() => Ok(ApplicationPayload {
                pet_id,
                applicant_name: self.name.trim().to_string(),
                email: self.email.trim().to_string(),
                has_experience,
                home_environment: self.home_environment.trim().to_string(),
            }),
            _ => Err(ValidationError::Fields(errors)),
        }
    }
}
