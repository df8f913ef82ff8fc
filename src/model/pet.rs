use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::{
    error::validation::ValidationError,
    listing::{FilterField, Filterable},
    model::api::{optional_text, CodeRepr},
    validation::FieldErrors,
};

/// Lifecycle of a pet listing.
///
/// The API sends the code as either an integer or an integer string; it is
/// always written back as an integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CodeRepr", into = "i64")]
pub enum PetStatus {
    Inactive,
    Active,
    PendingAdoption,
    Adopted,
}

impl PetStatus {
    pub const ALL: [PetStatus; 4] = [
        Self::Active,
        Self::PendingAdoption,
        Self::Adopted,
        Self::Inactive,
    ];

    pub fn code(self) -> i64 {
        match self {
            Self::Inactive => 0,
            Self::Active => 1,
            Self::PendingAdoption => 2,
            Self::Adopted => 3,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Inactive),
            1 => Some(Self::Active),
            2 => Some(Self::PendingAdoption),
            3 => Some(Self::Adopted),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Inactive => "Inactive",
            Self::Active => "Active",
            Self::PendingAdoption => "Pending Adoption",
            Self::Adopted => "Adopted",
        }
    }

    /// Whether the public can apply to adopt the pet.
    pub fn is_adoptable(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl TryFrom<CodeRepr> for PetStatus {
    type Error = String;

    fn try_from(repr: CodeRepr) -> Result<Self, Self::Error> {
        let code = repr.code()?;
        Self::from_code(code).ok_or_else(|| format!("unknown pet status code {}", code))
    }
}

impl From<PetStatus> for i64 {
    fn from(status: PetStatus) -> Self {
        status.code()
    }
}

/// Species the API keeps breed lists for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    pub const ALL: [Species; 2] = [Self::Dog, Self::Cat];

    /// Case-insensitive lookup, surrounding whitespace ignored.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|species| species.name().eq_ignore_ascii_case(value))
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Dog => "Dog",
            Self::Cat => "Cat",
        }
    }

    pub fn breeds_path(self) -> &'static str {
        match self {
            Self::Dog => "/dog/breeds",
            Self::Cat => "/cat/breeds",
        }
    }
}

pub const GENDERS: [&str; 2] = ["Male", "Female"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PetDto {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub age: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "image")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: Option<PetStatus>,
}

impl PetDto {
    /// A pet without a known status is never offered for adoption.
    pub fn is_adoptable(&self) -> bool {
        self.status.is_some_and(PetStatus::is_adoptable)
    }

    pub fn status_label(&self) -> &'static str {
        self.status.map_or("Unknown", PetStatus::label)
    }
}

impl Filterable for PetDto {
    fn field_value(&self, field: FilterField) -> Option<Cow<'_, str>> {
        match field {
            FilterField::Species => self.species.as_deref().map(Cow::Borrowed),
            FilterField::Breed => self.breed.as_deref().map(Cow::Borrowed),
            FilterField::Gender => self.gender.as_deref().map(Cow::Borrowed),
            FilterField::Age => self.age.as_deref().map(Cow::Borrowed),
            FilterField::Status => self.status.map(|s| Cow::Owned(s.code().to_string())),
            FilterField::Name => Some(Cow::Borrowed(self.name.as_str())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BreedDto {
    pub id: i64,
    pub breed: String,
}

/// Body of pet create and update requests.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PetPayload {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub gender: String,
    pub age: u32,
    pub description: String,
    pub image_url: String,
    pub status: PetStatus,
}

/// Raw input of the admin add/edit pet form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PetForm {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub gender: String,
    pub age: String,
    pub description: String,
    pub image_url: String,
    pub status: String,
}

impl PetForm {
    /// Prefill the form for editing an existing pet.
    pub fn from_pet(pet: &PetDto) -> Self {
        Self {
            name: pet.name.clone(),
            species: pet.species.clone().unwrap_or_default(),
            breed: pet.breed.clone().unwrap_or_default(),
            gender: pet.gender.clone().unwrap_or_default(),
            age: pet.age.clone().unwrap_or_default(),
            description: pet.description.clone().unwrap_or_default(),
            image_url: pet.image_url.clone().unwrap_or_default(),
            status: pet.status.unwrap_or(PetStatus::Active).code().to_string(),
        }
    }

    pub fn validate(&self) -> Result<PetPayload, ValidationError> {
        let mut errors = FieldErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.required("name", "Name");
        }

        let species = Species::parse(&self.species);
        if species.is_none() {
            errors.push("species", "Select a species.");
        }

        let gender = GENDERS
            .into_iter()
            .find(|gender| gender.eq_ignore_ascii_case(self.gender.trim()));
        if gender.is_none() {
            errors.push("gender", "Select a gender.");
        }

        let age = self.age.trim().parse::<u32>().ok();
        if age.is_none() {
            errors.push("age", "Age must be a whole number of years.");
        }

        let status = self
            .status
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(PetStatus::from_code);
        if status.is_none() {
            errors.push("status", "Select a status.");
        }

        match (species, gender, age, status) {
            (Some(species), Some(gender), Some(age), Some(status)) if errors.is_empty() => {
                Ok(PetPayload {
                    name: name.to_string(),
                    species: species.name().to_string(),
                    breed: self.breed.trim().to_string(),
                    gender: gender.to_string(),
                    age,
                    description: self.description.trim().to_string(),
                    image_url: self.image_url.trim().to_string(),
                    status,
                })
            }
            _ => Err(ValidationError::Fields(errors)),
        }
    }
}
