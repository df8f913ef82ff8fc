//! Factory functions for pet records.

use paws::model::pet::{PetDto, PetStatus};

/// Create an adoptable pet with standard test values.
///
/// # Arguments
/// - `id` - Pet ID, also used to make the name unique
/// - `species` - `"Dog"` or `"Cat"`
/// - `age` - Age text as the API sends it
pub fn mock_pet(id: i64, species: &str, age: &str) -> PetDto {
    PetDto {
        id,
        name: format!("Pet {}", id),
        species: Some(species.to_string()),
        breed: Some(default_breed(species).to_string()),
        gender: Some(if id % 2 == 0 { "Female" } else { "Male" }.to_string()),
        age: Some(age.to_string()),
        description: Some("Friendly and house trained.".to_string()),
        image_url: None,
        status: Some(PetStatus::Active),
    }
}

/// Create a pet with an explicit breed and status.
pub fn mock_pet_with(
    id: i64,
    species: &str,
    breed: &str,
    age: &str,
    status: PetStatus,
) -> PetDto {
    PetDto {
        breed: Some(breed.to_string()),
        status: Some(status),
        ..mock_pet(id, species, age)
    }
}

/// Create `count` pets with IDs `1..=count`, alternating dogs and cats and
/// cycling ages 1 to 5.
pub fn mock_pets(count: usize) -> Vec<PetDto> {
    (1..=count as i64)
        .map(|id| {
            let species = if id % 2 == 0 { "Cat" } else { "Dog" };
            let age = ((id - 1) % 5 + 1).to_string();
            mock_pet(id, species, &age)
        })
        .collect()
}

fn default_breed(species: &str) -> &'static str {
    match species {
        "Cat" => "Siamese",
        _ => "Labrador Retriever",
    }
}
