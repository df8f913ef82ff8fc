//! Tests for apply_filters and paginate over pet and application records.

use paws::{
    listing::{apply_filters, paginate, FilterCriteria, FilterField},
    model::{application::ApplicationStatus, pet::PetStatus},
};
use paws_test_utils::prelude::*;

/// Tests filtering by species and exact age.
///
/// Expected: only dogs aged exactly 2, in their original order
#[test]
fn filters_dogs_aged_two() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pets(vec![
            pet_factory::mock_pet(1, "Dog", "2"),
            pet_factory::mock_pet(2, "Cat", "2"),
            pet_factory::mock_pet(3, "Dog", "12"),
            pet_factory::mock_pet(4, "Dog", "2 years"),
            pet_factory::mock_pet(5, "Dog", "3"),
        ])
        .build()?;
    let criteria = FilterCriteria::new()
        .with(FilterField::Species, "Dog")
        .with(FilterField::Age, "2");

    let filtered = apply_filters(&test.pets, &criteria);

    let ids: Vec<i64> = filtered.iter().map(|pet| pet.id).collect();
    assert_eq!(ids, vec![1, 4]);

    Ok(())
}

/// Tests that empty and whitespace-only criteria filter nothing out.
///
/// Expected: the collection unchanged
#[test]
fn blank_criteria_are_identity() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mock_pets(9).build()?;
    let criteria = FilterCriteria::new()
        .with(FilterField::Species, "")
        .with(FilterField::Breed, "   ");

    assert_eq!(apply_filters(&test.pets, &criteria), test.pets);

    Ok(())
}

/// Tests that filtering an already filtered list changes nothing.
///
/// Expected: applying the same criteria twice equals applying them once
#[test]
fn filtering_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mock_pets(20).build()?;
    let criteria = FilterCriteria::new()
        .with(FilterField::Species, "Cat")
        .with(FilterField::Breed, "siam");

    let once = apply_filters(&test.pets, &criteria);
    let twice = apply_filters(&once, &criteria);

    assert!(!once.is_empty());
    assert_eq!(once, twice);

    Ok(())
}

/// Tests filtering pets by status code.
///
/// Expected: only pets pending adoption
#[test]
fn filters_pets_by_status() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pets(vec![
            pet_factory::mock_pet_with(1, "Dog", "Beagle", "1", PetStatus::Active),
            pet_factory::mock_pet_with(2, "Dog", "Beagle", "1", PetStatus::PendingAdoption),
            pet_factory::mock_pet_with(3, "Cat", "Persian", "4", PetStatus::Adopted),
        ])
        .build()?;
    let criteria = FilterCriteria::new().with(
        FilterField::Status,
        PetStatus::PendingAdoption.code().to_string(),
    );

    let filtered = apply_filters(&test.pets, &criteria);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, 2);

    Ok(())
}

/// Tests filtering applications by status and applicant name together.
///
/// Expected: only pending applications whose name contains the search text
#[test]
fn filters_applications_by_status_and_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_applications(vec![
            application_factory::mock_application(1, 1, "Mei Ling", ApplicationStatus::Pending),
            application_factory::mock_application(2, 1, "Mei Tan", ApplicationStatus::Approved),
            application_factory::mock_application(3, 2, "Arjun", ApplicationStatus::Pending),
        ])
        .build()?;
    let criteria = FilterCriteria::new()
        .with(FilterField::Status, "0")
        .with(FilterField::Name, "mei");

    let filtered = apply_filters(&test.applications, &criteria);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, 1);

    Ok(())
}

/// Tests the last, partial page of 25 records at 12 per page.
///
/// Expected: exactly the 25th record
#[test]
fn last_page_holds_remainder() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mock_pets(25).build()?;

    let page = paginate(&test.pets, 3, 12);

    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, 25);

    Ok(())
}

/// Tests that every page respects the size and that pages reassemble the input.
///
/// Expected: concatenating pages 1..=3 equals the filtered list
#[test]
fn pages_concatenate_to_input() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mock_pets(25).build()?;

    let mut reassembled = Vec::new();
    for page_index in 1..=3 {
        let page = paginate(&test.pets, page_index, 12);
        assert!(page.len() <= 12);
        reassembled.extend_from_slice(page);
    }

    assert_eq!(reassembled, test.pets);
    assert!(paginate(&test.pets, 4, 12).is_empty());

    Ok(())
}
