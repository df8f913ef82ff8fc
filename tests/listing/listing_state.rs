//! Tests for ListingState driving a filtered, paged view.

use paws::{
    listing::{apply_filters, FilterField},
    model::pet::PetStatus,
};
use paws_test_utils::prelude::*;

/// Tests that narrowing the filter sends the user back to page 1.
///
/// Expected: page 1 of the filtered records after a criterion change
#[test]
fn criterion_change_returns_to_first_page() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mock_pets(30).with_page_size(6).build()?;
    let mut listing = test.listing();
    listing.select_page(4);

    listing.set_criterion(FilterField::Species, "Dog");
    let filtered = apply_filters(&test.pets, listing.criteria());
    let view = listing.view(&filtered);

    assert_eq!(view.page, 1);
    assert_eq!(view.total, 15);
    assert_eq!(view.page_count, 3);
    assert_eq!(view.records.first().map(|pet| pet.id), Some(1));

    Ok(())
}

/// Tests the name search and status select of the pet filter bar together.
///
/// Expected: active pets whose name contains the text, back on page 1
#[test]
fn name_and_status_narrow_pets() -> Result<(), TestError> {
    let mut pets = pet_factory::mock_pets(12);
    pets[9].status = Some(PetStatus::Adopted);
    pets[10].status = None;
    let test = TestBuilder::new().with_pets(pets).with_page_size(6).build()?;
    let mut listing = test.listing();
    listing.select_page(2);

    listing.set_criterion(FilterField::Name, "pet 1");
    listing.set_criterion(FilterField::Status, PetStatus::Active.code().to_string());
    let filtered = apply_filters(&test.pets, listing.criteria());
    let view = listing.view(&filtered);

    let ids: Vec<i64> = view.records.iter().map(|pet| pet.id).collect();
    assert_eq!(view.page, 1);
    assert_eq!(ids, vec![1, 12]);

    Ok(())
}

/// Tests a selected page that no longer exists after the collection shrank.
///
/// Expected: the last existing page is shown instead of an empty one
#[test]
fn clamps_page_after_collection_shrinks() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mock_pets(7).with_page_size(6).build()?;
    let mut listing = test.listing();
    listing.select_page(5);

    let view = listing.view(&test.pets);

    assert_eq!(view.page, 2);
    assert_eq!(view.records.len(), 1);

    Ok(())
}

/// Tests a filter that matches nothing.
///
/// Expected: no records and no pages
#[test]
fn no_matches_has_no_pages() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mock_pets(10).build()?;
    let mut listing = test.listing();

    listing.set_criterion(FilterField::Breed, "Axolotl");
    let filtered = apply_filters(&test.pets, listing.criteria());
    let view = listing.view(&filtered);

    assert!(view.records.is_empty());
    assert_eq!(view.page_count, 0);

    Ok(())
}
