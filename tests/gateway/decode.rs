//! Tests for decoding API responses into records and errors.
//!
//! Bodies are built with the gateway fixtures so they match what the REST API
//! sends without needing a network.

use paws::{
    error::{gateway::GatewayError, Error},
    gateway::response::{decode_data, decode_login, decode_mutation},
    listing::{apply_filters, FilterCriteria, FilterField},
    model::{
        application::{ApplicationDto, ApplicationStatus},
        outcome::Outcome,
        pet::{PetDto, PetStatus},
    },
};
use paws_test_utils::prelude::*;

/// Tests decoding the pet list the API serves.
///
/// Expected: Ok with every pet, in order
#[test]
fn decodes_pet_list() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mock_pets(5).build()?;

    let pets: Vec<PetDto> = decode_data(200, &test.pets_body()?)?;

    assert_eq!(pets, test.pets);

    Ok(())
}

/// Tests decoding pets and applications whose status is a string.
///
/// Expected: string codes decode to the same status as integer codes
#[test]
fn decodes_string_status_codes() -> Result<(), TestError> {
    let pet = pet_factory::mock_pet_with(1, "Cat", "Persian", "3", PetStatus::Adopted);
    let application =
        application_factory::mock_application(1, 1, "Sara", ApplicationStatus::Rejected);
    let pet_body = body::data_body(&vec![body::with_string_status(&pet)?])?;
    let application_body = body::data_body(&vec![body::with_string_status(&application)?])?;

    let pets: Vec<PetDto> = decode_data(200, &pet_body)?;
    let applications: Vec<ApplicationDto> = decode_data(200, &application_body)?;

    assert_eq!(pets[0].status, Some(PetStatus::Adopted));
    assert_eq!(applications[0].status, Some(ApplicationStatus::Rejected));

    Ok(())
}

/// Tests a pet list where some records carry no status at all.
///
/// Expected: every pet decodes, and a status filter skips the ones without
#[test]
fn decodes_pets_missing_status() -> Result<(), TestError> {
    let mut stripped = serde_json::to_value(pet_factory::mock_pet(2, "Cat", "4"))?;
    if let Some(record) = stripped.as_object_mut() {
        record.remove("status");
    }
    let mut null_status = serde_json::to_value(pet_factory::mock_pet(3, "Dog", "1"))?;
    null_status["status"] = serde_json::Value::Null;
    let pets_body = body::data_body(&vec![
        serde_json::to_value(pet_factory::mock_pet(1, "Dog", "2"))?,
        stripped,
        null_status,
    ])?;

    let pets: Vec<PetDto> = decode_data(200, &pets_body)?;

    assert_eq!(pets.len(), 3);
    assert_eq!(pets[1].status, None);
    assert_eq!(pets[2].status, None);
    assert!(!pets[1].is_adoptable());

    let active =
        FilterCriteria::new().with(FilterField::Status, PetStatus::Active.code().to_string());
    let ids: Vec<i64> = apply_filters(&pets, &active).iter().map(|pet| pet.id).collect();
    assert_eq!(ids, vec![1]);

    Ok(())
}

/// Tests a pet list containing an unknown status code.
///
/// Expected: Err(GatewayError::Decode)
#[test]
fn rejects_unknown_status_code() -> Result<(), TestError> {
    let mut pet = serde_json::to_value(pet_factory::mock_pet(1, "Dog", "2"))?;
    pet["status"] = serde_json::json!(9);
    let pets_body = body::data_body(&vec![pet])?;

    let result = decode_data::<Vec<PetDto>>(200, &pets_body);

    assert!(matches!(result, Err(GatewayError::Decode(_))));

    Ok(())
}

/// Tests a mutation the API refused with `success: false`.
///
/// Expected: Err(GatewayError::Rejected) and a failure outcome
#[test]
fn refused_mutation_is_failure() -> Result<(), TestError> {
    let refused = body::mutation_body(false, &serde_json::Value::Null)?;

    let result = decode_mutation::<PetDto>(200, &refused).map_err(Error::from);

    assert_eq!(result, Err(Error::from(GatewayError::Rejected)));
    assert!(!Outcome::from_result(&result, "Pet added.").is_success());

    Ok(())
}

/// Tests an update that returns the changed application.
///
/// Expected: Ok with the record and a success outcome
#[test]
fn accepted_mutation_returns_record() -> Result<(), TestError> {
    let application =
        application_factory::mock_application(7, 2, "Wei", ApplicationStatus::Approved);
    let accepted = body::mutation_body(true, &application)?;

    let result = decode_mutation::<ApplicationDto>(200, &accepted).map_err(Error::from);

    assert_eq!(result, Ok(Some(application)));
    assert!(Outcome::from_result(&result, "Application approved.").is_success());

    Ok(())
}

/// Tests a forbidden request carrying an error message.
///
/// Expected: the API's message is what the user sees
#[test]
fn forbidden_surfaces_api_message() -> Result<(), TestError> {
    let result = decode_data::<Vec<ApplicationDto>>(403, &body::error_body("Admins only"))
        .map_err(Error::from);

    let outcome = Outcome::from_result(&result, "unused");

    assert_eq!(outcome, Outcome::failure("Admins only"));

    Ok(())
}

/// Tests a successful login response.
///
/// Expected: Ok with the token and profile from the body
#[test]
fn decodes_login() -> Result<(), TestError> {
    let response = user_factory::mock_login_response(user_factory::mock_user(1, true));
    let login_body =
        serde_json::json!({ "user": &response.user, "token": &response.token }).to_string();

    let login = decode_login(200, &login_body)?;

    assert_eq!(login, response);

    Ok(())
}
