#![cfg(test)]

use crate::tests::utils::{advance_time, patient_payload, setup, treatment_payload, START_TIME};
use crate::{ErrorKind, RegistryConfig, RegistryError};
use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    Address, IntoVal, String, TryFromVal, Val, Vec,
};

#[test]
fn test_add_and_get_patient() {
    let ctx = setup();
    let payload = patient_payload(&ctx.env, "Jo", "555-1");

    let patient = ctx.client.add_patient(&payload);

    assert_eq!(patient.id.len(), 36);
    assert_eq!(patient.name, payload.name);
    assert_eq!(patient.age, 30);
    assert_eq!(patient.date_of_birth, payload.date_of_birth);
    assert_eq!(patient.gender, payload.gender);
    assert_eq!(patient.contact_number, payload.contact_number);
    assert_eq!(patient.created_date, START_TIME);
    assert_eq!(patient.updated_at, None);
    assert!(patient.medical_history.is_empty());
    assert!(patient.treatments.is_empty());

    // Round trip
    assert_eq!(ctx.client.get_patient(&patient.id), patient);
}

#[test]
fn test_added_patients_get_distinct_ids() {
    let ctx = setup();

    let first = ctx.client.add_patient(&patient_payload(&ctx.env, "Ann", "555-1"));
    let second = ctx.client.add_patient(&patient_payload(&ctx.env, "Ann", "555-1"));

    assert_ne!(first.id, second.id);
    assert_eq!(ctx.client.patient_count(), 2);
}

#[test]
fn test_add_patient_missing_fields() {
    let ctx = setup();

    let mut payload = patient_payload(&ctx.env, "Jo", "555-1");
    payload.gender = String::from_str(&ctx.env, "");

    let result = ctx.client.try_add_patient(&payload);
    assert_eq!(result, Err(Ok(RegistryError::InvalidPatientData)));
    assert_eq!(RegistryError::InvalidPatientData.kind(), ErrorKind::Validation);
    assert_eq!(ctx.client.patient_count(), 0);
}

#[test]
fn test_add_patient_accepts_age_zero() {
    let ctx = setup();

    let mut payload = patient_payload(&ctx.env, "Baby", "555-9");
    payload.age = 0;

    let patient = ctx.client.add_patient(&payload);
    assert_eq!(patient.age, 0);
}

#[test]
fn test_get_missing_patient() {
    let ctx = setup();
    let id = String::from_str(&ctx.env, "abc");

    assert_eq!(
        ctx.client.try_get_patient(&id),
        Err(Ok(RegistryError::PatientNotFound))
    );
}

#[test]
fn test_delete_patient() {
    let ctx = setup();
    let patient = ctx.client.add_patient(&patient_payload(&ctx.env, "Jo", "555-1"));

    let removed = ctx.client.delete_patient(&patient.id);
    assert_eq!(removed, patient);

    assert_eq!(
        ctx.client.try_get_patient(&patient.id),
        Err(Ok(RegistryError::PatientNotFound))
    );
    assert_eq!(
        ctx.client.try_delete_patient(&patient.id),
        Err(Ok(RegistryError::PatientNotFound))
    );
    assert_eq!(ctx.client.patient_count(), 0);
}

#[test]
fn test_update_patient_sets_updated_at() {
    let ctx = setup();
    let patient = ctx.client.add_patient(&patient_payload(&ctx.env, "Jo", "555-1"));

    advance_time(&ctx.env, 120);
    let mut payload = patient_payload(&ctx.env, "Joanna", "555-2");
    payload.age = 31;
    let updated = ctx.client.update_patient(&patient.id, &payload);

    assert_eq!(updated.id, patient.id);
    assert_eq!(updated.name, payload.name);
    assert_eq!(updated.age, 31);
    assert_eq!(updated.contact_number, payload.contact_number);
    assert_eq!(updated.created_date, patient.created_date);
    assert_eq!(updated.updated_at, Some(START_TIME + 120));
    assert!(updated.updated_at.unwrap() >= updated.created_date);
    assert_eq!(ctx.client.get_patient(&patient.id), updated);
}

#[test]
fn test_update_patient_validates_payload() {
    let ctx = setup();
    let patient = ctx.client.add_patient(&patient_payload(&ctx.env, "Jo", "555-1"));

    let invalid = patient_payload(&ctx.env, "", "555-1");
    assert_eq!(
        ctx.client.try_update_patient(&patient.id, &invalid),
        Err(Ok(RegistryError::InvalidPatientData))
    );

    // Nothing changed
    assert_eq!(ctx.client.get_patient(&patient.id), patient);
}

#[test]
fn test_update_missing_patient() {
    let ctx = setup();
    let id = String::from_str(&ctx.env, "missing");
    let payload = patient_payload(&ctx.env, "Jo", "555-1");

    assert_eq!(
        ctx.client.try_update_patient(&id, &payload),
        Err(Ok(RegistryError::PatientNotFound))
    );
}

#[test]
fn test_insert_medical_history() {
    let ctx = setup();
    let patient = ctx.client.add_patient(&patient_payload(&ctx.env, "Jo", "555-1"));

    advance_time(&ctx.env, 10);
    ctx.client.insert_medical_history(&patient.id, &String::from_str(&ctx.env, "Asthma"));
    advance_time(&ctx.env, 10);
    let updated = ctx
        .client
        .insert_medical_history(&patient.id, &String::from_str(&ctx.env, "Penicillin allergy"));

    assert_eq!(updated.medical_history.len(), 2);
    assert_eq!(
        updated.medical_history.get(0).unwrap(),
        String::from_str(&ctx.env, "Asthma")
    );
    assert_eq!(
        updated.medical_history.get(1).unwrap(),
        String::from_str(&ctx.env, "Penicillin allergy")
    );
    assert_eq!(updated.updated_at, Some(START_TIME + 20));
}

#[test]
fn test_insert_medical_history_errors() {
    let ctx = setup();
    let patient = ctx.client.add_patient(&patient_payload(&ctx.env, "Jo", "555-1"));

    assert_eq!(
        ctx.client
            .try_insert_medical_history(&patient.id, &String::from_str(&ctx.env, "")),
        Err(Ok(RegistryError::InvalidMedicalHistory))
    );

    let missing = String::from_str(&ctx.env, "abc");
    assert_eq!(
        ctx.client
            .try_insert_medical_history(&missing, &String::from_str(&ctx.env, "Asthma")),
        Err(Ok(RegistryError::PatientNotFound))
    );

    assert_eq!(ctx.client.patient_count(), 1);
    assert_eq!(ctx.client.get_patient(&patient.id), patient);
}

#[test]
fn test_add_treatment_for_unknown_patient() {
    let ctx = setup();
    let patient_id = String::from_str(&ctx.env, "nonexistent");

    let treatment = ctx.client.add_treatment(&treatment_payload(&ctx.env, &patient_id));

    assert_eq!(treatment.patient_id, patient_id);
    assert_eq!(treatment.created_date, START_TIME);
    assert_eq!(treatment.updated_at, None);
    assert_eq!(treatment.instructions, None);
    assert_eq!(ctx.client.get_treatment(&treatment.id), treatment);
}

#[test]
fn test_link_treatment_to_patient() {
    let ctx = setup();
    let patient = ctx.client.add_patient(&patient_payload(&ctx.env, "Jo", "555-1"));
    let treatment = ctx.client.add_treatment(&treatment_payload(&ctx.env, &patient.id));

    advance_time(&ctx.env, 5);
    let linked = ctx.client.insert_treatment_to_patient(&patient.id, &treatment.id);

    assert_eq!(linked.treatments.len(), 1);
    assert_eq!(linked.treatments.get(0).unwrap(), treatment.id);
    assert_eq!(linked.updated_at, Some(START_TIME + 5));

    let by_patient = ctx.client.get_treatments_by_patient(&patient.id);
    assert_eq!(by_patient.len(), 1);
    assert_eq!(by_patient.get(0).unwrap(), treatment);
}

#[test]
fn test_initialize_and_config() {
    let ctx = setup();
    let admin = Address::generate(&ctx.env);

    // Defaults before initialization
    assert_eq!(ctx.client.get_config().initial_batch_size, 4);
    assert_eq!(
        ctx.client.try_set_config(&RegistryConfig { initial_batch_size: 2 }),
        Err(Ok(RegistryError::NotInitialized))
    );

    ctx.client.initialize(&admin, &RegistryConfig { initial_batch_size: 6 });
    assert_eq!(ctx.client.get_config().initial_batch_size, 6);

    assert_eq!(
        ctx.client.try_initialize(&admin, &RegistryConfig { initial_batch_size: 6 }),
        Err(Ok(RegistryError::AlreadyInitialized))
    );

    ctx.client.set_config(&RegistryConfig { initial_batch_size: 2 });
    assert_eq!(ctx.client.get_config().initial_batch_size, 2);

    assert_eq!(
        ctx.client.try_set_config(&RegistryConfig { initial_batch_size: 0 }),
        Err(Ok(RegistryError::InvalidConfig))
    );
}

#[test]
fn test_initialize_rejects_invalid_config() {
    let ctx = setup();
    let admin = Address::generate(&ctx.env);

    assert_eq!(
        ctx.client.try_initialize(&admin, &RegistryConfig { initial_batch_size: 101 }),
        Err(Ok(RegistryError::InvalidConfig))
    );
    assert_eq!(ctx.client.get_config().initial_batch_size, 4);
}

#[test]
fn test_patient_added_event() {
    let ctx = setup();
    let patient = ctx.client.add_patient(&patient_payload(&ctx.env, "Jo", "555-1"));

    let events = ctx.env.events().all();
    let (contract, topics, data) = events.last().unwrap();

    let expected: Vec<Val> = (symbol_short!("patient"), symbol_short!("added")).into_val(&ctx.env);
    assert_eq!(contract, ctx.contract_id);
    assert_eq!(topics, expected);
    assert_eq!(String::try_from_val(&ctx.env, &data).unwrap(), patient.id);
}
