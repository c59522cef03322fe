//! Payload validation shared by create and update paths.
//!
//! Every check runs before the registry reads or writes a record, so a
//! rejected call leaves storage untouched.

use soroban_sdk::{String, Vec};

use crate::error::RegistryError;
use crate::types::{PatientPayload, TreatmentPayload};
use crate::utils::MAX_SEARCHABLE_LEN;

/// Maximum byte length of a patient name. Names are searchable.
pub const MAX_NAME_LEN: u32 = MAX_SEARCHABLE_LEN as u32;
/// Maximum byte length of a contact number. Contact numbers are searchable.
pub const MAX_CONTACT_LEN: u32 = MAX_SEARCHABLE_LEN as u32;
/// Maximum byte length of any other free-text field.
pub const MAX_TEXT_LEN: u32 = 512;
/// Highest accepted age. Zero is a valid age.
pub const MAX_AGE: u32 = 150;
/// Maximum number of medications on one treatment. An empty list is allowed.
pub const MAX_MEDICATIONS: u32 = 50;
/// Maximum number of entries in a patient's medical history.
pub const MAX_MEDICAL_HISTORY: u32 = 64;
/// Maximum number of treatment ids linked to one patient.
pub const MAX_LINKED_TREATMENTS: u32 = 64;

fn is_present(value: &String, max_len: u32) -> bool {
    value.len() > 0 && value.len() <= max_len
}

pub fn validate_patient_payload(payload: &PatientPayload) -> Result<(), RegistryError> {
    if !is_present(&payload.name, MAX_NAME_LEN)
        || !is_present(&payload.date_of_birth, MAX_TEXT_LEN)
        || !is_present(&payload.gender, MAX_TEXT_LEN)
        || !is_present(&payload.contact_number, MAX_CONTACT_LEN)
    {
        return Err(RegistryError::InvalidPatientData);
    }

    if payload.age > MAX_AGE {
        return Err(RegistryError::InvalidPatientData);
    }

    Ok(())
}

pub fn validate_medical_history_entry(entry: &String) -> Result<(), RegistryError> {
    if !is_present(entry, MAX_TEXT_LEN) {
        return Err(RegistryError::InvalidMedicalHistory);
    }
    Ok(())
}

/// A patient's history has room for one more entry.
pub fn validate_history_room(history: &Vec<String>) -> Result<(), RegistryError> {
    if history.len() >= MAX_MEDICAL_HISTORY {
        return Err(RegistryError::InvalidMedicalHistory);
    }
    Ok(())
}

pub fn validate_treatment_link_room(treatments: &Vec<String>) -> Result<(), RegistryError> {
    if treatments.len() >= MAX_LINKED_TREATMENTS {
        return Err(RegistryError::TooManyTreatments);
    }
    Ok(())
}

fn is_valid_medication_list(medications: &Vec<String>) -> bool {
    if medications.len() > MAX_MEDICATIONS {
        return false;
    }
    medications
        .iter()
        .all(|medication| is_present(&medication, MAX_TEXT_LEN))
}

pub fn validate_treatment_payload(payload: &TreatmentPayload) -> Result<(), RegistryError> {
    if !is_present(&payload.patient_id, MAX_TEXT_LEN)
        || !is_present(&payload.date, MAX_TEXT_LEN)
        || !is_present(&payload.duration, MAX_TEXT_LEN)
        || !is_present(&payload.treating_doctor, MAX_TEXT_LEN)
    {
        return Err(RegistryError::InvalidTreatmentData);
    }

    if !is_valid_medication_list(&payload.medications) {
        return Err(RegistryError::InvalidTreatmentData);
    }

    if let Some(instructions) = &payload.instructions {
        if instructions.len() > MAX_TEXT_LEN {
            return Err(RegistryError::InvalidTreatmentData);
        }
    }

    Ok(())
}
