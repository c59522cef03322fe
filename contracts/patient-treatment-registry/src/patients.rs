use core::cmp::Ordering;

use soroban_sdk::{log, Env, String, Vec};

use crate::error::RegistryError;
use crate::events;
use crate::ids::{self, IdGenerator};
use crate::storage::{self, RecordStore};
use crate::types::{Patient, PatientPayload};
use crate::utils::{self, contains_bytes, TextBuf};
use crate::validation;

fn store(env: &Env) -> RecordStore<'_, Patient> {
    RecordStore::new(env)
}

fn load_patient(env: &Env, id: &String) -> Result<Patient, RegistryError> {
    store(env).get(id).ok_or_else(|| {
        log!(env, "Patient with id:{} not found", id.clone());
        RegistryError::PatientNotFound
    })
}

pub fn get_initial_patients(env: &Env) -> Vec<Patient> {
    let batch_size = storage::get_config(env).initial_batch_size;
    store(env).range(0, batch_size)
}

pub fn load_more_patients(env: &Env, offset: u32, limit: u32) -> Vec<Patient> {
    store(env).range(offset, limit)
}

pub fn arrange_patients_by_name(env: &Env) -> Vec<Patient> {
    let mut sorted: Vec<Patient> = Vec::new(env);

    // Insertion sort; a patient goes after every already placed patient
    // whose name does not compare greater, which keeps equal names in
    // store order.
    for patient in store(env).values().iter() {
        let mut pos = sorted.len();
        while pos > 0 {
            let placed = match sorted.get(pos - 1) {
                Some(placed) => placed,
                None => break,
            };
            if utils::compare_names(env, &placed.name, &patient.name) != Ordering::Greater {
                break;
            }
            pos -= 1;
        }
        sorted.insert(pos, patient);
    }
    sorted
}

pub fn get_patient(env: &Env, id: String) -> Result<Patient, RegistryError> {
    load_patient(env, &id)
}

pub fn get_patient_by_contact_number(env: &Env, contact_number: String) -> Vec<Patient> {
    store(env).filter(|patient| patient.contact_number == contact_number)
}

fn folded(text: &String) -> Option<TextBuf> {
    TextBuf::load(text)?.to_lowercase()
}

pub fn search_patients(env: &Env, query: String) -> Result<Vec<Patient>, RegistryError> {
    let needle = match TextBuf::load(&query) {
        Some(buf) => buf.to_lowercase().ok_or_else(|| {
            log!(env, "Error finding the patient: query is not valid UTF-8");
            RegistryError::SearchFailed
        })?,
        // Queries are held to the same bound as the fields they search
        None => return Ok(Vec::new(env)),
    };

    store(env).try_filter(|patient| {
        let name = folded(&patient.name);
        let contact = folded(&patient.contact_number);
        match (name, contact) {
            (Some(name), Some(contact)) => {
                let needle = needle.as_bytes();
                Ok(contains_bytes(name.as_bytes(), needle)
                    || contains_bytes(contact.as_bytes(), needle))
            }
            _ => {
                log!(
                    env,
                    "Error finding the patient: record {} is not searchable",
                    patient.id.clone()
                );
                Err(RegistryError::SearchFailed)
            }
        }
    })
}

pub fn add_patient(
    env: &Env,
    ids: &impl IdGenerator,
    payload: PatientPayload,
) -> Result<Patient, RegistryError> {
    if let Err(err) = validation::validate_patient_payload(&payload) {
        log!(env, "Missing or invalid input data");
        return Err(err);
    }

    let patients = store(env);
    let id = ids::fresh_id(&patients, ids)?;

    let patient = Patient {
        id,
        name: payload.name,
        age: payload.age,
        date_of_birth: payload.date_of_birth,
        gender: payload.gender,
        contact_number: payload.contact_number,
        medical_history: Vec::new(env),
        treatments: Vec::new(env),
        created_date: utils::now(env),
        updated_at: None,
    };

    patients.insert(&patient);
    events::emit_patient_added(env, &patient.id);

    Ok(patient)
}

pub fn insert_medical_history(
    env: &Env,
    id: String,
    entry: String,
) -> Result<Patient, RegistryError> {
    if let Err(err) = validation::validate_medical_history_entry(&entry) {
        log!(env, "Invalid medical history");
        return Err(err);
    }

    let mut patient = load_patient(env, &id)?;
    if let Err(err) = validation::validate_history_room(&patient.medical_history) {
        log!(env, "Medical history of patient id:{} is full", id);
        return Err(err);
    }
    let timestamp = utils::now(env);

    patient.medical_history.push_back(entry);
    patient.updated_at = Some(timestamp);

    store(env).insert(&patient);
    events::emit_medical_history_added(env, &patient.id, timestamp);

    Ok(patient)
}

pub fn insert_treatment_to_patient(
    env: &Env,
    patient_id: String,
    treatment_id: String,
) -> Result<Patient, RegistryError> {
    let mut patient = load_patient(env, &patient_id)?;
    if let Err(err) = validation::validate_treatment_link_room(&patient.treatments) {
        log!(env, "Patient with id:{} has too many treatments", patient_id);
        return Err(err);
    }

    patient.treatments.push_back(treatment_id.clone());
    patient.updated_at = Some(utils::now(env));

    store(env).insert(&patient);
    events::emit_treatment_linked(env, &patient.id, &treatment_id);

    Ok(patient)
}

pub fn update_patient(
    env: &Env,
    id: String,
    payload: PatientPayload,
) -> Result<Patient, RegistryError> {
    if let Err(err) = validation::validate_patient_payload(&payload) {
        log!(env, "Missing or invalid input data for patient id:{}", id);
        return Err(err);
    }

    let mut patient = load_patient(env, &id)?;
    let timestamp = utils::now(env);

    patient.name = payload.name;
    patient.age = payload.age;
    patient.date_of_birth = payload.date_of_birth;
    patient.gender = payload.gender;
    patient.contact_number = payload.contact_number;
    patient.updated_at = Some(timestamp);

    store(env).insert(&patient);
    events::emit_patient_updated(env, &patient.id, timestamp);

    Ok(patient)
}

pub fn delete_patient(env: &Env, id: String) -> Result<Patient, RegistryError> {
    match store(env).remove(&id) {
        Some(patient) => {
            events::emit_patient_deleted(env, &patient.id);
            Ok(patient)
        }
        None => {
            log!(env, "Patient with id:{} not found, could not be deleted", id);
            Err(RegistryError::PatientNotFound)
        }
    }
}

pub fn get_patients(env: &Env) -> Vec<Patient> {
    store(env).values()
}

pub fn patient_count(env: &Env) -> u32 {
    store(env).len()
}
