use soroban_sdk::{log, Env, String, Vec};

use crate::error::RegistryError;
use crate::events;
use crate::ids::{self, IdGenerator};
use crate::storage::RecordStore;
use crate::types::{Treatment, TreatmentPayload};
use crate::utils;
use crate::validation;

fn store(env: &Env) -> RecordStore<'_, Treatment> {
    RecordStore::new(env)
}

fn load_treatment(env: &Env, id: &String) -> Result<Treatment, RegistryError> {
    store(env).get(id).ok_or_else(|| {
        log!(env, "Treatment with id:{} not found", id.clone());
        RegistryError::TreatmentNotFound
    })
}

/// Records a treatment. The referenced patient is not required to exist.
pub fn add_treatment(
    env: &Env,
    ids: &impl IdGenerator,
    payload: TreatmentPayload,
) -> Result<Treatment, RegistryError> {
    if let Err(err) = validation::validate_treatment_payload(&payload) {
        log!(env, "Missing or invalid input data");
        return Err(err);
    }

    let treatments = store(env);
    let id = ids::fresh_id(&treatments, ids)?;

    let treatment = Treatment {
        id,
        patient_id: payload.patient_id,
        date: payload.date,
        medications: payload.medications,
        duration: payload.duration,
        treating_doctor: payload.treating_doctor,
        instructions: payload.instructions,
        created_date: utils::now(env),
        updated_at: None,
    };

    treatments.insert(&treatment);
    events::emit_treatment_added(env, &treatment.id, &treatment.patient_id);

    Ok(treatment)
}

pub fn get_treatment(env: &Env, id: String) -> Result<Treatment, RegistryError> {
    load_treatment(env, &id)
}

pub fn get_treatments_by_patient(env: &Env, patient_id: String) -> Vec<Treatment> {
    store(env).filter(|treatment| treatment.patient_id == patient_id)
}

pub fn get_treatments(env: &Env) -> Vec<Treatment> {
    store(env).values()
}

pub fn update_treatment(
    env: &Env,
    id: String,
    payload: TreatmentPayload,
) -> Result<Treatment, RegistryError> {
    if let Err(err) = validation::validate_treatment_payload(&payload) {
        log!(env, "Missing or invalid input data for treatment id:{}", id);
        return Err(err);
    }

    let mut treatment = load_treatment(env, &id)?;
    let timestamp = utils::now(env);

    treatment.patient_id = payload.patient_id;
    treatment.date = payload.date;
    treatment.medications = payload.medications;
    treatment.duration = payload.duration;
    treatment.treating_doctor = payload.treating_doctor;
    treatment.instructions = payload.instructions;
    treatment.updated_at = Some(timestamp);

    store(env).insert(&treatment);
    events::emit_treatment_updated(env, &treatment.id, timestamp);

    Ok(treatment)
}

pub fn delete_treatment(env: &Env, id: String) -> Result<Treatment, RegistryError> {
    match store(env).remove(&id) {
        Some(treatment) => {
            events::emit_treatment_deleted(env, &treatment.id);
            Ok(treatment)
        }
        None => {
            log!(env, "Treatment with id:{} not found, could not be deleted", id);
            Err(RegistryError::TreatmentNotFound)
        }
    }
}

pub fn treatment_count(env: &Env) -> u32 {
    store(env).len()
}
