use soroban_sdk::{symbol_short, Env, String, Symbol};

use crate::types::RegistryConfig;

pub const PATIENT: Symbol = symbol_short!("patient");
pub const TREATMENT: Symbol = symbol_short!("treatment");
pub const REGISTRY: Symbol = symbol_short!("registry");

pub const ADDED: Symbol = symbol_short!("added");
pub const UPDATED: Symbol = symbol_short!("updated");
pub const DELETED: Symbol = symbol_short!("deleted");
pub const HISTORY: Symbol = symbol_short!("history");
pub const LINKED: Symbol = symbol_short!("linked");
pub const CONFIG: Symbol = symbol_short!("config");

pub fn emit_patient_added(env: &Env, patient_id: &String) {
    env.events().publish((PATIENT, ADDED), patient_id.clone());
}

pub fn emit_patient_updated(env: &Env, patient_id: &String, timestamp: u64) {
    env.events()
        .publish((PATIENT, UPDATED), (patient_id.clone(), timestamp));
}

pub fn emit_medical_history_added(env: &Env, patient_id: &String, timestamp: u64) {
    env.events()
        .publish((PATIENT, HISTORY), (patient_id.clone(), timestamp));
}

pub fn emit_treatment_linked(env: &Env, patient_id: &String, treatment_id: &String) {
    env.events()
        .publish((PATIENT, LINKED), (patient_id.clone(), treatment_id.clone()));
}

pub fn emit_patient_deleted(env: &Env, patient_id: &String) {
    env.events().publish((PATIENT, DELETED), patient_id.clone());
}

pub fn emit_treatment_added(env: &Env, treatment_id: &String, patient_id: &String) {
    env.events()
        .publish((TREATMENT, ADDED), (treatment_id.clone(), patient_id.clone()));
}

pub fn emit_treatment_updated(env: &Env, treatment_id: &String, timestamp: u64) {
    env.events()
        .publish((TREATMENT, UPDATED), (treatment_id.clone(), timestamp));
}

pub fn emit_treatment_deleted(env: &Env, treatment_id: &String) {
    env.events().publish((TREATMENT, DELETED), treatment_id.clone());
}

pub fn emit_config_updated(env: &Env, config: &RegistryConfig) {
    env.events()
        .publish((REGISTRY, CONFIG), config.initial_batch_size);
}
