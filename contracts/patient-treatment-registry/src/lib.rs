#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

mod admin;
mod error;
mod events;
mod ids;
mod patients;
mod storage;
mod treatments;
mod types;
mod utils;
mod validation;

#[cfg(test)]
mod test;
#[cfg(test)]
mod tests; // scenario suites: patients, treatments, queries, properties

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use error::*;
pub use ids::{IdGenerator, PrngUuid};
pub use types::*;

#[contract]
pub struct PatientTreatmentRegistry;

#[contractimpl]
impl PatientTreatmentRegistry {
    /// Set the admin and registry configuration (optional; defaults apply otherwise)
    pub fn initialize(
        env: Env,
        admin: Address,
        config: RegistryConfig,
    ) -> Result<(), RegistryError> {
        admin::initialize(&env, admin, config)
    }

    /// Replace the registry configuration (admin only)
    pub fn set_config(env: Env, config: RegistryConfig) -> Result<(), RegistryError> {
        admin::set_config(&env, config)
    }

    pub fn get_config(env: Env) -> RegistryConfig {
        admin::get_config(&env)
    }

    // Patient queries
    /// First batch of patients in store order
    pub fn get_initial_patients(env: Env) -> Vec<Patient> {
        patients::get_initial_patients(&env)
    }

    /// Patients at positions [offset, offset + limit) in store order
    pub fn load_more_patients(env: Env, offset: u32, limit: u32) -> Vec<Patient> {
        patients::load_more_patients(&env, offset, limit)
    }

    pub fn arrange_patients_by_name(env: Env) -> Vec<Patient> {
        patients::arrange_patients_by_name(&env)
    }

    pub fn get_patient(env: Env, id: String) -> Result<Patient, RegistryError> {
        patients::get_patient(&env, id)
    }

    pub fn get_patient_by_contact_number(env: Env, contact_number: String) -> Vec<Patient> {
        patients::get_patient_by_contact_number(&env, contact_number)
    }

    /// Case-insensitive match on name or contact number
    pub fn search_patients(env: Env, query: String) -> Result<Vec<Patient>, RegistryError> {
        patients::search_patients(&env, query)
    }

    pub fn get_patients(env: Env) -> Vec<Patient> {
        patients::get_patients(&env)
    }

    pub fn patient_count(env: Env) -> u32 {
        patients::patient_count(&env)
    }

    // Patient mutations
    pub fn add_patient(env: Env, payload: PatientPayload) -> Result<Patient, RegistryError> {
        patients::add_patient(&env, &PrngUuid, payload)
    }

    pub fn insert_medical_history(
        env: Env,
        id: String,
        entry: String,
    ) -> Result<Patient, RegistryError> {
        patients::insert_medical_history(&env, id, entry)
    }

    /// Append a treatment id to a patient; the treatment itself is not looked up
    pub fn insert_treatment_to_patient(
        env: Env,
        patient_id: String,
        treatment_id: String,
    ) -> Result<Patient, RegistryError> {
        patients::insert_treatment_to_patient(&env, patient_id, treatment_id)
    }

    pub fn update_patient(
        env: Env,
        id: String,
        payload: PatientPayload,
    ) -> Result<Patient, RegistryError> {
        patients::update_patient(&env, id, payload)
    }

    /// Remove a patient; its treatments are left in place
    pub fn delete_patient(env: Env, id: String) -> Result<Patient, RegistryError> {
        patients::delete_patient(&env, id)
    }

    // Treatments
    pub fn add_treatment(env: Env, payload: TreatmentPayload) -> Result<Treatment, RegistryError> {
        treatments::add_treatment(&env, &PrngUuid, payload)
    }

    pub fn get_treatment(env: Env, id: String) -> Result<Treatment, RegistryError> {
        treatments::get_treatment(&env, id)
    }

    pub fn get_treatments_by_patient(env: Env, patient_id: String) -> Vec<Treatment> {
        treatments::get_treatments_by_patient(&env, patient_id)
    }

    pub fn get_treatments(env: Env) -> Vec<Treatment> {
        treatments::get_treatments(&env)
    }

    pub fn treatment_count(env: Env) -> u32 {
        treatments::treatment_count(&env)
    }

    pub fn update_treatment(
        env: Env,
        id: String,
        payload: TreatmentPayload,
    ) -> Result<Treatment, RegistryError> {
        treatments::update_treatment(&env, id, payload)
    }

    pub fn delete_treatment(env: Env, id: String) -> Result<Treatment, RegistryError> {
        treatments::delete_treatment(&env, id)
    }
}
