use soroban_sdk::{contracttype, String, Vec};

/// Patient record as persisted in the registry
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub date_of_birth: String,          // Opaque, caller-defined format
    pub gender: String,
    pub contact_number: String,
    pub medical_history: Vec<String>,   // Append-only
    pub treatments: Vec<String>,        // Treatment ids, append-only
    pub created_date: u64,
    pub updated_at: Option<u64>,        // None until the first mutation
}

/// Treatment record as persisted in the registry
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Treatment {
    pub id: String,
    pub patient_id: String,             // Not checked against the patient store
    pub date: String,
    pub medications: Vec<String>,
    pub duration: String,
    pub treating_doctor: String,
    pub instructions: Option<String>,
    pub created_date: u64,
    pub updated_at: Option<u64>,
}

/// Caller-supplied patient fields for create and update
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientPayload {
    pub name: String,
    pub age: u32,
    pub date_of_birth: String,
    pub gender: String,
    pub contact_number: String,
}

/// Caller-supplied treatment fields for create and update
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreatmentPayload {
    pub patient_id: String,
    pub date: String,
    pub medications: Vec<String>,
    pub duration: String,
    pub treating_doctor: String,
    pub instructions: Option<String>,
}

/// Registry-wide settings kept in instance storage
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryConfig {
    pub initial_batch_size: u32,        // Page size of get_initial_patients
}
