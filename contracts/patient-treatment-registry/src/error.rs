use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    // Initialization and configuration errors
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidConfig = 3,

    // Validation errors
    InvalidPatientData = 100,
    InvalidMedicalHistory = 101,
    InvalidTreatmentData = 102,
    TooManyTreatments = 103,

    // Lookup errors
    PatientNotFound = 200,
    TreatmentNotFound = 201,

    // Internal errors
    SearchFailed = 300,
    IdCollision = 301,
}

/// Coarse classification of a [`RegistryError`], as seen by callers.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config,
    Validation,
    NotFound,
    Internal,
}

impl RegistryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::AlreadyInitialized
            | RegistryError::NotInitialized
            | RegistryError::InvalidConfig => ErrorKind::Config,
            RegistryError::InvalidPatientData
            | RegistryError::InvalidMedicalHistory
            | RegistryError::InvalidTreatmentData
            | RegistryError::TooManyTreatments => ErrorKind::Validation,
            RegistryError::PatientNotFound | RegistryError::TreatmentNotFound => {
                ErrorKind::NotFound
            }
            RegistryError::SearchFailed | RegistryError::IdCollision => ErrorKind::Internal,
        }
    }
}
