use core::marker::PhantomData;

use soroban_sdk::{contracttype, Address, Env, IntoVal, String, TryFromVal, Val, Vec};

use crate::types::{Patient, RegistryConfig, Treatment};

const DAY_IN_LEDGERS: u32 = 17_280;
const RECORD_TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;
const RECORD_TTL_EXTEND_TO: u32 = 120 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_TTL_EXTEND_TO: u32 = 30 * DAY_IN_LEDGERS;

pub const DEFAULT_INITIAL_BATCH_SIZE: u32 = 4;

// Storage key types
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    Config,
    Patient(String),                         // patient_id
    PatientIds,                              // sorted Vec<patient_id>
    Treatment(String),                       // treatment_id
    TreatmentIds,                            // sorted Vec<treatment_id>
}

/// A record kind that can live in a [`RecordStore`].
pub trait StoredRecord: Clone + IntoVal<Env, Val> + TryFromVal<Env, Val> {
    fn key(id: &String) -> DataKey;
    fn index_key() -> DataKey;
    fn id(&self) -> &String;
}

impl StoredRecord for Patient {
    fn key(id: &String) -> DataKey {
        DataKey::Patient(id.clone())
    }

    fn index_key() -> DataKey {
        DataKey::PatientIds
    }

    fn id(&self) -> &String {
        &self.id
    }
}

impl StoredRecord for Treatment {
    fn key(id: &String) -> DataKey {
        DataKey::Treatment(id.clone())
    }

    fn index_key() -> DataKey {
        DataKey::TreatmentIds
    }

    fn id(&self) -> &String {
        &self.id
    }
}

/// Ordered map from record id to record, backed by persistent storage.
///
/// Each record is stored under its own key. A separate index holds the ids
/// sorted ascending, which gives the store its iteration order and makes
/// range slicing a matter of slicing the index.
///
/// The index is a single persistent entry and shares the host's
/// ledger-entry size limit, which bounds a store to roughly a thousand
/// UUID-keyed records.
pub struct RecordStore<'a, R: StoredRecord> {
    env: &'a Env,
    _record: PhantomData<R>,
}

impl<'a, R: StoredRecord> RecordStore<'a, R> {
    pub fn new(env: &'a Env) -> Self {
        Self {
            env,
            _record: PhantomData,
        }
    }

    pub fn env(&self) -> &'a Env {
        self.env
    }

    fn ids(&self) -> Vec<String> {
        self.env
            .storage()
            .persistent()
            .get(&R::index_key())
            .unwrap_or(Vec::new(self.env))
    }

    fn set_ids(&self, ids: &Vec<String>) {
        let key = R::index_key();
        self.env.storage().persistent().set(&key, ids);
        self.extend_ttl(&key);
    }

    fn extend_ttl(&self, key: &DataKey) {
        self.env
            .storage()
            .persistent()
            .extend_ttl(key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND_TO);
    }

    pub fn len(&self) -> u32 {
        self.ids().len()
    }

    pub fn contains(&self, id: &String) -> bool {
        self.env.storage().persistent().has(&R::key(id))
    }

    pub fn get(&self, id: &String) -> Option<R> {
        let key = R::key(id);
        let record: Option<R> = self.env.storage().persistent().get(&key);
        if record.is_some() {
            self.extend_ttl(&key);
        }
        record
    }

    /// Inserts or overwrites a record. Last write wins.
    pub fn insert(&self, record: &R) {
        let key = R::key(record.id());
        self.env.storage().persistent().set(&key, record);
        self.extend_ttl(&key);

        let mut ids = self.ids();
        if let Err(pos) = ids.binary_search(record.id()) {
            ids.insert(pos, record.id().clone());
            self.set_ids(&ids);
        }
    }

    /// Removes a record and hands back the value that was stored.
    pub fn remove(&self, id: &String) -> Option<R> {
        let record = self.get(id)?;
        self.env.storage().persistent().remove(&R::key(id));

        let mut ids = self.ids();
        if let Ok(pos) = ids.binary_search(id) {
            ids.remove(pos);
            self.set_ids(&ids);
        }
        Some(record)
    }

    /// Records at index positions `[offset, offset + limit)` of the id order.
    pub fn range(&self, offset: u32, limit: u32) -> Vec<R> {
        let ids = self.ids();
        let mut records = Vec::new(self.env);

        let end = offset.saturating_add(limit).min(ids.len());
        for i in offset..end {
            if let Some(id) = ids.get(i) {
                if let Some(record) = self.get(&id) {
                    records.push_back(record);
                }
            }
        }
        records
    }

    pub fn values(&self) -> Vec<R> {
        self.range(0, u32::MAX)
    }

    pub fn filter(&self, mut predicate: impl FnMut(&R) -> bool) -> Vec<R> {
        let mut matches = Vec::new(self.env);
        for record in self.values().iter() {
            if predicate(&record) {
                matches.push_back(record);
            }
        }
        matches
    }

    /// Like [`RecordStore::filter`], but stops at the first predicate error.
    pub fn try_filter<E>(
        &self,
        mut predicate: impl FnMut(&R) -> Result<bool, E>,
    ) -> Result<Vec<R>, E> {
        let mut matches = Vec::new(self.env);
        for record in self.values().iter() {
            if predicate(&record)? {
                matches.push_back(record);
            }
        }
        Ok(matches)
    }
}

// Admin and configuration
fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    extend_instance_ttl(env);
}

pub fn default_config() -> RegistryConfig {
    RegistryConfig {
        initial_batch_size: DEFAULT_INITIAL_BATCH_SIZE,
    }
}

pub fn get_config(env: &Env) -> RegistryConfig {
    match env.storage().instance().get(&DataKey::Config) {
        Some(config) => {
            extend_instance_ttl(env);
            config
        }
        None => default_config(),
    }
}

pub fn set_config(env: &Env, config: &RegistryConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}
