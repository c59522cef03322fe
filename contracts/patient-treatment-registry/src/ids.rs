use soroban_sdk::{log, Env, String};

use crate::error::RegistryError;
use crate::storage::{RecordStore, StoredRecord};

const MAX_ID_ATTEMPTS: u32 = 3;
const UUID_LEN: usize = 36;

/// Source of fresh record identifiers.
pub trait IdGenerator {
    fn next_id(&self, env: &Env) -> String;
}

/// Random version 4 UUIDs drawn from the host PRNG.
pub struct PrngUuid;

impl IdGenerator for PrngUuid {
    fn next_id(&self, env: &Env) -> String {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&env.prng().gen::<u64>().to_be_bytes());
        bytes[8..].copy_from_slice(&env.prng().gen::<u64>().to_be_bytes());
        format_uuid_v4(env, bytes)
    }
}

pub fn format_uuid_v4(env: &Env, mut bytes: [u8; 16]) -> String {
    bytes[6] = (bytes[6] & 0x0f) | 0x40; // version 4
    bytes[8] = (bytes[8] & 0x3f) | 0x80; // RFC 4122 variant

    let hex_chars = b"0123456789abcdef";
    let mut out = [0u8; UUID_LEN];
    let mut pos = 0;
    for (i, byte) in bytes.iter().enumerate() {
        if i == 4 || i == 6 || i == 8 || i == 10 {
            out[pos] = b'-';
            pos += 1;
        }
        out[pos] = hex_chars[(byte >> 4) as usize];
        out[pos + 1] = hex_chars[(byte & 0xf) as usize];
        pos += 2;
    }
    String::from_bytes(env, &out)
}

/// Draws ids until one is not already live in `store`.
pub fn fresh_id<R: StoredRecord>(
    store: &RecordStore<R>,
    ids: &impl IdGenerator,
) -> Result<String, RegistryError> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let id = ids.next_id(store.env());
        if !store.contains(&id) {
            return Ok(id);
        }
        log!(store.env(), "Generated id:{} already in use, retrying", id);
    }
    Err(RegistryError::IdCollision)
}
