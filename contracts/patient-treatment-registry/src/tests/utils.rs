use core::cell::Cell;

use soroban_sdk::{testutils::Ledger, vec, Address, Env, String};

use crate::{
    patients, treatments, IdGenerator, Patient, PatientPayload, PatientTreatmentRegistry,
    PatientTreatmentRegistryClient, Treatment, TreatmentPayload,
};

pub const START_TIME: u64 = 1_700_000_000;

pub struct TestContext {
    pub env: Env,
    pub contract_id: Address,
    pub client: PatientTreatmentRegistryClient<'static>,
}

pub fn setup() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START_TIME);
    let contract_id = env.register(PatientTreatmentRegistry, ());
    let client = PatientTreatmentRegistryClient::new(&env, &contract_id);
    TestContext {
        env,
        contract_id,
        client,
    }
}

pub fn advance_time(env: &Env, seconds: u64) {
    let now = env.ledger().timestamp();
    env.ledger().set_timestamp(now + seconds);
}

pub fn patient_payload(env: &Env, name: &str, contact_number: &str) -> PatientPayload {
    PatientPayload {
        name: String::from_str(env, name),
        age: 30,
        date_of_birth: String::from_str(env, "2000-01-01"),
        gender: String::from_str(env, "F"),
        contact_number: String::from_str(env, contact_number),
    }
}

pub fn treatment_payload(env: &Env, patient_id: &String) -> TreatmentPayload {
    TreatmentPayload {
        patient_id: patient_id.clone(),
        date: String::from_str(env, "2024-01-01"),
        medications: vec![env, String::from_str(env, "X")],
        duration: String::from_str(env, "5d"),
        treating_doctor: String::from_str(env, "Dr. A"),
        instructions: None,
    }
}

/// Ids of the form `<prefix>-0000`, `<prefix>-0001`, ...
pub struct SequentialIds {
    prefix: u8,
    next: Cell<u32>,
}

impl SequentialIds {
    pub fn new(prefix: u8) -> Self {
        Self {
            prefix,
            next: Cell::new(0),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self, env: &Env) -> String {
        let n = self.next.get();
        self.next.set(n + 1);

        let mut buf = [self.prefix, b'-', b'0', b'0', b'0', b'0'];
        let mut value = n;
        for slot in buf[2..].iter_mut().rev() {
            *slot = b'0' + (value % 10) as u8;
            value /= 10;
        }
        String::from_bytes(env, &buf)
    }
}

/// Hands out a fixed list of ids in order, then repeats the last one.
pub struct ScriptedIds {
    ids: &'static [&'static str],
    next: Cell<usize>,
}

impl ScriptedIds {
    pub fn new(ids: &'static [&'static str]) -> Self {
        Self {
            ids,
            next: Cell::new(0),
        }
    }
}

impl IdGenerator for ScriptedIds {
    fn next_id(&self, env: &Env) -> String {
        let i = self.next.get().min(self.ids.len() - 1);
        self.next.set(i + 1);
        String::from_str(env, self.ids[i])
    }
}

pub fn add_patient_with(
    ctx: &TestContext,
    ids: &impl IdGenerator,
    name: &str,
    contact_number: &str,
) -> Patient {
    let payload = patient_payload(&ctx.env, name, contact_number);
    ctx.env
        .as_contract(&ctx.contract_id, || patients::add_patient(&ctx.env, ids, payload))
        .unwrap()
}

pub fn add_treatment_with(
    ctx: &TestContext,
    ids: &impl IdGenerator,
    patient_id: &String,
) -> Treatment {
    let payload = treatment_payload(&ctx.env, patient_id);
    ctx.env
        .as_contract(&ctx.contract_id, || treatments::add_treatment(&ctx.env, ids, payload))
        .unwrap()
}
