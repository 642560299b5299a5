//! Shared fixtures: an in-memory registrar standing in for the controller,
//! base registrar and name wrapper, plus a recording notifier and treasury.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use neo_config::{RentalSettings, SECONDS_PER_DAY};
use neo_contract::rental::{
    BaseRegistrar, ExternalError, ExternalResult, FundsTransfer, ManagementNotifier, NameWrapper,
    RegistrarController, RegistrationRequest, RentQuote, WrappedData, ALL_COLUMNS,
};
use neo_contract::{
    Collaborators, ContractDirectory, ContractResult, InvocationContext, NameRecord,
    RentalContract,
};
use neo_primitives::{keccak256, UInt160, UInt256};
use neo_store::MemoryStore;
use parking_lot::Mutex;

pub const YEAR: u64 = 365 * SECONDS_PER_DAY;
pub const DAY: u64 = SECONDS_PER_DAY;
pub const START: u64 = 1_700_000_000;

pub type Hook = Box<dyn Fn() + Send + Sync>;

pub fn account(byte: u8) -> UInt160 {
    UInt160::from([byte; 20])
}

pub fn owner() -> UInt160 {
    account(0xA0)
}

pub fn revenue() -> UInt160 {
    account(0xA1)
}

pub fn bob() -> UInt160 {
    account(0xB0)
}

pub fn carol() -> UInt160 {
    account(0xC0)
}

pub fn stranger() -> UInt160 {
    account(0xEE)
}

pub fn controller_hash() -> UInt160 {
    account(0x01)
}

pub fn base_registrar_hash() -> UInt160 {
    account(0x02)
}

pub fn wrapper_hash() -> UInt160 {
    account(0x03)
}

pub fn secret() -> UInt256 {
    UInt256::from([7u8; 32])
}

pub fn settings() -> RentalSettings {
    RentalSettings {
        base_rental_price: 100,
        duration: YEAR,
        grace_period: 30 * DAY,
        revenue_account: revenue(),
        registrar_controller: controller_hash(),
        base_registrar: base_registrar_hash(),
        tld_name_wrapper: wrapper_hash(),
        ..RentalSettings::default()
    }
}

#[derive(Debug, Clone, Copy)]
struct ExternalName {
    owner: UInt160,
    expires: u64,
}

/// Registrar controller, base registrar and name wrapper over one table.
pub struct MockRegistrar {
    names: Mutex<HashMap<String, ExternalName>>,
    wrapped_owners: Mutex<HashMap<String, UInt160>>,
    quote: Mutex<RentQuote>,
    now: AtomicU64,
    received: AtomicU64,
    fail_register: AtomicBool,
    commitments: Mutex<Vec<UInt256>>,
    requests: Mutex<Vec<RegistrationRequest>>,
    hook: Mutex<Option<Arc<Hook>>>,
}

impl MockRegistrar {
    pub fn new(base: u64, premium: u64) -> Self {
        Self {
            names: Mutex::new(HashMap::new()),
            wrapped_owners: Mutex::new(HashMap::new()),
            quote: Mutex::new(RentQuote { base, premium }),
            now: AtomicU64::new(START),
            received: AtomicU64::new(0),
            fail_register: AtomicBool::new(false),
            commitments: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
            hook: Mutex::new(None),
        }
    }

    pub fn set_now(&self, now: u64) {
        self.now.store(now, Ordering::SeqCst);
    }

    fn now(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }

    pub fn set_quote(&self, base: u64, premium: u64) {
        *self.quote.lock() = RentQuote { base, premium };
    }

    /// Registration made directly at the registrar, bypassing the ledger.
    pub fn set_external(&self, name: &str, owner: UInt160, expires: u64) {
        self.names
            .lock()
            .insert(name.to_owned(), ExternalName { owner, expires });
    }

    /// Overrides the owner reported by the name wrapper only.
    pub fn set_wrapped_owner(&self, name: &str, owner: UInt160) {
        self.wrapped_owners.lock().insert(name.to_owned(), owner);
    }

    pub fn expiry_of(&self, name: &str) -> Option<u64> {
        self.names.lock().get(name).map(|entry| entry.expires)
    }

    pub fn received(&self) -> u64 {
        self.received.load(Ordering::SeqCst)
    }

    pub fn fail_registrations(&self, fail: bool) {
        self.fail_register.store(fail, Ordering::SeqCst);
    }

    pub fn commitments(&self) -> Vec<UInt256> {
        self.commitments.lock().clone()
    }

    pub fn requests(&self) -> Vec<RegistrationRequest> {
        self.requests.lock().clone()
    }

    /// Runs `hook` inside every `register` and `renew` call.
    pub fn set_hook(&self, hook: Hook) {
        *self.hook.lock() = Some(Arc::new(hook));
    }

    fn run_hook(&self) {
        let hook = self.hook.lock().clone();
        if let Some(hook) = hook {
            hook();
        }
    }

    fn price(&self) -> u64 {
        let quote = *self.quote.lock();
        quote.base + quote.premium
    }

    fn find_by<F: Fn(&str) -> bool>(&self, matches: F) -> Option<(String, ExternalName)> {
        self.names
            .lock()
            .iter()
            .find(|(name, _)| matches(name))
            .map(|(name, entry)| (name.clone(), *entry))
    }
}

pub fn node_of(name: &str) -> UInt256 {
    neo_primitives::namehash(&format!("{name}.eth"))
}

impl RegistrarController for MockRegistrar {
    fn available(&self, name: &str) -> ExternalResult<bool> {
        let now = self.now();
        Ok(self
            .names
            .lock()
            .get(name)
            .map_or(true, |entry| entry.expires < now))
    }

    fn make_commitment(&self, request: &RegistrationRequest) -> ExternalResult<UInt256> {
        let mut data = request.name.as_bytes().to_vec();
        data.extend_from_slice(request.owner.as_ref());
        data.extend_from_slice(&request.duration.to_be_bytes());
        data.extend_from_slice(request.secret.as_ref());
        Ok(UInt256::from(keccak256(&data)))
    }

    fn commit(&self, commitment: &UInt256) -> ExternalResult<()> {
        self.commitments.lock().push(*commitment);
        Ok(())
    }

    fn rent_price(&self, _name: &str, _duration: u64) -> ExternalResult<RentQuote> {
        Ok(*self.quote.lock())
    }

    fn register(&self, request: &RegistrationRequest, value: u64) -> ExternalResult<()> {
        self.run_hook();
        if self.fail_register.load(Ordering::SeqCst) {
            return Err(ExternalError::new("registration rejected"));
        }
        if value != self.price() {
            return Err(ExternalError::new("insufficient value"));
        }
        let expires = self.now() + request.duration;
        self.set_external(&request.name, request.owner, expires);
        self.requests.lock().push(request.clone());
        self.received.fetch_add(value, Ordering::SeqCst);
        Ok(())
    }

    fn renew(&self, name: &str, duration: u64, value: u64) -> ExternalResult<()> {
        self.run_hook();
        if value != self.price() {
            return Err(ExternalError::new("insufficient value"));
        }
        let mut names = self.names.lock();
        let entry = names
            .get_mut(name)
            .ok_or_else(|| ExternalError::new("name not registered"))?;
        entry.expires += duration;
        self.received.fetch_add(value, Ordering::SeqCst);
        Ok(())
    }
}

impl BaseRegistrar for MockRegistrar {
    fn name_expires(&self, label: &UInt256) -> ExternalResult<u64> {
        Ok(self
            .find_by(|name| UInt256::label_hash(name) == *label)
            .map_or(0, |(_, entry)| entry.expires))
    }
}

impl NameWrapper for MockRegistrar {
    fn get_data(&self, node: &UInt256) -> ExternalResult<WrappedData> {
        let Some((name, entry)) = self.find_by(|name| node_of(name) == *node) else {
            return Ok(WrappedData::default());
        };
        let owner = self
            .wrapped_owners
            .lock()
            .get(&name)
            .copied()
            .unwrap_or(entry.owner);
        Ok(WrappedData {
            owner,
            fuses: 0,
            expiry: entry.expires,
        })
    }
}

#[derive(Default)]
pub struct MockNotifier {
    calls: Mutex<Vec<(String, UInt160, NameRecord)>>,
    fail: AtomicBool,
}

impl MockNotifier {
    pub fn calls(&self) -> Vec<(String, UInt160, NameRecord)> {
        self.calls.lock().clone()
    }

    pub fn fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

impl ManagementNotifier for MockNotifier {
    fn on_register(&self, name: &str, new_owner: &UInt160, record: &NameRecord) -> ExternalResult<()> {
        self.calls
            .lock()
            .push((name.to_owned(), *new_owner, record.clone()));
        if self.fail.load(Ordering::SeqCst) {
            return Err(ExternalError::new("notifier offline"));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MockTreasury {
    transfers: Mutex<Vec<(UInt160, u64)>>,
    fail: AtomicBool,
    hook: Mutex<Option<Arc<Hook>>>,
}

impl MockTreasury {
    pub fn transfers(&self) -> Vec<(UInt160, u64)> {
        self.transfers.lock().clone()
    }

    pub fn fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn set_hook(&self, hook: Hook) {
        *self.hook.lock() = Some(Arc::new(hook));
    }
}

impl FundsTransfer for MockTreasury {
    fn transfer(&self, to: &UInt160, amount: u64) -> ExternalResult<()> {
        let hook = self.hook.lock().clone();
        if let Some(hook) = hook {
            hook();
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(ExternalError::new("recipient rejected funds"));
        }
        self.transfers.lock().push((*to, amount));
        Ok(())
    }
}

pub struct Harness {
    pub contract: Arc<RentalContract>,
    pub registrar: Arc<MockRegistrar>,
    pub notifier: Arc<MockNotifier>,
    pub treasury: Arc<MockTreasury>,
    pub directory: Arc<ContractDirectory>,
    pub store: Arc<MemoryStore>,
}

impl Harness {
    /// Ledger with a 100 flat fee in front of a registrar quoting 900.
    pub fn new() -> Self {
        Self::with_settings(settings())
    }

    pub fn with_settings(settings: RentalSettings) -> Self {
        let registrar = Arc::new(MockRegistrar::new(900, 0));
        let directory = Arc::new(ContractDirectory::new());
        directory.deploy_controller(settings.registrar_controller, registrar.clone());
        directory.deploy_base_registrar(settings.base_registrar, registrar.clone());
        directory.deploy_name_wrapper(settings.tld_name_wrapper, registrar.clone());

        let notifier = Arc::new(MockNotifier::default());
        let treasury = Arc::new(MockTreasury::default());
        let store = Arc::new(MemoryStore::with_columns(&ALL_COLUMNS));
        let collaborators = Collaborators {
            directory: directory.clone(),
            notifier: notifier.clone(),
            funds: treasury.clone(),
        };
        let contract = RentalContract::deploy(store.clone(), collaborators, owner(), settings)
            .expect("deploy");

        Self {
            contract: Arc::new(contract),
            registrar,
            notifier,
            treasury,
            directory,
            store,
        }
    }

    /// Context for `caller` at `timestamp`; also moves the registrar clock.
    pub fn ctx(&self, caller: UInt160, timestamp: u64) -> InvocationContext {
        self.registrar.set_now(timestamp);
        InvocationContext::new(caller, timestamp)
    }

    /// Registers `name` for `to` paying the current price.
    pub fn register(&self, name: &str, to: UInt160, timestamp: u64) -> ContractResult<NameRecord> {
        let ctx = self.ctx(to, timestamp);
        let price = self.contract.get_price(name)?;
        self.contract
            .register(&ctx.with_value(price), name, secret(), to)
    }

    pub fn renew(&self, name: &str, caller: UInt160, timestamp: u64) -> ContractResult<NameRecord> {
        let ctx = self.ctx(caller, timestamp);
        let price = self.contract.get_price(name)?;
        self.contract.renew(&ctx.with_value(price), name)
    }

    pub fn reinstate(&self, name: &str, caller: UInt160, timestamp: u64) -> ContractResult<NameRecord> {
        let ctx = self.ctx(caller, timestamp);
        let cost = self.contract.get_reinstate_cost(name, timestamp)?;
        self.contract.reinstate(&ctx.with_value(cost), name)
    }

    pub fn as_owner(&self, timestamp: u64) -> InvocationContext {
        self.ctx(owner(), timestamp)
    }
}
