//! The rental ledger contract: construction, the operation wrapper shared
//! by every mutating entry point, and the read-only queries.

use std::sync::Arc;

use neo_config::RentalSettings;
use neo_primitives::{UInt160, UInt256};
use neo_store::{Store, StoreCache};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use super::events::RentalEvent;
use super::external::{
    BaseRegistrar, Collaborators, NameWrapper, RegistrarController, RegistrationRequest,
};
use super::ledger::{History, RecordStore, RentalLedger};
use super::pricing::PricingEngine;
use super::reconcile::GroundTruth;
use super::record::{LedgerEntry, NameRecord};
use super::state::ContractState;
use crate::error::{ContractError, ContractResult};
use crate::guard::{Access, ReentrancyGuard};
use crate::manifest::ContractManifest;
use crate::runtime::InvocationContext;

/// Name the contract is registered under in a [`crate::NativeRegistry`].
pub const CONTRACT_NAME: &str = "RentalLedger";

struct Notification {
    name: String,
    owner: UInt160,
    record: NameRecord,
}

/// Staged state of one running operation.
///
/// Nothing reaches the store, the event log or the notifier unless the
/// operation body returns `Ok`.
pub(crate) struct Operation<'s> {
    pub(crate) cache: StoreCache<'s>,
    pub(crate) settings: RentalSettings,
    events: Vec<RentalEvent>,
    notifications: Vec<Notification>,
}

impl Operation<'_> {
    pub(crate) fn emit(&mut self, event: RentalEvent) {
        self.events.push(event);
    }

    /// Queues a management notification for after the commit.
    pub(crate) fn notify(&mut self, name: &str, owner: UInt160, record: NameRecord) {
        self.notifications.push(Notification {
            name: name.to_owned(),
            owner,
            record,
        });
    }
}

pub struct RentalContract {
    store: Arc<dyn Store>,
    collaborators: Collaborators,
    guard: ReentrancyGuard,
    events: Mutex<Vec<RentalEvent>>,
    manifest: ContractManifest,
}

impl RentalContract {
    /// Deploys a new ledger into an empty store.
    pub fn deploy(
        store: Arc<dyn Store>,
        collaborators: Collaborators,
        owner: UInt160,
        settings: RentalSettings,
    ) -> ContractResult<Self> {
        settings
            .validate()
            .map_err(|err| ContractError::validation(err.to_string()))?;
        if owner.is_zero() {
            return Err(ContractError::validation("owner must not be the zero account"));
        }

        let mut cache = StoreCache::new(store.as_ref());
        if ContractState::is_deployed(&cache)? {
            return Err(ContractError::validation("contract is already deployed"));
        }
        ContractState::put_settings(&mut cache, &settings)?;
        ContractState::set_owner(&mut cache, &owner)?;
        cache.commit()?;
        info!(%owner, tld = %settings.tld, duration = settings.duration, "deployed rental ledger");

        Ok(Self::with_store(store, collaborators))
    }

    /// Whether `store` already holds a deployed ledger.
    pub fn is_deployed(store: &dyn Store) -> ContractResult<bool> {
        ContractState::is_deployed(&StoreCache::new(store))
    }

    /// Opens a ledger previously deployed into `store`.
    pub fn open(store: Arc<dyn Store>, collaborators: Collaborators) -> ContractResult<Self> {
        let cache = StoreCache::new(store.as_ref());
        if !ContractState::is_deployed(&cache)? {
            return Err(ContractError::validation("contract is not deployed"));
        }
        debug!("opened rental ledger");
        Ok(Self::with_store(store, collaborators))
    }

    fn with_store(store: Arc<dyn Store>, collaborators: Collaborators) -> Self {
        Self {
            store,
            collaborators,
            guard: ReentrancyGuard::new(),
            events: Mutex::new(Vec::new()),
            manifest: super::abi::manifest(),
        }
    }

    pub fn manifest(&self) -> &ContractManifest {
        &self.manifest
    }

    pub(crate) fn collaborators(&self) -> &Collaborators {
        &self.collaborators
    }

    /// Runs `body` under `access` and commits its staged writes on success.
    pub(crate) fn execute<T>(
        &self,
        ctx: &InvocationContext,
        access: Access,
        operation: &'static str,
        body: impl FnOnce(&mut Operation<'_>) -> ContractResult<T>,
    ) -> ContractResult<T> {
        let result = self.try_execute(ctx, access, operation, body);
        if let Err(err) = &result {
            warn!(operation, caller = %ctx.caller, error = %err, "operation rejected");
        }
        result
    }

    fn try_execute<T>(
        &self,
        ctx: &InvocationContext,
        access: Access,
        operation: &'static str,
        body: impl FnOnce(&mut Operation<'_>) -> ContractResult<T>,
    ) -> ContractResult<T> {
        let _scope = self.guard.acquire(access.is_non_reentrant())?;
        access.check_value(ctx.value)?;

        let cache = StoreCache::new(self.store.as_ref());
        if access.is_pausable() && ContractState::is_paused(&cache)? {
            return Err(ContractError::Paused);
        }
        let settings = ContractState::settings(&cache)?;
        let owner = ContractState::owner(&cache)?;
        access.authorize(&ctx.caller, &owner, &settings.revenue_account)?;

        let mut op = Operation {
            cache,
            settings,
            events: Vec::new(),
            notifications: Vec::new(),
        };
        let value = body(&mut op)?;

        let Operation {
            cache,
            events,
            notifications,
            ..
        } = op;
        cache.commit()?;
        info!(operation, caller = %ctx.caller, value = ctx.value, "operation committed");

        self.events.lock().extend(events);
        for notification in notifications {
            if let Err(err) = self.collaborators.notifier.on_register(
                &notification.name,
                &notification.owner,
                &notification.record,
            ) {
                warn!(name = %notification.name, error = %err, "management notifier failed");
            }
        }
        Ok(value)
    }

    fn read(&self) -> StoreCache<'_> {
        StoreCache::new(self.store.as_ref())
    }

    pub(crate) fn controller(
        &self,
        settings: &RentalSettings,
    ) -> ContractResult<Arc<dyn RegistrarController>> {
        self.collaborators
            .directory
            .controller(&settings.registrar_controller)
    }

    fn base_registrar(&self, settings: &RentalSettings) -> ContractResult<Arc<dyn BaseRegistrar>> {
        self.collaborators
            .directory
            .base_registrar(&settings.base_registrar)
    }

    fn name_wrapper(&self, settings: &RentalSettings) -> ContractResult<Arc<dyn NameWrapper>> {
        self.collaborators
            .directory
            .name_wrapper(&settings.tld_name_wrapper)
    }

    /// Owner from the name wrapper, expiry from the base registrar.
    pub(crate) fn ground_truth(
        &self,
        settings: &RentalSettings,
        name: &str,
    ) -> ContractResult<GroundTruth> {
        let data = self.name_wrapper(settings)?.get_data(&settings.name_node(name))?;
        let expires = self
            .base_registrar(settings)?
            .name_expires(&UInt256::label_hash(name))?;
        Ok(GroundTruth {
            owner: data.owner,
            expires,
        })
    }

    pub(crate) fn registration_request(
        settings: &RentalSettings,
        name: &str,
        owner: UInt160,
        secret: UInt256,
    ) -> RegistrationRequest {
        RegistrationRequest {
            name: name.to_owned(),
            owner,
            duration: settings.duration,
            secret,
            resolver: settings.resolver,
            records: Vec::new(),
            reverse_record: settings.reverse_record,
            fuses: settings.fuses,
            wrapper_expiry: settings.wrapper_expiry,
        }
    }

    /// Removes and returns the events emitted since the last call.
    pub fn drain_events(&self) -> Vec<RentalEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn settings(&self) -> ContractResult<RentalSettings> {
        ContractState::settings(&self.read())
    }

    pub fn owner(&self) -> ContractResult<UInt160> {
        ContractState::owner(&self.read())
    }

    pub fn is_paused(&self) -> ContractResult<bool> {
        ContractState::is_paused(&self.read())
    }

    /// Custody balance awaiting withdrawal.
    pub fn balance(&self) -> ContractResult<u64> {
        ContractState::balance(&self.read())
    }

    /// Availability as reported by the registrar controller. Never cached.
    pub fn available(&self, name: &str) -> ContractResult<bool> {
        let settings = self.settings()?;
        Ok(self.controller(&settings)?.available(name)?)
    }

    /// Commitment for a later `register` with the current settings.
    pub fn make_commitment(
        &self,
        name: &str,
        owner: UInt160,
        secret: UInt256,
    ) -> ContractResult<UInt256> {
        let settings = self.settings()?;
        let request = Self::registration_request(&settings, name, owner, secret);
        Ok(self.controller(&settings)?.make_commitment(&request)?)
    }

    /// Registrar portion of the price for one term.
    pub fn get_ens_price(&self, name: &str) -> ContractResult<u64> {
        let settings = self.settings()?;
        let controller = self.controller(&settings)?;
        PricingEngine::new(controller.as_ref(), &settings).external_price(name)
    }

    /// Exact payment `register` and `renew` require right now.
    pub fn get_price(&self, name: &str) -> ContractResult<u64> {
        let settings = self.settings()?;
        let controller = self.controller(&settings)?;
        PricingEngine::new(controller.as_ref(), &settings)
            .quote(name)?
            .total()
    }

    pub fn get_owner_and_expiry(&self, name: &str) -> ContractResult<(UInt160, u64)> {
        let truth = self.ground_truth(&self.settings()?, name)?;
        Ok((truth.owner, truth.expires))
    }

    pub fn get_record(&self, name: &str) -> ContractResult<Option<NameRecord>> {
        RecordStore::get(&self.read(), name)
    }

    /// Number of ledger entries ever appended.
    pub fn num_records(&self) -> ContractResult<u64> {
        RentalLedger::len(&self.read())
    }

    pub fn get_record_keys(&self, start: u64, end: u64) -> ContractResult<Vec<String>> {
        RentalLedger::keys(&self.read(), start, end)
    }

    pub fn ledger_entry(&self, index: u64) -> ContractResult<Option<LedgerEntry>> {
        RentalLedger::entry(&self.read(), index)
    }

    /// Most recently claimed name.
    pub fn last_rented_name(&self) -> ContractResult<Option<String>> {
        let cache = self.read();
        match RentalLedger::tail(&cache)? {
            Some(index) => Ok(RentalLedger::entry(&cache, index)?.map(|entry| entry.name)),
            None => Ok(None),
        }
    }

    /// Walks the history backwards starting at `from`.
    pub fn walk_back(&self, from: Option<u64>) -> History<'_> {
        History::new(self.store.as_ref(), from)
    }

    /// Walks the history backwards from the tail.
    pub fn history(&self) -> ContractResult<History<'_>> {
        let tail = RentalLedger::tail(&self.read())?;
        Ok(self.walk_back(tail))
    }
}
