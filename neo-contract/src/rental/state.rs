//! Contract-wide scalars: settings, owner, pause flag, custody balance and
//! the bulk-load latches.

use neo_config::RentalSettings;
use neo_primitives::UInt160;
use neo_store::StoreCache;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::keys::{self, STATE};
use crate::error::{ContractError, ContractResult};

pub struct ContractState;

impl ContractState {
    fn load<T: DeserializeOwned + Default>(cache: &StoreCache<'_>, key: &[u8]) -> ContractResult<T> {
        Ok(cache.get_typed(STATE, key)?.unwrap_or_default())
    }

    fn store<T: Serialize>(cache: &mut StoreCache<'_>, key: &[u8], value: &T) -> ContractResult<()> {
        cache.put_typed(STATE, key.to_vec(), value)?;
        Ok(())
    }

    pub fn is_deployed(cache: &StoreCache<'_>) -> ContractResult<bool> {
        Ok(cache.get(STATE, keys::SETTINGS)?.is_some())
    }

    pub fn settings(cache: &StoreCache<'_>) -> ContractResult<RentalSettings> {
        cache
            .get_typed(STATE, keys::SETTINGS)?
            .ok_or_else(|| ContractError::validation("contract is not deployed"))
    }

    pub fn put_settings(cache: &mut StoreCache<'_>, settings: &RentalSettings) -> ContractResult<()> {
        Self::store(cache, keys::SETTINGS, settings)
    }

    pub fn owner(cache: &StoreCache<'_>) -> ContractResult<UInt160> {
        Self::load(cache, keys::OWNER)
    }

    pub fn set_owner(cache: &mut StoreCache<'_>, owner: &UInt160) -> ContractResult<()> {
        Self::store(cache, keys::OWNER, owner)
    }

    pub fn is_paused(cache: &StoreCache<'_>) -> ContractResult<bool> {
        Self::load(cache, keys::PAUSED)
    }

    pub fn set_paused(cache: &mut StoreCache<'_>, paused: bool) -> ContractResult<()> {
        Self::store(cache, keys::PAUSED, &paused)
    }

    pub fn balance(cache: &StoreCache<'_>) -> ContractResult<u64> {
        Self::load(cache, keys::BALANCE)
    }

    pub fn set_balance(cache: &mut StoreCache<'_>, balance: u64) -> ContractResult<()> {
        Self::store(cache, keys::BALANCE, &balance)
    }

    /// Adds `amount` to the custody balance.
    pub fn credit(cache: &mut StoreCache<'_>, amount: u64) -> ContractResult<u64> {
        let balance = Self::balance(cache)?
            .checked_add(amount)
            .ok_or(ContractError::overflow("custody balance"))?;
        Self::set_balance(cache, balance)?;
        Ok(balance)
    }

    pub fn is_initialized(cache: &StoreCache<'_>) -> ContractResult<bool> {
        Self::load(cache, keys::INITIALIZED)
    }

    pub fn set_initialized(cache: &mut StoreCache<'_>) -> ContractResult<()> {
        Self::store(cache, keys::INITIALIZED, &true)
    }

    pub fn is_initialization_finished(cache: &StoreCache<'_>) -> ContractResult<bool> {
        Self::load(cache, keys::INIT_FINISHED)
    }

    pub fn set_initialization_finished(cache: &mut StoreCache<'_>) -> ContractResult<()> {
        Self::store(cache, keys::INIT_FINISHED, &true)
    }
}
