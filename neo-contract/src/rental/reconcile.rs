//! Repairs a local record from the registrar's view of a name.
//!
//! Nothing here touches storage or calls out; the contract reads the local
//! record and the ground truth, calls [`reconcile`], then applies the result.

use neo_config::RentalSettings;
use neo_primitives::UInt160;

use super::record::NameRecord;
use crate::error::{ContractError, ContractResult};

const SCALE: u128 = 1_000_000_000_000_000_000;

/// Current owner and expiry of a name according to the external contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroundTruth {
    pub owner: UInt160,
    pub expires: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Record to store. `entry` is left for the caller to fill when
    /// `append_to_ledger` is set.
    pub record: NameRecord,
    pub charge: u64,
    /// The name was never claimed locally and starts a new ledger entry.
    pub append_to_ledger: bool,
    pub previous_renter: UInt160,
}

/// Seconds of registration not yet paid for through this ledger.
pub fn chargeable_duration(local_expiration: u64, external_expiration: u64, now: u64) -> u64 {
    if local_expiration == 0 {
        external_expiration.saturating_sub(now)
    } else {
        external_expiration.saturating_sub(local_expiration)
    }
}

/// `floor(chargeable * fee / duration)`, scaled by 10^18 before dividing.
pub fn prorated_charge(chargeable: u64, fee: u64, duration: u64) -> ContractResult<u64> {
    if duration == 0 {
        return Err(ContractError::validation("duration must be greater than zero"));
    }
    let ratio = u128::from(chargeable)
        .checked_mul(SCALE)
        .ok_or(ContractError::overflow("reinstate ratio"))?
        / u128::from(duration);
    let charge = ratio
        .checked_mul(u128::from(fee))
        .ok_or(ContractError::overflow("reinstate charge"))?
        / SCALE;
    u64::try_from(charge).map_err(|_| ContractError::overflow("reinstate charge"))
}

/// Cost of bringing `local` up to `external_expiration`.
pub fn reinstate_cost(
    local: Option<&NameRecord>,
    external_expiration: u64,
    now: u64,
    settings: &RentalSettings,
) -> ContractResult<u64> {
    let local_expiration = local.map_or(0, |record| record.expiration_time);
    let chargeable = chargeable_duration(local_expiration, external_expiration, now);
    prorated_charge(chargeable, settings.base_rental_price, settings.duration)
}

/// Computes the record that matches `truth` and what the catch-up costs.
pub fn reconcile(
    local: Option<&NameRecord>,
    truth: &GroundTruth,
    now: u64,
    settings: &RentalSettings,
) -> ContractResult<Reconciliation> {
    let charge = reinstate_cost(local, truth.expires, now, settings)?;
    let mut record = local.cloned().unwrap_or_default();
    let previous_renter = record.renter;
    let append_to_ledger = !record.is_rented();

    if record.rent_time == 0 {
        record.rent_time = now;
    }
    record.expiration_time = truth.expires;
    record.renter = truth.owner;
    record.last_price = charge;

    Ok(Reconciliation {
        record,
        charge,
        append_to_ledger,
        previous_renter,
    })
}
