//! Reinstatement: syncing a local record to the registrar's ground truth.

use tracing::debug;

use super::contract::RentalContract;
use super::events::RentalEvent;
use super::ledger::{RecordStore, RentalLedger};
use super::pricing::ensure_exact_payment;
use super::reconcile::{reconcile, reinstate_cost};
use super::record::{validate_name, NameRecord};
use super::state::ContractState;
use crate::error::{ContractError, ContractResult};
use crate::guard::Access;
use crate::runtime::InvocationContext;

impl RentalContract {
    /// Charge for reinstating `name` at time `now`: the part of the external
    /// registration not yet covered locally, prorated against the flat fee.
    pub fn get_reinstate_cost(&self, name: &str, now: u64) -> ContractResult<u64> {
        let settings = self.settings()?;
        let truth = self.ground_truth(&settings, name)?;
        let local = self.get_record(name)?;
        reinstate_cost(local.as_ref(), truth.expires, now, &settings)
    }

    /// Brings the local record of an externally held name up to date.
    ///
    /// The attached value must equal [`RentalContract::get_reinstate_cost`].
    /// Each call charges only for the time gained since the previous sync.
    pub fn reinstate(&self, ctx: &InvocationContext, name: &str) -> ContractResult<NameRecord> {
        let access = Access::anyone().non_reentrant().when_not_paused().payable();
        self.execute(ctx, access, "reinstate", |op| {
            validate_name(name, op.settings.max_name_length)?;
            if self.controller(&op.settings)?.available(name)? {
                return Err(ContractError::unavailable(
                    name,
                    "not registered externally; register it instead",
                ));
            }
            let truth = self.ground_truth(&op.settings, name)?;
            if truth.expires <= ctx.timestamp {
                return Err(ContractError::unavailable(
                    name,
                    "external registration has expired",
                ));
            }

            let local = RecordStore::get(&op.cache, name)?;
            let outcome = reconcile(local.as_ref(), &truth, ctx.timestamp, &op.settings)?;
            ensure_exact_payment(outcome.charge, ctx.value)?;

            let mut record = outcome.record;
            if outcome.append_to_ledger {
                record.entry = Some(RentalLedger::append(&mut op.cache, name)?);
            }
            RecordStore::put(&mut op.cache, name, &record)?;
            ContractState::credit(&mut op.cache, outcome.charge)?;
            debug!(
                name,
                renter = %record.renter,
                previous_renter = %outcome.previous_renter,
                charge = outcome.charge,
                "staged reinstatement"
            );

            op.notify(name, record.renter, record.clone());
            op.emit(RentalEvent::Reinstated {
                name: name.to_owned(),
                renter: record.renter,
                previous_renter: outcome.previous_renter,
                charge: outcome.charge,
                expiration_time: record.expiration_time,
            });
            Ok(record)
        })
    }
}
