//! Registration and renewal through the registrar controller.

use neo_primitives::{UInt160, UInt256};
use tracing::debug;

use super::contract::RentalContract;
use super::events::RentalEvent;
use super::ledger::{RecordStore, RentalLedger};
use super::pricing::{ensure_exact_payment, PricingEngine};
use super::record::{validate_name, NameRecord};
use super::state::ContractState;
use crate::error::{ContractError, ContractResult};
use crate::guard::Access;
use crate::runtime::InvocationContext;

const PAID: Access = Access::anyone().non_reentrant().when_not_paused().payable();

impl RentalContract {
    /// Registers `name` for `to` for one term.
    ///
    /// The attached value must equal [`RentalContract::get_price`]. The
    /// registrar's share is forwarded with the registration call and the flat
    /// fee stays in custody.
    pub fn register(
        &self,
        ctx: &InvocationContext,
        name: &str,
        secret: UInt256,
        to: UInt160,
    ) -> ContractResult<NameRecord> {
        self.execute(ctx, PAID, "register", |op| {
            validate_name(name, op.settings.max_name_length)?;
            let controller = self.controller(&op.settings)?;
            if !controller.available(name)? {
                return Err(ContractError::unavailable(
                    name,
                    "not available for registration",
                ));
            }

            let quote = PricingEngine::new(controller.as_ref(), &op.settings).quote(name)?;
            let price = quote.total()?;
            ensure_exact_payment(price, ctx.value)?;

            let expiration_time = ctx
                .timestamp
                .checked_add(op.settings.duration)
                .ok_or(ContractError::overflow("expiration time"))?;
            let entry = RentalLedger::append(&mut op.cache, name)?;
            let record = NameRecord {
                renter: to,
                last_price: price,
                rent_time: ctx.timestamp,
                expiration_time,
                entry: Some(entry),
            };
            RecordStore::put(&mut op.cache, name, &record)?;
            ContractState::credit(&mut op.cache, quote.local)?;

            // Registrar call goes last: nothing local may fail after payment is forwarded.
            let request = Self::registration_request(&op.settings, name, to, secret);
            controller.register(&request, quote.external)?;
            debug!(name, renter = %to, price, expiration_time, "staged registration");

            op.notify(name, to, record.clone());
            op.emit(RentalEvent::Registered {
                name: name.to_owned(),
                renter: to,
                price,
                expiration_time,
            });
            Ok(record)
        })
    }

    /// Extends the rental of `name` by one term.
    ///
    /// Accepted until `expiration_time + grace_period`; the new expiry is
    /// counted from the old one, not from now.
    pub fn renew(&self, ctx: &InvocationContext, name: &str) -> ContractResult<NameRecord> {
        self.execute(ctx, PAID, "renew", |op| {
            let mut record = RecordStore::get(&op.cache, name)?
                .filter(NameRecord::is_rented)
                .ok_or_else(|| ContractError::unavailable(name, "not rented through this ledger"))?;
            if !record.within_grace(ctx.timestamp, op.settings.grace_period) {
                return Err(ContractError::unavailable(
                    name,
                    "expired past the grace period",
                ));
            }

            let controller = self.controller(&op.settings)?;
            let quote = PricingEngine::new(controller.as_ref(), &op.settings).quote(name)?;
            let price = quote.total()?;
            ensure_exact_payment(price, ctx.value)?;

            record.expiration_time = record
                .expiration_time
                .checked_add(op.settings.duration)
                .ok_or(ContractError::overflow("expiration time"))?;
            record.last_price = price;
            RecordStore::put(&mut op.cache, name, &record)?;
            ContractState::credit(&mut op.cache, quote.local)?;

            controller.renew(name, op.settings.duration, quote.external)?;
            debug!(name, price, expiration_time = record.expiration_time, "staged renewal");

            op.emit(RentalEvent::Renewed {
                name: name.to_owned(),
                price,
                expiration_time: record.expiration_time,
            });
            Ok(record)
        })
    }

    /// Forwards a registration commitment to the registrar controller.
    pub fn commit(&self, ctx: &InvocationContext, commitment: UInt256) -> ContractResult<()> {
        let access = Access::anyone().non_reentrant().when_not_paused();
        self.execute(ctx, access, "commit", |op| {
            self.controller(&op.settings)?.commit(&commitment)?;
            Ok(())
        })
    }
}
