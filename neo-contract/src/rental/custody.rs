//! Owner-gated configuration, the pause switch, custody withdrawal,
//! ownership transfer and the one-time bulk load.

use neo_config::RentalSettings;
use neo_primitives::UInt160;
use tracing::debug;

use super::contract::RentalContract;
use super::events::RentalEvent;
use super::ledger::RentalLedger;
use super::record::{validate_name, InitialRecord};
use super::state::ContractState;
use crate::error::{ContractError, ContractResult};
use crate::guard::Access;
use crate::runtime::InvocationContext;

impl RentalContract {
    fn update_settings(
        &self,
        ctx: &InvocationContext,
        field: &'static str,
        apply: impl FnOnce(&mut RentalSettings),
    ) -> ContractResult<()> {
        self.execute(ctx, Access::owner(), field, |op| {
            apply(&mut op.settings);
            op.settings
                .validate()
                .map_err(|err| ContractError::validation(err.to_string()))?;
            ContractState::put_settings(&mut op.cache, &op.settings)?;
            debug!(field, "staged settings change");
            op.emit(RentalEvent::ConfigChanged {
                field: field.to_owned(),
            });
            Ok(())
        })
    }

    pub fn set_base_rental_price(&self, ctx: &InvocationContext, price: u64) -> ContractResult<()> {
        self.update_settings(ctx, "base_rental_price", |s| s.base_rental_price = price)
    }

    /// Term length for registrations and renewals; must be non-zero.
    pub fn set_duration(&self, ctx: &InvocationContext, duration: u64) -> ContractResult<()> {
        self.update_settings(ctx, "duration", |s| s.duration = duration)
    }

    pub fn set_grace_period(&self, ctx: &InvocationContext, grace_period: u64) -> ContractResult<()> {
        self.update_settings(ctx, "grace_period", |s| s.grace_period = grace_period)
    }

    pub fn set_revenue_account(&self, ctx: &InvocationContext, account: UInt160) -> ContractResult<()> {
        self.update_settings(ctx, "revenue_account", |s| s.revenue_account = account)
    }

    pub fn set_registrar_controller(&self, ctx: &InvocationContext, hash: UInt160) -> ContractResult<()> {
        self.update_settings(ctx, "registrar_controller", |s| s.registrar_controller = hash)
    }

    pub fn set_base_registrar(&self, ctx: &InvocationContext, hash: UInt160) -> ContractResult<()> {
        self.update_settings(ctx, "base_registrar", |s| s.base_registrar = hash)
    }

    pub fn set_tld_name_wrapper(&self, ctx: &InvocationContext, hash: UInt160) -> ContractResult<()> {
        self.update_settings(ctx, "tld_name_wrapper", |s| s.tld_name_wrapper = hash)
    }

    pub fn set_resolver(&self, ctx: &InvocationContext, resolver: UInt160) -> ContractResult<()> {
        self.update_settings(ctx, "resolver", |s| s.resolver = resolver)
    }

    pub fn set_reverse_record(&self, ctx: &InvocationContext, enabled: bool) -> ContractResult<()> {
        self.update_settings(ctx, "reverse_record", |s| s.reverse_record = enabled)
    }

    pub fn set_fuses(&self, ctx: &InvocationContext, fuses: u32) -> ContractResult<()> {
        self.update_settings(ctx, "fuses", |s| s.fuses = fuses)
    }

    pub fn set_wrapper_expiry(&self, ctx: &InvocationContext, expiry: u64) -> ContractResult<()> {
        self.update_settings(ctx, "wrapper_expiry", |s| s.wrapper_expiry = expiry)
    }

    /// Stops `register`, `renew`, `reinstate` and `commit`.
    pub fn pause(&self, ctx: &InvocationContext) -> ContractResult<()> {
        self.execute(ctx, Access::owner(), "pause", |op| {
            ContractState::set_paused(&mut op.cache, true)?;
            op.emit(RentalEvent::Paused { by: ctx.caller });
            Ok(())
        })
    }

    pub fn unpause(&self, ctx: &InvocationContext) -> ContractResult<()> {
        self.execute(ctx, Access::owner(), "unpause", |op| {
            ContractState::set_paused(&mut op.cache, false)?;
            op.emit(RentalEvent::Unpaused { by: ctx.caller });
            Ok(())
        })
    }

    /// Sends the whole custody balance to the revenue account and returns
    /// the amount sent. A failed transfer leaves the balance untouched.
    pub fn withdraw(&self, ctx: &InvocationContext) -> ContractResult<u64> {
        let access = Access::owner_or_revenue().non_reentrant();
        self.execute(ctx, access, "withdraw", |op| {
            let to = op.settings.revenue_account;
            if to.is_zero() {
                return Err(ContractError::validation("revenue account is not set"));
            }
            let amount = ContractState::balance(&op.cache)?;
            ContractState::set_balance(&mut op.cache, 0)?;
            self.collaborators()
                .funds
                .transfer(&to, amount)
                .map_err(|err| ContractError::transfer_failed(err.message))?;
            debug!(%to, amount, "staged withdrawal");
            op.emit(RentalEvent::Withdrawn { to, amount });
            Ok(amount)
        })
    }

    pub fn transfer_ownership(&self, ctx: &InvocationContext, new_owner: UInt160) -> ContractResult<()> {
        self.execute(ctx, Access::owner(), "transfer_ownership", |op| {
            if new_owner.is_zero() {
                return Err(ContractError::validation("new owner must not be the zero account"));
            }
            ContractState::set_owner(&mut op.cache, &new_owner)?;
            op.emit(RentalEvent::OwnershipTransferred {
                previous_owner: ctx.caller,
                new_owner,
            });
            Ok(())
        })
    }

    /// Loads pre-existing rental history. Runs at most once, and never after
    /// [`RentalContract::finish_initialization`].
    pub fn initialize(
        &self,
        ctx: &InvocationContext,
        names: &[String],
        records: &[InitialRecord],
    ) -> ContractResult<u64> {
        self.execute(ctx, Access::owner(), "initialize", |op| {
            if ContractState::is_initialization_finished(&op.cache)? {
                return Err(ContractError::validation("initialization is finished"));
            }
            if ContractState::is_initialized(&op.cache)? {
                return Err(ContractError::validation("already initialized"));
            }
            for name in names {
                validate_name(name, op.settings.max_name_length)?;
            }
            let count = RentalLedger::initialize(&mut op.cache, names, records)?;
            ContractState::set_initialized(&mut op.cache)?;
            op.emit(RentalEvent::Initialized { count });
            Ok(count)
        })
    }

    /// Permanently disables [`RentalContract::initialize`].
    pub fn finish_initialization(&self, ctx: &InvocationContext) -> ContractResult<()> {
        self.execute(ctx, Access::owner(), "finish_initialization", |op| {
            ContractState::set_initialization_finished(&mut op.cache)?;
            op.emit(RentalEvent::InitializationFinished);
            Ok(())
        })
    }
}
