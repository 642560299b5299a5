//! Composite price: the registrar's quote plus the ledger's flat fee.

use neo_config::RentalSettings;

use super::external::RegistrarController;
use crate::error::{ContractError, ContractResult};

/// Price of one rental term, split into the part forwarded to the registrar
/// and the part retained in custody.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuote {
    pub external: u64,
    pub local: u64,
}

impl PriceQuote {
    pub fn total(&self) -> ContractResult<u64> {
        self.external
            .checked_add(self.local)
            .ok_or(ContractError::overflow("rental price"))
    }
}

pub struct PricingEngine<'a> {
    controller: &'a dyn RegistrarController,
    settings: &'a RentalSettings,
}

impl<'a> PricingEngine<'a> {
    pub fn new(controller: &'a dyn RegistrarController, settings: &'a RentalSettings) -> Self {
        Self {
            controller,
            settings,
        }
    }

    /// Registrar price for one term: base plus premium.
    pub fn external_price(&self, name: &str) -> ContractResult<u64> {
        let quote = self.controller.rent_price(name, self.settings.duration)?;
        quote
            .base
            .checked_add(quote.premium)
            .ok_or(ContractError::overflow("registrar quote"))
    }

    /// Fresh quote for one term of `name`.
    pub fn quote(&self, name: &str) -> ContractResult<PriceQuote> {
        Ok(PriceQuote {
            external: self.external_price(name)?,
            local: self.settings.base_rental_price,
        })
    }
}

/// Payments must match the price exactly; nothing is refunded.
pub fn ensure_exact_payment(required: u64, supplied: u64) -> ContractResult<()> {
    if required == supplied {
        Ok(())
    } else {
        Err(ContractError::PaymentMismatch { required, supplied })
    }
}
