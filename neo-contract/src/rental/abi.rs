//! Method table and `Value`-based dispatch for the rental contract.

use super::contract::{RentalContract, CONTRACT_NAME};
use super::record::{InitialRecord, NameRecord};
use crate::error::{ContractError, ContractResult};
use crate::manifest::{ContractManifest, ContractMethod, ContractParameter, ParameterKind};
use crate::native::NativeContract;
use crate::runtime::{Args, InvocationContext, InvocationResult, Value};

use ParameterKind as Kind;

fn method(name: &str, parameters: &[(&str, ParameterKind)], return_type: ParameterKind) -> ContractMethod {
    ContractMethod::new(
        name,
        parameters
            .iter()
            .map(|(name, kind)| ContractParameter::new(name, *kind))
            .collect(),
        return_type,
    )
}

pub(crate) fn manifest() -> ContractManifest {
    let name = ("name", Kind::String);
    ContractManifest {
        name: CONTRACT_NAME.to_owned(),
        methods: vec![
            method("register", &[name, ("secret", Kind::Hash256), ("to", Kind::Hash160)], Kind::Array),
            method("renew", &[name], Kind::Array),
            method("reinstate", &[name], Kind::Array),
            method("commit", &[("commitment", Kind::Hash256)], Kind::Void),
            method("withdraw", &[], Kind::Integer),
            method("pause", &[], Kind::Void),
            method("unpause", &[], Kind::Void),
            method("setBaseRentalPrice", &[("price", Kind::Integer)], Kind::Void),
            method("setDuration", &[("duration", Kind::Integer)], Kind::Void),
            method("setGracePeriod", &[("gracePeriod", Kind::Integer)], Kind::Void),
            method("setRevenueAccount", &[("account", Kind::Hash160)], Kind::Void),
            method("setRegistrarController", &[("hash", Kind::Hash160)], Kind::Void),
            method("setBaseRegistrar", &[("hash", Kind::Hash160)], Kind::Void),
            method("setTldNameWrapper", &[("hash", Kind::Hash160)], Kind::Void),
            method("setResolver", &[("resolver", Kind::Hash160)], Kind::Void),
            method("setReverseRecord", &[("enabled", Kind::Boolean)], Kind::Void),
            method("setFuses", &[("fuses", Kind::Integer)], Kind::Void),
            method("setWrapperExpiry", &[("expiry", Kind::Integer)], Kind::Void),
            method("transferOwnership", &[("newOwner", Kind::Hash160)], Kind::Void),
            method("initialize", &[("names", Kind::Array), ("records", Kind::Array)], Kind::Integer),
            method("finishInitialization", &[], Kind::Void),
            method("available", &[name], Kind::Boolean).safe(),
            method(
                "makeCommitment",
                &[name, ("owner", Kind::Hash160), ("secret", Kind::Hash256)],
                Kind::Hash256,
            )
            .safe(),
            method("getENSPrice", &[name], Kind::Integer).safe(),
            method("getPrice", &[name], Kind::Integer).safe(),
            method("getReinstateCost", &[name], Kind::Integer).safe(),
            method("getOwnerAndExpiry", &[name], Kind::Array).safe(),
            method("getRecord", &[name], Kind::Any).safe(),
            method("numRecords", &[], Kind::Integer).safe(),
            method("getRecordKeys", &[("start", Kind::Integer), ("end", Kind::Integer)], Kind::Array).safe(),
            method("lastRentedName", &[], Kind::Any).safe(),
            method("owner", &[], Kind::Hash160).safe(),
            method("isPaused", &[], Kind::Boolean).safe(),
            method("balance", &[], Kind::Integer).safe(),
        ],
    }
}

/// `[renter, lastPrice, rentTime, expirationTime]`
fn record_value(record: &NameRecord) -> Value {
    Value::Array(vec![
        Value::from(record.renter),
        Value::from(record.last_price),
        Value::from(record.rent_time),
        Value::from(record.expiration_time),
    ])
}

fn optional_name(method: &str, value: &Value) -> ContractResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(name) => Ok(Some(name.clone())),
        _ => Err(ContractError::invalid_parameters(
            method,
            "record link must be a string or null",
        )),
    }
}

/// Parses `[renter, lastPrice, rentTime, expirationTime, prev, next]`.
fn initial_record(method: &str, value: &Value) -> ContractResult<InitialRecord> {
    let fields = value
        .as_array()
        .filter(|fields| fields.len() == 6)
        .ok_or_else(|| ContractError::invalid_parameters(method, "record must be a 6-element array"))?;
    let args = Args::new(method, fields);
    Ok(InitialRecord {
        renter: args.hash160(0)?,
        last_price: args.u64(1)?,
        rent_time: args.u64(2)?,
        expiration_time: args.u64(3)?,
        prev: optional_name(method, &fields[4])?,
        next: optional_name(method, &fields[5])?,
    })
}

impl RentalContract {
    fn dispatch(
        &self,
        ctx: &InvocationContext,
        method: &str,
        params: &[Value],
    ) -> ContractResult<InvocationResult> {
        let args = Args::new(method, params);
        let result = match method {
            "register" => record_value(&self.register(
                ctx,
                args.string(0)?,
                args.hash256(1)?,
                args.hash160(2)?,
            )?),
            "renew" => record_value(&self.renew(ctx, args.string(0)?)?),
            "reinstate" => record_value(&self.reinstate(ctx, args.string(0)?)?),
            "commit" => {
                self.commit(ctx, args.hash256(0)?)?;
                Value::Null
            }
            "withdraw" => Value::from(self.withdraw(ctx)?),
            "pause" => {
                self.pause(ctx)?;
                Value::Null
            }
            "unpause" => {
                self.unpause(ctx)?;
                Value::Null
            }
            "setBaseRentalPrice" => {
                self.set_base_rental_price(ctx, args.u64(0)?)?;
                Value::Null
            }
            "setDuration" => {
                self.set_duration(ctx, args.u64(0)?)?;
                Value::Null
            }
            "setGracePeriod" => {
                self.set_grace_period(ctx, args.u64(0)?)?;
                Value::Null
            }
            "setRevenueAccount" => {
                self.set_revenue_account(ctx, args.hash160(0)?)?;
                Value::Null
            }
            "setRegistrarController" => {
                self.set_registrar_controller(ctx, args.hash160(0)?)?;
                Value::Null
            }
            "setBaseRegistrar" => {
                self.set_base_registrar(ctx, args.hash160(0)?)?;
                Value::Null
            }
            "setTldNameWrapper" => {
                self.set_tld_name_wrapper(ctx, args.hash160(0)?)?;
                Value::Null
            }
            "setResolver" => {
                self.set_resolver(ctx, args.hash160(0)?)?;
                Value::Null
            }
            "setReverseRecord" => {
                self.set_reverse_record(ctx, args.bool(0)?)?;
                Value::Null
            }
            "setFuses" => {
                self.set_fuses(ctx, args.u32(0)?)?;
                Value::Null
            }
            "setWrapperExpiry" => {
                self.set_wrapper_expiry(ctx, args.u64(0)?)?;
                Value::Null
            }
            "transferOwnership" => {
                self.transfer_ownership(ctx, args.hash160(0)?)?;
                Value::Null
            }
            "initialize" => {
                let names = args
                    .array(0)?
                    .iter()
                    .map(|value| {
                        value.as_str().map(str::to_owned).ok_or_else(|| {
                            ContractError::invalid_parameters(method, "names must be strings")
                        })
                    })
                    .collect::<ContractResult<Vec<_>>>()?;
                let records = args
                    .array(1)?
                    .iter()
                    .map(|value| initial_record(method, value))
                    .collect::<ContractResult<Vec<_>>>()?;
                Value::from(self.initialize(ctx, &names, &records)?)
            }
            "finishInitialization" => {
                self.finish_initialization(ctx)?;
                Value::Null
            }
            "available" => Value::from(self.available(args.string(0)?)?),
            "makeCommitment" => Value::from(self.make_commitment(
                args.string(0)?,
                args.hash160(1)?,
                args.hash256(2)?,
            )?),
            "getENSPrice" => Value::from(self.get_ens_price(args.string(0)?)?),
            "getPrice" => Value::from(self.get_price(args.string(0)?)?),
            "getReinstateCost" => {
                Value::from(self.get_reinstate_cost(args.string(0)?, ctx.timestamp)?)
            }
            "getOwnerAndExpiry" => {
                let (owner, expiry) = self.get_owner_and_expiry(args.string(0)?)?;
                Value::Array(vec![Value::from(owner), Value::from(expiry)])
            }
            "getRecord" => self
                .get_record(args.string(0)?)?
                .map_or(Value::Null, |record| record_value(&record)),
            "numRecords" => Value::from(self.num_records()?),
            "getRecordKeys" => Value::Array(
                self.get_record_keys(args.u64(0)?, args.u64(1)?)?
                    .into_iter()
                    .map(Value::from)
                    .collect(),
            ),
            "lastRentedName" => Value::from(self.last_rented_name()?),
            "owner" => Value::from(self.owner()?),
            "isPaused" => Value::from(self.is_paused()?),
            "balance" => Value::from(self.balance()?),
            _ => {
                return Err(ContractError::MethodNotFound {
                    method: method.to_owned(),
                })
            }
        };
        Ok(InvocationResult::new(result))
    }
}

impl NativeContract for RentalContract {
    fn name(&self) -> &'static str {
        CONTRACT_NAME
    }

    fn manifest(&self) -> &ContractManifest {
        RentalContract::manifest(self)
    }

    fn invoke(
        &self,
        ctx: &InvocationContext,
        method: &ContractMethod,
        params: &[Value],
    ) -> Result<InvocationResult, ContractError> {
        self.dispatch(ctx, &method.name, params)
    }
}
