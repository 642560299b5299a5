//! Reinstating records that fell behind the registrar.

mod common;

use common::*;
use neo_contract::{ContractError, RentalEvent};
use neo_primitives::UInt160;

#[test]
fn test_reinstate_untracked_name() {
    let h = Harness::new();
    h.registrar.set_external("carols", carol(), START + YEAR);

    // Never tracked locally: the whole remaining term is charged.
    let cost = h.contract.get_reinstate_cost("carols", START).unwrap();
    assert_eq!(cost, 100);

    let record = h.reinstate("carols", carol(), START).unwrap();
    assert_eq!(record.renter, carol());
    assert_eq!(record.expiration_time, START + YEAR);
    assert_eq!(record.rent_time, START);
    assert_eq!(record.last_price, 100);
    assert_eq!(record.entry, Some(0));

    assert_eq!(h.contract.num_records().unwrap(), 1);
    assert_eq!(h.contract.balance().unwrap(), 100);
    assert_eq!(h.notifier.calls().len(), 1);
    assert_eq!(
        h.contract.drain_events(),
        vec![RentalEvent::Reinstated {
            name: "carols".into(),
            renter: carol(),
            previous_renter: UInt160::zero(),
            charge: 100,
            expiration_time: START + YEAR,
        }]
    );
}

#[test]
fn test_reinstate_charges_only_the_gap() {
    let h = Harness::new();
    let expiry = h.register("alice", bob(), START).unwrap().expiration_time;

    // Renewed at the registrar directly for half a term.
    h.registrar.set_external("alice", bob(), expiry + YEAR / 2);
    let now = START + DAY;
    assert_eq!(h.contract.get_reinstate_cost("alice", now).unwrap(), 50);

    let ctx = h.ctx(bob(), now).with_value(49);
    assert_eq!(
        h.contract.reinstate(&ctx, "alice"),
        Err(ContractError::PaymentMismatch {
            required: 50,
            supplied: 49
        })
    );

    let record = h.reinstate("alice", bob(), now).unwrap();
    assert_eq!(record.expiration_time, expiry + YEAR / 2);
    assert_eq!(record.rent_time, START);
    assert_eq!(record.last_price, 50);
    assert_eq!(h.contract.num_records().unwrap(), 1);
    assert_eq!(h.contract.balance().unwrap(), 150);

    // Already in sync: the next reinstatement is free.
    assert_eq!(h.contract.get_reinstate_cost("alice", now).unwrap(), 0);
    let record = h.reinstate("alice", bob(), now).unwrap();
    assert_eq!(record.last_price, 0);
    assert_eq!(h.contract.num_records().unwrap(), 1);
}

#[test]
fn test_reinstate_records_new_external_owner() {
    let h = Harness::new();
    h.register("alice", bob(), START).unwrap();

    // Lapsed, then claimed by carol directly at the registrar.
    let later = START + YEAR + 100 * DAY;
    h.registrar.set_external("alice", carol(), later + YEAR);

    let record = h.reinstate("alice", carol(), later).unwrap();
    assert_eq!(record.renter, carol());
    assert_eq!(record.expiration_time, later + YEAR);
    assert_eq!(record.rent_time, START);
    // One term plus 100 days uncovered: floor(100 * (365 + 100) / 365).
    assert_eq!(record.last_price, 127);
    assert_eq!(h.contract.num_records().unwrap(), 1);

    let events = h.contract.drain_events();
    assert!(matches!(
        events.last(),
        Some(RentalEvent::Reinstated { previous_renter, .. }) if *previous_renter == bob()
    ));
}

#[test]
fn test_reinstate_available_name_fails() {
    let h = Harness::new();
    let ctx = h.ctx(bob(), START);
    let err = h.contract.reinstate(&ctx, "nobody").unwrap_err();
    assert!(matches!(err, ContractError::Unavailable { .. }));
    assert_eq!(h.contract.get_record("nobody").unwrap(), None);
}

#[test]
fn test_reinstate_expired_external_registration_fails() {
    let h = Harness::new();
    // Expires exactly now: not yet available, but nothing left to sync.
    h.registrar.set_external("edge", carol(), START);
    let ctx = h.ctx(carol(), START);
    let err = h.contract.reinstate(&ctx, "edge").unwrap_err();
    assert!(matches!(err, ContractError::Unavailable { .. }), "{err}");
}

#[test]
fn test_reinstate_blocked_while_paused() {
    let h = Harness::new();
    h.registrar.set_external("carols", carol(), START + YEAR);
    h.contract.pause(&h.as_owner(START)).unwrap();
    assert_eq!(
        h.reinstate("carols", carol(), START),
        Err(ContractError::Paused)
    );
}

#[test]
fn test_owner_and_expiry_use_separate_sources() {
    let h = Harness::new();
    h.registrar.set_external("split", carol(), START + YEAR);
    h.registrar.set_wrapped_owner("split", bob());

    let (owner, expiry) = h.contract.get_owner_and_expiry("split").unwrap();
    assert_eq!(owner, bob());
    assert_eq!(expiry, START + YEAR);

    let record = h.reinstate("split", bob(), START).unwrap();
    assert_eq!(record.renter, bob());
}
