//! Property tests over the ledger's arithmetic and history.

mod common;

use common::*;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_walk_from_tail_reaches_first(count in 1usize..24) {
        let h = Harness::new();
        let names: Vec<String> = (0..count).map(|i| format!("n{i}")).collect();
        for (offset, name) in (0u64..).zip(&names) {
            h.register(name, bob(), START + offset).unwrap();
        }

        prop_assert_eq!(h.contract.num_records().unwrap(), count as u64);
        let tail = h.contract.last_rented_name().unwrap();
        prop_assert_eq!(tail.as_deref(), Some(names[count - 1].as_str()));

        let mut index = count as u64 - 1;
        for _ in 0..count - 1 {
            index = h.contract.ledger_entry(index).unwrap().unwrap().prev.unwrap();
        }
        let first = h.contract.ledger_entry(index).unwrap().unwrap();
        prop_assert_eq!(&first.name, &names[0]);
        prop_assert_eq!(first.prev, None);
        prop_assert_eq!(h.contract.get_record_keys(0, count as u64).unwrap(), names);
    }

    #[test]
    fn prop_renew_respects_grace(elapsed in 0u64..(60 * DAY)) {
        let h = Harness::new();
        let expiry = h.register("alice", bob(), START).unwrap().expiration_time;
        let result = h.renew("alice", bob(), expiry + elapsed);
        if elapsed <= 30 * DAY {
            let record = result.unwrap();
            prop_assert_eq!(record.expiration_time, expiry + YEAR);
            prop_assert_eq!(record.renter, bob());
        } else {
            prop_assert!(result.is_err());
            let record = h.contract.get_record("alice").unwrap().unwrap();
            prop_assert_eq!(record.expiration_time, expiry);
        }
    }

    #[test]
    fn prop_reinstate_sets_external_expiry(gap_a in 0u64..(3 * YEAR), gap_b in 0u64..(3 * YEAR)) {
        let (small, large) = if gap_a <= gap_b { (gap_a, gap_b) } else { (gap_b, gap_a) };
        let h = Harness::new();
        let expiry = h.register("alice", bob(), START).unwrap().expiration_time;

        h.registrar.set_external("alice", bob(), expiry + small);
        let low = h.contract.get_reinstate_cost("alice", START).unwrap();
        h.registrar.set_external("alice", bob(), expiry + large);
        let high = h.contract.get_reinstate_cost("alice", START).unwrap();
        prop_assert!(low <= high);

        let record = h.reinstate("alice", bob(), START).unwrap();
        prop_assert_eq!(record.expiration_time, expiry + large);
        prop_assert_eq!(record.last_price, high);
        prop_assert_eq!(h.contract.get_reinstate_cost("alice", START).unwrap(), 0);
    }
}
