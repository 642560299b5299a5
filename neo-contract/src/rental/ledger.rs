//! Record storage and the rental history.
//!
//! Every time a name is claimed (first registration, re-registration after a
//! lapse, or first reinstatement) a [`LedgerEntry`] is appended at the next
//! free index. Entries link to their neighbours by index, and the entry with
//! the highest index is the tail: the most recently claimed name.

use std::collections::HashMap;

use neo_store::{Store, StoreCache, StoreError};
use tracing::debug;

use super::keys::{self, entry_key, record_key, LEDGER, RECORDS, STATE};
use super::record::{InitialRecord, LedgerEntry, NameRecord};
use crate::error::{ContractError, ContractResult};

pub struct RecordStore;

impl RecordStore {
    pub fn get(cache: &StoreCache<'_>, name: &str) -> ContractResult<Option<NameRecord>> {
        Ok(cache.get_typed(RECORDS, &record_key(name))?)
    }

    pub fn put(cache: &mut StoreCache<'_>, name: &str, record: &NameRecord) -> ContractResult<()> {
        cache.put_typed(RECORDS, record_key(name), record)?;
        Ok(())
    }
}

fn missing_entry(index: u64) -> ContractError {
    StoreError::backend(format!("ledger entry {index} is missing")).into()
}

pub struct RentalLedger;

impl RentalLedger {
    /// Number of entries ever appended.
    pub fn len(cache: &StoreCache<'_>) -> ContractResult<u64> {
        Ok(cache.get_typed(STATE, keys::LEDGER_LEN)?.unwrap_or(0))
    }

    pub fn tail(cache: &StoreCache<'_>) -> ContractResult<Option<u64>> {
        Ok(Self::len(cache)?.checked_sub(1))
    }

    pub fn entry(cache: &StoreCache<'_>, index: u64) -> ContractResult<Option<LedgerEntry>> {
        Ok(cache.get_typed(LEDGER, &entry_key(index))?)
    }

    fn put_entry(cache: &mut StoreCache<'_>, index: u64, entry: &LedgerEntry) -> ContractResult<()> {
        cache.put_typed(LEDGER, entry_key(index), entry)?;
        Ok(())
    }

    fn set_len(cache: &mut StoreCache<'_>, len: u64) -> ContractResult<()> {
        cache.put_typed(STATE, keys::LEDGER_LEN.to_vec(), &len)?;
        Ok(())
    }

    /// Appends `name` after the current tail and returns its index.
    pub fn append(cache: &mut StoreCache<'_>, name: &str) -> ContractResult<u64> {
        let index = Self::len(cache)?;
        let prev = Self::tail(cache)?;
        if let Some(prev_index) = prev {
            let mut former = Self::entry(cache, prev_index)?.ok_or_else(|| missing_entry(prev_index))?;
            former.next = Some(index);
            Self::put_entry(cache, prev_index, &former)?;
        }
        Self::put_entry(
            cache,
            index,
            &LedgerEntry {
                name: name.to_owned(),
                prev,
                next: None,
            },
        )?;
        let len = index
            .checked_add(1)
            .ok_or(ContractError::overflow("ledger length"))?;
        Self::set_len(cache, len)?;
        debug!(name, index, "appended ledger entry");
        Ok(index)
    }

    /// Names of the entries in `[start, end)`.
    pub fn keys(cache: &StoreCache<'_>, start: u64, end: u64) -> ContractResult<Vec<String>> {
        if end <= start {
            return Err(ContractError::validation(format!(
                "invalid range: end {end} must be greater than start {start}"
            )));
        }
        let len = Self::len(cache)?;
        if end > len {
            return Err(ContractError::validation(format!(
                "invalid range: end {end} exceeds {len} records"
            )));
        }
        (start..end)
            .map(|index| {
                Self::entry(cache, index)?
                    .map(|entry| entry.name)
                    .ok_or_else(|| missing_entry(index))
            })
            .collect()
    }

    /// Loads pre-existing history.
    ///
    /// Records are appended in order. A missing or empty `prev`/`next` is
    /// taken from the neighbouring position in the load; the first record
    /// links back to the current tail. An explicit link names another record
    /// in the load or an already tracked name.
    pub fn initialize(
        cache: &mut StoreCache<'_>,
        names: &[String],
        records: &[InitialRecord],
    ) -> ContractResult<u64> {
        if names.len() != records.len() {
            return Err(ContractError::validation(format!(
                "names and records length mismatch: {} vs {}",
                names.len(),
                records.len()
            )));
        }
        let count = names.len() as u64;
        let base = Self::len(cache)?;
        let previous_tail = Self::tail(cache)?;

        let mut positions: HashMap<&str, u64> = HashMap::with_capacity(names.len());
        for (offset, name) in (0u64..).zip(names) {
            positions.insert(name.as_str(), base + offset);
        }

        let resolve = |cache: &StoreCache<'_>, link: &str| -> ContractResult<u64> {
            if let Some(index) = positions.get(link) {
                return Ok(*index);
            }
            RecordStore::get(cache, link)?
                .and_then(|record| record.entry)
                .ok_or_else(|| ContractError::validation(format!("unknown ledger link '{link}'")))
        };

        for ((offset, name), initial) in (0u64..).zip(names).zip(records) {
            let index = base + offset;
            let prev = match initial.prev.as_deref().filter(|link| !link.is_empty()) {
                Some(link) => Some(resolve(cache, link)?),
                None if offset == 0 => previous_tail,
                None => Some(index - 1),
            };
            let next = match initial.next.as_deref().filter(|link| !link.is_empty()) {
                Some(link) => Some(resolve(cache, link)?),
                None if offset + 1 < count => Some(index + 1),
                None => None,
            };

            Self::put_entry(
                cache,
                index,
                &LedgerEntry {
                    name: name.clone(),
                    prev,
                    next,
                },
            )?;
            RecordStore::put(
                cache,
                name,
                &NameRecord {
                    renter: initial.renter,
                    last_price: initial.last_price,
                    rent_time: initial.rent_time,
                    expiration_time: initial.expiration_time,
                    entry: Some(index),
                },
            )?;
        }

        if let Some(tail) = previous_tail.filter(|_| count > 0) {
            let mut former = Self::entry(cache, tail)?.ok_or_else(|| missing_entry(tail))?;
            if former.next.is_none() {
                former.next = Some(base);
                Self::put_entry(cache, tail, &former)?;
            }
        }

        Self::set_len(cache, base + count)?;
        debug!(count, base, "bulk loaded ledger entries");
        Ok(count)
    }
}

/// Walks the history backwards through `prev` links.
///
/// Links supplied by a bulk load are not checked for cycles; bound the walk
/// with [`Iterator::take`] when the history did not come from this ledger.
pub struct History<'a> {
    store: &'a dyn Store,
    next: Option<u64>,
}

impl<'a> History<'a> {
    pub fn new(store: &'a dyn Store, from: Option<u64>) -> Self {
        Self { store, next: from }
    }
}

impl Iterator for History<'_> {
    type Item = ContractResult<(u64, LedgerEntry)>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next.take()?;
        let cache = StoreCache::new(self.store);
        match RentalLedger::entry(&cache, index) {
            Ok(Some(entry)) => {
                self.next = entry.prev;
                Some(Ok((index, entry)))
            }
            Ok(None) => Some(Err(missing_entry(index))),
            Err(err) => Some(Err(err)),
        }
    }
}
