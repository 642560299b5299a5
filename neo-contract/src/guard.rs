//! Composable guards wrapped around contract entry points.
//!
//! An entry point declares its requirements with an [`Access`] value, for
//! example `Access::anyone().non_reentrant().when_not_paused().payable()`.
//! The contract evaluates the access rule before running the operation body.

use std::cell::Cell;

use neo_primitives::UInt160;
use parking_lot::{ReentrantMutex, ReentrantMutexGuard};

use crate::error::{ContractError, ContractResult};

/// Caller role required by an entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Anyone,
    Owner,
    /// The owner or the configured revenue account.
    OwnerOrRevenue,
}

/// Access rule for one entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    role: Role,
    non_reentrant: bool,
    when_not_paused: bool,
    payable: bool,
}

impl Access {
    const fn with_role(role: Role) -> Self {
        Self {
            role,
            non_reentrant: false,
            when_not_paused: false,
            payable: false,
        }
    }

    pub const fn anyone() -> Self {
        Self::with_role(Role::Anyone)
    }

    pub const fn owner() -> Self {
        Self::with_role(Role::Owner)
    }

    pub const fn owner_or_revenue() -> Self {
        Self::with_role(Role::OwnerOrRevenue)
    }

    /// Rejects the call while another guarded call is in progress.
    pub const fn non_reentrant(mut self) -> Self {
        self.non_reentrant = true;
        self
    }

    /// Rejects the call while the contract is paused.
    pub const fn when_not_paused(mut self) -> Self {
        self.when_not_paused = true;
        self
    }

    /// Allows value to be attached to the call.
    pub const fn payable(mut self) -> Self {
        self.payable = true;
        self
    }

    pub const fn role(&self) -> Role {
        self.role
    }

    pub const fn is_non_reentrant(&self) -> bool {
        self.non_reentrant
    }

    pub const fn is_pausable(&self) -> bool {
        self.when_not_paused
    }

    pub const fn is_payable(&self) -> bool {
        self.payable
    }

    /// Checks `caller` against the role.
    pub fn authorize(&self, caller: &UInt160, owner: &UInt160, revenue: &UInt160) -> ContractResult<()> {
        let allowed = match self.role {
            Role::Anyone => true,
            Role::Owner => caller == owner,
            Role::OwnerOrRevenue => caller == owner || caller == revenue,
        };
        if allowed {
            Ok(())
        } else {
            Err(ContractError::Unauthorized { caller: *caller })
        }
    }

    /// Non-payable calls must not carry value.
    pub fn check_value(&self, value: u64) -> ContractResult<()> {
        if self.payable || value == 0 {
            Ok(())
        } else {
            Err(ContractError::PaymentMismatch {
                required: 0,
                supplied: value,
            })
        }
    }
}

/// Serializes contract operations and rejects reentrant guarded calls.
///
/// Calls from other threads wait for the running operation to finish. A
/// nested call on the same thread (an external collaborator calling back into
/// the contract) acquires the lock again. It is rejected only when both it
/// and the outer call are guarded; an unguarded nested call runs.
#[derive(Default)]
pub struct ReentrancyGuard {
    state: ReentrantMutex<Cell<bool>>,
}

impl ReentrancyGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the operation lock, marking the guard as entered when
    /// `non_reentrant` is set.
    pub fn acquire(&self, non_reentrant: bool) -> ContractResult<GuardScope<'_>> {
        let lock = self.state.lock();
        if non_reentrant {
            if lock.get() {
                return Err(ContractError::Reentrancy);
            }
            lock.set(true);
        }
        Ok(GuardScope {
            lock,
            entered: non_reentrant,
        })
    }

    /// Whether a guarded call is running on this thread.
    pub fn is_entered(&self) -> bool {
        self.state.lock().get()
    }
}

/// Held for the duration of one operation.
pub struct GuardScope<'a> {
    lock: ReentrantMutexGuard<'a, Cell<bool>>,
    entered: bool,
}

impl Drop for GuardScope<'_> {
    fn drop(&mut self) {
        if self.entered {
            self.lock.set(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWNER: UInt160 = UInt160::zero();

    fn account(byte: u8) -> UInt160 {
        UInt160::from([byte; 20])
    }

    #[test]
    fn test_roles() {
        let revenue = account(2);
        let stranger = account(3);

        assert!(Access::anyone().authorize(&stranger, &OWNER, &revenue).is_ok());
        assert!(Access::owner().authorize(&OWNER, &OWNER, &revenue).is_ok());
        assert_eq!(
            Access::owner().authorize(&revenue, &OWNER, &revenue),
            Err(ContractError::Unauthorized { caller: revenue })
        );
        assert!(Access::owner_or_revenue()
            .authorize(&revenue, &OWNER, &revenue)
            .is_ok());
        assert!(Access::owner_or_revenue()
            .authorize(&stranger, &OWNER, &revenue)
            .is_err());
    }

    #[test]
    fn test_builder_flags() {
        let access = Access::anyone().non_reentrant().when_not_paused().payable();
        assert!(access.is_non_reentrant());
        assert!(access.is_pausable());
        assert!(access.is_payable());
        assert_eq!(access.role(), Role::Anyone);

        let plain = Access::owner();
        assert!(!plain.is_non_reentrant());
        assert!(plain.check_value(0).is_ok());
        assert_eq!(
            plain.check_value(5),
            Err(ContractError::PaymentMismatch {
                required: 0,
                supplied: 5
            })
        );
    }

    #[test]
    fn test_nested_guarded_call_rejected() {
        let guard = ReentrancyGuard::new();
        let outer = guard.acquire(true).unwrap();
        assert!(guard.is_entered());
        assert!(matches!(guard.acquire(true), Err(ContractError::Reentrancy)));
        // Unguarded nested calls still run.
        assert!(guard.acquire(false).is_ok());
        drop(outer);
        assert!(!guard.is_entered());
        assert!(guard.acquire(true).is_ok());
    }

    #[test]
    fn test_other_threads_wait() {
        use std::sync::Arc;

        let guard = Arc::new(ReentrancyGuard::new());
        let scope = guard.acquire(true).unwrap();
        let handle = {
            let guard = Arc::clone(&guard);
            std::thread::spawn(move || guard.acquire(true).map(|_| ()))
        };
        std::thread::sleep(std::time::Duration::from_millis(20));
        drop(scope);
        assert!(handle.join().unwrap().is_ok());
    }
}
