//! Account id generation
//!
//! Produces identifiers of the form `ACC-####` with four digits drawn
//! uniformly from [1000, 9999], redrawing until the id is unused in the
//! store (rejection sampling).
//!
//! # Scaling limit
//!
//! The id space holds exactly 9000 values. Rejection sampling stays fast
//! only while the store holds far fewer accounts than that; as the store
//! fills, the expected number of redraws grows without bound. The
//! generator therefore refuses outright once every id is taken, rather
//! than looping forever, and the four-digit format should be widened
//! before a store ever approaches that size.

use crate::core::store::AccountStore;
use crate::types::{AccountId, LedgerError};
use rand::Rng;

/// Smallest four-digit id number
pub const ID_MIN: u32 = 1000;

/// Largest four-digit id number
pub const ID_MAX: u32 = 9999;

/// Total number of distinct ids
pub const ID_SPACE: usize = (ID_MAX - ID_MIN + 1) as usize;

/// Generate a fresh account id not colliding with any account in the store
///
/// Draws uniformly from the four-digit space and redraws on collision.
/// Has no side effects on the store.
///
/// # Errors
///
/// Returns `LedgerError::IdSpaceExhausted` when the store already holds
/// the full id space, which is the one condition under which the redraw
/// loop could not terminate.
pub fn generate_account_id(store: &AccountStore) -> Result<AccountId, LedgerError> {
    if store.len() >= ID_SPACE {
        return Err(LedgerError::IdSpaceExhausted);
    }

    let mut rng = rand::thread_rng();
    loop {
        let id = format!("ACC-{}", rng.gen_range(ID_MIN..=ID_MAX));
        if !store.contains(&id) {
            return Ok(id);
        }
    }
}
