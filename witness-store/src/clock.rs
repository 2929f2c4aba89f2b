//! The session clock: one row per session, atomically
//! incremented.
//!
//! A single upsert-and-return statement gives atomicity without a
//! separate read-then-write round trip — the single-writer assumption
//! means this connection never races itself, but the one-statement
//! shape is still the right discipline: it is what lets a future
//! multi-connection store keep this exact contract.

use witness_core::errors::StoreError;
use witness_core::SessionId;

use crate::connection::Store;

pub struct Clock;

impl Clock {
    /// Allocate and return the next `t` for `session`. Returns 1 for a
    /// session ticking for the first time.
    pub fn tick(store: &Store, session: &SessionId) -> Result<i64, StoreError> {
        store
            .conn()
            .query_row(
                "INSERT INTO clock (session_id, current_t) VALUES (?1, 1)
                 ON CONFLICT(session_id) DO UPDATE SET current_t = current_t + 1
                 RETURNING current_t",
                [session.as_str()],
                |row| row.get(0),
            )
            .map_err(|e| StoreError::Sqlite {
                message: e.to_string(),
            })
    }

    /// The current value for `session` without incrementing, or 0 if
    /// the session has never ticked.
    pub fn current(store: &Store, session: &SessionId) -> Result<i64, StoreError> {
        let rows: Vec<i64> = store.query(
            "SELECT current_t FROM clock WHERE session_id = ?1",
            [session.as_str()],
            |row| row.get(0),
        )?;
        Ok(rows.into_iter().next().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_starts_at_one_and_increments() {
        let store = Store::open_in_memory().unwrap();
        let session = SessionId::from("s1");
        assert_eq!(Clock::tick(&store, &session).unwrap(), 1);
        assert_eq!(Clock::tick(&store, &session).unwrap(), 2);
        assert_eq!(Clock::tick(&store, &session).unwrap(), 3);
    }

    #[test]
    fn current_does_not_advance() {
        let store = Store::open_in_memory().unwrap();
        let session = SessionId::from("s1");
        Clock::tick(&store, &session).unwrap();
        Clock::tick(&store, &session).unwrap();
        assert_eq!(Clock::current(&store, &session).unwrap(), 2);
        assert_eq!(Clock::current(&store, &session).unwrap(), 2);
    }

    #[test]
    fn current_is_zero_for_unknown_session() {
        let store = Store::open_in_memory().unwrap();
        let session = SessionId::from("never-ticked");
        assert_eq!(Clock::current(&store, &session).unwrap(), 0);
    }

    #[test]
    fn sessions_are_isolated() {
        let store = Store::open_in_memory().unwrap();
        let a = SessionId::from("a");
        let b = SessionId::from("b");
        Clock::tick(&store, &a).unwrap();
        Clock::tick(&store, &a).unwrap();
        Clock::tick(&store, &b).unwrap();
        assert_eq!(Clock::current(&store, &a).unwrap(), 2);
        assert_eq!(Clock::current(&store, &b).unwrap(), 1);
    }

    proptest::proptest! {
        #[test]
        fn tick_sequence_is_monotone(n in 1usize..50) {
            let store = Store::open_in_memory().unwrap();
            let session = SessionId::from("prop");
            for i in 1..=n {
                let t = Clock::tick(&store, &session).unwrap();
                prop_assert_eq!(t, i as i64);
            }
            prop_assert_eq!(Clock::current(&store, &session).unwrap(), n as i64);
        }
    }
}
