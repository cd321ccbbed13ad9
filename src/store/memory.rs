//! # In-Memory Card Store
//!
//! The authoritative set of password cards, held in a single map behind
//! one mutex. All four operations take the lock for the duration of the
//! map access only; request decoding and response encoding happen
//! outside the critical section, so operations are linearizable and
//! never block for unbounded time.

use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use super::card::PasswordCard;
use super::errors::{StoreError, StoreResult};

/// In-memory store keyed by server-assigned identifier.
///
/// Constructed once at process start and shared with every handler via
/// `Arc`. State is volatile: nothing survives process exit.
#[derive(Debug, Default)]
pub struct CardStore {
    cards: Mutex<HashMap<String, PasswordCard>>,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all current cards, order unspecified.
    pub fn list(&self) -> Vec<PasswordCard> {
        let cards = self.cards.lock().unwrap();
        cards.values().cloned().collect()
    }

    /// Store a new card under a freshly generated identifier.
    ///
    /// Any client-supplied `id` is discarded: the identifier is a v4
    /// UUID (128 random bits), assigned here exactly once. Returns the
    /// card as stored.
    pub fn insert(&self, mut card: PasswordCard) -> PasswordCard {
        card.id = Uuid::new_v4().to_string();
        let mut cards = self.cards.lock().unwrap();
        cards.insert(card.id.clone(), card.clone());
        card
    }

    /// Replace the card stored under `id` wholly with `card`.
    ///
    /// The path-supplied `id` is authoritative: whatever identifier the
    /// payload carried is overwritten before the record is stored. If
    /// `id` is absent the store is left untouched.
    pub fn replace(&self, id: &str, mut card: PasswordCard) -> StoreResult<PasswordCard> {
        let mut cards = self.cards.lock().unwrap();
        if !cards.contains_key(id) {
            return Err(StoreError::NotFound);
        }
        card.id = id.to_string();
        cards.insert(id.to_string(), card.clone());
        Ok(card)
    }

    /// Remove the card under `id` if present. Deleting an absent
    /// identifier is a silent no-op.
    pub fn delete(&self, id: &str) {
        let mut cards = self.cards.lock().unwrap();
        cards.remove(id);
    }

    /// Number of stored cards.
    pub fn len(&self) -> usize {
        self.cards.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_card() -> PasswordCard {
        PasswordCard {
            id: String::new(),
            url: "example.com".to_string(),
            name: "Example".to_string(),
            username: "bob".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn test_insert_assigns_id() {
        let store = CardStore::new();
        let stored = store.insert(sample_card());

        assert!(!stored.id.is_empty());
        assert_eq!(stored.name, "Example");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_insert_ignores_client_id() {
        let store = CardStore::new();
        let mut card = sample_card();
        card.id = "x".to_string();

        let stored = store.insert(card);
        assert_ne!(stored.id, "x");
        assert!(store.list().iter().all(|c| c.id != "x"));
    }

    #[test]
    fn test_insert_ids_are_unique() {
        let store = CardStore::new();
        let a = store.insert(sample_card());
        let b = store.insert(sample_card());

        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_list_returns_inserted_cards() {
        let store = CardStore::new();
        assert!(store.list().is_empty());

        for _ in 0..3 {
            store.insert(sample_card());
        }

        let listed = store.list();
        assert_eq!(listed.len(), 3);
        for card in &listed {
            assert!(!card.id.is_empty());
            assert_eq!(card.username, "bob");
        }
    }

    #[test]
    fn test_replace_keeps_path_id() {
        let store = CardStore::new();
        let stored = store.insert(sample_card());

        let mut update = sample_card();
        update.id = "something-else".to_string();
        update.password = "rotated".to_string();

        let updated = store.replace(&stored.id, update).unwrap();
        assert_eq!(updated.id, stored.id);
        assert_eq!(updated.password, "rotated");

        let listed = store.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], updated);
    }

    #[test]
    fn test_replace_roundtrip_is_identity() {
        let store = CardStore::new();
        let stored = store.insert(sample_card());

        let updated = store.replace(&stored.id, stored.clone()).unwrap();
        assert_eq!(updated, stored);
        assert_eq!(store.list(), vec![stored]);
    }

    #[test]
    fn test_replace_missing_id_leaves_store_unchanged() {
        let store = CardStore::new();
        let stored = store.insert(sample_card());

        let err = store.replace("missing", sample_card()).unwrap_err();
        assert_eq!(err, StoreError::NotFound);
        assert_eq!(store.list(), vec![stored]);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let store = CardStore::new();
        let stored = store.insert(sample_card());

        store.delete(&stored.id);
        assert!(store.is_empty());

        // A second delete, and a delete of an id that never existed,
        // are both silent no-ops.
        store.delete(&stored.id);
        store.delete("never-existed");
        assert!(store.is_empty());
    }
}
