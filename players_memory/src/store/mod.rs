//! In-process player collection.
//!
//! Records are kept in insertion order and vanish when the process exits.
//! Every operation takes the single lock for its whole duration, so callers
//! never observe a half-applied change and two creates never share an id.

use parking_lot::Mutex;

use crate::models::{NewPlayer, Player};

#[derive(Debug)]
struct Inner {
    players: Vec<Player>,
    /// Next id to hand out. Only ever grows, so ids are never reused after a
    /// delete.
    next_id: i64,
}

#[derive(Debug)]
pub struct PlayerStore {
    inner: Mutex<Inner>,
}

impl Default for PlayerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                players: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Snapshot of all players in insertion order.
    pub fn list(&self) -> Vec<Player> {
        self.inner.lock().players.clone()
    }

    pub fn insert(&self, new: NewPlayer) -> Player {
        let mut inner = self.inner.lock();

        let player = Player {
            id: inner.next_id,
            name: new.name,
            active: new.active,
        };
        inner.next_id += 1;
        inner.players.push(player.clone());

        player
    }

    /// Mark a player active. Returns the updated record, or `None` if no
    /// player has that id.
    pub fn activate(&self, id: i64) -> Option<Player> {
        let mut inner = self.inner.lock();
        let player = inner.players.iter_mut().find(|p| p.id == id)?;
        player.active = true;
        Some(player.clone())
    }

    /// Remove a player, keeping the others in order. Returns `false` if no
    /// player has that id.
    pub fn remove(&self, id: i64) -> bool {
        let mut inner = self.inner.lock();
        match inner.players.iter().position(|p| p.id == id) {
            Some(index) => {
                inner.players.remove(index);
                true
            }
            None => false,
        }
    }
}
