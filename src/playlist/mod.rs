//! Playlist core: the working order, playback state and the transport reducer.
//! Nothing in here touches storage, the location bar or the player widget.

mod startup;
mod transport;

pub use startup::*;
pub use transport::*;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::Item;
use crate::db::PersistedSnapshot;

/// Where a freshly shuffled working order starts playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EntryPoint {
    #[default]
    First,
    Random,
}

/// Uniform Fisher-Yates shuffle.
pub fn shuffle_in_place<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// The session's playback sequence plus the current position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Playlist {
    items: Vec<Item>,
    position: usize,
    generation: u64,
}

impl Playlist {
    /// Builds a playlist, clamping `position` into range.
    pub fn new(items: Vec<Item>, position: usize) -> Self {
        let position = if items.is_empty() {
            0
        } else {
            position.min(items.len() - 1)
        };
        Self {
            items,
            position,
            generation: 0,
        }
    }

    /// Shuffles `catalog` into a new working order.
    pub fn shuffled<R: Rng + ?Sized>(catalog: &[Item], entry: EntryPoint, rng: &mut R) -> Self {
        let mut items = catalog.to_vec();
        shuffle_in_place(&mut items, rng);
        let position = match entry {
            EntryPoint::First => 0,
            EntryPoint::Random if !items.is_empty() => rng.gen_range(0..items.len()),
            EntryPoint::Random => 0,
        };
        Self::new(items, position)
    }

    /// Adopts a persisted snapshot, or `None` when it can't be played as-is.
    pub fn from_snapshot(snapshot: PersistedSnapshot) -> Option<Self> {
        let PersistedSnapshot {
            working_order,
            position,
        } = snapshot;
        if working_order.is_empty()
            || position >= working_order.len()
            || !working_order.iter().all(Item::is_playable)
        {
            return None;
        }
        Some(Self::new(working_order, position))
    }

    pub fn snapshot(&self) -> PersistedSnapshot {
        PersistedSnapshot {
            working_order: self.items.clone(),
            position: self.position,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Bumped on every reshuffle.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn current(&self) -> Option<&Item> {
        self.items.get(self.position)
    }

    pub fn current_media_id(&self) -> Option<String> {
        self.current().and_then(Item::media_id)
    }

    pub fn next(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.position = (self.position + 1) % self.items.len();
        true
    }

    pub fn previous(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        let len = self.items.len();
        self.position = (self.position + len - 1) % len;
        true
    }

    /// Permutes the current order and jumps to a random position in it.
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.items.is_empty() {
            return false;
        }
        shuffle_in_place(&mut self.items, rng);
        self.position = rng.gen_range(0..self.items.len());
        self.generation = self.generation.wrapping_add(1);
        true
    }

    /// Moves to the item playing `media_id`. Returns whether it was found.
    pub fn select_media(&mut self, media_id: &str) -> bool {
        let media_id = media_id.trim();
        if media_id.is_empty() {
            return false;
        }
        match self
            .items
            .iter()
            .position(|item| item.media_id().as_deref() == Some(media_id))
        {
            Some(index) => {
                self.position = index;
                true
            }
            None => false,
        }
    }
}
