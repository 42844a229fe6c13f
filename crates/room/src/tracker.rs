//! Ownership of the current room across scan / teardown.

use crate::room::{RoomQuery, ScannedRoom};

/// Provides the room the player is currently standing in.
pub trait RoomService {
    /// `None` while no scan is loaded.
    fn current_room(&self) -> Option<&dyn RoomQuery>;
}

/// Holds the most recent scan. A rescan replaces the room, teardown clears it.
#[derive(Debug, Default)]
pub struct RoomTracker {
    room: Option<ScannedRoom>,
    /// Number of scans loaded so far.
    generation: u32,
}

impl RoomTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly scanned room, replacing any previous one.
    pub fn replace(&mut self, room: ScannedRoom) {
        self.generation += 1;
        log::info!(
            "Room scan #{} loaded: {} planes, {} volumes",
            self.generation,
            room.planes().len(),
            room.volumes().len()
        );
        self.room = Some(room);
    }

    /// Forget the current room, returning it.
    pub fn clear(&mut self) -> Option<ScannedRoom> {
        if self.room.is_some() {
            log::info!("Room scan #{} removed", self.generation);
        }
        self.room.take()
    }

    pub fn room(&self) -> Option<&ScannedRoom> {
        self.room.as_ref()
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl RoomService for RoomTracker {
    fn current_room(&self) -> Option<&dyn RoomQuery> {
        self.room.as_ref().map(|room| room as &dyn RoomQuery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_replace_and_clear() {
        let mut tracker = RoomTracker::new();
        assert!(tracker.current_room().is_none());

        tracker.replace(ScannedRoom::new(Vec::new(), Vec::new()).unwrap());
        assert!(tracker.current_room().is_some());
        assert_eq!(tracker.generation(), 1);

        tracker.replace(ScannedRoom::new(Vec::new(), Vec::new()).unwrap());
        assert_eq!(tracker.generation(), 2);

        assert!(tracker.clear().is_some());
        assert!(tracker.current_room().is_none());
        assert!(tracker.clear().is_none());
    }
}
