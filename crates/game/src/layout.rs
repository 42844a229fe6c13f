//! Room the demo plays in when no scan file is configured.

use std::path::Path;

use room::{RoomDescription, RoomError, ScannedRoom};

const LIVING_ROOM: &str = include_str!("../rooms/living_room.ron");

/// Built-in living room: floor, ceiling, one wall, a coffee table and a couch.
pub fn living_room() -> Result<RoomDescription, RoomError> {
    RoomDescription::from_ron_str(LIVING_ROOM)
}

/// Load the layout at `path`, or the built-in room when none is given.
pub fn load_room(path: Option<&Path>) -> Result<ScannedRoom, RoomError> {
    let description = match path {
        Some(path) => {
            log::info!("Loading room layout from {:?}", path);
            RoomDescription::load(path)?
        }
        None => living_room()?,
    };
    description.build()
}
