//! Pointer state shared between input handlers and the frame loop

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Last known pointer position and press status
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
    pub position: Vec2,
    pub pressed: bool,
}

impl PointerState {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            pressed: false,
        }
    }

    /// Button down: jump to the event position and start tracking
    pub fn press(&mut self, position: Vec2) {
        self.position = position;
        self.pressed = true;
    }

    /// Button up: jump to the event position and stop tracking
    pub fn release(&mut self, position: Vec2) {
        self.position = position;
        self.pressed = false;
    }

    /// Pointer motion only counts while the button is held
    pub fn move_to(&mut self, position: Vec2) {
        if self.pressed {
            self.position = position;
        }
    }
}
