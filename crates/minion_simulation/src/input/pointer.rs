//! Pointer (mouse) position в viewport

use bevy::prelude::*;

/// Позиция курсора в пикселях viewport (origin в левом верхний угол, y вниз)
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct PointerState {
    pub screen_position: Vec2,
}
