//! Minion identity и связи с другими entity

use std::collections::BTreeSet;

use bevy::prelude::*;

/// Minion (ровно один в сцене)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MinionAgent {
    /// Фиксированная точка, к которой minion возвращается когда игрок стоит
    pub home_point: Vec3,
}

/// Явные ссылки на collaborators (вместо глобального состояния)
///
/// - player: источник `PlayerAgent::speed()` и позиции (read-only)
/// - camera: нужна только для PointerSweep
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct MinionLinks {
    pub player: Entity,
    pub camera: Option<Entity>,
}

/// Obstacle коллайдеры, которых minion касается сейчас
///
/// Started/Stopped приходят только на фронтах контакта. Charge, начатый уже
/// в контакте, нового Started не получит, поэтому держим набор между tick.
#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct ObstacleContacts {
    touching: BTreeSet<Entity>,
}

impl ObstacleContacts {
    pub fn begin(&mut self, obstacle: Entity) {
        self.touching.insert(obstacle);
    }

    pub fn end(&mut self, obstacle: Entity) {
        self.touching.remove(&obstacle);
    }

    /// Детерминированный выбор: наименьший Entity
    pub fn first(&self) -> Option<Entity> {
        self.touching.first().copied()
    }

    pub fn is_touching(&self) -> bool {
        !self.touching.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obstacle_contacts_track_begin_end() {
        let wall = Entity::from_raw(7);
        let pillar = Entity::from_raw(3);
        let mut contacts = ObstacleContacts::default();
        assert!(!contacts.is_touching());

        contacts.begin(wall);
        contacts.begin(pillar);
        assert_eq!(contacts.first(), Some(pillar));

        contacts.end(pillar);
        assert_eq!(contacts.first(), Some(wall));

        // Повторный Stopped не ломает набор
        contacts.end(pillar);
        contacts.end(wall);
        assert!(!contacts.is_touching());
        assert_eq!(contacts.first(), None);
    }
}
