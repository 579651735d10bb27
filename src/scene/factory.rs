//! Entity factory: builds the scene objects the game moves around

use glam::Vec3;

use super::graph::SceneNode;
use super::model::ModelKind;

/// Constructs positionable objects for the game
///
/// Returned nodes are not yet in a scene; the caller adds them.
pub trait EntityFactory {
    fn create_player_vehicle(&self) -> SceneNode;
    fn create_enemy_vehicle(&self) -> SceneNode;
    fn create_road_segment(&self) -> SceneNode;
    fn create_ground(&self) -> SceneNode;
}

/// Factory for the stock car/truck/road models
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFactory;

impl EntityFactory for StandardFactory {
    fn create_player_vehicle(&self) -> SceneNode {
        SceneNode::new(ModelKind::PlayerCar)
    }

    fn create_enemy_vehicle(&self) -> SceneNode {
        SceneNode::new(ModelKind::EnemyTruck)
    }

    fn create_road_segment(&self) -> SceneNode {
        SceneNode::new(ModelKind::RoadSegment)
    }

    fn create_ground(&self) -> SceneNode {
        SceneNode::new(ModelKind::Ground).at(Vec3::ZERO)
    }
}
