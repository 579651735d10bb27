//! Slot-based scene graph with generational handles

use glam::{Quat, Vec3};

use super::camera::Camera;
use super::model::ModelKind;

/// Handle to an object living in a `Scene`
///
/// Handles are generational: once an object is removed, its old handle never
/// resolves again even after the slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

/// A positionable object in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub model: ModelKind,
    pub position: Vec3,
    pub rotation: Quat,
}

impl SceneNode {
    pub fn new(model: ModelKind) -> Self {
        Self {
            model,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<SceneNode>,
}

/// All objects to draw plus the camera they are seen through
#[derive(Debug, Clone, Default)]
pub struct Scene {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
    pub camera: Camera,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an object and return its handle
    pub fn add_object(&mut self, node: SceneNode) -> NodeId {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(node);
            return NodeId {
                index,
                generation: slot.generation,
            };
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        NodeId {
            index,
            generation: 0,
        }
    }

    /// Remove an object; stale or unknown handles return `None`
    pub fn remove_object(&mut self, id: NodeId) -> Option<SceneNode> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.live -= 1;
        Some(node)
    }

    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.slots
            .get(id.index as usize)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.node.as_ref())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.node.as_mut())
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn position(&self, id: NodeId) -> Option<Vec3> {
        self.get(id).map(|n| n.position)
    }

    pub fn position_mut(&mut self, id: NodeId) -> Option<&mut Vec3> {
        self.get_mut(id).map(|n| &mut n.position)
    }

    /// Number of live objects
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Iterate live objects in slot order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.node.as_ref().map(|node| {
                (
                    NodeId {
                        index: i as u32,
                        generation: slot.generation,
                    },
                    node,
                )
            })
        })
    }

    /// Count live objects of one model kind
    pub fn count_of(&self, model: ModelKind) -> usize {
        self.iter().filter(|(_, n)| n.model == model).count()
    }
}
