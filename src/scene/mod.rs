//! Scene graph the simulation positions
//!
//! The scene owns every visible object; gameplay code only holds `NodeId`
//! handles and moves them. Geometry is described by `ModelKind` and turned
//! into triangles by the renderer.

pub mod camera;
pub mod factory;
pub mod graph;
pub mod model;

pub use camera::Camera;
pub use factory::{EntityFactory, StandardFactory};
pub use graph::{NodeId, Scene, SceneNode};
pub use model::{ModelKind, Part, Shape};
