//! WebGPU rendering module
//!
//! `RenderBackend` is the presentation half of the scene adapter: it draws a
//! `Scene` and follows viewport resizes. `MeshRenderer` does it with wgpu;
//! `Headless` just counts frames for native runs and tests.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::MeshRenderer;

use thiserror::Error;

use crate::scene::Scene;

/// Rendering failures
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    UnsupportedSurface,
    #[error("surface error: {0}")]
    Surface(wgpu::SurfaceError),
}

/// Draws the scene and tracks the viewport
pub trait RenderBackend {
    fn render(&mut self, scene: &Scene) -> Result<(), RenderError>;
    fn on_resize(&mut self, width: u32, height: u32);
}

/// Backend that draws nothing
#[derive(Debug, Default)]
pub struct Headless {
    pub frames: u64,
    pub size: (u32, u32),
}

impl RenderBackend for Headless {
    fn render(&mut self, scene: &Scene) -> Result<(), RenderError> {
        self.frames += 1;
        if self.frames % 600 == 0 {
            log::debug!("Frame {}: {} objects", self.frames, scene.len());
        }
        Ok(())
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }
}
