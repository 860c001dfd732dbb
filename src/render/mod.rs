//! Placeholder GL scene for the ticket view: one triangle rotated by touch.

pub mod gl;
pub mod matrix;
mod renderer;

pub use gl::{Gles2, ProgramId, ShaderId};
pub use matrix::Mat4;
pub use renderer::{
    RenderConfig, Renderer, RendererState, FRAGMENT_SHADER_CODE, TRIANGLE_COORDS,
    VERTEX_SHADER_CODE,
};
