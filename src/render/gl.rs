//! The slice of OpenGL ES 2.0 the ticket view draws with.
//!
//! The host binds this to its live context. Calls mirror the GL entry points
//! one to one; nothing here reports GL errors.

use super::matrix::Mat4;

pub const DEPTH_BUFFER_BIT: u32 = 0x0000_0100;
pub const COLOR_BUFFER_BIT: u32 = 0x0000_4000;
pub const TRIANGLES: u32 = 0x0004;
pub const FLOAT: u32 = 0x1406;
pub const FRAGMENT_SHADER: u32 = 0x8B30;
pub const VERTEX_SHADER: u32 = 0x8B31;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShaderId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProgramId(pub u32);

pub trait Gles2 {
    fn create_shader(&mut self, kind: u32) -> ShaderId;
    fn shader_source(&mut self, shader: ShaderId, source: &str);
    fn compile_shader(&mut self, shader: ShaderId);

    fn create_program(&mut self) -> ProgramId;
    fn attach_shader(&mut self, program: ProgramId, shader: ShaderId);
    fn link_program(&mut self, program: ProgramId);
    fn use_program(&mut self, program: ProgramId);

    /// -1 when the program has no such attribute
    fn get_attrib_location(&mut self, program: ProgramId, name: &str) -> i32;
    /// -1 when the program has no such uniform
    fn get_uniform_location(&mut self, program: ProgramId, name: &str) -> i32;

    fn clear_color(&mut self, red: f32, green: f32, blue: f32, alpha: f32);
    fn clear(&mut self, mask: u32);
    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32);

    fn vertex_attrib_pointer(
        &mut self,
        index: u32,
        size: i32,
        kind: u32,
        normalized: bool,
        stride: i32,
        data: &[f32],
    );
    fn enable_vertex_attrib_array(&mut self, index: u32);
    fn uniform_matrix4fv(&mut self, location: i32, transpose: bool, value: &Mat4);
    fn draw_arrays(&mut self, mode: u32, first: i32, count: i32);
}
