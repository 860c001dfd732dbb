use log::{debug, info};

use super::gl::{
    Gles2, ProgramId, COLOR_BUFFER_BIT, DEPTH_BUFFER_BIT, FLOAT, FRAGMENT_SHADER, TRIANGLES,
    VERTEX_SHADER,
};
use super::matrix::{self, Mat4};
use crate::angle::SharedAngle;

pub const VERTEX_SHADER_CODE: &str = "\
uniform mat4 uMVPMatrix;
attribute vec4 vPosition;
void main() {
  gl_Position = uMVPMatrix * vPosition;
}
";

pub const FRAGMENT_SHADER_CODE: &str = "\
precision mediump float;
void main() {
  gl_FragColor = vec4(0.63671875, 0.76953125, 0.22265625, 1.0);
}
";

// X, Y, Z
pub const TRIANGLE_COORDS: [f32; 9] = [
    -0.5, -0.25, 0.0,
    0.5, -0.25, 0.0,
    0.0, 0.559016994, 0.0,
];

const COORDS_PER_VERTEX: i32 = 3;
const VERTEX_STRIDE: i32 = COORDS_PER_VERTEX * 4;
const VERTEX_COUNT: i32 = 3;

#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub clear_color: [f32; 4],
    /// Camera position; the camera looks at the origin with +Y up
    pub eye: [f32; 3],
    pub near: f32,
    pub far: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clear_color: [0.5, 0.5, 0.5, 1.0],
            eye: [0.0, 0.0, -3.0],
            near: 3.0,
            far: 7.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RendererState {
    Uninitialized,
    Created,
    Ready,
}

#[derive(Clone, Copy, Debug)]
struct Program {
    id: ProgramId,
    position_handle: i32,
    mvp_handle: i32,
}

#[derive(Debug)]
enum Stage {
    Uninitialized,
    Created(Program),
    Ready {
        program: Program,
        view: Mat4,
        projection: Mat4,
    },
}

/// Drives the triangle scene from the host's surface callbacks.
///
/// The host calls `on_surface_created`, then `on_surface_changed` on every
/// resize, then `on_draw_frame` whenever the view is dirty.
#[derive(Debug)]
pub struct Renderer {
    config: RenderConfig,
    angle: SharedAngle,
    geometry: Vec<f32>,
    stage: Stage,
}

impl Renderer {
    pub fn new(angle: SharedAngle) -> Self {
        Self::with_config(angle, RenderConfig::default())
    }

    pub fn with_config(angle: SharedAngle, config: RenderConfig) -> Self {
        Self {
            config,
            angle,
            geometry: Vec::new(),
            stage: Stage::Uninitialized,
        }
    }

    pub fn state(&self) -> RendererState {
        match self.stage {
            Stage::Uninitialized => RendererState::Uninitialized,
            Stage::Created(_) => RendererState::Created,
            Stage::Ready { .. } => RendererState::Ready,
        }
    }

    pub fn angle(&self) -> &SharedAngle {
        &self.angle
    }

    /// Build the program and geometry. Runs again after a context loss.
    pub fn on_surface_created<G: Gles2 + ?Sized>(&mut self, gl: &mut G) {
        let [r, g, b, a] = self.config.clear_color;
        gl.clear_color(r, g, b, a);

        self.geometry = TRIANGLE_COORDS.to_vec();

        let vertex_shader = load_shader(gl, VERTEX_SHADER, VERTEX_SHADER_CODE);
        let fragment_shader = load_shader(gl, FRAGMENT_SHADER, FRAGMENT_SHADER_CODE);

        let id = gl.create_program();
        gl.attach_shader(id, vertex_shader);
        gl.attach_shader(id, fragment_shader);
        gl.link_program(id);

        // Locations are fixed once the program is linked
        let program = Program {
            id,
            position_handle: gl.get_attrib_location(id, "vPosition"),
            mvp_handle: gl.get_uniform_location(id, "uMVPMatrix"),
        };
        info!("Ticket view surface created, program {}", id.0);

        self.stage = Stage::Created(program);
    }

    pub fn on_surface_changed<G: Gles2 + ?Sized>(&mut self, gl: &mut G, width: i32, height: i32) {
        let program = match self.stage {
            Stage::Uninitialized => {
                debug!("Surface changed before it was created, ignoring");
                return;
            }
            Stage::Created(program) | Stage::Ready { program, .. } => program,
        };

        gl.viewport(0, 0, width, height);

        let ratio = if height == 0 {
            1.0
        } else {
            width as f32 / height as f32
        };
        let projection =
            matrix::frustum(-ratio, ratio, -1.0, 1.0, self.config.near, self.config.far);
        let view = matrix::look_at(self.config.eye, [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        debug!("Surface changed to {}x{}", width, height);

        self.stage = Stage::Ready {
            program,
            view,
            projection,
        };
    }

    /// Draw one frame. Returns false when the surface is not ready yet.
    pub fn on_draw_frame<G: Gles2 + ?Sized>(&mut self, gl: &mut G) -> bool {
        let (program, view, projection) = match &self.stage {
            Stage::Ready {
                program,
                view,
                projection,
            } => (*program, view, projection),
            _ => {
                debug!("Draw requested before the surface is ready, ignoring");
                return false;
            }
        };

        gl.clear(COLOR_BUFFER_BIT | DEPTH_BUFFER_BIT);

        gl.use_program(program.id);
        let position = program.position_handle as u32;
        gl.vertex_attrib_pointer(
            position,
            COORDS_PER_VERTEX,
            FLOAT,
            false,
            VERTEX_STRIDE,
            &self.geometry,
        );
        gl.enable_vertex_attrib_array(position);

        let mvp = model_view_projection(self.angle.get(), view, projection);
        gl.uniform_matrix4fv(program.mvp_handle, false, &mvp);

        gl.draw_arrays(TRIANGLES, 0, VERTEX_COUNT);
        true
    }
}

fn load_shader<G: Gles2 + ?Sized>(gl: &mut G, kind: u32, source: &str) -> super::gl::ShaderId {
    let shader = gl.create_shader(kind);
    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    shader
}

/// projection * view * rotate_z(angle)
fn model_view_projection(angle: f32, view: &Mat4, projection: &Mat4) -> Mat4 {
    let model = matrix::rotate(angle, 0.0, 0.0, 1.0);
    let model_view = matrix::multiply(view, &model);
    matrix::multiply(projection, &model_view)
}
