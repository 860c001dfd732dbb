//! Drag-to-rotate input handling for the ticket view.

use log::trace;

use crate::angle::SharedAngle;

/// Degrees of rotation per pixel dragged
pub const TOUCH_SCALE_FACTOR: f32 = 180.0 / 320.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionAction {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionEvent {
    pub action: MotionAction,
    pub x: f32,
    pub y: f32,
}

impl MotionEvent {
    pub fn new(action: MotionAction, x: f32, y: f32) -> Self {
        Self { action, x, y }
    }
}

/// Size of the view receiving touches, in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewSize {
    pub width: u32,
    pub height: u32,
}

/// Asks the host to schedule one redraw of a dirty view
pub trait RenderRequest {
    fn request_render(&mut self);
}

impl<F: FnMut()> RenderRequest for F {
    fn request_render(&mut self) {
        self()
    }
}

#[derive(Debug)]
pub struct TouchController {
    angle: SharedAngle,
    scale: f32,
    previous_x: f32,
    previous_y: f32,
}

impl TouchController {
    pub fn new(angle: SharedAngle) -> Self {
        Self::with_scale(angle, TOUCH_SCALE_FACTOR)
    }

    pub fn with_scale(angle: SharedAngle, scale: f32) -> Self {
        Self {
            angle,
            scale,
            previous_x: 0.0,
            previous_y: 0.0,
        }
    }

    pub fn angle(&self) -> &SharedAngle {
        &self.angle
    }

    /// Handle one touch event. The point is remembered for every action so
    /// the next move measures from it. Always consumes the event.
    pub fn on_touch_event<R>(&mut self, event: MotionEvent, view: ViewSize, render: &mut R) -> bool
    where
        R: RenderRequest + ?Sized,
    {
        if event.action == MotionAction::Move {
            let mut dx = event.x - self.previous_x;
            let mut dy = event.y - self.previous_y;

            // Midlines use the view's integer half size
            if event.y > (view.height / 2) as f32 {
                dx = -dx;
            }
            if event.x < (view.width / 2) as f32 {
                dy = -dy;
            }

            let angle = self.angle.add((dx + dy) * self.scale);
            trace!("Rotation now {} degrees", angle);
            render.request_render();
        }

        self.previous_x = event.x;
        self.previous_y = event.y;

        true
    }
}
