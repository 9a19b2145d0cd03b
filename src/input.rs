use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::camera::DepthCamera;
use crate::scroll::ScrollSource;

/// Radians of orbit per pixel of horizontal drag.
pub const ORBIT_RADIANS_PER_PIXEL: f32 = 0.005;
/// Distance factor per wheel line while zooming.
pub const ZOOM_STEP: f32 = 0.95;
/// Pixel wheel distance that counts as one zoom line.
pub const PIXELS_PER_ZOOM_LINE: f32 = 40.0;

/// Something the user asked for, decoded from window events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    /// Pixels; positive scrolls down the page
    ScrollBy(f32),
    ScrollToTop,
    ScrollToBottom,
    /// Radians around the vertical axis
    Orbit(f32),
    /// Orbit distance factor
    Zoom(f32),
    Quit,
}

impl InputAction {
    /// Apply to the scroll source or camera. `Quit` is left to the caller.
    pub fn apply(self, scroll: &ScrollSource, camera: &mut DepthCamera) {
        match self {
            InputAction::ScrollBy(delta) => scroll.scroll_by(delta),
            InputAction::ScrollToTop => scroll.scroll_to(0.0),
            InputAction::ScrollToBottom => scroll.scroll_to(scroll.extent()),
            InputAction::Orbit(delta) => camera.orbit(delta),
            InputAction::Zoom(factor) => camera.zoom(factor),
            InputAction::Quit => {}
        }
    }
}

/// Adapter that turns winit events into [`InputAction`]s, the way a
/// browser turns wheel and key presses into page scrolling.
#[derive(Debug, Clone)]
pub struct WinitController {
    line_height: f32,
    /// Height of one PageDown step, in pixels
    page_height: f32,
    ctrl_down: bool,
    dragging: bool,
    cursor: Option<(f32, f32)>,
}

impl WinitController {
    pub fn new(line_height: f32, page_height: f32) -> Self {
        Self {
            line_height,
            page_height,
            ctrl_down: false,
            dragging: false,
            cursor: None,
        }
    }

    pub fn set_page_height(&mut self, page_height: f32) {
        self.page_height = page_height;
    }

    pub fn set_ctrl(&mut self, down: bool) {
        self.ctrl_down = down;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn process_event(&mut self, event: &WindowEvent) -> Option<InputAction> {
        match event {
            WindowEvent::ModifiersChanged(modifiers) => {
                self.set_ctrl(modifiers.state().control_key());
                None
            }
            WindowEvent::MouseWheel { delta, .. } => Some(self.wheel(*delta)),
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(code) => self.key(code, event.state.is_pressed()),
                PhysicalKey::Unidentified(_) => None,
            },
            WindowEvent::MouseInput { state, button, .. } => {
                self.mouse_button(*button, *state);
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x as f32, position.y as f32)
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                self.dragging = false;
                None
            }
            _ => None,
        }
    }

    pub fn wheel(&self, delta: MouseScrollDelta) -> InputAction {
        // Positive y is "wheel up" in winit
        let (lines, pixels) = match delta {
            MouseScrollDelta::LineDelta(_, y) => (y, y * self.line_height),
            MouseScrollDelta::PixelDelta(p) => {
                let pixels = p.y as f32;
                (pixels / PIXELS_PER_ZOOM_LINE, pixels)
            }
        };
        if self.ctrl_down {
            InputAction::Zoom(ZOOM_STEP.powf(lines))
        } else {
            InputAction::ScrollBy(-pixels)
        }
    }

    pub fn key(&self, code: KeyCode, pressed: bool) -> Option<InputAction> {
        if !pressed {
            return None;
        }
        let action = match code {
            KeyCode::Escape => InputAction::Quit,
            KeyCode::ArrowDown => InputAction::ScrollBy(self.line_height),
            KeyCode::ArrowUp => InputAction::ScrollBy(-self.line_height),
            KeyCode::PageDown | KeyCode::Space => InputAction::ScrollBy(self.page_height),
            KeyCode::PageUp => InputAction::ScrollBy(-self.page_height),
            KeyCode::Home => InputAction::ScrollToTop,
            KeyCode::End => InputAction::ScrollToBottom,
            _ => return None,
        };
        Some(action)
    }

    pub fn mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.dragging = state.is_pressed();
        }
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32) -> Option<InputAction> {
        let previous = self.cursor.replace((x, y));
        match previous {
            Some((last_x, _)) if self.dragging => {
                Some(InputAction::Orbit(-(x - last_x) * ORBIT_RADIANS_PER_PIXEL))
            }
            _ => None,
        }
    }
}
