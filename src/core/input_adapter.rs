use winit::event::{MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::events::{InputEvent, Key, MouseButton};

/// Adapter that bridges winit window events to semantic input events
///
/// Also tracks the pointer position, since winit reports clicks without
/// coordinates; the last observed cursor position stands in for a
/// pointer query against the window system.
#[derive(Debug, Clone, Default)]
pub struct WinitEventMapper {
    cursor: Option<(f64, f64)>,
}

impl WinitEventMapper {
    pub fn new() -> Self {
        Self { cursor: None }
    }

    /// Last pointer position reported by the window, if any
    pub fn cursor_position(&self) -> Option<(f64, f64)> {
        self.cursor
    }

    /// Translate a winit event; `None` for events the application ignores
    pub fn map(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CloseRequested => Some(InputEvent::CloseRequested),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some((position.x, position.y));
                None
            }
            WindowEvent::KeyboardInput { event, .. } if event.state.is_pressed() => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    Self::keycode_to_key(keycode).map(InputEvent::KeyPressed)
                } else {
                    None
                }
            }
            WindowEvent::MouseInput { state, button, .. } if state.is_pressed() => {
                let button = Self::mouse_button(*button)?;
                let (x, y) = self.cursor.unwrap_or((0.0, 0.0));
                Some(InputEvent::MouseClicked { button, x, y })
            }
            _ => None,
        }
    }

    /// Map winit KeyCode to Key
    fn keycode_to_key(keycode: KeyCode) -> Option<Key> {
        match keycode {
            KeyCode::Escape => Some(Key::Escape),
            KeyCode::KeyC => Some(Key::KeyC),
            KeyCode::KeyF => Some(Key::KeyF),
            _ => None,
        }
    }

    /// Map winit MouseButton to MouseButton
    fn mouse_button(button: WinitMouseButton) -> Option<MouseButton> {
        match button {
            WinitMouseButton::Left => Some(MouseButton::Left),
            WinitMouseButton::Right => Some(MouseButton::Right),
            WinitMouseButton::Middle => Some(MouseButton::Middle),
            _ => None,
        }
    }
}
