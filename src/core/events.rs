//! Semantic input events and their dispatch
//!
//! The dispatcher never terminates the process itself: close requests
//! produce a [`LoopSignal::Terminate`] and the run loop owns the actual
//! exit and window teardown.

/// Keys the application reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    KeyC,
    KeyF,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Input event decoupled from the windowing backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyPressed(Key),
    MouseClicked { button: MouseButton, x: f64, y: f64 },
    CloseRequested,
}

/// Signal returned to the run loop after dispatching one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopSignal {
    Continue,
    Terminate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatcherState {
    Running,
    Terminating,
}

type KeyHandler<Ctx> = Box<dyn FnMut(Key, &mut Ctx)>;
type MouseHandler<Ctx> = Box<dyn FnMut(MouseButton, f64, f64, &mut Ctx)>;
type CloseHandler<Ctx> = Box<dyn FnMut(&mut Ctx)>;

/// Routes semantic input events to registered handlers
///
/// Handlers receive the event payload and a mutable reference to the
/// shared context, and must return promptly to keep the loop responsive.
/// A close request or Escape transitions `Running` -> `Terminating`
/// exactly once; once terminating, dispatch is inert.
pub struct EventDispatcher<Ctx> {
    state: DispatcherState,
    key_handler: Option<KeyHandler<Ctx>>,
    mouse_handler: Option<MouseHandler<Ctx>>,
    close_handler: Option<CloseHandler<Ctx>>,
}

impl<Ctx> EventDispatcher<Ctx> {
    pub fn new() -> Self {
        Self {
            state: DispatcherState::Running,
            key_handler: None,
            mouse_handler: None,
            close_handler: None,
        }
    }

    pub fn state(&self) -> DispatcherState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DispatcherState::Running
    }

    /// Register the handler for key presses other than Escape
    pub fn on_key(&mut self, handler: impl FnMut(Key, &mut Ctx) + 'static) {
        self.key_handler = Some(Box::new(handler));
    }

    /// Register the handler for mouse clicks
    pub fn on_mouse(&mut self, handler: impl FnMut(MouseButton, f64, f64, &mut Ctx) + 'static) {
        self.mouse_handler = Some(Box::new(handler));
    }

    /// Register the handler invoked once when termination is requested
    pub fn on_close(&mut self, handler: impl FnMut(&mut Ctx) + 'static) {
        self.close_handler = Some(Box::new(handler));
    }

    /// Dispatch one event and report whether the loop should keep running
    pub fn dispatch(&mut self, event: &InputEvent, ctx: &mut Ctx) -> LoopSignal {
        if self.state != DispatcherState::Running {
            return LoopSignal::Terminate;
        }

        match *event {
            InputEvent::CloseRequested | InputEvent::KeyPressed(Key::Escape) => {
                if let Some(handler) = self.close_handler.as_mut() {
                    handler(ctx);
                }
                self.state = DispatcherState::Terminating;
                LoopSignal::Terminate
            }
            InputEvent::KeyPressed(key) => {
                if let Some(handler) = self.key_handler.as_mut() {
                    handler(key, ctx);
                }
                LoopSignal::Continue
            }
            InputEvent::MouseClicked { button, x, y } => {
                if let Some(handler) = self.mouse_handler.as_mut() {
                    handler(button, x, y, ctx);
                }
                LoopSignal::Continue
            }
        }
    }
}

impl<Ctx> Default for EventDispatcher<Ctx> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dispatcher_is_running() {
        let dispatcher = EventDispatcher::<()>::new();
        assert!(dispatcher.is_running());
        assert_eq!(dispatcher.state(), DispatcherState::Running);
    }

    #[test]
    fn test_close_request_terminates() {
        let mut dispatcher = EventDispatcher::<()>::new();
        let signal = dispatcher.dispatch(&InputEvent::CloseRequested, &mut ());
        assert_eq!(signal, LoopSignal::Terminate);
        assert_eq!(dispatcher.state(), DispatcherState::Terminating);
    }

    #[test]
    fn test_escape_terminates() {
        let mut dispatcher = EventDispatcher::<()>::new();
        let signal = dispatcher.dispatch(&InputEvent::KeyPressed(Key::Escape), &mut ());
        assert_eq!(signal, LoopSignal::Terminate);
        assert!(!dispatcher.is_running());
    }

    #[test]
    fn test_other_keys_keep_running() {
        let mut dispatcher = EventDispatcher::new();
        dispatcher.on_key(|key, keys: &mut Vec<Key>| keys.push(key));

        let mut keys = Vec::new();
        let signal = dispatcher.dispatch(&InputEvent::KeyPressed(Key::KeyC), &mut keys);
        assert_eq!(signal, LoopSignal::Continue);
        assert!(dispatcher.is_running());
        assert_eq!(keys, vec![Key::KeyC]);
    }

    #[test]
    fn test_mouse_handler_receives_coordinates() {
        let mut dispatcher = EventDispatcher::new();
        dispatcher.on_mouse(|button, x, y, out: &mut Vec<(MouseButton, f64, f64)>| {
            out.push((button, x, y));
        });

        let mut clicks = Vec::new();
        let event = InputEvent::MouseClicked {
            button: MouseButton::Left,
            x: 120.0,
            y: 45.0,
        };
        assert_eq!(dispatcher.dispatch(&event, &mut clicks), LoopSignal::Continue);
        assert_eq!(clicks, vec![(MouseButton::Left, 120.0, 45.0)]);
    }

    #[test]
    fn test_dispatch_without_handlers_is_safe() {
        let mut dispatcher = EventDispatcher::<()>::new();
        let event = InputEvent::MouseClicked {
            button: MouseButton::Right,
            x: 0.0,
            y: 0.0,
        };
        assert_eq!(dispatcher.dispatch(&event, &mut ()), LoopSignal::Continue);
        assert_eq!(
            dispatcher.dispatch(&InputEvent::KeyPressed(Key::KeyF), &mut ()),
            LoopSignal::Continue
        );
    }

    #[test]
    fn test_close_handler_fires_exactly_once() {
        let mut dispatcher = EventDispatcher::new();
        dispatcher.on_close(|count: &mut u32| *count += 1);

        let mut closes = 0;
        assert_eq!(
            dispatcher.dispatch(&InputEvent::CloseRequested, &mut closes),
            LoopSignal::Terminate
        );
        assert_eq!(
            dispatcher.dispatch(&InputEvent::CloseRequested, &mut closes),
            LoopSignal::Terminate
        );
        assert_eq!(
            dispatcher.dispatch(&InputEvent::KeyPressed(Key::Escape), &mut closes),
            LoopSignal::Terminate
        );
        assert_eq!(closes, 1);
    }

    #[test]
    fn test_terminating_dispatcher_ignores_handlers() {
        let mut dispatcher = EventDispatcher::new();
        dispatcher.on_mouse(|_, _, _, count: &mut u32| *count += 1);

        let mut clicks = 0;
        dispatcher.dispatch(&InputEvent::CloseRequested, &mut clicks);
        let event = InputEvent::MouseClicked {
            button: MouseButton::Left,
            x: 1.0,
            y: 1.0,
        };
        assert_eq!(dispatcher.dispatch(&event, &mut clicks), LoopSignal::Terminate);
        assert_eq!(clicks, 0);
    }
}
