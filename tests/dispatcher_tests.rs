use framepaint::core::{
    DispatcherState, EventDispatcher, InputEvent, Key, LoopSignal, MouseButton,
};

/// Counts handler invocations, standing in for real window teardown
#[derive(Default)]
struct Counters {
    window_destroys: u32,
    clicks: u32,
    keys: u32,
}

fn dispatcher() -> EventDispatcher<Counters> {
    let mut dispatcher = EventDispatcher::new();
    dispatcher.on_close(|ctx: &mut Counters| ctx.window_destroys += 1);
    dispatcher.on_mouse(|_, _, _, ctx: &mut Counters| ctx.clicks += 1);
    dispatcher.on_key(|_, ctx: &mut Counters| ctx.keys += 1);
    dispatcher
}

#[test]
fn test_close_event_destroys_window_exactly_once() {
    let mut dispatcher = dispatcher();
    let mut ctx = Counters::default();

    assert_eq!(
        dispatcher.dispatch(&InputEvent::CloseRequested, &mut ctx),
        LoopSignal::Terminate
    );
    assert_eq!(dispatcher.state(), DispatcherState::Terminating);
    assert_eq!(ctx.window_destroys, 1);

    // repeated close and escape events stay terminated without re-firing
    dispatcher.dispatch(&InputEvent::CloseRequested, &mut ctx);
    dispatcher.dispatch(&InputEvent::KeyPressed(Key::Escape), &mut ctx);
    assert_eq!(ctx.window_destroys, 1);
}

#[test]
fn test_escape_key_is_a_close_request() {
    let mut dispatcher = dispatcher();
    let mut ctx = Counters::default();

    assert_eq!(
        dispatcher.dispatch(&InputEvent::KeyPressed(Key::Escape), &mut ctx),
        LoopSignal::Terminate
    );
    assert_eq!(ctx.window_destroys, 1);
    // escape is routed to the close handler, not the key handler
    assert_eq!(ctx.keys, 0);
}

#[test]
fn test_ordinary_input_keeps_the_loop_running() {
    let mut dispatcher = dispatcher();
    let mut ctx = Counters::default();

    let click = InputEvent::MouseClicked {
        button: MouseButton::Left,
        x: 400.0,
        y: 300.0,
    };
    assert_eq!(dispatcher.dispatch(&click, &mut ctx), LoopSignal::Continue);
    assert_eq!(
        dispatcher.dispatch(&InputEvent::KeyPressed(Key::KeyC), &mut ctx),
        LoopSignal::Continue
    );
    assert_eq!(
        dispatcher.dispatch(&InputEvent::KeyPressed(Key::KeyF), &mut ctx),
        LoopSignal::Continue
    );

    assert!(dispatcher.is_running());
    assert_eq!(ctx.clicks, 1);
    assert_eq!(ctx.keys, 2);
    assert_eq!(ctx.window_destroys, 0);
}

#[test]
fn test_input_after_terminate_reaches_no_handler() {
    let mut dispatcher = dispatcher();
    let mut ctx = Counters::default();

    dispatcher.dispatch(&InputEvent::CloseRequested, &mut ctx);

    let click = InputEvent::MouseClicked {
        button: MouseButton::Right,
        x: 1.0,
        y: 2.0,
    };
    assert_eq!(dispatcher.dispatch(&click, &mut ctx), LoopSignal::Terminate);
    assert_eq!(
        dispatcher.dispatch(&InputEvent::KeyPressed(Key::KeyC), &mut ctx),
        LoopSignal::Terminate
    );
    assert_eq!(ctx.clicks, 0);
    assert_eq!(ctx.keys, 0);
}
