use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use framepaint::cli::Cli;
use framepaint::core::{
    EventDispatcher, LoopSignal, MouseButton, PixelSurface, SurfacePresenter, WinitEventMapper,
};

const WINDOW_TITLE: &str = "framepaint";

/// Shared state handed to event handlers, replacing the global mutable
/// window/image structs of classic callback APIs.
struct PaintContext {
    last_click: Option<(f64, f64)>,
}

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    presenter: Option<SurfacePresenter>,
    surface: Option<PixelSurface>,
    dispatcher: EventDispatcher<PaintContext>,
    mapper: WinitEventMapper,
    context: PaintContext,
    init_error: Option<anyhow::Error>,
}

impl App {
    fn new(cli: Cli, dispatcher: EventDispatcher<PaintContext>) -> Self {
        Self {
            cli,
            window: None,
            presenter: None,
            surface: None,
            dispatcher,
            mapper: WinitEventMapper::new(),
            context: PaintContext { last_click: None },
            init_error: None,
        }
    }

    /// Create the window, its presenter, and the painted surface
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::PhysicalSize::new(self.cli.width, self.cli.height))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("failed to create window")?,
        );

        let presenter = SurfacePresenter::new(window.clone())?;

        // The window system may not honor the requested size exactly;
        // the surface must match what the presenter will display.
        let (width, height) = presenter.dimensions();
        let mut surface = PixelSurface::with_layout(width, height, presenter.backing_layout())?;
        self.cli.scene().paint(&mut surface)?;

        self.window = Some(window);
        self.presenter = Some(presenter);
        self.surface = Some(surface);
        Ok(())
    }

    /// Tear down the window resources; called once on terminate
    fn destroy(&mut self) {
        self.presenter = None;
        self.surface = None;
        self.window = None;
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            self.init_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let WindowEvent::RedrawRequested = event {
            if let (Some(presenter), Some(surface)) = (&self.presenter, &self.surface) {
                if let Err(e) = presenter.present(surface) {
                    eprintln!("Present error: {e}");
                }
            }
            return;
        }

        if let Some(input) = self.mapper.map(&event) {
            match self.dispatcher.dispatch(&input, &mut self.context) {
                LoopSignal::Terminate => {
                    self.destroy();
                    event_loop.exit();
                }
                LoopSignal::Continue => {}
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut dispatcher = EventDispatcher::new();
    dispatcher.on_mouse(|button, x, y, ctx: &mut PaintContext| {
        if button == MouseButton::Left {
            ctx.last_click = Some((x, y));
            println!("Cursor coords.: {x:4.0} x {y:4.0}");
        }
    });
    dispatcher.on_close(|ctx: &mut PaintContext| {
        if let Some((x, y)) = ctx.last_click {
            println!("Shutting down, last click at {x:4.0} x {y:4.0}");
        } else {
            println!("Shutting down");
        }
    });

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(cli, dispatcher);

    println!("framepaint - Escape or the close button to quit");
    event_loop.run_app(&mut app)?;

    if let Some(e) = app.init_error.take() {
        return Err(e);
    }
    Ok(())
}
