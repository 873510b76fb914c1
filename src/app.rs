use std::num::NonZeroU32;

use glutin::{
    config::ConfigTemplateBuilder,
    context::{ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version},
    display::{GetGlDisplay, GlDisplay},
    prelude::*,
    surface::{Surface, SwapInterval, WindowSurface},
};
use glutin_winit::{DisplayBuilder, GlWindow};
use log::{error, warn};
use raw_window_handle::HasWindowHandle;
use thiserror::Error;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    input::Input,
    render::Renderer,
    scene::SceneConfig,
    state::{Keys, RenderState, step},
};

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;

/// Fatal initialization failures. Anything past context creation either
/// works or is logged and tolerated.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("window or GL display creation failed: {0}")]
    Display(String),
    #[error("GL context setup failed: {0}")]
    Context(#[from] glutin::error::Error),
}

/// Window, context and renderer live together because none of them exists
/// before `resumed` fires.
struct GlState {
    window: Window,
    context: PossiblyCurrentContext,
    surface: Surface<WindowSurface>,
    renderer: Renderer,
}

/// Runs a [`SceneConfig`] in a fixed 800x600 window: poll keys, step the
/// render state, draw, swap, repeat until Escape or window close.
pub struct App {
    scene: SceneConfig,
    state: RenderState,
    input: Input,
    gl_state: Option<GlState>,
    init_error: Option<AppError>,
}

impl App {
    pub fn new(scene: SceneConfig) -> Self {
        Self {
            scene,
            state: RenderState::default(),
            input: Input::default(),
            gl_state: None,
            init_error: None,
        }
    }

    /// Blocks on the event loop until the window closes or Escape is held.
    pub fn run(mut self) -> Result<(), AppError> {
        env_logger::init_from_env(env_logger::Env::default().default_filter_or("error"));

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)?;

        match self.init_error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gl_state.is_some() {
            return;
        }
        match init_gl(event_loop, &self.scene) {
            Ok(gl_state) => self.gl_state = Some(gl_state),
            Err(err) => {
                self.init_error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => self.input.keyboard(event),
            WindowEvent::Resized(size) => {
                let Some(gl) = self.gl_state.as_ref() else {
                    return;
                };
                if let (Some(width), Some(height)) =
                    (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
                {
                    gl.surface.resize(&gl.context, width, height);
                    gl.renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                let Some(gl) = self.gl_state.as_ref() else {
                    return;
                };

                let outcome = step(self.state, Keys::poll(&self.input), self.scene.controls);
                self.state = outcome.state;
                if outcome.exit {
                    event_loop.exit();
                    return;
                }

                gl.renderer.draw_frame(&self.state);
                if let Err(err) = gl.surface.swap_buffers(&gl.context) {
                    error!("swap buffers failed: {err}");
                }

                self.input.end_frame();
                gl.window.request_redraw();
            }
            _ => {}
        }
    }

    fn exiting(&mut self, _: &ActiveEventLoop) {
        if let Some(gl) = self.gl_state.as_mut() {
            gl.renderer.destroy();
        }
    }
}

fn init_gl(event_loop: &ActiveEventLoop, scene: &SceneConfig) -> Result<GlState, AppError> {
    let window_attributes = Window::default_attributes()
        .with_title(&scene.title)
        .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

    let display_builder =
        DisplayBuilder::new().with_window_attributes(Some(window_attributes));
    let (window, gl_config) = display_builder
        .build(event_loop, ConfigTemplateBuilder::new(), |mut configs| {
            configs.next().expect("display offered no GL config")
        })
        .map_err(|err| AppError::Display(err.to_string()))?;
    let window = window.ok_or_else(|| AppError::Display("no window was created".into()))?;

    let raw_window_handle = window.window_handle().ok().map(|handle| handle.as_raw());
    let gl_display = gl_config.display();

    // The demos pin 3.3 core; fail loudly instead of falling back to
    // whatever the driver prefers.
    let context_attributes = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
        .with_profile(GlProfile::Core)
        .build(raw_window_handle);

    let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes)? };

    let surface_attributes = window
        .build_surface_attributes(Default::default())
        .map_err(|err| AppError::Display(err.to_string()))?;
    let surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes)? };
    let context = not_current.make_current(&surface)?;

    if let Err(err) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
        warn!("vsync unavailable: {err}");
    }

    let gl = unsafe {
        glow::Context::from_loader_function_cstr(|name| gl_display.get_proc_address(name))
    };
    let renderer = Renderer::new(gl, scene);

    Ok(GlState {
        window,
        context,
        surface,
        renderer,
    })
}
