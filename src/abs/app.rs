//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2
//! and OpenGL context necessary for creating a windowed application.

use std::sync::Arc;

use glow::HasContext;

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
pub struct App {
    pub sdl: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_context: sdl2::video::GLContext,
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
}

impl App {
    /// Creates a new [`App`] with a non-resizable window of the specified
    /// title, width and height, holding a core-profile OpenGL 3.3 context
    /// with 4x multisampling and a vsync-locked swap chain.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl = sdl2::init()?;
        let video_subsystem = sdl.video()?;
        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(3, 3);
        gl_attr.set_multisample_buffers(1);
        gl_attr.set_multisample_samples(4);
        let window = video_subsystem
            .window(title, width, height)
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;
        let gl_context = window.gl_create_context()?;
        window.gl_make_current(&gl_context)?;
        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        video_subsystem.gl_set_swap_interval(sdl2::video::SwapInterval::VSync)?;
        let event_pump = sdl.event_pump()?;
        let gl = Arc::new(gl);

        unsafe {
            gl.viewport(0, 0, width as i32, height as i32);
            gl.enable(glow::MULTISAMPLE);
        }

        log::info!("OpenGL context ready: {}", unsafe {
            gl.get_parameter_string(glow::VERSION)
        });

        Ok(Self {
            sdl,
            video_subsystem,
            window,
            gl_context,
            gl,
            event_pump,
        })
    }
}
