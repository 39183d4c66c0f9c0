use glow::HasContext;

use crate::abs::*;

mod abs;
mod logging;
mod vertex;

const WINDOW_WIDTH: u32 = 300;
const WINDOW_HEIGHT: u32 = 300;
const WINDOW_TITLE: &str = "OpenGL Hello world!";

const VERT_SHADER_SRC: &str = include_str!("shaders/triangle/vert.glsl");
const FRAG_SHADER_SRC: &str = include_str!("shaders/triangle/frag.glsl");

fn main() {
    logging::init();

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut app = App::new(WINDOW_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)?;

    // Stage objects are only needed until the program is linked.
    let program = {
        let vert = Shader::new(&app.gl, glow::VERTEX_SHADER, VERT_SHADER_SRC)?;
        let frag = Shader::new(&app.gl, glow::FRAGMENT_SHADER, FRAG_SHADER_SRC)?;
        ShaderProgram::new(&app.gl, &[&vert, &frag], "OutColor")?
    };
    log::info!("shader program linked");

    let mesh = Mesh::new(&app.gl, &program, &vertex::TRIANGLE, glow::TRIANGLES);

    let mut close_requested = false;
    while !close_requested {
        for event in app.event_pump.poll_iter() {
            match event {
                sdl2::event::Event::Quit { .. } => close_requested = true,
                sdl2::event::Event::KeyDown {
                    keycode: Some(sdl2::keyboard::Keycode::Escape),
                    ..
                } => close_requested = true,
                _ => {}
            }
        }

        unsafe {
            app.gl.clear_color(1.0, 1.0, 1.0, 1.0);
            app.gl.clear(glow::COLOR_BUFFER_BIT);
        }

        program.use_program();
        mesh.draw();

        app.window.gl_swap_window();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shader_sources_declare_expected_interface() {
        assert!(VERT_SHADER_SRC.starts_with("#version 330 core"));
        assert!(FRAG_SHADER_SRC.starts_with("#version 330 core"));
        assert!(VERT_SHADER_SRC.contains("in vec3 Position;"));
        assert!(VERT_SHADER_SRC.contains("in vec3 Color;"));
        assert!(FRAG_SHADER_SRC.contains("out vec4 OutColor;"));
    }
}
