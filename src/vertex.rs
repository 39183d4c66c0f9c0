//! Vertex data for the triangle.

use glam::Vec3;
use glow::HasContext;

use crate::abs::{ShaderProgram, Vertex};

/// A single triangle vertex: a 3D position and an RGB color, tightly
/// packed as six consecutive floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TriangleVertex {
    pub position: Vec3,
    pub color: Vec3,
}

const _: () = assert!(size_of::<TriangleVertex>() == 6 * size_of::<f32>());

/// The one triangle this program ever draws: red, green and blue corners.
pub const TRIANGLE: [TriangleVertex; 3] = [
    TriangleVertex {
        position: Vec3::new(-0.5, -0.5, 0.0),
        color: Vec3::new(1.0, 0.0, 0.0),
    },
    TriangleVertex {
        position: Vec3::new(0.5, -0.5, 0.0),
        color: Vec3::new(0.0, 1.0, 0.0),
    },
    TriangleVertex {
        position: Vec3::new(0.0, 0.5, 0.0),
        color: Vec3::new(0.0, 0.0, 1.0),
    },
];

impl Vertex for TriangleVertex {
    fn vertex_attribs(gl: &glow::Context, program: &ShaderProgram) {
        let stride = size_of::<Self>() as i32;
        unsafe {
            if let Some(location) = program.attrib_location("Position") {
                gl.enable_vertex_attrib_array(location);
                gl.vertex_attrib_pointer_f32(
                    location,
                    3,
                    glow::FLOAT,
                    false,
                    stride,
                    std::mem::offset_of!(Self, position) as i32,
                );
            }
            if let Some(location) = program.attrib_location("Color") {
                gl.enable_vertex_attrib_array(location);
                gl.vertex_attrib_pointer_f32(
                    location,
                    3,
                    glow::FLOAT,
                    false,
                    stride,
                    std::mem::offset_of!(Self, color) as i32,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_is_tightly_packed() {
        assert_eq!(size_of::<TriangleVertex>(), 24);
        assert_eq!(std::mem::offset_of!(TriangleVertex, position), 0);
        assert_eq!(std::mem::offset_of!(TriangleVertex, color), 12);
    }

    #[test]
    fn test_triangle_casts_to_six_floats_per_vertex() {
        let floats: &[f32] = bytemuck::cast_slice(&TRIANGLE);
        assert_eq!(floats.len(), 18);
        assert_eq!(&floats[0..3], &[-0.5, -0.5, 0.0]);
        assert_eq!(&floats[3..6], &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_triangle_corners_are_red_green_blue() {
        assert_eq!(TRIANGLE[0].color, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(TRIANGLE[1].color, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(TRIANGLE[2].color, Vec3::new(0.0, 0.0, 1.0));
    }
}
