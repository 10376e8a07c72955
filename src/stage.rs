use glam::{Vec3, Vec4};

mod gpu_write;
mod uniforms;
mod vertex;

pub use gpu_write::{GPUWrite, write_slice_to_mapped, write_to_mapped};
pub use uniforms::TransformUniforms;
pub use vertex::Vertex;

/// Per-vertex results of the transform stage.
///
/// `clip_position` is the homogeneous coordinate handed to fixed-function
/// rasterization; the perspective divide happens downstream, not here.
/// `passthrough` is the object-space input position, forwarded unchanged
/// for the next stage's location 0 input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexOutput {
    pub clip_position: Vec4,
    pub passthrough: Vec3,
}

/// Runs the stage for a single vertex.
///
/// The passthrough output is a pure copy of the input position; no
/// normal-matrix or any other transform touches it.
pub fn transform_vertex(uniforms: &TransformUniforms, vertex: Vertex) -> VertexOutput {
    VertexOutput {
        clip_position: uniforms.mvp() * vertex.position.extend(1.0),
        passthrough: vertex.position,
    }
}

/// Runs the stage over a whole vertex stream.
///
/// Outputs are index-aligned with the inputs; each one depends only on its
/// own vertex and the shared read-only uniforms.
pub fn transform_vertices(uniforms: &TransformUniforms, vertices: &[Vertex]) -> Vec<VertexOutput> {
    let mvp = uniforms.mvp();

    vertices
        .iter()
        .map(|vertex| VertexOutput {
            clip_position: mvp * vertex.position.extend(1.0),
            passthrough: vertex.position,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use glam::Mat4;

    use super::*;

    fn vec4_near(a: Vec4, b: Vec4) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    #[test]
    fn passthrough_is_bit_identical() {
        let uniforms = TransformUniforms {
            world: Mat4::from_scale(Vec3::new(2.0, 3.0, 4.0)),
            view: Mat4::from_translation(Vec3::new(0.0, -1.0, 7.0)),
            proj: Mat4::perspective_rh(1.0, 1.5, 0.1, 100.0),
        };
        let position = Vec3::new(0.1, -2.5, 3.75);

        let output = transform_vertex(&uniforms, Vertex::from(position));

        assert_eq!(output.passthrough, position);
    }

    #[test]
    fn identity_transform_appends_w() {
        let uniforms = TransformUniforms::identity();
        let output = transform_vertex(&uniforms, Vertex::from(Vec3::new(0.25, -0.5, 0.75)));

        assert_eq!(output.clip_position, Vec4::new(0.25, -0.5, 0.75, 1.0));
    }

    #[test]
    fn origin_maps_to_homogeneous_origin() {
        let output = transform_vertex(&TransformUniforms::identity(), Vertex::from(Vec3::ZERO));

        assert_eq!(output.clip_position, Vec4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn world_translation_reaches_clip_space() {
        let uniforms = TransformUniforms {
            world: Mat4::from_translation(Vec3::new(0.0, 0.0, 5.0)),
            view: Mat4::IDENTITY,
            proj: Mat4::IDENTITY,
        };

        let output = transform_vertex(&uniforms, Vertex::from(Vec3::new(1.0, 0.0, 0.0)));

        assert_eq!(output.passthrough, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(output.clip_position, Vec4::new(1.0, 0.0, 5.0, 1.0));
    }

    #[test]
    fn combined_transform_is_linear() {
        let uniforms = TransformUniforms {
            world: Mat4::from_rotation_y(0.7),
            view: Mat4::look_at_rh(Vec3::splat(2.0), Vec3::ZERO, Vec3::Z),
            proj: Mat4::perspective_rh(1.2, 16.0 / 9.0, 0.1, 50.0),
        };
        let mvp = uniforms.mvp();

        let p = Vec4::new(0.3, -1.1, 2.0, 1.0);
        let q = Vec4::new(-0.8, 0.4, 1.5, 0.0);
        let s = 2.5;

        assert!(vec4_near(mvp * (p + s * q), mvp * p + s * (mvp * q)));
    }

    #[test]
    fn world_and_view_do_not_commute() {
        let translate = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let scale = Mat4::from_scale(Vec3::new(2.0, 1.0, 0.5));

        let ordered = TransformUniforms {
            world: translate,
            view: scale,
            proj: Mat4::IDENTITY,
        };
        let swapped = TransformUniforms {
            world: scale,
            view: translate,
            proj: Mat4::IDENTITY,
        };

        let vertex = Vertex::from(Vec3::new(1.0, 1.0, 1.0));

        assert_ne!(
            transform_vertex(&ordered, vertex).clip_position,
            transform_vertex(&swapped, vertex).clip_position,
        );
    }

    #[test]
    fn stream_outputs_match_single_invocations() {
        let uniforms = TransformUniforms {
            world: Mat4::from_rotation_z(0.3),
            view: Mat4::from_translation(Vec3::new(0.0, 0.0, -4.0)),
            proj: Mat4::perspective_rh(1.0, 1.0, 0.1, 10.0),
        };
        let vertices = vec![
            Vertex::from(Vec3::new(1.0, 0.0, 0.0)),
            Vertex::from(Vec3::new(0.0, 1.0, 0.0)),
            Vertex::from(Vec3::new(-0.5, 0.5, 2.0)),
        ];

        let stream = transform_vertices(&uniforms, &vertices);

        assert_eq!(stream.len(), vertices.len());
        for (vertex, output) in vertices.iter().zip(&stream) {
            assert_eq!(*output, transform_vertex(&uniforms, *vertex));
        }
    }
}
