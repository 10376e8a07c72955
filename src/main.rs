use anyhow::Context;
use log::{debug, info};

use mvp_vertex_stage::icosphere::icosphere;
use mvp_vertex_stage::shaders::{self, link};
use mvp_vertex_stage::{TransformUniforms, Vertex, transform_vertices};

const SUBDIVISION_LEVEL: u8 = 4;

fn main() -> Result<(), anyhow::Error> {
    pretty_env_logger::init();

    // the checks an orchestrator runs before any vertex is processed
    let pipeline_interface = shaders::load_pipeline_interface()?;
    link::link_stage_interfaces(
        &pipeline_interface.vertex_stage,
        &pipeline_interface.fragment_stage,
    )
    .context("pipeline interfaces failed to link")?;
    link::validate_vertex_input_layout(
        &pipeline_interface.vertex_stage,
        &Vertex::attribute_descriptions(),
    )
    .context("vertex buffer layout does not feed the vertex stage")?;
    info!(
        "linked {} -> {}",
        pipeline_interface.vertex_stage.source_file_name,
        pipeline_interface.fragment_stage.source_file_name,
    );

    let (vertices, indices) = icosphere(SUBDIVISION_LEVEL);
    info!(
        "icosphere level {SUBDIVISION_LEVEL}: {} vertices, {} triangles",
        vertices.len(),
        indices.len() / 3,
    );

    let uniforms = TransformUniforms {
        world: glam::Mat4::from_rotation_z(45.0_f32.to_radians()),
        view: glam::Mat4::look_at_rh(
            glam::Vec3::new(0.0, 0.0, -6.0),
            glam::Vec3::ZERO,
            glam::Vec3::Y,
        ),
        proj: vulkan_perspective(16.0 / 9.0),
    };
    debug!("uniform buffer size: {} bytes", TransformUniforms::buffer_size());

    let outputs = transform_vertices(&uniforms, &vertices);

    let passthrough_intact = vertices
        .iter()
        .zip(&outputs)
        .all(|(vertex, output)| output.passthrough == vertex.position);
    anyhow::ensure!(passthrough_intact, "passthrough outputs diverged from input positions");

    let mut min = glam::Vec4::splat(f32::INFINITY);
    let mut max = glam::Vec4::splat(f32::NEG_INFINITY);
    for output in &outputs {
        min = min.min(output.clip_position);
        max = max.max(output.clip_position);
    }
    info!("clip-space bounds: min {min:?}, max {max:?}");
    debug!("first vertex out: {:?}", outputs[0]);

    Ok(())
}

fn vulkan_perspective(aspect_ratio: f32) -> glam::Mat4 {
    let mut proj = glam::Mat4::perspective_rh(60.0_f32.to_radians(), aspect_ratio, 0.1, 100.0);

    // vulkan clip space points y down; flip the projection's y scale
    proj.y_axis.y *= -1.0;

    proj
}
