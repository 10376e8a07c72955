use std::path::PathBuf;

use anyhow::Context;

use crate::stage::TransformUniforms;

pub mod interface;
pub mod link;

use interface::{MatrixLayout, PipelineInterface, StageInterface, StageKind, UniformBlock, Varying};

/// whether matrices are laid out column-major or row-major in uniform memory
pub const COLUMN_MAJOR: bool = true;

pub const VERTEX_SHADER_SOURCE: &str = include_str!("../shaders/source/mvp_passthrough.vert");
pub const FRAGMENT_SHADER_SOURCE: &str = include_str!("../shaders/source/mvp_passthrough.frag");

pub fn matrix_layout() -> MatrixLayout {
    if COLUMN_MAJOR {
        MatrixLayout::ColumnMajor
    } else {
        MatrixLayout::RowMajor
    }
}

/// the interface declared by mvp_passthrough.vert
pub fn vertex_stage_interface() -> StageInterface {
    StageInterface {
        source_file_name: "mvp_passthrough.vert".to_string(),
        entry_point_name: "main".to_string(),
        stage: StageKind::Vertex,
        inputs: vec![Varying {
            name: "position".to_string(),
            location: 0,
            component_count: 3,
        }],
        outputs: vec![Varying {
            name: "v_passthrough".to_string(),
            location: 0,
            component_count: 3,
        }],
        writes_clip_position: true,
        uniform_blocks: vec![transforms_uniform_block()],
    }
}

/// the interface declared by mvp_passthrough.frag
pub fn fragment_stage_interface() -> StageInterface {
    StageInterface {
        source_file_name: "mvp_passthrough.frag".to_string(),
        entry_point_name: "main".to_string(),
        stage: StageKind::Fragment,
        inputs: vec![Varying {
            name: "v_passthrough".to_string(),
            location: 0,
            component_count: 3,
        }],
        outputs: vec![Varying {
            name: "f_color".to_string(),
            location: 0,
            component_count: 4,
        }],
        writes_clip_position: false,
        uniform_blocks: vec![],
    }
}

fn transforms_uniform_block() -> UniformBlock {
    UniformBlock {
        block_name: "Transforms".to_string(),
        set: TransformUniforms::SET,
        binding: TransformUniforms::BINDING,
        size_bytes: TransformUniforms::buffer_size() as u32,
        matrix_layout: matrix_layout(),
    }
}

/// Reads the canonical on-disk interface description.
///
/// The file is the hand-off artifact for pipeline orchestrators that don't
/// link this crate; it must stay in lockstep with the static declarations
/// above.
pub fn load_pipeline_interface() -> anyhow::Result<PipelineInterface> {
    let json_path = manifest_path(["shaders", "interface", "mvp_passthrough.json"]);
    let json = std::fs::read_to_string(&json_path)
        .with_context(|| format!("failed to read interface description: {json_path:?}"))?;
    let pipeline_interface: PipelineInterface = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse interface description: {json_path:?}"))?;

    Ok(pipeline_interface)
}

fn manifest_path<'a>(segments: impl IntoIterator<Item = &'a str>) -> PathBuf {
    let segments = segments.into_iter();
    let full_path = [env!("CARGO_MANIFEST_DIR")].into_iter().chain(segments);
    full_path.collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_disk_interface_matches_static_declarations() {
        let pipeline_interface = load_pipeline_interface().unwrap();

        assert_eq!(pipeline_interface.vertex_stage, vertex_stage_interface());
        assert_eq!(pipeline_interface.fragment_stage, fragment_stage_interface());
    }

    #[test]
    fn shipped_stages_link() {
        link::link_stage_interfaces(&vertex_stage_interface(), &fragment_stage_interface())
            .unwrap();
    }

    #[test]
    fn uniform_block_declares_the_crate_matrix_convention() {
        let block = transforms_uniform_block();

        assert_eq!(block.matrix_layout, matrix_layout());
        assert_eq!(block.size_bytes, 192);
        assert_eq!((block.set, block.binding), (0, 0));
    }

    #[test]
    fn glsl_sources_declare_the_same_contract() {
        assert!(VERTEX_SHADER_SOURCE.contains("layout(location = 0) in vec3 position;"));
        assert!(VERTEX_SHADER_SOURCE.contains("layout(location = 0) out vec3 v_passthrough;"));
        assert!(VERTEX_SHADER_SOURCE.contains("layout(set = 0, binding = 0) uniform Transforms"));
        assert!(VERTEX_SHADER_SOURCE.contains("u.proj * u.view * u.world"));

        assert!(FRAGMENT_SHADER_SOURCE.contains("layout(location = 0) in vec3 v_passthrough;"));
    }
}
