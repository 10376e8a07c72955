use anyhow::bail;
use ash::vk;

use super::interface::{StageInterface, StageKind};

/// Checks that a vertex stage and its downstream fragment stage agree.
///
/// Mirrors what pipeline construction enforces: correct stage kinds, the
/// mandatory clip-position output, location-for-location varying agreement,
/// and an identical view of every shared uniform slot.
pub fn link_stage_interfaces(
    vertex: &StageInterface,
    fragment: &StageInterface,
) -> anyhow::Result<()> {
    if vertex.stage != StageKind::Vertex {
        bail!("{} is not a vertex stage", vertex.source_file_name);
    }
    if fragment.stage != StageKind::Fragment {
        bail!("{} is not a fragment stage", fragment.source_file_name);
    }

    if !vertex.writes_clip_position {
        bail!(
            "vertex stage {} never writes the clip-space position",
            vertex.source_file_name
        );
    }

    for input in &fragment.inputs {
        let Some(output) = vertex.outputs.iter().find(|o| o.location == input.location) else {
            bail!(
                "fragment input '{}' (location {}) has no matching vertex output",
                input.name,
                input.location,
            );
        };

        if output.component_count != input.component_count {
            bail!(
                "location {}: vertex writes {} components, fragment reads {}",
                input.location,
                output.component_count,
                input.component_count,
            );
        }
    }

    for block in &vertex.uniform_blocks {
        let shared = fragment
            .uniform_blocks
            .iter()
            .find(|b| b.set == block.set && b.binding == block.binding);

        if let Some(other) = shared {
            if other.size_bytes != block.size_bytes || other.matrix_layout != block.matrix_layout {
                bail!(
                    "uniform block at set {} binding {} disagrees between stages",
                    block.set,
                    block.binding,
                );
            }
        }
    }

    Ok(())
}

/// Checks that a vertex buffer layout feeds every input the stage declares.
pub fn validate_vertex_input_layout(
    stage: &StageInterface,
    attributes: &[vk::VertexInputAttributeDescription],
) -> anyhow::Result<()> {
    for input in &stage.inputs {
        let Some(attribute) = attributes.iter().find(|a| a.location == input.location) else {
            bail!(
                "no vertex attribute bound for '{}' (location {})",
                input.name,
                input.location,
            );
        };

        let Some(components) = format_component_count(attribute.format) else {
            bail!(
                "unsupported attribute format {:?} at location {}",
                attribute.format,
                input.location,
            );
        };

        if components != input.component_count {
            bail!(
                "location {}: attribute supplies {} components, '{}' expects {}",
                input.location,
                components,
                input.name,
                input.component_count,
            );
        }
    }

    Ok(())
}

/// The descriptor-set layout bindings an orchestrator creates for a stage,
/// one (set index, binding) pair per uniform block.
pub fn descriptor_set_layout_bindings(
    stage: &StageInterface,
) -> Vec<(u32, vk::DescriptorSetLayoutBinding<'static>)> {
    let stage_flags = match stage.stage {
        StageKind::Vertex => vk::ShaderStageFlags::VERTEX,
        StageKind::Fragment => vk::ShaderStageFlags::FRAGMENT,
    };

    stage
        .uniform_blocks
        .iter()
        .map(|block| {
            let layout_binding = vk::DescriptorSetLayoutBinding::default()
                .binding(block.binding)
                .descriptor_count(1)
                .descriptor_type(vk::DescriptorType::UNIFORM_BUFFER)
                .stage_flags(stage_flags);

            (block.set, layout_binding)
        })
        .collect()
}

fn format_component_count(format: vk::Format) -> Option<u32> {
    match format {
        vk::Format::R32_SFLOAT => Some(1),
        vk::Format::R32G32_SFLOAT => Some(2),
        vk::Format::R32G32B32_SFLOAT => Some(3),
        vk::Format::R32G32B32A32_SFLOAT => Some(4),
        _ => None,
    }
}
