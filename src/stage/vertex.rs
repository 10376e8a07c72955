use super::gpu_write::GPUWrite;

#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C, align(16))]
pub struct Vertex {
    pub position: glam::Vec3,
}

impl GPUWrite for Vertex {}

impl From<glam::Vec3> for Vertex {
    fn from(position: glam::Vec3) -> Vertex {
        Vertex { position }
    }
}

impl Vertex {
    pub fn binding_description() -> ash::vk::VertexInputBindingDescription {
        ash::vk::VertexInputBindingDescription::default()
            .binding(0)
            .stride(std::mem::size_of::<Self>() as u32)
            .input_rate(ash::vk::VertexInputRate::VERTEX)
    }

    pub fn attribute_descriptions() -> [ash::vk::VertexInputAttributeDescription; 1] {
        // color formats double as the vec3 attribute format
        let vec_3_format = ash::vk::Format::R32G32B32_SFLOAT;

        [
            // position
            ash::vk::VertexInputAttributeDescription::default()
                .binding(0)
                .location(0)
                .format(vec_3_format)
                .offset(std::mem::offset_of!(Vertex, position) as u32),
        ]
    }
}
