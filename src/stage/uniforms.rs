use std::ffi::c_void;

use ash::vk;
use glam::Mat4;

use crate::shaders::COLUMN_MAJOR;

use super::gpu_write::{self, GPUWrite};

/// The per-draw transform chain, bound at descriptor set 0, binding 0.
///
/// Field order matches the shader-side block: `world` places the object in
/// the scene, `view` moves the scene into camera space, `proj` takes camera
/// space to clip space.
#[derive(Debug, Clone)]
#[repr(C, align(16))]
pub struct TransformUniforms {
    pub world: Mat4,
    pub view: Mat4,
    pub proj: Mat4,
}

impl GPUWrite for TransformUniforms {}

impl TransformUniforms {
    pub const SET: u32 = 0;
    pub const BINDING: u32 = 0;

    pub fn identity() -> Self {
        Self {
            world: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            proj: Mat4::IDENTITY,
        }
    }

    /// The combined clip-from-object matrix.
    ///
    /// The product order is proj * view * world, applied right to left to
    /// the homogeneous input vector. Reordering changes the meaning.
    pub fn mvp(&self) -> Mat4 {
        self.proj * self.view * self.world
    }

    pub fn buffer_size() -> usize {
        std::mem::size_of::<Self>()
    }

    pub fn layout_binding() -> vk::DescriptorSetLayoutBinding<'static> {
        vk::DescriptorSetLayoutBinding::default()
            .binding(Self::BINDING)
            .descriptor_count(1)
            .descriptor_type(vk::DescriptorType::UNIFORM_BUFFER)
            .stage_flags(vk::ShaderStageFlags::VERTEX)
    }

    /// Packs the block into mapped uniform-buffer memory.
    ///
    /// glam matrices are column-major; with a row-major shader convention
    /// each matrix is transposed on the way out.
    pub unsafe fn write_to(&self, mapped_uniform_buffer: *mut c_void) {
        let mut packed = self.clone();

        if !COLUMN_MAJOR {
            packed.world = packed.world.transpose();
            packed.view = packed.view.transpose();
            packed.proj = packed.proj.transpose();
        }

        unsafe { gpu_write::write_to_mapped(&packed, mapped_uniform_buffer) };
    }
}
