use std::ffi::c_void;

/// A marker for types that get written to GPU memory
///
/// An implementing struct must be repr(C, align(16)) so its in-memory
/// layout matches the uniform/vertex buffer the other side reads
pub trait GPUWrite {}

pub unsafe fn write_to_mapped<T: GPUWrite>(value: &T, mapped: *mut c_void) {
    unsafe {
        std::ptr::copy_nonoverlapping(value, mapped as *mut T, 1);
    }
}

pub unsafe fn write_slice_to_mapped<T: GPUWrite>(elements: &[T], mapped: *mut c_void) {
    unsafe {
        std::ptr::copy_nonoverlapping(elements.as_ptr(), mapped as *mut T, elements.len());
    }
}
