//! FFI binding for the C `qsort` reference sort.

#[cfg(c_implementation_active)]
mod ffi {
    use libc::size_t;
    use std::os::raw::c_float;

    extern "C" {
        pub fn float_sort_c_qsort(data: *mut c_float, len: size_t);
    }
}

/// libc `qsort` with a C comparator, one indirect call per comparison.
#[cfg(c_implementation_active)]
pub fn sort_c_qsort(data: &mut [f32]) {
    // SAFETY: pointer and length come from a live, exclusively borrowed slice.
    unsafe { ffi::float_sort_c_qsort(data.as_mut_ptr(), data.len()) }
}

#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

#[cfg(not(c_implementation_active))]
pub fn sort_c_qsort(_data: &mut [f32]) {
    panic!("C implementation not compiled (requires GCC, Clang or MSVC)")
}
