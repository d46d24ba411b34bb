//! FFI bindings for the C rank query strategies.

use super::original::assert_same_len;

#[cfg(c_implementation_active)]
mod ffi {
    use libc::size_t;
    use std::os::raw::c_float;

    extern "C" {
        pub fn rank_query_c_sweep(
            result: *mut size_t,
            data: *const c_float,
            data_len: size_t,
            query: *const c_float,
            query_len: size_t,
        );
        pub fn rank_query_c_binary_search(
            result: *mut size_t,
            data: *const c_float,
            data_len: size_t,
            query: *const c_float,
            query_len: size_t,
        );
    }
}

/// C sort–merge sweep (bounded)
#[cfg(c_implementation_active)]
pub fn rank_query_c_sweep(result: &mut [usize], data: &[f32], query: &[f32]) {
    assert_same_len(result, query);
    // SAFETY: slices are live for the call; `result` holds `query.len()` slots.
    unsafe {
        ffi::rank_query_c_sweep(
            result.as_mut_ptr(),
            data.as_ptr(),
            data.len(),
            query.as_ptr(),
            query.len(),
        )
    }
}

/// C per-query binary search
#[cfg(c_implementation_active)]
pub fn rank_query_c_binary_search(result: &mut [usize], data: &[f32], query: &[f32]) {
    assert_same_len(result, query);
    // SAFETY: slices are live for the call; `result` holds `query.len()` slots.
    unsafe {
        ffi::rank_query_c_binary_search(
            result.as_mut_ptr(),
            data.as_ptr(),
            data.len(),
            query.as_ptr(),
            query.len(),
        )
    }
}

#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

#[cfg(not(c_implementation_active))]
pub fn rank_query_c_sweep(result: &mut [usize], _data: &[f32], query: &[f32]) {
    assert_same_len(result, query);
    panic!("C implementation not compiled (requires GCC, Clang or MSVC)")
}

#[cfg(not(c_implementation_active))]
pub fn rank_query_c_binary_search(result: &mut [usize], _data: &[f32], query: &[f32]) {
    assert_same_len(result, query);
    panic!("C implementation not compiled (requires GCC, Clang or MSVC)")
}
