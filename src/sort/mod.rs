//! Phase 1: sorting strategies.

pub mod float_sort;
