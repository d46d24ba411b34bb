//! Phase 2: rank query strategies over sorted data.

pub mod rank_query;
