// Oceanscan: blue-ocean keyword discovery for Naver search.
//
// This is the library root. Each module corresponds to a stage of the
// opportunity scoring pipeline or one of its collaborators.

pub mod config;
pub mod expand;
pub mod metrics;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod trends;
