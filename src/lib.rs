pub mod indicators;
pub mod input;
pub mod observe;
pub mod output;
pub mod scoring;
