pub mod config;
pub mod error;
pub mod data;
pub mod net;
pub mod geo;
pub mod pipeline;
pub mod engine;
pub mod render;
