pub mod pipeline;
pub mod state;
