//! Pure transformation stages: filter → aggregate → layout → scale, plus the
//! pivot counter for the table view.

pub mod filter;
pub mod aggregate;
pub mod jitter;
pub mod layout;
pub mod scale;
pub mod pivot;
