//! Controller layer: form events in, outcomes and views out.

pub mod events;
pub mod orchestration;
