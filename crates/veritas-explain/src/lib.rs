//! # veritas-explain
//!
//! Projects a [`TrustScore`](veritas_core::TrustScore) into an explanation
//! for one of three audiences. Rendering is a pure function of the score:
//! nothing is recomputed and rendering twice gives identical output.

pub mod phrases;
pub mod renderer;
pub mod uncertainty;

pub use renderer::ExplainabilityRenderer;
pub use uncertainty::weighted_dispersion;
