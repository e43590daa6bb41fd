//! # veritas-decision
//!
//! Everything that happens once trusted data backs an autonomous action.
//!
//! ## Modules
//!
//! - [`validator`]: Gate a proposed action against the constraint catalogue
//! - [`reversibility`]: Undo plans, reversal windows, point of no return
//! - [`quality`]: Score a decision against ground truth after execution
//! - [`log`]: Append-only audit log of decisions, plans and outcomes

pub mod log;
pub mod quality;
pub mod reversibility;
pub mod validator;

pub use log::{DecisionEvent, DecisionEventKind, DecisionLog};
pub use quality::DecisionQualityScorer;
pub use reversibility::ReversibilityAssessor;
pub use validator::{validate, ConstraintValidator};
