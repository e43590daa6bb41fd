mod constraint_subject;
mod freshness;
mod reliability;

pub use constraint_subject::ConstraintSubject;
pub use freshness::FreshnessModel;
pub use reliability::ReliabilitySource;
