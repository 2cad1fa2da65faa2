pub mod comparison;
pub mod normalize;

pub use comparison::{compare, ComparisonReport, IdentityFields, ReconciledField, Reconciliation};
