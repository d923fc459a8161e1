//! Violation detectors.
//!
//! Each check is a pure function over the event list (and, for the
//! catalog-driven ones, the resolved case type) returning zero or more
//! violations. Checks are independent; the engine composes them by
//! concatenation and their relative order carries no meaning.

pub mod forbidden;
pub mod informal;
pub mod justification;
pub mod missing;
pub mod order;

pub use forbidden::check_forbidden_actions;
pub use informal::check_early_decision;
pub use justification::check_justifications;
pub use missing::check_missing_steps;
pub use order::check_step_order;
