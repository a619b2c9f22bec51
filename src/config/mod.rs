//! Configuration types and loading for the Time Calculation Engine.
//!
//! Day-plan, break-rule, and flextime configuration is strongly typed and
//! deserialized from YAML files. The calculation functions never load
//! configuration themselves; the orchestration layer resolves it and passes
//! values in.

mod loader;
mod types;

pub use loader::PlanLoader;
pub use types::{
    BreakRule, BreakRuleKind, CreditType, DayPlanConfig, FlextimeConfig, RoundingAnchor,
    RoundingConfig, RoundingType, TariffConfig, ToleranceConfig,
};
