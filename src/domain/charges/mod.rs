pub mod fee_model;
pub mod period;
pub mod schedule;

pub use fee_model::{ChargeModel, CurrentModel, ProposedModel, safe_ratio};
pub use period::{BillingPeriod, YesNo};
pub use schedule::{FeeSchedule, ScenarioParameters};
