pub mod analysis;

pub use analysis::{AnalysisReport, AnalysisRequest, ChargeAnalysis};
