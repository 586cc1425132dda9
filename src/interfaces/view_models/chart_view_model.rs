use crate::application::analysis::{AnalysisReport, CheaperModel};
use crate::domain::series::FeeSeries;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub struct SummaryMetric {
    pub title: String,
    pub value: String,
    pub context: Option<String>,
    pub color: egui::Color32,
}

/// Plot-ready view of an analysis report
pub struct ChartViewModel {
    pub report: AnalysisReport,
    pub current_points: Vec<[f64; 2]>,
    pub proposed_points: Vec<[f64; 2]>,
    pub intersection: Option<[f64; 2]>,
    pub guides: Vec<[[f64; 2]; 2]>,
}

impl ChartViewModel {
    pub fn new(report: AnalysisReport) -> Self {
        let current_points = report.current.points();
        let proposed_points = report.proposed.points();
        let intersection = report.intersection.map(|p| [p.revenue, p.fee]);
        let guides = report
            .guides
            .iter()
            .map(|g| [[g.x0, g.y0], [g.x1, g.y1]])
            .collect();

        Self {
            report,
            current_points,
            proposed_points,
            intersection,
            guides,
        }
    }

    /// Tooltip for the cursor position on a named curve
    pub fn hover_text(&self, series_name: &str, revenue: f64, fee: f64) -> String {
        let series: Option<&FeeSeries> = if series_name == self.report.current.name {
            Some(&self.report.current)
        } else if series_name == self.report.proposed.name {
            Some(&self.report.proposed)
        } else {
            None
        };

        match series.and_then(|s| s.nearest(revenue)) {
            Some(sample) => format!("{}\n{}", series_name, sample.annotation),
            None if series_name.is_empty() => {
                format!("Revenue: ${:.2} M\nFee: ${:.2} M", revenue, fee)
            }
            None => format!(
                "{}\nRevenue: ${:.2} M, Service Fee: ${:.2} M",
                series_name, revenue, fee
            ),
        }
    }

    pub fn metrics(&self) -> Vec<SummaryMetric> {
        let report = &self.report;
        let max_revenue = report
            .current
            .samples
            .last()
            .map(|s| s.revenue)
            .unwrap_or_default();

        let (crossing_value, crossing_fee, crossing_ratio) = match report.intersection {
            Some(point) => (
                format!("${:.2} M", point.revenue),
                format!("${:.2} M", point.fee),
                Some(format!(
                    "Fee ratio {:.2}%",
                    crate::domain::charges::safe_ratio(point.fee, point.revenue) * 100.0
                )),
            ),
            None => ("No crossing".to_string(), "-".to_string(), None),
        };

        let download_charge = report
            .proposed
            .samples
            .first()
            .map(|s| s.fee)
            .unwrap_or_default();

        let (marginal_value, marginal_color) = match report.marginal_rate {
            Some(rate) => (format!("{:.1}%", rate * 100.0), DesignSystem::PROPOSED_MODEL),
            None => ("None".to_string(), DesignSystem::TEXT_SECONDARY),
        };

        let (cheaper_value, cheaper_color) = match report.break_even.at_max_revenue {
            CheaperModel::Current => ("Current", DesignSystem::CURRENT_MODEL),
            CheaperModel::Proposed => ("Proposed", DesignSystem::PROPOSED_MODEL),
            CheaperModel::Equal => ("Equal", DesignSystem::TEXT_SECONDARY),
        };

        vec![
            SummaryMetric {
                title: "BREAK-EVEN REVENUE".to_string(),
                value: crossing_value,
                context: Some(format!("Searched $0 - ${:.0} M", max_revenue)),
                color: DesignSystem::INTERSECTION,
            },
            SummaryMetric {
                title: "FEE AT BREAK-EVEN".to_string(),
                value: crossing_fee,
                context: crossing_ratio,
                color: DesignSystem::TEXT_PRIMARY,
            },
            SummaryMetric {
                title: "PROPOSED MARGINAL RATE".to_string(),
                value: marginal_value,
                context: Some(format!("Download charge ${:.2} M", download_charge)),
                color: marginal_color,
            },
            SummaryMetric {
                title: format!("CHEAPER AT ${:.0} M", max_revenue),
                value: cheaper_value.to_string(),
                context: None,
                color: cheaper_color,
            },
        ]
    }
}
