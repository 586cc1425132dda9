use crate::application::{AnalysisRequest, ChargeAnalysis};
use crate::config::Config;
use crate::domain::charges::ScenarioParameters;
use crate::domain::errors::ScenarioError;
use crate::domain::intersection::IntersectionStrategy;
use crate::interfaces::components::metrics::{render_error_banner, render_metric_card};
use crate::interfaces::dashboard_components::chart_panel::render_chart_panel;
use crate::interfaces::dashboard_components::scenario_sidebar::{
    ScenarioInputs, StrategyChoice, render_scenario_sidebar,
};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::chart_view_model::ChartViewModel;
use eframe::egui;
use tracing::{debug, warn};

/// Single-page fee comparison dashboard.
///
/// The chart is rebuilt from scratch whenever the sidebar inputs change.
pub struct ChargeDashboard {
    config: Config,
    inputs: ScenarioInputs,
    computed_for: Option<ScenarioInputs>,
    view: Result<ChartViewModel, ScenarioError>,
}

impl ChargeDashboard {
    pub fn new(config: Config) -> Self {
        let inputs = initial_inputs(&config);
        let mut dashboard = Self {
            config,
            inputs,
            computed_for: None,
            view: Err(ScenarioError::InvalidSampleCount { value: 0 }),
        };
        dashboard.refresh();
        dashboard
    }

    /// Recompute when the inputs differ from the last computed state
    fn refresh(&mut self) {
        if self.computed_for.as_ref() == Some(&self.inputs) {
            return;
        }

        let request = request_from_inputs(&self.config, &self.inputs);
        self.view = ChargeAnalysis::run(&request).map(ChartViewModel::new);

        match &self.view {
            Ok(vm) => debug!(
                "Recomputed chart for {:?}: crossing {:?}",
                self.inputs, vm.report.intersection
            ),
            Err(e) => warn!("Scenario rejected: {}", e),
        }
        self.computed_for = Some(self.inputs.clone());
    }
}

fn initial_inputs(config: &Config) -> ScenarioInputs {
    let scenario = config.default_scenario();
    let (strategy, tolerance) = match config.strategy {
        IntersectionStrategy::Bracketing { interpolate: true } => {
            (StrategyChoice::Interpolated, config.tolerance)
        }
        IntersectionStrategy::Bracketing { interpolate: false } => {
            (StrategyChoice::Sampled, config.tolerance)
        }
        IntersectionStrategy::Tolerance { epsilon } => (StrategyChoice::Tolerance, epsilon),
    };

    ScenarioInputs {
        downloads: scenario.downloads,
        max_revenue: config.max_revenue,
        small_business_program: scenario.small_business_program.into(),
        alternate_payment_processing: scenario.alternate_payment_processing.into(),
        third_party_store: scenario.third_party_store.into(),
        period: scenario.period,
        strategy,
        tolerance,
    }
}

/// Translate widget state into an analysis request
pub fn request_from_inputs(config: &Config, inputs: &ScenarioInputs) -> AnalysisRequest {
    let scenario = ScenarioParameters {
        downloads: inputs.downloads,
        small_business_program: inputs.small_business_program.is_yes(),
        alternate_payment_processing: inputs.alternate_payment_processing.is_yes(),
        third_party_store: inputs.third_party_store.is_yes(),
        period: inputs.period,
    };

    let mut request = config.to_analysis_request(scenario);
    request.max_revenue = inputs.max_revenue;
    request.strategy = match inputs.strategy {
        StrategyChoice::Interpolated => IntersectionStrategy::Bracketing { interpolate: true },
        StrategyChoice::Sampled => IntersectionStrategy::Bracketing { interpolate: false },
        StrategyChoice::Tolerance => IntersectionStrategy::Tolerance {
            epsilon: inputs.tolerance,
        },
    };
    request
}

impl eframe::App for ChargeDashboard {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // --- 1. Left Sidebar: Scenario Inputs ---
        egui::SidePanel::left("scenario_panel")
            .default_width(300.0)
            .min_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    render_scenario_sidebar(ui, &mut self.inputs);
                });
            });

        self.refresh();

        // --- 2. Central Panel: Chart + Summary ---
        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                ui.heading("Service Charge Analysis");
                ui.label(
                    egui::RichText::new(
                        "Compares the current revenue share against the proposed per-download \
                         model. Dotted lines drop from the break-even point to both axes.",
                    )
                    .color(DesignSystem::TEXT_SECONDARY),
                );
                ui.add_space(DesignSystem::SPACING_MEDIUM);

                match &self.view {
                    Ok(vm) => {
                        let metrics = vm.metrics();
                        ui.columns(metrics.len(), |columns| {
                            for (i, (column, metric)) in
                                columns.iter_mut().zip(metrics.iter()).enumerate()
                            {
                                let highlighted = i == 0 && vm.intersection.is_some();
                                render_metric_card(column, metric, highlighted);
                            }
                        });
                        ui.add_space(DesignSystem::SPACING_MEDIUM);

                        let height = (ui.available_height() - 20.0).min(self.config.chart_height);
                        render_chart_panel(ui, vm, height);
                    }
                    Err(e) => render_error_banner(ui, &e.to_string()),
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::charges::{BillingPeriod, YesNo};

    fn config() -> Config {
        Config::from_env().expect("Should parse with defaults")
    }

    #[test]
    fn test_initial_inputs_follow_config() {
        let inputs = initial_inputs(&config());
        assert_eq!(inputs.downloads, 100.0);
        assert_eq!(inputs.max_revenue, 1000.0);
        assert_eq!(inputs.third_party_store, YesNo::No);
        assert_eq!(inputs.strategy, StrategyChoice::Interpolated);
    }

    #[test]
    fn test_configured_tolerance_seeds_sidebar() {
        let mut config = config();
        config.tolerance = 0.25;

        let inputs = initial_inputs(&config);
        assert_eq!(inputs.strategy, StrategyChoice::Interpolated);
        assert_eq!(inputs.tolerance, 0.25);
    }

    #[test]
    fn test_request_from_inputs() {
        let config = config();
        let mut inputs = initial_inputs(&config);
        inputs.small_business_program = YesNo::Yes;
        inputs.period = BillingPeriod::Monthly;
        inputs.max_revenue = 250.0;
        inputs.strategy = StrategyChoice::Tolerance;
        inputs.tolerance = 0.5;

        let request = request_from_inputs(&config, &inputs);
        assert!(request.scenario.small_business_program);
        assert!(!request.scenario.alternate_payment_processing);
        assert_eq!(request.scenario.period, BillingPeriod::Monthly);
        assert_eq!(request.max_revenue, 250.0);
        assert_eq!(
            request.strategy,
            IntersectionStrategy::Tolerance { epsilon: 0.5 }
        );
    }

    #[test]
    fn test_dashboard_recomputes_on_change_only() {
        let mut dashboard = ChargeDashboard::new(config());
        assert!(dashboard.view.is_ok());
        let first = dashboard.view.as_ref().unwrap().report.clone();

        dashboard.refresh();
        assert_eq!(dashboard.view.as_ref().unwrap().report, first);

        dashboard.inputs.third_party_store = YesNo::Yes;
        dashboard.refresh();
        let report = &dashboard.view.as_ref().unwrap().report;
        assert_eq!(report.marginal_rate, None);
        assert_ne!(report.intersection, first.intersection);
    }
}
