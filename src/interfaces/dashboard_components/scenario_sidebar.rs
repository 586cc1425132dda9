//! Sidebar inputs for the scenario being charted

use crate::domain::charges::{BillingPeriod, YesNo};
use crate::interfaces::components::card::Card;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Which crossing scan the user picked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyChoice {
    Interpolated,
    Sampled,
    Tolerance,
}

impl StrategyChoice {
    pub fn label(&self) -> &'static str {
        match self {
            StrategyChoice::Interpolated => "Sign change (interpolated)",
            StrategyChoice::Sampled => "Sign change (sampled)",
            StrategyChoice::Tolerance => "Tolerance match",
        }
    }
}

/// Raw widget state; compared frame to frame to detect changes
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioInputs {
    pub downloads: f64,
    pub max_revenue: f64,
    pub small_business_program: YesNo,
    pub alternate_payment_processing: YesNo,
    pub third_party_store: YesNo,
    pub period: BillingPeriod,
    pub strategy: StrategyChoice,
    pub tolerance: f64,
}

pub fn render_scenario_sidebar(ui: &mut egui::Ui, inputs: &mut ScenarioInputs) {
    ui.heading("Scenario");
    ui.add_space(DesignSystem::SPACING_SMALL);

    Card::new()
        .title("DOWNLOADS")
        .hint("Millions per year")
        .show(ui, |ui| {
            ui.add(
                egui::DragValue::new(&mut inputs.downloads)
                    .range(1.0..=f64::MAX)
                    .speed(1.0)
                    .suffix(" M"),
            );
        });
    ui.add_space(DesignSystem::SPACING_SMALL);

    Card::new()
        .title("REVENUE RANGE")
        .hint("Upper bound of the revenue axis ($ Million)")
        .show(ui, |ui| {
            ui.add(
                egui::DragValue::new(&mut inputs.max_revenue)
                    .range(1.0..=f64::MAX)
                    .speed(10.0)
                    .prefix("$"),
            );
        });
    ui.add_space(DesignSystem::SPACING_SMALL);

    Card::new().title("PROGRAMS").show(ui, |ui| {
        yes_no_selector(
            ui,
            "Small business program",
            &mut inputs.small_business_program,
        );
        yes_no_selector(
            ui,
            "Alternate payment processing",
            &mut inputs.alternate_payment_processing,
        );
        yes_no_selector(ui, "Third-party store", &mut inputs.third_party_store);
    });
    ui.add_space(DesignSystem::SPACING_SMALL);

    Card::new().title("PERIOD").show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.radio_value(&mut inputs.period, BillingPeriod::Yearly, "Yearly");
            ui.radio_value(&mut inputs.period, BillingPeriod::Monthly, "Monthly");
        });
    });
    ui.add_space(DesignSystem::SPACING_SMALL);

    Card::new()
        .title("CROSSING DETECTION")
        .show(ui, |ui| {
            egui::ComboBox::from_id_salt("strategy_choice")
                .selected_text(inputs.strategy.label())
                .show_ui(ui, |ui| {
                    for choice in [
                        StrategyChoice::Interpolated,
                        StrategyChoice::Sampled,
                        StrategyChoice::Tolerance,
                    ] {
                        ui.selectable_value(&mut inputs.strategy, choice, choice.label());
                    }
                });

            if inputs.strategy == StrategyChoice::Tolerance {
                ui.horizontal(|ui| {
                    ui.label("Tolerance");
                    ui.add(
                        egui::DragValue::new(&mut inputs.tolerance)
                            .range(0.0..=10.0)
                            .speed(0.001)
                            .max_decimals(4),
                    );
                });
            }
        });
}

fn yes_no_selector(ui: &mut egui::Ui, label: &str, answer: &mut YesNo) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).color(DesignSystem::TEXT_SECONDARY));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            egui::ComboBox::from_id_salt(label)
                .width(60.0)
                .selected_text(answer.to_string())
                .show_ui(ui, |ui| {
                    ui.selectable_value(answer, YesNo::Yes, "Yes");
                    ui.selectable_value(answer, YesNo::No, "No");
                });
        });
    });
}
