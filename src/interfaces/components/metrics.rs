use crate::interfaces::components::card::Card;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::chart_view_model::SummaryMetric;
use eframe::egui;

/// A card showing one headline figure under the chart
pub fn render_metric_card(ui: &mut egui::Ui, metric: &SummaryMetric, highlighted: bool) {
    Card::new()
        .title(&metric.title)
        .highlighted(highlighted)
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(&metric.value)
                    .size(24.0)
                    .strong()
                    .color(metric.color),
            );

            if let Some(context) = &metric.context {
                ui.label(
                    egui::RichText::new(context)
                        .size(11.0)
                        .color(DesignSystem::TEXT_MUTED),
                );
            }
        });
}

/// Inline error banner shown in place of the chart
pub fn render_error_banner(ui: &mut egui::Ui, message: &str) {
    egui::Frame::NONE
        .fill(DesignSystem::DANGER.linear_multiply(0.15))
        .corner_radius(DesignSystem::ROUNDING_MEDIUM)
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(message)
                    .size(13.0)
                    .strong()
                    .color(DesignSystem::DANGER),
            );
        });
}
