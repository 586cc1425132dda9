use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::chart_view_model::ChartViewModel;
use eframe::egui;
use egui_plot::{Corner, Legend, Line, LineStyle, Plot, Points};

/// Renders both fee curves, the crossing marker and its axis guides
pub fn render_chart_panel(ui: &mut egui::Ui, vm: &ChartViewModel, height: f32) {
    let metadata = &vm.report.metadata;

    ui.label(
        egui::RichText::new(&metadata.title)
            .strong()
            .size(18.0)
            .color(DesignSystem::TEXT_PRIMARY),
    );
    ui.add_space(DesignSystem::SPACING_SMALL);

    Plot::new("fee_comparison")
        .height(height.max(300.0))
        .show_grid([true, true])
        .legend(Legend::default().position(Corner::LeftTop))
        .x_axis_label(metadata.x_axis.clone())
        .y_axis_label(metadata.y_axis.clone())
        .include_x(0.0)
        .include_y(0.0)
        .label_formatter(|name, value| vm.hover_text(name, value.x, value.y))
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(vm.report.current.name.clone(), vm.current_points.clone())
                    .color(DesignSystem::CURRENT_MODEL)
                    .width(DesignSystem::LINE_WIDTH)
                    .style(LineStyle::dotted_dense()),
            );
            plot_ui.line(
                Line::new(vm.report.proposed.name.clone(), vm.proposed_points.clone())
                    .color(DesignSystem::PROPOSED_MODEL)
                    .width(DesignSystem::LINE_WIDTH),
            );

            if let Some(point) = vm.intersection {
                // Unnamed so the guides stay out of the legend
                for guide in &vm.guides {
                    plot_ui.line(
                        Line::new("", guide.to_vec())
                            .color(DesignSystem::AXIS_GUIDE)
                            .width(DesignSystem::LINE_WIDTH)
                            .style(LineStyle::dotted_loose()),
                    );
                }
                plot_ui.points(
                    Points::new("Intersection Point", vec![point])
                        .color(DesignSystem::INTERSECTION)
                        .radius(DesignSystem::MARKER_RADIUS),
                );
            }
        });
}
