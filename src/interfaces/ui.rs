use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// One-time display setup, called from the eframe creation context
pub fn configure_style(ctx: &egui::Context) {
    ctx.set_visuals(DesignSystem::theme());
    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(DesignSystem::SPACING_SMALL, 6.0);
        style.spacing.slider_width = 220.0;
    });
}
