use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Framed section with an optional heading and hint line
#[derive(Default)]
pub struct Card {
    title: Option<String>,
    hint: Option<String>,
    highlighted: bool,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Accent border, used for the card holding the crossing
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    pub fn show<R>(
        self,
        ui: &mut egui::Ui,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> egui::InnerResponse<R> {
        let mut frame = DesignSystem::card_frame();
        if self.highlighted {
            frame = frame.stroke(egui::Stroke::new(1.5, DesignSystem::ACCENT_PRIMARY));
        }

        frame.show(ui, |ui| {
            if let Some(title) = self.title {
                ui.label(
                    egui::RichText::new(title)
                        .size(12.0)
                        .color(DesignSystem::TEXT_SECONDARY)
                        .strong(),
                );
            }
            if let Some(hint) = self.hint {
                ui.label(
                    egui::RichText::new(hint)
                        .size(11.0)
                        .color(DesignSystem::TEXT_MUTED),
                );
            }
            ui.add_space(DesignSystem::SPACING_SMALL);

            add_contents(ui)
        })
    }
}
