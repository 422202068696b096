use crate::report::NO_ADJUSTMENT_MESSAGE;
use crate::ui::services::ReportExporter;
use crate::ui::state::AppState;
use crate::ui::theme;
use crate::ui::widgets::RecommendationCard;
use egui::RichText;

pub struct RecommendationPanel;

impl RecommendationPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("决策建议").size(13.0).color(theme::LABEL_GREY));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("Export report...").clicked() {
                    ReportExporter::export(state);
                }
                ui.label(RichText::new("● 实时分析中").size(12.0).strong().color(theme::LIVE_GREEN));
            });
        });

        ui.add_space(6.0);

        if state.recommendations.is_empty() {
            egui::Frame::group(ui.style())
                .corner_radius(18.0)
                .inner_margin(egui::Margin::same(24))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(NO_ADJUSTMENT_MESSAGE).size(15.0).color(theme::LABEL_GREY));
                    });
                });
        } else {
            for recommendation in &state.recommendations {
                RecommendationCard::show(ui, recommendation);
                ui.add_space(10.0);
            }
        }
    }
}
