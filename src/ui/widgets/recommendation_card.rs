use crate::types::Recommendation;
use crate::ui::theme::{self, level_accent, level_fill};
use egui::RichText;

pub struct RecommendationCard;

impl RecommendationCard {
    pub fn show(ui: &mut egui::Ui, recommendation: &Recommendation) {
        let accent = level_accent(recommendation.level);

        egui::Frame::new()
            .fill(level_fill(recommendation.level))
            .stroke(egui::Stroke::new(1.0, accent.gamma_multiply(0.2)))
            .corner_radius(18.0)
            .inner_margin(egui::Margin::same(18))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&recommendation.drug)
                            .size(20.0)
                            .strong()
                            .color(theme::TEXT_DARK),
                    );
                    egui::Frame::new()
                        .fill(accent)
                        .corner_radius(6.0)
                        .inner_margin(egui::Margin::symmetric(6, 2))
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(recommendation.level.tag_label())
                                    .size(10.0)
                                    .strong()
                                    .color(egui::Color32::WHITE),
                            );
                        });
                });

                ui.add_space(8.0);
                ui.label(RichText::new("基因型发现").size(13.0).strong().color(theme::LABEL_GREY));
                ui.label(RichText::new(&recommendation.finding).size(16.0));

                ui.separator();

                ui.label(RichText::new("调整方案").size(13.0).strong().color(theme::LABEL_GREY));
                ui.label(
                    RichText::new(&recommendation.suggestion)
                        .size(17.0)
                        .strong()
                        .color(theme::TEXT_DARK),
                );
            });
    }
}
