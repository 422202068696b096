use crate::ui::state::AppState;
use crate::ui::theme;
use crate::ui::widgets::GeneGroupCard;
use egui::RichText;

pub struct GenotypePanel;

impl GenotypePanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("基因检测结果录入").size(13.0).color(theme::LABEL_GREY));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("Reset to defaults").clicked() {
                    state.reset();
                }
            });
        });

        ui.add_space(6.0);

        let mut edits = Vec::new();
        for group in state.catalog.genes() {
            edits.extend(GeneGroupCard::show(ui, group, &state.genotypes));
            ui.add_space(10.0);
        }

        for (snp_id, genotype) in edits {
            match state.select(&snp_id, &genotype) {
                Ok(true) => {
                    state.status_message = format!("{} set to {}", snp_id, genotype);
                }
                Ok(false) => {}
                Err(e) => {
                    log::warn!("Rejected genotype edit: {}", e);
                    state.status_message = format!("Error: {}", e);
                }
            }
        }
    }
}
