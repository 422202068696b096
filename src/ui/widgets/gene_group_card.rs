use crate::catalog::GeneGroup;
use crate::types::GenotypeState;
use crate::ui::theme::{self, group_palette};
use egui::RichText;

/// One card per gene: header plus a genotype picker per SNP
pub struct GeneGroupCard;

impl GeneGroupCard {
    /// Returns the `(snp_id, genotype)` pairs the user changed this frame.
    pub fn show(ui: &mut egui::Ui, group: &GeneGroup, genotypes: &GenotypeState) -> Vec<(String, String)> {
        let palette = group_palette(group.theme);
        let mut edits = Vec::new();

        egui::Frame::new()
            .fill(palette.fill)
            .stroke(egui::Stroke::new(1.0, palette.accent.gamma_multiply(0.6)))
            .corner_radius(16.0)
            .inner_margin(egui::Margin::same(14))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                ui.horizontal(|ui| {
                    ui.label(RichText::new(&group.gene).size(18.0).strong().color(palette.accent));
                    ui.separator();
                    ui.label(RichText::new(&group.description).size(13.0).color(theme::LABEL_GREY));
                });

                ui.add_space(6.0);

                egui::Grid::new(format!("snp_grid_{}", group.gene))
                    .num_columns(2)
                    .spacing([24.0, 8.0])
                    .show(ui, |ui| {
                        for snp in &group.snps {
                            ui.label(RichText::new(&snp.name).size(15.0).strong());

                            let current = genotypes.get(&snp.id).unwrap_or_default();
                            let mut selected = current.to_string();
                            egui::ComboBox::from_id_salt(&snp.id)
                                .selected_text(RichText::new(current).strong().color(palette.accent))
                                .width(110.0)
                                .show_ui(ui, |ui| {
                                    for option in &snp.options {
                                        ui.selectable_value(&mut selected, option.clone(), option.as_str());
                                    }
                                });

                            if selected != current {
                                edits.push((snp.id.clone(), selected));
                            }
                            ui.end_row();
                        }
                    });
            });

        edits
    }
}
