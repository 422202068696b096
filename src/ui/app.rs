use super::panels::{GenotypePanel, RecommendationPanel};
use super::state::AppState;
use super::theme;
use crate::catalog::MarkerCatalog;
use crate::config::{AppConfig, DisplayConfig};
use egui::RichText;
use std::sync::Arc;

const DISCLAIMER: &str =
    "本工具遵循 NCCN/CPIC 指南。所有临床决策均需结合患者实际肝肾功能、年龄及化疗反应，由主治医师确认。";

pub struct PgxAdvisorApp {
    state: AppState,
    genotype_panel: GenotypePanel,
    recommendation_panel: RecommendationPanel,
}

impl PgxAdvisorApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig, catalog: MarkerCatalog) -> Self {
        cc.egui_ctx.set_visuals(if config.display.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
        Self::install_fonts(&cc.egui_ctx, &config.display);

        Self {
            state: AppState::new(catalog, config.report.clone(), config.display.show_disclaimer),
            genotype_panel: GenotypePanel::new(),
            recommendation_panel: RecommendationPanel::new(),
        }
    }

    /// The default egui fonts have no CJK glyphs; append the configured or a system font as a fallback.
    fn install_fonts(ctx: &egui::Context, display: &DisplayConfig) {
        let Some(path) = display.resolve_font_path() else {
            log::warn!("No font_path configured and no system CJK font found; Chinese text may not render");
            return;
        };

        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::warn!("Failed to read font {}: {}", path.display(), e);
                return;
            }
        };

        let mut fonts = egui::FontDefinitions::default();
        fonts
            .font_data
            .insert("cjk".to_owned(), Arc::new(egui::FontData::from_owned(bytes)));
        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            fonts.families.entry(family).or_default().push("cjk".to_owned());
        }
        ctx.set_fonts(fonts);
        log::info!("Loaded fallback font {}", path.display());
    }

    fn show_header(ui: &mut egui::Ui) {
        ui.label(RichText::new("PGx Clinical Support").size(13.0).strong().color(theme::ACCENT_BLUE));
        ui.label(RichText::new("ALL 药物基因组学").size(30.0).strong());
        ui.label(RichText::new("基于基因检测报告的临床用药决策辅助").size(17.0).color(theme::LABEL_GREY));
    }

    fn show_footer(ui: &mut egui::Ui, state: &AppState) {
        ui.separator();
        ui.vertical_centered(|ui| {
            if state.show_disclaimer {
                ui.label(RichText::new(DISCLAIMER).size(12.0).color(theme::LABEL_GREY));
            }
            ui.label(
                RichText::new(format!("v{} Clinical Support System", env!("CARGO_PKG_VERSION")))
                    .size(11.0)
                    .strong()
                    .color(theme::ACCENT_BLUE),
            );
        });
    }
}

impl eframe::App for PgxAdvisorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            Self::show_header(ui);
            ui.add_space(8.0);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(RichText::new(&self.state.status_message).size(12.0).color(theme::LABEL_GREY));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.genotype_panel.show(ui, &mut self.state);
                ui.add_space(16.0);
                self.recommendation_panel.show(ui, &mut self.state);
                ui.add_space(16.0);
                Self::show_footer(ui, &self.state);
            });
        });
    }
}
