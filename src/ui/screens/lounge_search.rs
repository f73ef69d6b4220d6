use crate::{
    search::SearchMode,
    state::{LoadStatus, SearchState, Selection},
    ui::{components::LoungeCard, images::ImageLoader},
};
use eframe::egui;

pub struct LoungeSearchScreen;

impl LoungeSearchScreen {
    pub fn show(ctx: &egui::Context, state: &mut SearchState, images: &mut ImageLoader) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Free Lounge Access in Indian Airport of Credit Cards");
            ui.add_space(10.0);

            Self::show_load_status(ui, &state.load_status);

            Self::show_search_controls(ui, state);
            ui.add_space(5.0);

            Self::show_matches(ui, state);

            if state.show_no_results() {
                ui.colored_label(egui::Color32::RED, "No lounge access available for this card.");
            }

            if let Some(selection) = &state.selection {
                ui.add_space(10.0);
                ui.separator();
                Self::show_card_details(ui, selection, images);
            }
        });
    }

    fn show_load_status(ui: &mut egui::Ui, status: &LoadStatus) {
        match status {
            LoadStatus::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading lounge data...");
                });
                ui.add_space(5.0);
            }
            LoadStatus::Failed(message) => {
                ui.colored_label(
                    egui::Color32::RED,
                    format!("Could not load lounge data: {message}"),
                );
                ui.add_space(5.0);
            }
            LoadStatus::Loaded => {}
        }
    }

    fn show_search_controls(ui: &mut egui::Ui, state: &mut SearchState) {
        let mut input = state.input.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut input)
                .desired_width(400.0)
                .hint_text("Enter card name"),
        );
        if response.changed() {
            state.set_input(&input);
        }

        ui.horizontal(|ui| {
            for mode in SearchMode::all() {
                if ui.radio(state.mode == *mode, mode.as_str()).clicked() {
                    state.set_mode(*mode);
                }
            }
        });
    }

    /// Dropdown of matching card names, shown only while there are matches
    fn show_matches(ui: &mut egui::Ui, state: &mut SearchState) {
        if state.matches.is_empty() {
            return;
        }

        let mut chosen = None;
        ui.group(|ui| {
            egui::ScrollArea::vertical()
                .max_height(200.0)
                .id_salt("card_matches_scroll")
                .show(ui, |ui| {
                    for card_name in &state.matches {
                        if ui.selectable_label(false, card_name).clicked() {
                            chosen = Some(card_name.clone());
                        }
                    }
                });
        });

        if let Some(card_name) = chosen {
            state.select(&card_name);
        }
    }

    fn show_card_details(ui: &mut egui::Ui, selection: &Selection, images: &mut ImageLoader) {
        ui.heading("Card Details");
        ui.horizontal(|ui| {
            ui.strong("Card Name:");
            ui.label(&selection.card_name);
        });
        ui.add_space(5.0);
        ui.label(egui::RichText::new("Lounges").size(16.0).strong());

        if selection.lounges.is_empty() {
            ui.label("No lounges listed for this card.");
            return;
        }

        egui::ScrollArea::vertical()
            .max_height(ui.available_height() - 20.0)
            .id_salt("lounge_list_scroll")
            .show(ui, |ui| {
                for lounge in &selection.lounges {
                    LoungeCard::new(lounge, images).show(ui);
                    ui.add_space(4.0);
                }
            });
    }
}
