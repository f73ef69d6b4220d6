use crate::models::Lounge;
use crate::ui::images::{ImageLoader, ImageSlot};
use eframe::egui;

const IMAGE_HEIGHT: f32 = 80.0;

/// One lounge entry in the detail panel: optional image, name, terminal, airport
pub struct LoungeCard<'a> {
    pub lounge: &'a Lounge,
    pub images: &'a mut ImageLoader,
}

impl<'a> LoungeCard<'a> {
    pub fn new(lounge: &'a Lounge, images: &'a mut ImageLoader) -> Self {
        Self { lounge, images }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                if let Some(url) = self.lounge.image_url() {
                    match self.images.slot(ui.ctx(), url) {
                        ImageSlot::Ready(texture) => {
                            let aspect = texture.size()[0] as f32 / texture.size()[1].max(1) as f32;
                            let size = egui::vec2(IMAGE_HEIGHT * aspect, IMAGE_HEIGHT);
                            ui.image((texture.id(), size));
                        }
                        ImageSlot::Loading => {
                            ui.spinner();
                        }
                        ImageSlot::Unavailable => {}
                    }
                }

                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&self.lounge.name).size(16.0).strong());
                    ui.label(format!("Terminal: {}", self.lounge.terminal));
                    ui.label(format!("Airport: {}", self.lounge.airport));
                });
            });
        });
    }
}
