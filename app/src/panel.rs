//! One slot of the grid: sprite, query form and summary

use eframe::egui::{
    self, Image, Key, Margin, RichText, Sense, Stroke, TextEdit, TextureHandle, Ui,
};
use pokegui_team::{DEFAULT_LEVEL, Slot, SlotId, summary};

use crate::sprite;
use crate::theme::{self, Theme};

/// Share of the panel height given to the sprite
const IMAGE_SHARE: f32 = 0.45;

/// Contents of a slot's name and level inputs
#[derive(Debug, Clone, Default)]
pub struct QueryForm {
    pub name: String,
    pub level: String,
}

pub struct PanelView<'a> {
    pub slot: SlotId,
    pub form: &'a mut QueryForm,
    pub state: &'a Slot,
    pub sprite: Option<&'a TextureHandle>,
    pub theme: &'a Theme,
}

/// Draw a panel filling `ui`; returns true when the user submitted the form
pub fn show(ui: &mut Ui, view: PanelView<'_>) -> bool {
    let PanelView {
        slot,
        form,
        state,
        sprite,
        theme,
    } = view;

    let panel_height = ui.available_height();
    let mut submitted = false;

    egui::Frame::none()
        .fill(theme.base)
        .stroke(Stroke::new(2.0, theme.border))
        .inner_margin(Margin::same(5.0))
        .show(ui, |ui| {
            ui.set_min_size(ui.available_size());

            let image_box = egui::vec2(ui.available_width(), panel_height * IMAGE_SHARE);
            let (image_rect, _) = ui.allocate_exact_size(image_box, Sense::hover());
            if let Some(texture) = sprite {
                let size = sprite::fit(texture.size_vec2(), image_rect.size());
                Image::new((texture.id(), size))
                    .paint_at(ui, egui::Rect::from_center_size(image_rect.center(), size));
            }

            ui.horizontal(|ui| {
                ui.label("Name:");
                let name = ui.add(TextEdit::singleline(&mut form.name).desired_width(110.0));
                ui.label("Level:");
                ui.add(
                    TextEdit::singleline(&mut form.level)
                        .desired_width(40.0)
                        .hint_text(DEFAULT_LEVEL.to_string()),
                );

                let entered = name.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
                if ui.button("Search").clicked() || entered {
                    submitted = true;
                }
            });

            if let Some(record) = state.record() {
                ui.add_space(4.0);
                ui.push_id(slot.index(), |ui| {
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(&record.name)
                                    .strong()
                                    .size(theme::text_size(panel_height) + 2.0)
                                    .color(theme.foreground),
                            );
                            ui.label(
                                RichText::new(summary(record))
                                    .size(theme::text_size(panel_height))
                                    .color(theme.foreground),
                            );
                        });
                });
            }
        });

    submitted
}
