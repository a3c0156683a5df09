// 参加者数入力画面のUI

use egui::{Color32, RichText};

use crate::app::{App, GameOperations};

pub struct LandingUI;

impl LandingUI {
    pub fn draw(app: &mut App, ui: &mut egui::Ui) {
        let limit = app.session.config().participant_limit.get();
        ui.add_space(24.0);
        ui.heading("あみだくじ");
        ui.add_space(12.0);
        ui.label(format!("参加者数を入力してください（2~{}人）", limit));

        let mut submit = false;
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut app.view.count_input)
                    .desired_width(80.0)
                    .hint_text("例: 4"),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }
            if ui.button("はじめる").clicked() {
                submit = true;
            }
        });

        if submit {
            GameOperations::start_from_input(app);
        }

        if let Some(msg) = &app.view.message {
            ui.label(RichText::new(msg).color(Color32::from_rgb(239, 68, 68)));
        }
    }
}
