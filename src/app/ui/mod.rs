// UIモジュールのエントリポイント

pub mod board;
pub mod helpers;
pub mod landing;

use std::time::{Duration, Instant};

use crate::app::{App, GameOperations};
use crate::presentation::state::Screen;

use board::BoardUI;
use landing::LandingUI;

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        GameOperations::tick(self, Instant::now());

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("あみだくじ");
                ui.add_space(16.0);
                if ui
                    .checkbox(&mut self.verbose_logging, "詳細ログ")
                    .changed()
                {
                    crate::logging::set_verbose(self.verbose_logging);
                }
            });
        });

        egui::SidePanel::left("left")
            .min_width(280.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.spacing_mut().item_spacing = egui::Vec2::new(8.0, 8.0);
                        if self.view.screen == Screen::Playing {
                            BoardUI::draw_controls(self, ui);
                            ui.separator();
                        }
                        ui.label("ログ");
                        for line in &self.log_lines {
                            ui.monospace(line);
                        }
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.view.screen {
                    Screen::Landing => LandingUI::draw(self, ui),
                    Screen::Playing => BoardUI::draw_board(self, ui),
                });
        });

        // 歩行中は次の描画時刻に合わせて再描画を予約
        if let Some(remaining) = self.session.next_deadline(Instant::now()) {
            ctx.request_repaint_after(remaining.max(Duration::from_millis(1)));
        }
    }
}
