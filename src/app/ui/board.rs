// 梯子画面のUI

use std::time::Instant;

use egui::{Color32, RichText};

use super::helpers::{canvas_background, paint_lines, to_color32};
use crate::app::{App, GameOperations};
use crate::constants::{CELL_HEIGHT, CELL_WIDTH};
use crate::domain::render::{canvas_size, HexColor};

const LABEL_WIDTH: f32 = CELL_WIDTH - 10.0;

pub struct BoardUI;

impl BoardUI {
    pub fn draw_controls(app: &mut App, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label("操作");
            let idle = !app.session.is_busy();
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(idle, egui::Button::new("全員の結果を見る"))
                    .clicked()
                {
                    GameOperations::reveal_all(app, Instant::now());
                }
                if ui
                    .add_enabled(idle, egui::Button::new("経路をリセット"))
                    .clicked()
                {
                    GameOperations::reset_paths(app);
                }
                if ui.button("戻る").clicked() {
                    GameOperations::back(app);
                }
            });
            if let Some(p) = app.session.active_participant() {
                ui.label(
                    RichText::new(format!("参加者{}が移動中…", p + 1))
                        .italics()
                        .color(Color32::GRAY),
                );
            }
        });
    }

    pub fn draw_board(app: &mut App, ui: &mut egui::Ui) {
        let Some(ladder) = app.session.ladder() else {
            return;
        };
        let lanes = ladder.lane_count();
        let rows = ladder.row_count();
        let [width, height] = canvas_size(lanes, rows, CELL_WIDTH, CELL_HEIGHT);

        Self::draw_participants(app, ui, lanes);

        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
        app.canvas.attach();
        GameOperations::sync_canvas(app);
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, canvas_background(app.session.config().light_background));
        paint_lines(&painter, rect.min, app.canvas.lines());

        Self::draw_results(app, ui, lanes);
    }

    fn draw_participants(app: &mut App, ui: &mut egui::Ui, lanes: usize) {
        let idle = !app.session.is_busy();
        let mut start = None;
        let mut renamed = Vec::new();
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 10.0;
            for (i, p) in app.session.participants().iter().enumerate().take(lanes) {
                ui.vertical(|ui| {
                    ui.set_width(LABEL_WIDTH);
                    let mut label = p.label.clone();
                    if ui
                        .add(egui::TextEdit::singleline(&mut label).desired_width(LABEL_WIDTH))
                        .changed()
                    {
                        renamed.push((i, label));
                    }
                    let button = egui::Button::new(RichText::new("スタート").color(text_on(p.color)))
                        .fill(to_color32(p.color));
                    if ui.add_enabled(idle, button).clicked() {
                        start = Some(i);
                    }
                });
            }
        });
        for (i, label) in renamed {
            if let Err(e) = app.session.rename_participant(i, label) {
                app.push_log(format!("エラー: {e}"));
            }
        }
        if let Some(i) = start {
            GameOperations::start_walk(app, i, Instant::now());
        }
    }

    fn draw_results(app: &mut App, ui: &mut egui::Ui, lanes: usize) {
        let mut renamed = Vec::new();
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 10.0;
            for (slot, result) in app.session.results().iter().enumerate().take(lanes) {
                ui.vertical(|ui| {
                    ui.set_width(LABEL_WIDTH);
                    let mut label = result.clone();
                    if ui
                        .add(egui::TextEdit::singleline(&mut label).desired_width(LABEL_WIDTH))
                        .changed()
                    {
                        renamed.push((slot, label));
                    }
                    match app.session.holder_of(slot) {
                        Some(holder) => ui.strong(holder),
                        None => ui.label(RichText::new("？").color(Color32::GRAY)),
                    };
                });
            }
        });
        for (slot, label) in renamed {
            if let Err(e) = app.session.rename_result(slot, label) {
                app.push_log(format!("エラー: {e}"));
            }
        }
    }
}

/// 背景色に応じた文字色
fn text_on(color: HexColor) -> Color32 {
    let luma = 0.299 * color.r as f32 + 0.587 * color.g as f32 + 0.114 * color.b as f32;
    if luma > 150.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}
