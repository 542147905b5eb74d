// ui.rs - eframe host: decodes input, paces ticks and draws the field

use std::time::{Duration, Instant};

use conway::{Config, Controller, Event, Flow};
use eframe::egui;
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};
use log::info;

use crate::keys;

const ALIVE_COLOR: Color32 = Color32::from_rgb(255, 255, 0);
const DEAD_COLOR: Color32 = Color32::BLACK;
const OUTLINE_COLOR: Color32 = Color32::from_rgb(50, 50, 50);
const CENTER_COLOR: Color32 = Color32::from_rgb(255, 0, 0);
const CURSOR_COLOR: Color32 = Color32::from_rgb(0, 0, 255);
const TEXT_COLOR: Color32 = Color32::from_rgb(0, 255, 0);

pub struct LifeApp {
    controller: Controller,
    pending: Vec<Event>,
    field: Vec2,
    cell_size: f32,
    tick_interval: Duration,
    last_tick: Instant,
}

impl LifeApp {
    pub fn new(config: &Config) -> Self {
        Self {
            controller: Controller::from_config(config),
            pending: Vec::new(),
            field: Vec2::new(config.field_width as f32, config.field_height as f32),
            cell_size: config.cell_size as f32,
            tick_interval: Duration::from_secs_f64(1.0 / config.tick_rate as f64),
            last_tick: Instant::now(),
        }
    }

    fn collect_keys(&mut self, ctx: &egui::Context) {
        ctx.input(|input| {
            self.pending
                .extend(input.events.iter().filter_map(keys::event_for_input));
        });
    }

    fn draw(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(self.field, Sense::click());
        let origin = response.rect.min;
        let view = self.controller.view();
        let size = Vec2::splat(self.cell_size);

        for (row, cells) in view.grid.rows_iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let rect = Rect::from_min_size(self.cell_origin(origin, col, row), size);
                let color = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };
                painter.rect_filled(rect, 0.0, color);
                painter.rect_stroke(rect, 0.0, Stroke::new(1.0, OUTLINE_COLOR));
            }
        }

        // Centre cross
        let center = origin + self.field / 2.0;
        let stroke = Stroke::new(1.0, CENTER_COLOR);
        painter.line_segment(
            [Pos2::new(origin.x, center.y), Pos2::new(origin.x + self.field.x, center.y)],
            stroke,
        );
        painter.line_segment(
            [Pos2::new(center.x, origin.y), Pos2::new(center.x, origin.y + self.field.y)],
            stroke,
        );

        let cursor = Rect::from_min_size(
            self.cell_origin(origin, view.cursor.col, view.cursor.row),
            size,
        );
        painter.rect_stroke(cursor, 0.0, Stroke::new(1.0, CURSOR_COLOR));

        let status = format!(
            "generation:{}  population:{}  {}",
            view.generation,
            view.population,
            if view.running { "running" } else { "paused" }
        );
        let font = FontId::proportional(12.0);
        let lines = std::iter::once(status.as_str()).chain(keys::HELP.iter().copied());
        for (i, line) in lines.enumerate() {
            painter.text(
                origin + Vec2::new(0.0, i as f32 * 12.0),
                Align2::LEFT_TOP,
                line,
                font.clone(),
                TEXT_COLOR,
            );
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - origin;
                if local.x >= 0.0 && local.y >= 0.0 {
                    self.pending.push(Event::PointAndToggle {
                        x: local.x as u32,
                        y: local.y as u32,
                    });
                }
            }
        }
    }

    fn cell_origin(&self, origin: Pos2, col: usize, row: usize) -> Pos2 {
        origin + Vec2::new(col as f32, row as f32) * self.cell_size
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.collect_keys(ctx);

        if self.last_tick.elapsed() >= self.tick_interval {
            self.last_tick = Instant::now();
            if self.controller.tick(self.pending.drain(..)) == Flow::Quit {
                info!("closing window");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(DEAD_COLOR))
            .show(ctx, |ui| self.draw(ui));

        ctx.request_repaint_after(self.tick_interval);
    }
}
