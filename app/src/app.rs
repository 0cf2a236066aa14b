use eframe::{CreationContext, Frame};
use egui::{Color32, Context, Rect, Sense, Ui, Vec2, ViewportCommand};
use torus_life::{Grid, Pattern};

use crate::controls::Controls;

const GRID_LINE: Color32 = Color32::from_rgb(0xDD, 0xDD, 0xDD);

pub struct App {
    grid: Grid,
    controls: Controls,
    cell_size: f32,
}

impl App {
    /// Called once before the first frame.
    pub fn new(_cc: &CreationContext<'_>, grid: Grid, controls: Controls, cell_size: f32) -> Self {
        Self {
            grid,
            controls,
            cell_size,
        }
    }

    fn toolbar(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if ui.button(self.controls.pause_label()).clicked() {
                self.controls.toggle_pause();
            }
            if ui.button(self.controls.paint_label()).clicked() {
                self.controls.toggle_paint();
            }
            if ui.button("Reset").clicked() {
                self.controls.reset(&mut self.grid);
            }
            if ui.button("Glider").clicked() {
                self.grid.stamp(0, 0, &Pattern::glider());
            }
            if ui.button("Slower").clicked() {
                self.controls.slower();
            }
            if ui.button("Faster").clicked() {
                self.controls.faster();
            }
            ui.separator();
            ui.label(format!("Generation {}", self.grid.generation()));
            ui.label(format!("Speed {}", self.controls.speed()));
        });
    }

    fn board(&mut self, ui: &mut Ui) {
        let (w, h) = (self.grid.width(), self.grid.height());
        let cs = self.cell_size;
        let size = Vec2::new(w as f32 * cs, h as f32 * cs);
        let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, Color32::WHITE);
        for x in 1..w {
            let min = origin + Vec2::new(x as f32 * cs, 0.);
            painter.rect_filled(Rect::from_min_size(min, Vec2::new(1., size.y)), 0.0, GRID_LINE);
        }
        for y in 1..h {
            let min = origin + Vec2::new(0., y as f32 * cs);
            painter.rect_filled(Rect::from_min_size(min, Vec2::new(size.x, 1.)), 0.0, GRID_LINE);
        }
        for (i, _) in self.grid.cells().iter().enumerate().filter(|(_, alive)| **alive) {
            let min = origin + Vec2::new((i % w) as f32 * cs, (i / w) as f32 * cs);
            painter.rect_filled(Rect::from_min_size(min, Vec2::splat(cs)), 0.0, Color32::BLACK);
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let rel = pos - origin;
                self.controls.click(&mut self.grid, (rel.x, rel.y));
            }
        }
        if let Some(pos) = response.hover_pos() {
            let rel = pos - origin;
            self.controls.hover(&mut self.grid, (rel.x, rel.y));
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        if self.controls.tick(&mut self.grid) {
            let title = format!("Life - generation {}", self.grid.generation());
            ctx.send_viewport_cmd(ViewportCommand::Title(title));
        }
        egui::TopBottomPanel::top("controls").show(ctx, |ui| self.toolbar(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.board(ui));
        // Pacing counts frames, so keep them coming.
        ctx.request_repaint();
    }
}
