use std::error::Error;

use eframe::egui;
use eframe::egui::emath::RectTransform;
use eframe::egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};
use log::debug;

use crate::interaction::{DiagramLayout, InteractionGraph};

const WINDOW_SIZE: Vec2 = Vec2::new(1400.0, 1000.0);
const NODE_RADIUS: f32 = 42.0;
const ARROW_SIZE: f32 = 16.0;
const TITLE: &str = "R-Avr Gene Interactions (Left-Right Layout)";

/// Opens the diagram window and blocks until it is closed.
pub fn show(graph: InteractionGraph, layout: DiagramLayout) -> Result<(), Box<dyn Error>> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };
    let app = DiagramApp { graph, layout };
    eframe::run_native("avrMap", options, Box::new(move |_cc| Box::new(app)))?;
    debug!("diagram window closed");
    Ok(())
}

struct DiagramApp {
    graph: InteractionGraph,
    layout: DiagramLayout,
}

impl eframe::App for DiagramApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::WHITE))
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), Sense::hover());
                let painter = ui.painter_at(rect);
                self.paint(&painter, rect);
            });
    }
}

impl DiagramApp {
    fn paint(&self, painter: &egui::Painter, rect: Rect) {
        painter.text(
            Pos2::new(rect.center().x, rect.top() + 18.0),
            Align2::CENTER_TOP,
            TITLE,
            FontId::proportional(22.0),
            Color32::BLACK,
        );

        let canvas = rect.shrink2(Vec2::new(160.0, 90.0));
        let to_screen = self.world_transform(canvas);

        // edges first so the discs cover the line ends
        for (source, target) in self.graph.edges() {
            if let (Some(from), Some(to)) = (
                self.screen_pos(source, &to_screen),
                self.screen_pos(target, &to_screen),
            ) {
                draw_arrow(painter, from, to);
            }
        }

        for name in self.graph.node_names() {
            let Some(center) = self.screen_pos(name, &to_screen) else {
                continue;
            };
            let (r, g, b) = self.layout.color_of(name).unwrap_or((127, 127, 127));
            painter.circle_filled(center, NODE_RADIUS, Color32::from_rgb(r, g, b));
            painter.text(
                center,
                Align2::CENTER_CENTER,
                name,
                FontId::proportional(14.0),
                Color32::BLACK,
            );
        }
    }

    /// Maps diagram units onto the canvas, sized to the nodes actually in
    /// the graph.
    fn world_transform(&self, canvas: Rect) -> RectTransform {
        let mut min = Pos2::new(f32::MAX, f32::MAX);
        let mut max = Pos2::new(f32::MIN, f32::MIN);
        for name in self.graph.node_names() {
            if let Some((x, y)) = self.layout.position_of(name) {
                min.x = min.x.min(x);
                min.y = min.y.min(y);
                max.x = max.x.max(x);
                max.y = max.y.max(y);
            }
        }
        if min.x > max.x {
            min = Pos2::ZERO;
            max = Pos2::new(1.0, 1.0);
        }
        if max.x - min.x < f32::EPSILON {
            max.x = min.x + 1.0;
        }
        if max.y - min.y < f32::EPSILON {
            max.y = min.y + 1.0;
        }
        RectTransform::from_to(Rect::from_min_max(min, max), canvas)
    }

    fn screen_pos(&self, name: &str, to_screen: &RectTransform) -> Option<Pos2> {
        let (x, y) = self.layout.position_of(name)?;
        let world = to_screen.from();
        // flip y so row zero sits at the bottom of the canvas
        let flipped = world.max.y - (y - world.min.y);
        Some(to_screen.transform_pos(Pos2::new(x, flipped)))
    }
}

fn draw_arrow(painter: &egui::Painter, from: Pos2, to: Pos2) {
    let delta = to - from;
    let dist = delta.length();
    if dist <= NODE_RADIUS * 2.0 {
        return;
    }
    let dir = delta / dist;

    let start = from + dir * NODE_RADIUS;
    let tip = to - dir * NODE_RADIUS;
    let back = tip - dir * ARROW_SIZE;
    painter.line_segment([start, back], Stroke::new(1.5, Color32::BLACK));

    let perp = Vec2::new(-dir.y, dir.x) * (ARROW_SIZE * 0.5);
    painter.add(egui::Shape::convex_polygon(
        vec![tip, back + perp, back - perp],
        Color32::BLACK,
        Stroke::NONE,
    ));
}
