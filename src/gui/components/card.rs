//! Discovery card: paints the controller's render frame and feeds it pointer input

use eframe::egui;
use egui::emath::Rot2;
use egui::epaint::TextShape;

use super::to_color32;
use crate::catalog::{CardColors, Hangout, card_colors};
use crate::color::Rgba;
use crate::gui::constants::*;
use crate::swipe::{RenderFrame, SwipeController};
use crate::types::SwipeDirection;

/// Pointer drag bookkeeping between frames
#[derive(Default)]
pub struct CardView {
    /// Accumulated drag since touch-down, `None` when the touch was rejected
    drag: Option<egui::Vec2>,
}

impl CardView {
    pub fn ui(&mut self, ui: &mut egui::Ui, controller: &mut SwipeController) {
        let available = ui.available_size();
        let card_size = egui::vec2(available.x * CARD_WIDTH_RATIO, available.y * CARD_HEIGHT_RATIO);
        let (slot, response) =
            ui.allocate_exact_size(egui::vec2(available.x, card_size.y), egui::Sense::click_and_drag());

        self.handle_input(&response, controller);

        let frame = controller.frame();
        let card_rect = egui::Rect::from_center_size(slot.center(), card_size);
        let painter = ui.painter();

        if frame.hidden {
            if let Some(next) = frame.preload_index {
                preload(painter, &controller.deck().cards()[next], card_rect.width());
            }
            return;
        }

        paint_card(painter, card_rect, &frame, controller.current(), card_colors(frame.card_index));
    }

    fn handle_input(&mut self, response: &egui::Response, controller: &mut SwipeController) {
        if response.drag_started() {
            self.drag = controller.touch_down().then_some(egui::Vec2::ZERO);
        }
        if response.dragged() {
            if let Some(total) = self.drag.as_mut() {
                *total += response.drag_delta();
                controller.touch_move(total.x, total.y);
            }
        }
        if response.drag_stopped() {
            if let Some(total) = self.drag.take() {
                controller.touch_release(total.x, total.y);
            }
        }
        if response.clicked() {
            controller.tap_card();
        }
    }
}

/// "No", "Save" and "Yes" buttons under the card
pub fn action_buttons(ui: &mut egui::Ui, controller: &mut SwipeController) {
    ui.horizontal(|ui| {
        let row_width = ACTION_BUTTON_SIZE.x * 3.0 + ITEM_SPACING * 2.0;
        ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));

        for (direction, color) in [
            (SwipeDirection::No, NO_COLOR),
            (SwipeDirection::Save, SAVE_COLOR),
            (SwipeDirection::Yes, YES_COLOR),
        ] {
            let text = egui::RichText::new(button_label(direction))
                .color(egui::Color32::WHITE)
                .strong();
            let button = egui::Button::new(text).fill(color).min_size(ACTION_BUTTON_SIZE);
            if ui.add(button).clicked() {
                controller.press(direction);
            }
            ui.add_space(ITEM_SPACING);
        }
    });
}

fn button_label(direction: SwipeDirection) -> &'static str {
    match direction {
        SwipeDirection::No => "No",
        SwipeDirection::Save => "Save",
        SwipeDirection::Yes => "Yes",
    }
}

/// Maps card-local points into screen space: rotate about the card centre,
/// then translate by the swipe offset
struct Placement {
    origin: egui::Pos2,
    center: egui::Pos2,
    rotation: Rot2,
    angle: f32,
}

impl Placement {
    fn new(card_rect: egui::Rect, frame: &RenderFrame) -> Self {
        let angle = frame.rotation_deg.to_radians();
        Self {
            origin: card_rect.center(),
            center: card_rect.center() + egui::vec2(frame.translation.x, frame.translation.y),
            rotation: Rot2::from_angle(angle),
            angle,
        }
    }

    fn place(&self, point: egui::Pos2) -> egui::Pos2 {
        self.center + self.rotation * (point - self.origin)
    }

    fn quad(&self, rect: egui::Rect) -> Vec<egui::Pos2> {
        [rect.left_top(), rect.right_top(), rect.right_bottom(), rect.left_bottom()]
            .into_iter()
            .map(|p| self.place(p))
            .collect()
    }

    fn fill(&self, painter: &egui::Painter, rect: egui::Rect, color: egui::Color32) {
        painter.add(egui::Shape::convex_polygon(self.quad(rect), color, egui::Stroke::NONE));
    }

    fn text(&self, painter: &egui::Painter, at: egui::Pos2, text: String, size: f32, color: egui::Color32, wrap: f32) {
        let galley = painter.layout(text, egui::FontId::proportional(size), color, wrap);
        painter.add(TextShape::new(self.place(at), galley, color).with_angle(self.angle));
    }
}

fn paint_card(painter: &egui::Painter, card_rect: egui::Rect, frame: &RenderFrame, hangout: &Hangout, colors: CardColors) {
    let placement = Placement::new(card_rect, frame);
    let wrap = card_rect.width() - CARD_TEXT_MARGIN * 2.0;
    let inset = egui::vec2(CARD_TEXT_MARGIN, CARD_TEXT_MARGIN);

    placement.fill(painter, card_rect.translate(CARD_SHADOW_OFFSET), CARD_SHADOW);

    if frame.flipped {
        placement.fill(painter, card_rect, to_color32(colors.header));
        placement.text(
            painter,
            card_rect.left_top() + inset,
            format!("Posted by @{}", hangout.poster.username),
            20.0,
            to_color32(colors.text),
            wrap,
        );
        placement.text(
            painter,
            card_rect.left_bottom() + egui::vec2(CARD_TEXT_MARGIN, -CARD_TEXT_MARGIN * 2.0),
            "Tap to flip back".to_string(),
            14.0,
            to_color32(colors.text),
            wrap,
        );
        return;
    }

    let header_height = card_rect.height() * CARD_HEADER_RATIO;
    let header = egui::Rect::from_min_size(card_rect.min, egui::vec2(card_rect.width(), header_height));
    let body = egui::Rect::from_min_max(egui::pos2(card_rect.min.x, header.max.y), card_rect.max);

    // Swipe feedback replaces the scheme body colour while the tint is active
    let body_fill = if frame.tint == Rgba::WHITE { colors.body } else { frame.tint };
    placement.fill(painter, header, to_color32(colors.header));
    placement.fill(painter, body, to_color32(body_fill));

    let text = to_color32(colors.text);
    let body_text = to_color32(colors.body_text);
    placement.text(painter, header.left_top() + inset, hangout.title.clone(), 24.0, text, wrap);
    placement.text(
        painter,
        header.left_bottom() + egui::vec2(CARD_TEXT_MARGIN, -CARD_TEXT_MARGIN * 1.5),
        format!("@{}", hangout.poster.username),
        14.0,
        text,
        wrap,
    );

    let mut cursor = body.left_top() + inset;
    for (line, size) in [
        (hangout.description.clone(), 16.0),
        (format!("Where: {}", hangout.location), 14.0),
        (format!("When: {} at {}", hangout.date, hangout.time), 14.0),
    ] {
        let height = painter.layout(line.clone(), egui::FontId::proportional(size), body_text, wrap).size().y;
        placement.text(painter, cursor, line, size, body_text, wrap);
        cursor.y += height + ITEM_SPACING * 2.0;
    }
}

/// Lay out the next card's text so its galleys are cached before it shows
fn preload(painter: &egui::Painter, next: &Hangout, width: f32) {
    let wrap = width - CARD_TEXT_MARGIN * 2.0;
    for (text, size) in [(&next.title, 24.0), (&next.description, 16.0)] {
        let _ = painter.layout(text.clone(), egui::FontId::proportional(size), egui::Color32::TRANSPARENT, wrap);
    }
}
