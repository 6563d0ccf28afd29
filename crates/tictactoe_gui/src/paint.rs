//! Paints a [`Scene`] with egui.

use eframe::egui::{self, Color32, CornerRadius, FontFamily, FontId, Pos2, Stroke, TextureHandle, pos2, vec2};
use tictactoe_core::layout::{Point, Rect, Rgb};
use tictactoe_core::{DrawCommand, Player, Scene};

/// Point size the result text is laid out at before fitting the band.
const RESULT_TEXT_SIZE: f32 = 100.0;

/// GPU textures for the two marks.
pub struct MarkTextures {
    /// Texture for X.
    pub x: TextureHandle,
    /// Texture for O.
    pub o: TextureHandle,
}

impl MarkTextures {
    fn for_player(&self, player: Player) -> &TextureHandle {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }
}

/// Paints every command of `scene` with the surface's top-left at `origin`.
pub fn paint_scene(
    painter: &egui::Painter,
    origin: Pos2,
    scene: &Scene,
    textures: &MarkTextures,
    family: &FontFamily,
) {
    let full_uv = egui::Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));

    for command in scene {
        match command {
            DrawCommand::Clear(color) => {
                painter.rect_filled(painter.clip_rect(), CornerRadius::ZERO, to_color(*color));
            }
            DrawCommand::Line { from, to, color } => {
                painter.line_segment(
                    [to_pos(origin, *from), to_pos(origin, *to)],
                    Stroke::new(1.0, to_color(*color)),
                );
            }
            DrawCommand::Mark { player, rect } => {
                painter.image(
                    textures.for_player(*player).id(),
                    to_rect(origin, *rect),
                    full_uv,
                    Color32::WHITE,
                );
            }
            DrawCommand::Fill { rect, color } => {
                painter.rect_filled(to_rect(origin, *rect), CornerRadius::ZERO, to_color(*color));
            }
            DrawCommand::Text { text, band, color } => {
                paint_centered_text(painter, origin, text, *band, to_color(*color), family);
            }
        }
    }
}

/// Lays the text out at [`RESULT_TEXT_SIZE`], shrinks it to fit `band` if
/// needed, and centers it there.
fn paint_centered_text(
    painter: &egui::Painter,
    origin: Pos2,
    text: &str,
    band: Rect,
    color: Color32,
    family: &FontFamily,
) {
    let layout = |size: f32| {
        painter.layout_no_wrap(text.to_owned(), FontId::new(size, family.clone()), color)
    };

    let mut galley = layout(RESULT_TEXT_SIZE);
    let scale = fit_scale(galley.size(), band);
    if scale < 1.0 {
        galley = layout(RESULT_TEXT_SIZE * scale);
    }

    let center = to_pos(origin, band.center());
    painter.galley(center - galley.size() / 2.0, galley, color);
}

/// Factor that fits `size` inside `band` (at most 1).
fn fit_scale(size: egui::Vec2, band: Rect) -> f32 {
    let sx = if size.x > 0.0 { band.width / size.x } else { 1.0 };
    let sy = if size.y > 0.0 { band.height / size.y } else { 1.0 };
    sx.min(sy).min(1.0)
}

fn to_color(Rgb(r, g, b): Rgb) -> Color32 {
    Color32::from_rgb(r, g, b)
}

fn to_pos(origin: Pos2, point: Point) -> Pos2 {
    origin + vec2(point.x, point.y)
}

fn to_rect(origin: Pos2, rect: Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        to_pos(origin, Point::new(rect.x, rect.y)),
        vec2(rect.width, rect.height),
    )
}
