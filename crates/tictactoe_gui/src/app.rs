//! The eframe application: input, clock and painting around a [`Match`].

use crate::assets::{Assets, MarkImage};
use crate::paint::{self, MarkTextures};
use eframe::egui::{self, ColorImage, FontData, FontDefinitions, FontFamily, TextureOptions};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tictactoe_core::{FirstEmpty, Match, Player, Scene};
use tracing::{debug, info, instrument};

/// Font family name registered for the result text.
const RESULT_FAMILY: &str = "result";

/// Window application holding the single match of this process.
pub struct TicTacToeApp {
    game: Match,
    textures: MarkTextures,
    family: FontFamily,
}

impl TicTacToeApp {
    /// Uploads the assets and starts a fresh match.
    #[instrument(skip_all, fields(delay_ms = delay.as_millis() as u64))]
    pub fn new(cc: &eframe::CreationContext<'_>, assets: Assets, delay: Duration) -> Self {
        let ctx = &cc.egui_ctx;
        let textures = MarkTextures {
            x: upload(ctx, "x-mark", assets.mark(Player::X)),
            o: upload(ctx, "o-mark", assets.mark(Player::O)),
        };
        let family = install_font(ctx, assets.font().to_vec());

        info!("Match started");
        Self {
            game: Match::with_opponent(FirstEmpty, delay),
            textures,
            family,
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let clicks = primary_presses(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                let origin = ui.max_rect().min;
                step(&mut self.game, &clicks, origin, now);

                let scene = Scene::build(&self.game);
                paint::paint_scene(ui.painter(), origin, &scene, &self.textures, &self.family);
            });

        // Wake up for the opponent even when no input arrives.
        if let Some(deadline) = self.game.pending_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}

/// Feeds one frame's clicks and clock reading into the match.
///
/// Clicks arrive in window coordinates and are shifted by the panel
/// `origin` onto the board surface before the tick.
fn step(game: &mut Match, clicks: &[egui::Pos2], origin: egui::Pos2, now: Instant) {
    let mut next = std::mem::take(game);
    for click in clicks {
        debug!(x = click.x, y = click.y, "Mouse down");
        next = next.click_at(click.x - origin.x, click.y - origin.y, now);
    }
    *game = next.tick(now);
}

/// Positions of primary mouse-button presses this frame.
fn primary_presses(ctx: &egui::Context) -> Vec<egui::Pos2> {
    ctx.input(|input| {
        input
            .events
            .iter()
            .filter_map(|event| match event {
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed: true,
                    ..
                } => Some(*pos),
                _ => None,
            })
            .collect()
    })
}

fn upload(ctx: &egui::Context, name: &str, image: &MarkImage) -> egui::TextureHandle {
    let pixels = ColorImage::from_rgba_unmultiplied(image.size, &image.rgba);
    ctx.load_texture(name, pixels, TextureOptions::LINEAR)
}

/// Registers the result font under its own family.
fn install_font(ctx: &egui::Context, bytes: Vec<u8>) -> FontFamily {
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(RESULT_FAMILY.to_owned(), Arc::new(FontData::from_owned(bytes)));

    let family = FontFamily::Name(RESULT_FAMILY.into());
    fonts
        .families
        .insert(family.clone(), vec![RESULT_FAMILY.to_owned()]);
    ctx.set_fonts(fonts);
    family
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{OPPONENT_DELAY, Phase, Position, Square};

    #[test]
    fn test_step_maps_clicks_relative_to_origin() {
        let mut game = Match::new();
        let origin = egui::pos2(0.0, 300.0);

        step(&mut game, &[egui::pos2(50.0, 310.0)], origin, Instant::now());

        assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::X));
        assert!(game.board().is_empty(Position::MiddleLeft));
    }

    #[test]
    fn test_step_only_first_click_of_frame_lands() {
        let mut game = Match::new();
        let now = Instant::now();
        let clicks = [egui::pos2(100.0, 100.0), egui::pos2(300.0, 300.0)];

        step(&mut game, &clicks, egui::Pos2::ZERO, now);

        assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::X));
        assert!(game.board().is_empty(Position::Center));
        assert_eq!(game.pending_deadline(), Some(now + OPPONENT_DELAY));
    }

    #[test]
    fn test_step_ticks_opponent_without_clicks() {
        let mut game = Match::new();
        let now = Instant::now();
        step(&mut game, &[egui::pos2(300.0, 300.0)], egui::Pos2::ZERO, now);

        step(&mut game, &[], egui::Pos2::ZERO, now + OPPONENT_DELAY / 2);
        assert_eq!(game.board().count(Player::O), 0);

        step(&mut game, &[], egui::Pos2::ZERO, now + OPPONENT_DELAY);
        assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::O));
        assert_eq!(game.phase(), Phase::HumanTurn);
    }
}
