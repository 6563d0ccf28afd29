//! Backend-neutral draw list for one frame.

use super::layout::{self, BACKGROUND, INK, Point, RESULT_BAND, Rect, Rgb, SURFACE};
use super::{Match, Opponent, Player};
use tracing::instrument;

/// One drawing operation, in surface coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole surface.
    Clear(Rgb),
    /// A one-pixel line.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Line color.
        color: Rgb,
    },
    /// The image for `player`'s mark stretched into `rect`.
    Mark {
        /// Whose mark to draw.
        player: Player,
        /// Destination rectangle.
        rect: Rect,
    },
    /// A solid rectangle.
    Fill {
        /// Area to fill.
        rect: Rect,
        /// Fill color.
        color: Rgb,
    },
    /// A single line of text centered in `band`.
    Text {
        /// Text to draw.
        text: String,
        /// Area the text is centered in.
        band: Rect,
        /// Text color.
        color: Rgb,
    },
}

/// Ordered draw commands describing a frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    /// Builds the frame for `game`: background, grid, marks, and the
    /// result overlay once the game is over.
    #[instrument(skip(game))]
    pub fn build<O: Opponent>(game: &Match<O>) -> Self {
        let mut commands = vec![DrawCommand::Clear(BACKGROUND)];

        commands.extend(layout::grid_lines().into_iter().map(|(from, to)| DrawCommand::Line {
            from,
            to,
            color: INK,
        }));

        commands.extend(game.board().marks().map(|(pos, player)| DrawCommand::Mark {
            player,
            rect: layout::cell_rect(pos),
        }));

        if let Some(outcome) = game.outcome() {
            commands.push(DrawCommand::Fill {
                rect: SURFACE,
                color: BACKGROUND,
            });
            commands.push(DrawCommand::Text {
                text: outcome.to_string(),
                band: RESULT_BAND,
                color: INK,
            });
        }

        Self { commands }
    }

    /// Returns the commands in paint order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl IntoIterator for Scene {
    type Item = DrawCommand;
    type IntoIter = std::vec::IntoIter<DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
