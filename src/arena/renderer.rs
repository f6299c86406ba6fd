use std::fmt;
use std::io::Write;

use tracing::warn;

/// Displays positions to a human. Purely a side effect: nothing it does can
/// influence a match.
pub trait Renderer<P> {
    fn render(&mut self, position: &P);
}

/// Renderer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl<P> Renderer<P> for NoopRenderer {
    fn render(&mut self, _position: &P) {}
}

/// Writes each position's text form, framed by separator lines.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        TextRenderer { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TextRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

const SEPARATOR: &str = " -----------------------";

impl<P: fmt::Display, W: Write> Renderer<P> for TextRenderer<W> {
    fn render(&mut self, position: &P) {
        let result = write!(self.out, "{SEPARATOR}\n{position}{SEPARATOR}\n")
            .and_then(|()| self.out.flush());
        if let Err(err) = result {
            warn!(%err, "failed to render position");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Player};

    #[test]
    fn text_renderer_writes_framed_board() {
        let board = Board::new(2, 3, 2).with_move(Player::Red, 1).unwrap();
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(&board);
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text, format!("{SEPARATOR}\n. . .\n. X .\n{SEPARATOR}\n"));
    }

    #[test]
    fn noop_renderer_accepts_any_position() {
        let mut renderer = NoopRenderer;
        Renderer::<Board>::render(&mut renderer, &Board::new(6, 7, 4));
        Renderer::<u32>::render(&mut renderer, &5);
    }
}
