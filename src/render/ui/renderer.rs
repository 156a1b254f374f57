//! Renderer seam.
//!
//! The event loop only knows `UIRenderer`: draw a [`ScreenState`], enter and leave the
//! terminal, report its size. Tests swap in [`tests::MockUIRenderer`], which records a summary
//! of every frame instead of drawing it.

use crate::error::Result;
use crate::render::ui::state::ScreenState;

pub trait UIRenderer {
    /// Draw one frame of the screen model
    fn render(&mut self, screen: &ScreenState) -> Result<()>;

    /// Enter raw mode and the alternate screen
    fn initialize(&mut self) -> Result<()>;

    /// Restore the terminal; safe to call more than once
    fn cleanup(&mut self) -> Result<()>;

    /// Current terminal size as `(columns, rows)`
    fn terminal_size(&self) -> Result<(u16, u16)>;
}
