use std::io::{self, Write};

use crossterm::cursor::MoveUp;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

/// Redraws a block of lines in place.
///
/// The first frame is printed as-is; each later frame first moves the cursor up
/// over the previous frame and clears to the end of the screen.
#[derive(Debug, Default)]
pub struct Screen {
    drawn: Option<usize>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn present<W: Write>(&mut self, out: &mut W, lines: &[String]) -> io::Result<()> {
        if let Some(height) = self.drawn.filter(|h| *h > 0) {
            let up = u16::try_from(height).unwrap_or(u16::MAX);
            queue!(out, MoveUp(up), Clear(ClearType::FromCursorDown))?;
        }

        for line in lines {
            writeln!(out, "{line}")?;
        }
        out.flush()?;

        self.drawn = Some(lines.len());
        Ok(())
    }

    /// Something else was written below the last frame; print the next one fresh.
    pub fn invalidate(&mut self) {
        self.drawn = None;
    }
}
