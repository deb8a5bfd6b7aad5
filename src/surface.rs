//! Character-grid output.
//!
//! The game only ever talks to a [`Surface`]: it clears the grid, writes
//! glyphs cell by cell and flushes once per frame. [`TerminalSurface`] backs
//! that with a ratatui terminal; [`HeadlessSurface`] keeps everything in
//! memory.

use std::{error::Error, fmt, io};

use anyhow::{Context, Result};
use log::info;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    DefaultTerminal,
};

pub trait Surface {
    /// Grid size as `(width, height)`.
    fn size(&self) -> (u16, u16);

    /// Cells outside the grid are ignored.
    fn set_cell(&mut self, col: i32, row: i32, glyph: char);

    fn clear(&mut self);

    fn flush(&mut self) -> Result<()>;

    fn shutdown(&mut self) -> Result<()>;
}

fn grid_position(col: i32, row: i32, (width, height): (u16, u16)) -> Option<(u16, u16)> {
    let col = u16::try_from(col).ok()?;
    let row = u16::try_from(row).ok()?;
    (col < width && row < height).then_some((col, row))
}

/// The terminal could not be put into game mode.
#[derive(Debug)]
pub struct DisplayInitError {
    source: io::Error,
}

impl fmt::Display for DisplayInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to initialise the terminal display: {}", self.source)
    }
}

impl Error for DisplayInitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

impl From<io::Error> for DisplayInitError {
    fn from(source: io::Error) -> Self {
        Self { source }
    }
}

pub struct TerminalSurface {
    terminal: DefaultTerminal,
    grid: Buffer,
    style: Style,
    active: bool,
}

impl TerminalSurface {
    /// Enter raw mode and the alternate screen, sized to the current terminal.
    pub fn init() -> Result<Self, DisplayInitError> {
        let terminal = ratatui::try_init()?;
        let size = match terminal.size() {
            Ok(size) => size,
            Err(err) => {
                ratatui::restore();
                return Err(err.into());
            }
        };
        info!("terminal display ready, {}x{}", size.width, size.height);

        Ok(Self {
            terminal,
            grid: Buffer::empty(Rect::new(0, 0, size.width, size.height)),
            style: Style::default().fg(Color::White).bg(Color::Black),
            active: true,
        })
    }
}

impl Surface for TerminalSurface {
    fn size(&self) -> (u16, u16) {
        (self.grid.area.width, self.grid.area.height)
    }

    fn set_cell(&mut self, col: i32, row: i32, glyph: char) {
        let Some(position) = grid_position(col, row, self.size()) else {
            return;
        };
        if let Some(cell) = self.grid.cell_mut(position) {
            cell.set_char(glyph).set_style(self.style);
        }
    }

    fn clear(&mut self) {
        self.grid.reset();
        self.grid.set_style(self.grid.area, self.style);
    }

    fn flush(&mut self) -> Result<()> {
        let grid = &self.grid;
        self.terminal
            .draw(|frame| frame.buffer_mut().merge(grid))
            .context("failed to draw frame")?;
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        if self.active {
            ratatui::restore();
            self.active = false;
            info!("terminal display restored");
        }
        Ok(())
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

/// In-memory grid, for running the game without a terminal.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    width: u16,
    height: u16,
    cells: Vec<char>,
    flushes: usize,
    shut_down: bool,
}

impl HeadlessSurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width as usize * height as usize],
            flushes: 0,
            shut_down: false,
        }
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<char> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.cells
            .get(row as usize * self.width as usize + col as usize)
            .copied()
    }

    pub fn row_text(&self, row: u16) -> String {
        (0..self.width)
            .filter_map(|col| self.cell(col, row))
            .collect()
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }
}

impl Surface for HeadlessSurface {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn set_cell(&mut self, col: i32, row: i32, glyph: char) {
        if let Some((col, row)) = grid_position(col, row, self.size()) {
            self.cells[row as usize * self.width as usize + col as usize] = glyph;
        }
    }

    fn clear(&mut self) {
        self.cells.fill(' ');
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        self.shut_down = true;
        Ok(())
    }
}
