//! Grid rendering and hit testing for the terminal frontend.
//!
//! Each cell occupies a fixed-width block with one separator row above and
//! one separator column to its left; the grid carries one extra separator
//! row/column for its outer edge. The same arithmetic drives drawing and
//! mouse hit testing, so a reported coordinate is always the cell under
//! the pointer.

use gridspan_engine::{CellCoord, GridSelection};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use crate::sample::Person;

/// Content width of one cell, excluding the separator column.
pub const CELL_WIDTH: u16 = 14;

const CELL_STRIDE: usize = CELL_WIDTH as usize + 1;

/// Screen-space layout of the grid: one header row, then per data row a
/// separator row plus a content row.
///
/// Row and column counts are user-controlled, so all layout math runs in
/// `usize` and only saturates to `u16` at the buffer-coordinate boundary;
/// positions past `u16::MAX` clamp there and fail the drawable-area checks.
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    area: Rect,
    cols: usize,
    rows: usize,
}

impl GridLayout {
    pub fn new(area: Rect, cols: usize, rows: usize) -> Self {
        Self { area, cols, rows }
    }

    fn sep_col_x(&self, col: usize) -> u16 {
        saturate(self.area.x as usize + col * CELL_STRIDE)
    }

    fn content_x(&self, col: usize) -> u16 {
        saturate(self.area.x as usize + col * CELL_STRIDE + 1)
    }

    fn sep_row_y(&self, row: usize) -> u16 {
        saturate(self.area.y as usize + 1 + row.saturating_mul(2))
    }

    fn content_y(&self, row: usize) -> u16 {
        saturate(self.area.y as usize + 2 + row.saturating_mul(2))
    }

    /// Total width of the grid including the right outer edge.
    pub fn width(&self) -> usize {
        self.cols * CELL_STRIDE + 1
    }

    /// Total height including header and the bottom outer edge.
    pub fn height(&self) -> usize {
        self.rows.saturating_mul(2).saturating_add(2)
    }

    /// Map a terminal position to the cell under it. Separator lines, the
    /// header row and anything outside the grid report no cell.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<CellCoord> {
        if x < self.area.x || y < self.area.y {
            return None;
        }
        let dx = (x - self.area.x) as usize;
        let dy = (y - self.area.y) as usize;
        if dx >= self.cols * CELL_STRIDE || dx % CELL_STRIDE == 0 {
            return None;
        }
        if dy == 0 {
            return None; // header
        }
        let dy = dy - 1;
        if dy >= self.rows.saturating_mul(2) || dy % 2 == 0 {
            return None; // separator row or below the grid
        }
        Some(CellCoord::new(dx / CELL_STRIDE, dy / 2))
    }
}

fn saturate(v: usize) -> u16 {
    v.min(u16::MAX as usize) as u16
}

/// Immediate-mode widget drawing the demo grid with selection fill and
/// boundary edges.
pub struct GridView<'a> {
    pub selection: &'a GridSelection,
    pub rows: &'a [Person],
}

impl GridView<'_> {
    fn cell_style(origin: bool, selected: bool) -> Style {
        if origin {
            Style::default().bg(Color::Gray).fg(Color::Black)
        } else if selected {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        }
    }
}

impl Widget for GridView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = self.selection.grid().columns();
        let layout = GridLayout::new(area, columns.len(), self.rows.len());
        let grid_line = Style::default().fg(Color::DarkGray);
        let edge_line = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);

        let right = area.right().min(saturate(area.x as usize + layout.width()));
        let bottom = area.bottom().min(saturate(area.y as usize + layout.height()));

        // Column headers.
        for (col, column) in columns.iter().enumerate() {
            let x = layout.content_x(col);
            set_text(
                buf,
                x,
                area.y,
                right,
                &column.title,
                Style::default().add_modifier(Modifier::BOLD),
            );
        }

        // Base grid lines: separator rows, then separator columns on the
        // content rows.
        for row in 0..=self.rows.len() {
            let y = layout.sep_row_y(row);
            if y >= bottom {
                break;
            }
            for x in area.x..right {
                set_cell(buf, x, y, '─', grid_line);
            }
        }
        for row in 0..self.rows.len() {
            let y = layout.content_y(row);
            if y >= bottom {
                break;
            }
            for col in 0..=columns.len() {
                let x = layout.sep_col_x(col);
                if x < right {
                    set_cell(buf, x, y, '│', grid_line);
                }
            }
        }

        // Cell fill and text.
        for (row, person) in self.rows.iter().enumerate() {
            let y = layout.content_y(row);
            if y >= bottom {
                break;
            }
            for cell in self.selection.row_cells(row) {
                let col = cell.coord.col;
                let x = layout.content_x(col);
                let style = Self::cell_style(cell.origin, cell.selected);
                for offset in 0..CELL_WIDTH {
                    if x + offset < right {
                        set_cell(buf, x + offset, y, ' ', style);
                    }
                }
                set_text(buf, x, y, right, &person.cell_text(&columns[col].id), style);
            }
        }

        // Boundary edges drawn over the grid lines.
        for cell in self.selection.cells() {
            if !cell.boundary.any() {
                continue;
            }
            let col = cell.coord.col;
            let row = cell.coord.row;
            if cell.boundary.top {
                draw_h_edge(buf, &layout, col, layout.sep_row_y(row), right, edge_line);
            }
            if cell.boundary.bottom {
                let y = layout.sep_row_y(row + 1);
                if y < bottom {
                    draw_h_edge(buf, &layout, col, y, right, edge_line);
                }
            }
            let y = layout.content_y(row);
            if y < bottom {
                if cell.boundary.left {
                    set_cell(buf, layout.sep_col_x(col), y, '│', edge_line);
                }
                if cell.boundary.right {
                    let x = layout.sep_col_x(col + 1);
                    if x < right {
                        set_cell(buf, x, y, '│', edge_line);
                    }
                }
            }
        }
    }
}

fn set_cell(buf: &mut Buffer, x: u16, y: u16, ch: char, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_char(ch);
        cell.set_style(style);
    }
}

fn set_text(buf: &mut Buffer, x: u16, y: u16, right: u16, text: &str, style: Style) {
    for (offset, ch) in text.chars().take(CELL_WIDTH as usize - 1).enumerate() {
        let x = x + offset as u16;
        if x >= right {
            break;
        }
        set_cell(buf, x, y, ch, style);
    }
}

fn draw_h_edge(buf: &mut Buffer, layout: &GridLayout, col: usize, y: u16, right: u16, style: Style) {
    let x = layout.content_x(col);
    for offset in 0..CELL_WIDTH {
        if x + offset < right {
            set_cell(buf, x + offset, y, '─', style);
        }
    }
}
