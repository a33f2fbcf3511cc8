//! Table layout: column widths and border composition.
//!
//! Pure functions, (title, header, rows) → glyph grid. No terminal access;
//! `tui::view` paints the finished grid into a window.
//!
//! The grid is the whole window, borders included:
//!
//! ```text
//! ┌────Stock─────┐
//! │header line   │
//! ├─────┬────┬───┤
//! │ a   │ bb │ x │
//! ├─────┼────┴───┤
//! │ ccc │ d      │
//! └─────┴────────┘
//! ```
//!
//! Junctions are composed row by row. A divider drawn under a data row puts a
//! bottom-tee wherever that row has a vertical separator. When the next row
//! draws its own separator it looks at the glyph straight above: a bottom-tee
//! becomes a cross, a plain line becomes a top-tee. A blank cell suppresses
//! the separators on both its sides, which leaves the junctions around it as
//! lone tees.

use crate::types::TableRow;

// ============================================================================
// GLYPHS
// ============================================================================

/// Box drawing character set.
pub struct BoxChars {
    pub tl: char,    // Top-left corner
    pub tr: char,    // Top-right corner
    pub bl: char,    // Bottom-left corner
    pub br: char,    // Bottom-right corner
    pub h: char,     // Horizontal line
    pub v: char,     // Vertical line
    pub lt: char,    // Left tee
    pub rt: char,    // Right tee
    pub tt: char,    // Top tee
    pub bt: char,    // Bottom tee
    pub cross: char, // Cross
}

#[rustfmt::skip]
pub const SINGLE: BoxChars = BoxChars {
    tl: '┌', tr: '┐', bl: '└', br: '┘',
    h: '─', v: '│',
    lt: '├', rt: '┤', tt: '┬', bt: '┴',
    cross: '┼',
};

// ============================================================================
// COLUMN WIDTHS
// ============================================================================

/// Cell padding: one space on each side of the text.
const PADDING: usize = 2;

/// Width of each column: the longest cell in that column plus padding.
///
/// The column count comes from the first row. No rows, no columns.
pub fn column_widths(rows: &[TableRow]) -> Vec<usize> {
    let columns = rows.first().map_or(0, |row| row.len());
    (0..columns)
        .map(|i| {
            rows.iter()
                .map(|row| row.get(i).map_or(0, |cell| cell.chars().count()))
                .max()
                .unwrap_or(0)
                + PADDING
        })
        .collect()
}

/// An intentionally empty cell: pads out to exactly two spaces.
pub fn is_blank(cell: &str) -> bool {
    cell.is_empty()
}

// ============================================================================
// LAYOUT
// ============================================================================

/// A composed table, one char per window cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    grid: Vec<Vec<char>>,
    widths: Vec<usize>,
}

impl TableLayout {
    /// Compose title, header lines and rows into a bordered grid.
    pub fn compose(title: &str, header: &[String], rows: &[TableRow]) -> Self {
        let mut widths = column_widths(rows);
        let separators = widths.len().saturating_sub(1);
        let columns_width = widths.iter().sum::<usize>() + separators;

        let header_width = header.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let inner_width = columns_width
            .max(header_width)
            .max(title.chars().count())
            .max(1);

        // Wide header or title: the last column takes up the slack
        if let Some(last) = widths.last_mut() {
            *last += inner_width - columns_width;
        }

        let header_divider = !header.is_empty() && !rows.is_empty();
        let body_lines = if rows.is_empty() { 1 } else { rows.len() * 2 };
        let height = 1 + header.len() + usize::from(header_divider) + body_lines;
        let width = inner_width + 2;

        let mut layout = TableLayout {
            grid: vec![vec![' '; width]; height],
            widths,
        };

        layout.draw_frame();
        layout.put_str(0, (width.saturating_sub(title.chars().count())) / 2, title);

        let mut y = 1;
        for line in header {
            layout.put_str(y, 1, line);
            y += 1;
        }
        if header_divider {
            layout.draw_divider(y, false);
            y += 1;
        }

        for (i, row) in rows.iter().enumerate() {
            layout.draw_row(y, row);
            layout.draw_divider(y + 1, i + 1 == rows.len());
            y += 2;
        }

        layout
    }

    pub fn width(&self) -> usize {
        self.grid.first().map_or(0, |line| line.len())
    }

    pub fn height(&self) -> usize {
        self.grid.len()
    }

    /// Final column widths, including padding and any stretch.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// The grid as printable lines, top to bottom.
    pub fn lines(&self) -> Vec<String> {
        self.grid.iter().map(|line| line.iter().collect()).collect()
    }

    /// Glyph at (row, col), or a space outside the grid.
    pub fn glyph(&self, row: usize, col: usize) -> char {
        self.grid
            .get(row)
            .and_then(|line| line.get(col))
            .copied()
            .unwrap_or(' ')
    }

    // ------------------------------------------------------------------------
    // Drawing primitives
    // ------------------------------------------------------------------------

    fn put(&mut self, row: usize, col: usize, ch: char) {
        if let Some(cell) = self.grid.get_mut(row).and_then(|line| line.get_mut(col)) {
            *cell = ch;
        }
    }

    fn put_str(&mut self, row: usize, col: usize, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            self.put(row, col + i, ch);
        }
    }

    /// Column index of each interior boundary, left to right.
    fn boundaries(&self) -> Vec<usize> {
        let mut x = 1;
        let mut out = Vec::new();
        for (i, w) in self.widths.iter().enumerate() {
            x += w;
            if i + 1 < self.widths.len() {
                out.push(x);
                x += 1;
            }
        }
        out
    }

    fn draw_frame(&mut self) {
        let (w, h) = (self.width(), self.height());
        if w < 2 || h < 2 {
            return;
        }
        for x in 1..w - 1 {
            self.put(0, x, SINGLE.h);
            self.put(h - 1, x, SINGLE.h);
        }
        for y in 1..h - 1 {
            self.put(y, 0, SINGLE.v);
            self.put(y, w - 1, SINGLE.v);
        }
        self.put(0, 0, SINGLE.tl);
        self.put(0, w - 1, SINGLE.tr);
        self.put(h - 1, 0, SINGLE.bl);
        self.put(h - 1, w - 1, SINGLE.br);
    }

    /// Full-width horizontal line. The last one doubles as the bottom border.
    fn draw_divider(&mut self, y: usize, bottom: bool) {
        let w = self.width();
        for x in 1..w - 1 {
            self.put(y, x, SINGLE.h);
        }
        let (left, right) = if bottom {
            (SINGLE.bl, SINGLE.br)
        } else {
            (SINGLE.lt, SINGLE.rt)
        };
        self.put(y, 0, left);
        self.put(y, w - 1, right);

        if y == 0 {
            return;
        }
        for b in self.boundaries() {
            if self.glyph(y - 1, b) == SINGLE.v {
                self.put(y, b, SINGLE.bt);
            }
        }
    }

    fn draw_row(&mut self, y: usize, row: &TableRow) {
        let cell = |i: usize| row.get(i).map_or("", String::as_str);

        let mut x = 1;
        for (i, w) in self.widths.clone().into_iter().enumerate() {
            self.put_str(y, x + 1, cell(i));
            x += w;
            if i + 1 < self.widths.len() {
                if is_blank(cell(i)) || is_blank(cell(i + 1)) {
                    self.put(y, x, ' ');
                } else {
                    self.put(y, x, SINGLE.v);
                    self.join_above(y, x);
                }
                x += 1;
            }
        }
    }

    /// Connect a vertical separator at (y, x) to the line above it.
    fn join_above(&mut self, y: usize, x: usize) {
        let above = self.glyph(y - 1, x);
        if above == SINGLE.bt {
            self.put(y - 1, x, SINGLE.cross);
        } else if above == SINGLE.h {
            self.put(y - 1, x, SINGLE.tt);
        }
        // Anything else is title text on the top border; leave it.
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<TableRow> {
        data.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn column_width_is_longest_cell_plus_padding() {
        let rows = rows(&[&["a", "bb"], &["ccc", "d"]]);
        assert_eq!(column_widths(&rows), vec![5, 4]);
    }

    #[test]
    fn no_rows_means_no_columns() {
        assert!(column_widths(&[]).is_empty());
    }

    #[test]
    fn empty_cell_is_blank() {
        assert!(is_blank(""));
        assert!(!is_blank(" "));
        assert!(!is_blank("x"));
    }

    #[test]
    fn full_grid_has_continuous_junctions() {
        let layout = TableLayout::compose("", &[], &rows(&[&["a", "bb"], &["ccc", "d"]]));
        assert_eq!(
            layout.lines(),
            vec![
                "┌─────┬────┐",
                "│ a   │ bb │",
                "├─────┼────┤",
                "│ ccc │ d  │",
                "└─────┴────┘",
            ]
        );
    }

    #[test]
    fn blank_cell_suppresses_separator() {
        let layout = TableLayout::compose(
            "",
            &[],
            &rows(&[&["a", "b"], &["", "c"], &["d", "e"]]),
        );
        let lines = layout.lines();
        assert_eq!(lines[1], "│ a │ b │");
        // Separator above continues down into a gap: lone bottom-tee
        assert_eq!(lines[2], "├───┴───┤");
        assert_eq!(lines[3], "│     c │");
        // Nothing above, separator below: lone top-tee
        assert_eq!(lines[4], "├───┬───┤");
        assert_eq!(lines[6], "└───┴───┘");
    }

    #[test]
    fn header_gets_a_divider_with_top_tees() {
        let header = vec!["Fruit list".to_string()];
        let layout = TableLayout::compose("", &header, &rows(&[&["apple", "3"]]));
        let lines = layout.lines();
        assert_eq!(lines[1], "│Fruit list │");
        assert_eq!(lines[2], "├───────┬───┤");
        assert_eq!(lines[3], "│ apple │ 3 │");
        assert_eq!(lines[4], "└───────┴───┘");
    }

    #[test]
    fn wide_title_stretches_last_column() {
        let layout = TableLayout::compose("Inventory", &[], &rows(&[&["a", "b"]]));
        assert_eq!(layout.width(), 11);
        assert_eq!(layout.widths(), &[3, 5]);
        assert_eq!(layout.lines()[0], "┌Inventory┐");
        assert_eq!(layout.lines()[1], "│ a │ b   │");
    }

    #[test]
    fn title_is_not_overwritten_by_junction() {
        // The boundary at column 4 falls on the title's third character
        let layout = TableLayout::compose("xyzzy", &[], &rows(&[&["a", "b"]]));
        assert_eq!(layout.lines()[0], "┌─xyzzy─┐");
        assert_eq!(layout.glyph(1, 4), '│');
    }

    #[test]
    fn zero_row_table_still_has_frame_and_header() {
        let header = vec!["empty".to_string()];
        let layout = TableLayout::compose("T", &header, &[]);
        assert_eq!(layout.lines(), vec!["┌──T──┐", "│empty│", "└─────┘"]);
    }

    #[test]
    fn zero_row_zero_header_table_floors_at_one_column() {
        let layout = TableLayout::compose("", &[], &[]);
        assert_eq!(layout.width(), 3);
        assert_eq!(layout.lines(), vec!["┌─┐", "└─┘"]);
    }

    #[test]
    fn ragged_row_renders_missing_cells_empty() {
        let layout = TableLayout::compose("", &[], &rows(&[&["a", "b"], &["c"]]));
        assert_eq!(layout.lines()[3], "│ c     │");
    }
}
