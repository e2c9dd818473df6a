//! Character meshes.
//!
//! A mesh is an ordered list of character rows. Rows may be ragged after a
//! trim pass; `width()` is the longest row. A space is transparent and never
//! solid. Local cells are `(row, col)`.

use std::fmt;

mod coords;
mod trim;

pub use coords::{coords_to_mesh, PlacedMesh, MAX_MESH_EXTENT};
pub use trim::{optimize_mesh, trim_mesh, OptimizedMesh};

/// Local mesh coordinate `(row, col)`.
pub type LocalCell = (usize, usize);

pub const BLANK: char = ' ';

/// Paint rules for [`Mesh::stamp`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StampMode {
    /// Source spaces leave the destination alone.
    pub only_nonempty: bool,
    /// Occupied destination cells are cleared instead of overwritten.
    pub replace_with_space: bool,
}

impl Default for StampMode {
    fn default() -> Self {
        StampMode { only_nonempty: true, replace_with_space: false }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mesh {
    rows: Vec<Vec<char>>,
}

impl Mesh {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        Self {
            rows: rows.iter().map(|r| r.as_ref().chars().collect()).collect(),
        }
    }

    pub fn from_grid(rows: Vec<Vec<char>>) -> Self {
        Self { rows }
    }

    /// `height` rows of `width` spaces.
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            rows: vec![vec![BLANK; width]; height],
        }
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Write `ch` at `(row, col)`. Out-of-range writes are dropped.
    pub fn set(&mut self, row: usize, col: usize, ch: char) -> bool {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = ch;
                true
            }
            None => false,
        }
    }

    pub fn count_char(&self, ch: char) -> usize {
        self.rows.iter().flatten().filter(|&&c| c == ch).count()
    }

    /// Number of non-space cells.
    pub fn solid_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&c| c != BLANK).count()
    }

    /// Non-space cells in row-major order.
    pub fn solid_cells(&self) -> Vec<LocalCell> {
        let mut cells = Vec::with_capacity(self.solid_count());
        for (r, row) in self.rows.iter().enumerate() {
            for (c, &ch) in row.iter().enumerate() {
                if ch != BLANK {
                    cells.push((r, c));
                }
            }
        }
        cells
    }

    /// Every cell, spaces included, in row-major order.
    pub fn all_cells(&self) -> Vec<LocalCell> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| (0..row.len()).map(move |c| (r, c)))
            .collect()
    }

    /// Composite `src` with its `(0, 0)` at `(row, col)`; cells falling off
    /// this mesh are dropped. Returns the number of cells written.
    pub fn stamp(&mut self, src: &Mesh, row: i64, col: i64, mode: StampMode) -> usize {
        let mut written = 0;
        for (r, src_row) in src.rows.iter().enumerate() {
            let tr = row + r as i64;
            if tr < 0 {
                continue;
            }
            let Some(dest_row) = self.rows.get_mut(tr as usize) else {
                break;
            };
            for (c, &ch) in src_row.iter().enumerate() {
                let tc = col + c as i64;
                if tc < 0 {
                    continue;
                }
                let Some(dest) = dest_row.get_mut(tc as usize) else {
                    break;
                };
                if mode.replace_with_space && *dest != BLANK {
                    *dest = BLANK;
                    written += 1;
                } else if !mode.only_nonempty || ch != BLANK {
                    *dest = ch;
                    written += 1;
                }
            }
        }
        written
    }

    pub fn row_string(&self, row: usize) -> String {
        self.rows.get(row).map(|r| r.iter().collect()).unwrap_or_default()
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.iter().collect()).collect()
    }
}

impl fmt::Display for Mesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for ch in row {
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_rows_report_longest_width() {
        let mesh = Mesh::from_rows(&["ab", "", "abcd"]);
        assert_eq!(mesh.width(), 4);
        assert_eq!(mesh.height(), 3);
        assert_eq!(mesh.get(2, 3), Some('d'));
        assert_eq!(mesh.get(1, 0), None);
    }

    #[test]
    fn solid_cells_skip_spaces() {
        let mesh = Mesh::from_rows(&["# #", " # "]);
        assert_eq!(mesh.solid_cells(), vec![(0, 0), (0, 2), (1, 1)]);
        assert_eq!(mesh.solid_count(), 3);
        assert_eq!(mesh.all_cells().len(), 6);
    }

    #[test]
    fn stamp_honours_transparency_and_clipping() {
        let mut screen = Mesh::blank(4, 2);
        let src = Mesh::from_rows(&["a b", "ccc"]);
        let written = screen.stamp(&src, 0, 2, StampMode::default());
        assert_eq!(written, 3);
        assert_eq!(screen.to_strings(), vec!["  a ", "  cc"]);

        let opaque = StampMode { only_nonempty: false, replace_with_space: false };
        screen.stamp(&Mesh::from_rows(&[" "]), 1, 2, opaque);
        assert_eq!(screen.row_string(1), "   c");
    }

    #[test]
    fn stamp_replace_with_space_inverts_occupied_cells() {
        let mut screen = Mesh::from_rows(&["xx  "]);
        let mode = StampMode { only_nonempty: true, replace_with_space: true };
        let written = screen.stamp(&Mesh::from_rows(&["oooo"]), 0, 0, mode);
        assert_eq!(written, 4);
        assert_eq!(screen.row_string(0), "  oo");
    }

    #[test]
    fn out_of_range_set_is_dropped() {
        let mut mesh = Mesh::blank(2, 2);
        assert!(mesh.set(1, 1, '*'));
        assert!(!mesh.set(2, 0, '*'));
        assert_eq!(mesh.to_string(), "  \n *");
    }
}
