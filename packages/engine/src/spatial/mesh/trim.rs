use super::{Mesh, BLANK};

/// Mesh stripped of leading blank rows/columns, plus where it used to start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptimizedMesh {
    pub mesh: Mesh,
    /// Columns removed from the left.
    pub x: usize,
    /// Rows removed from the top.
    pub y: usize,
}

fn is_blank_row(row: &[char]) -> bool {
    row.iter().all(|&c| c == BLANK)
}

fn trim_row_end(row: &[char]) -> Vec<char> {
    let end = row.iter().rposition(|&c| c != BLANK).map_or(0, |i| i + 1);
    row[..end].to_vec()
}

/// Drop trailing spaces from every row and blank rows from the bottom.
///
/// A blank row with a non-blank row somewhere below it is kept (as an empty
/// row) so rows stay aligned with the shape's position. Idempotent.
pub fn trim_mesh(mesh: &Mesh) -> Mesh {
    let rows = mesh.rows();
    let keep = rows.iter().rposition(|r| !is_blank_row(r)).map_or(0, |i| i + 1);
    Mesh::from_grid(rows[..keep].iter().map(|r| trim_row_end(r)).collect())
}

/// Like [`trim_mesh`], but also strips leading blank rows and the common
/// leading blank columns. The returned offset is what the owner must add to
/// its position to keep the visible cells where they were.
pub fn optimize_mesh(mesh: &Mesh) -> OptimizedMesh {
    let rows = mesh.rows();
    let first = match rows.iter().position(|r| !is_blank_row(r)) {
        Some(i) => i,
        None => {
            return OptimizedMesh { mesh: Mesh::new(), x: 0, y: 0 };
        }
    };
    let last = rows.iter().rposition(|r| !is_blank_row(r)).unwrap_or(first);

    let min_col = rows[first..=last]
        .iter()
        .filter_map(|r| r.iter().position(|&c| c != BLANK))
        .min()
        .unwrap_or(0);

    let out = rows[first..=last]
        .iter()
        .map(|r| {
            if r.len() <= min_col {
                Vec::new()
            } else {
                trim_row_end(&r[min_col..])
            }
        })
        .collect();

    OptimizedMesh {
        mesh: Mesh::from_grid(out),
        x: min_col,
        y: first,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_keeps_interior_blank_rows() {
        let mesh = Mesh::from_rows(&["**  ", "    ", " *  ", "    ", "   "]);
        let trimmed = trim_mesh(&mesh);
        assert_eq!(trimmed.to_strings(), vec!["**", "", " *"]);
    }

    #[test]
    fn trim_is_idempotent() {
        let samples = [
            Mesh::from_rows(&["  * ", "", "*   ", "  "]),
            Mesh::from_rows(&["    "]),
            Mesh::from_rows(&["***", "* *", "***"]),
            Mesh::new(),
        ];
        for mesh in samples {
            let once = trim_mesh(&mesh);
            assert_eq!(trim_mesh(&once), once);
        }
    }

    #[test]
    fn trim_keeps_leading_blank_rows() {
        let trimmed = trim_mesh(&Mesh::from_rows(&["   ", " * "]));
        assert_eq!(trimmed.to_strings(), vec!["", " *"]);
    }

    #[test]
    fn optimize_reports_stripped_offset() {
        let mesh = Mesh::from_rows(&["     ", "   * ", "     ", "  ** "]);
        let out = optimize_mesh(&mesh);
        assert_eq!(out.x, 2);
        assert_eq!(out.y, 1);
        assert_eq!(out.mesh.to_strings(), vec![" *", "", "**"]);
    }

    #[test]
    fn optimize_blank_mesh_is_empty() {
        let out = optimize_mesh(&Mesh::blank(4, 3));
        assert!(out.mesh.is_empty());
        assert_eq!((out.x, out.y), (0, 0));
    }
}
