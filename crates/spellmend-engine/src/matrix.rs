// Dynamic-programming table for the distance engine
//
// Flattened row-major storage: cell `(i, j)` lives at `i * cols + j`.
// One table is allocated per (query, candidate) pair and dropped after use.

use std::fmt;

use spellmend_core::Cost;

/// A `rows × cols` grid of accumulated costs.
///
/// Row `i` corresponds to the first `i` characters of the query, column `j`
/// to the first `j` characters of the candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<Cost>,
}

impl DistanceMatrix {
    /// Create a zero-filled matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Read cell `(i, j)`. Panics if out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Cost {
        debug_assert!(i < self.rows && j < self.cols);
        self.cells[i * self.cols + j]
    }

    /// Write cell `(i, j)`. Panics if out of range.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: Cost) {
        debug_assert!(i < self.rows && j < self.cols);
        self.cells[i * self.cols + j] = value;
    }

    /// One full row.
    pub fn row(&self, i: usize) -> &[Cost] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    /// The bottom-right cell, i.e. the full distance.
    pub fn total(&self) -> Cost {
        match (self.rows, self.cols) {
            (0, _) | (_, 0) => 0,
            (r, c) => self.get(r - 1, c - 1),
        }
    }
}

/// Renders one row per line with right-aligned columns.
impl fmt::Display for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .map(|c| c.to_string().len())
            .max()
            .unwrap_or(1);
        for i in 0..self.rows {
            let line = self
                .row(i)
                .iter()
                .map(|c| format!("{c:>width$}"))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_matrix_is_zeroed() {
        let m = DistanceMatrix::new(2, 3);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.row(0), &[0, 0, 0]);
        assert_eq!(m.row(1), &[0, 0, 0]);
    }

    #[test]
    fn set_and_get_use_row_major_layout() {
        let mut m = DistanceMatrix::new(2, 3);
        m.set(1, 2, 7);
        m.set(0, 1, 3);
        assert_eq!(m.get(1, 2), 7);
        assert_eq!(m.row(0), &[0, 3, 0]);
        assert_eq!(m.row(1), &[0, 0, 7]);
        assert_eq!(m.total(), 7);
    }

    #[test]
    fn single_cell_total() {
        let m = DistanceMatrix::new(1, 1);
        assert_eq!(m.total(), 0);
    }

    #[test]
    fn display_aligns_columns() {
        let mut m = DistanceMatrix::new(2, 2);
        m.set(0, 1, 10);
        m.set(1, 0, 2);
        assert_eq!(m.to_string(), " 0 10\n 2  0\n");
    }
}
