//! 1D occupancy field.

/// A 1D field of occupancy counts.
///
/// In a committed generation every cell is 0 (empty) or 1 (occupied by
/// exactly one particle). During the proposal phase of a step the same
/// representation holds raw target counts, which may exceed 1 until
/// collisions are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    cells: Vec<u32>,
}

impl Field {
    /// Create an empty field of `size` cells.
    pub fn empty(size: usize) -> Self {
        Self {
            cells: vec![0; size],
        }
    }

    /// Number of cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Occupancy count at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> u32 {
        self.cells[index]
    }

    /// Set the occupancy count at `index`.
    #[inline]
    pub fn set(&mut self, index: usize, value: u32) {
        self.cells[index] = value;
    }

    /// Reset every cell to 0.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Indices of occupied cells, in increasing order.
    pub fn occupied_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == 1)
            .map(|(i, _)| i)
    }

    /// Number of occupied cells.
    pub fn particle_count(&self) -> usize {
        self.occupied_indices().count()
    }

    /// Raw cell values.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Render the snapshot line for time step `step`.
    ///
    /// Format is `Time <k>: <c0> <c1> ... ` with a space after every cell,
    /// including the last.
    pub fn snapshot_line(&self, step: u64) -> String {
        use std::fmt::Write;

        let mut line = format!("Time {}: ", step);
        for &cell in &self.cells {
            // Writing to a String cannot fail.
            let _ = write!(line, "{} ", cell);
        }
        line
    }
}
