use crate::pagesize::PageSize;
use crate::{LabelError, Result};
use serde::{Deserialize, Serialize};

/// Divides a page into equally sized cells, one label per cell
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub columns: u32,
    pub rows: u32,
}

impl Grid {
    /// Create a grid of `columns` labels across and `rows` labels down
    pub fn new(columns: u32, rows: u32) -> Grid {
        Grid { columns, rows }
    }

    /// The size of one cell when `page` is divided by this grid. Fails if the grid has
    /// no columns or no rows.
    pub fn cell_size(&self, page: PageSize) -> Result<PageSize> {
        if self.columns == 0 || self.rows == 0 {
            return Err(LabelError::InvalidGrid {
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok((page.0 / self.columns as f64, page.1 / self.rows as f64))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new(1, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::A4;
    use crate::units::Mm;

    #[test]
    fn a4_two_by_four() {
        let cell = Grid::new(2, 4).cell_size(A4).expect("valid grid");
        assert_eq!(cell, (Mm(105.0), Mm(74.25)));
    }

    #[test]
    fn empty_grid_is_rejected() {
        assert!(matches!(
            Grid::new(0, 4).cell_size(A4),
            Err(LabelError::InvalidGrid { columns: 0, rows: 4 })
        ));
        assert!(Grid::new(3, 0).cell_size(A4).is_err());
    }
}
