//! Tests for occupancy storage, validation and bounded neighborhoods

#[cfg(test)]
mod tests {
    use rollpeel::io::configuration::MAX_GRID_DIMENSION;
    use rollpeel::spatial::grid::Dimensions;
    use rollpeel::{Cell, MalformedInput, OccupancyGrid, PeelError, Result};

    fn malformed_reason(error: PeelError) -> MalformedInput {
        match error {
            PeelError::MalformedInput { reason } => reason,
            other => unreachable!("Expected MalformedInput, got {other}"),
        }
    }

    // Tests border cells see only in-bounds neighbors
    // Verified by yielding out-of-bounds offsets as phantom neighbors
    #[test]
    fn test_neighbor_counts_by_position() {
        let dims = Dimensions {
            width: 3,
            height: 3,
        };

        assert_eq!(dims.neighbors(Cell::new(0, 0)).count(), 3);
        assert_eq!(dims.neighbors(Cell::new(1, 0)).count(), 5);
        assert_eq!(dims.neighbors(Cell::new(2, 1)).count(), 5);
        assert_eq!(dims.neighbors(Cell::new(1, 1)).count(), 8);

        let single = Dimensions {
            width: 1,
            height: 1,
        };
        assert_eq!(single.neighbors(Cell::new(0, 0)).count(), 0);
    }

    // Tests the neighborhood excludes the cell itself
    // Verified by adding (0, 0) to NEIGHBOR_OFFSETS
    #[test]
    fn test_neighbors_exclude_center() {
        let dims = Dimensions {
            width: 4,
            height: 4,
        };
        let center = Cell::new(2, 2);

        let neighbors: Vec<Cell> = dims.neighbors(center).collect();
        assert!(!neighbors.contains(&center));
        assert!(neighbors.contains(&Cell::new(1, 1)));
        assert!(neighbors.contains(&Cell::new(3, 3)));
    }

    // Tests linear index is row-major
    // Verified by swapping x and y in index computation
    #[test]
    fn test_linear_index_row_major() {
        let dims = Dimensions {
            width: 4,
            height: 2,
        };

        assert_eq!(dims.index(Cell::new(3, 0)), Some(3));
        assert_eq!(dims.index(Cell::new(0, 1)), Some(4));
        assert_eq!(dims.index(Cell::new(4, 0)), None);
        assert_eq!(dims.cell_at(5), Some(Cell::new(1, 1)));
        assert_eq!(dims.cell_at(8), None);
    }

    // Tests ragged rows are rejected with their position
    // Verified by only checking the last row width
    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let rows = vec![vec![true, true], vec![true], vec![true, false]];

        let Err(error) = OccupancyGrid::from_rows(&rows) else {
            unreachable!("Ragged rows must be rejected");
        };

        assert_eq!(
            malformed_reason(error),
            MalformedInput::RaggedRow {
                row: 1,
                expected: 2,
                found: 1,
            }
        );
    }

    // Tests empty grids are rejected
    // Verified by accepting zero-width rows
    #[test]
    fn test_from_rows_rejects_empty_grid() {
        let no_rows: Vec<Vec<bool>> = Vec::new();
        let empty_row = vec![Vec::<bool>::new()];

        for rows in [no_rows, empty_row] {
            let Err(error) = OccupancyGrid::from_rows(&rows) else {
                unreachable!("Empty grid must be rejected");
            };
            assert_eq!(malformed_reason(error), MalformedInput::EmptyGrid);
        }
    }

    // Tests oversized grids fail before allocating
    // Verified by removing the dimension limit
    #[test]
    fn test_dimension_limit() {
        let result = OccupancyGrid::empty(MAX_GRID_DIMENSION + 1, 1);

        assert!(matches!(
            result,
            Err(PeelError::InvalidParameter {
                parameter: "width",
                ..
            })
        ));
    }

    // Tests occupancy read and write with previous state
    // Verified by returning the new state from set
    #[test]
    fn test_set_returns_previous_state() -> Result<()> {
        let mut grid = OccupancyGrid::empty(2, 2)?;
        let cell = Cell::new(1, 0);

        assert_eq!(grid.set(cell, true), Some(false));
        assert!(grid.is_occupied(cell));
        assert_eq!(grid.set(cell, false), Some(true));
        assert!(!grid.is_occupied(cell));

        assert_eq!(grid.set(Cell::new(2, 0), true), None);
        assert!(!grid.is_occupied(Cell::new(2, 0)));
        Ok(())
    }

    // Tests occupied cells come out in row-major order
    // Verified by iterating column-major
    #[test]
    fn test_occupied_cells_order() -> Result<()> {
        let grid =
            OccupancyGrid::from_rows(&[[false, true, true], [true, false, false]])?;

        let cells: Vec<Cell> = grid.occupied_cells().collect();
        assert_eq!(
            cells,
            vec![Cell::new(1, 0), Cell::new(2, 0), Cell::new(0, 1)]
        );
        assert_eq!(grid.occupied_count(), 3);
        Ok(())
    }

    // Tests direct neighbor recount
    // Verified by counting the cell itself
    #[test]
    fn test_live_neighbors() -> Result<()> {
        let grid = OccupancyGrid::from_rows(&[
            [true, true, false],
            [false, true, false],
            [true, false, true],
        ])?;

        assert_eq!(grid.live_neighbors(Cell::new(1, 1)), 4);
        assert_eq!(grid.live_neighbors(Cell::new(0, 0)), 2);
        assert_eq!(grid.live_neighbors(Cell::new(2, 2)), 1);
        Ok(())
    }

    // Tests copying the grid back out as rows
    // Verified by transposing in to_rows
    #[test]
    fn test_to_rows_preserves_layout() -> Result<()> {
        let rows = vec![vec![true, false, false], vec![false, false, true]];
        let grid = OccupancyGrid::from_rows(&rows)?;

        assert_eq!(grid.to_rows(), rows);
        assert_eq!((grid.width(), grid.height()), (3, 2));
        Ok(())
    }
}
