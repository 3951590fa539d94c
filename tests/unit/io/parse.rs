//! Tests for text grid parsing and formatting

#[cfg(test)]
mod tests {
    use rollpeel::io::parse::{format_grid, load_grid, parse_grid};
    use rollpeel::{Cell, MalformedInput, PeelError, Result};
    use std::fs;
    use tempfile::TempDir;

    fn malformed_reason(result: Result<rollpeel::OccupancyGrid>) -> MalformedInput {
        match result {
            Err(PeelError::MalformedInput { reason }) => reason,
            Err(other) => unreachable!("Expected MalformedInput, got {other}"),
            Ok(_) => unreachable!("Expected parsing to fail"),
        }
    }

    // Tests symbols map to occupancy at the right coordinates
    // Verified by swapping x and y when building rows
    #[test]
    fn test_parse_symbols() -> Result<()> {
        let grid = parse_grid("@..\n.@@\n")?;

        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert!(grid.is_occupied(Cell::new(0, 0)));
        assert!(!grid.is_occupied(Cell::new(1, 0)));
        assert!(grid.is_occupied(Cell::new(2, 1)));
        assert_eq!(grid.occupied_count(), 3);
        Ok(())
    }

    // Tests CRLF endings, a missing final newline and trailing blank lines
    // Verified by splitting on '\n' only
    #[test]
    fn test_line_endings() -> Result<()> {
        let unix = parse_grid("@.\n.@\n")?;

        assert_eq!(parse_grid("@.\r\n.@\r\n")?, unix);
        assert_eq!(parse_grid("@.\n.@")?, unix);
        assert_eq!(parse_grid("@.\n.@\n\n\n")?, unix);
        Ok(())
    }

    // Tests an empty document is rejected
    // Verified by returning a 0x0 grid
    #[test]
    fn test_empty_input() {
        assert_eq!(malformed_reason(parse_grid("")), MalformedInput::EmptyGrid);
        assert_eq!(malformed_reason(parse_grid("\n\n")), MalformedInput::EmptyGrid);
    }

    // Tests ragged rows, including a blank line in the middle
    // Verified by trimming every blank line instead of trailing ones
    #[test]
    fn test_ragged_rows() {
        assert_eq!(
            malformed_reason(parse_grid("@@@\n@@\n")),
            MalformedInput::RaggedRow {
                row: 1,
                expected: 3,
                found: 2,
            }
        );
        assert_eq!(
            malformed_reason(parse_grid("@@\n\n@@\n")),
            MalformedInput::RaggedRow {
                row: 1,
                expected: 2,
                found: 0,
            }
        );
    }

    // Tests unknown characters, spaces included, are rejected with their position
    // Verified by treating every non-occupied symbol as empty
    #[test]
    fn test_unrecognized_symbol() {
        assert_eq!(
            malformed_reason(parse_grid("@.\n.x\n")),
            MalformedInput::UnrecognizedSymbol {
                row: 1,
                column: 1,
                symbol: 'x',
            }
        );
        assert_eq!(
            malformed_reason(parse_grid(" @\n")),
            MalformedInput::UnrecognizedSymbol {
                row: 0,
                column: 0,
                symbol: ' ',
            }
        );
    }

    // Tests formatting writes the canonical text form
    // Verified by omitting the trailing newline
    #[test]
    fn test_format_grid() -> Result<()> {
        let text = ".@.\n@@@\n";
        assert_eq!(format_grid(&parse_grid(text)?), text);
        Ok(())
    }

    // Tests loading from disk and the error for a missing file
    // Verified by mapping read failures to MalformedInput
    #[test]
    fn test_load_grid() -> Result<()> {
        let Ok(temp_dir) = TempDir::new() else {
            return Ok(());
        };
        let path = temp_dir.path().join("grid.txt");
        fs::write(&path, "@@\n@.\n").ok();

        let grid = load_grid(&path)?;
        assert_eq!(grid.occupied_count(), 3);

        let missing = load_grid(&temp_dir.path().join("missing.txt"));
        assert!(matches!(
            missing,
            Err(PeelError::FileSystem {
                operation: "read grid",
                ..
            })
        ));
        Ok(())
    }
}
