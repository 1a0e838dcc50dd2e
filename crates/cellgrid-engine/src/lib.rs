//! cellgrid_engine - Formula engine for the cellgrid editor.
//!
//! ```
//! use cellgrid_engine::engine::{CellRef, GridStore, evaluate};
//!
//! let mut grid = GridStore::new();
//! grid.set_ref(&CellRef::parse("A1").unwrap(), "5");
//! assert_eq!(evaluate(&grid, "A1 * 2 + 1").unwrap(), 11.0);
//! ```

pub mod engine;
pub mod error;

pub use error::{FormulaError, FormulaResult};

#[cfg(test)]
mod tests {
    use crate::engine::*;
    use crate::error::FormulaError;

    fn sample_grid() -> GridStore {
        let mut grid = GridStore::new();
        grid.set(0, 0, "5"); // A1
        grid.set(1, 0, "10"); // A2
        grid.set(0, 1, "15"); // B1
        grid
    }

    #[test]
    fn test_parse_single_letter_columns() {
        let a1 = CellRef::parse("A1").unwrap();
        assert_eq!(a1.row, 0);
        assert_eq!(a1.col, 0);

        let b1 = CellRef::parse("B1").unwrap();
        assert_eq!(b1.row, 0);
        assert_eq!(b1.col, 1);

        let z1 = CellRef::parse("Z1").unwrap();
        assert_eq!(z1.row, 0);
        assert_eq!(z1.col, 25);
    }

    #[test]
    fn test_parse_multi_letter_columns() {
        assert_eq!(CellRef::parse("AA1").unwrap().col, 26);
        assert_eq!(CellRef::parse("AB1").unwrap().col, 27);
        assert_eq!(CellRef::parse("AZ1").unwrap().col, 51);
        assert_eq!(CellRef::parse("BA1").unwrap().col, 52);
    }

    #[test]
    fn test_parse_row_numbers() {
        assert_eq!(CellRef::parse("A1").unwrap().row, 0);
        assert_eq!(CellRef::parse("A10").unwrap().row, 9);
        assert_eq!(CellRef::parse("B12").unwrap(), CellRef::new(1, 11));
    }

    #[test]
    fn test_parse_lowercase_is_malformed() {
        for bad in ["a1", "aA1", "Ab3"] {
            assert_eq!(
                CellRef::parse(bad),
                Err(FormulaError::MalformedReference(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_evaluate_lowercase_reference_is_malformed() {
        let grid = sample_grid();
        assert_eq!(
            evaluate(&grid, "a1+1"),
            Err(FormulaError::MalformedReference("a1".to_string()))
        );
        assert_eq!(
            evaluate(&grid, "sum a1:b1"),
            Err(FormulaError::MalformedReference("a1".to_string()))
        );
        // Keywords stay case-insensitive.
        assert_eq!(evaluate(&grid, "SUM A1:B1").unwrap(), 20.0);
    }

    #[test]
    fn test_parse_invalid_inputs() {
        for bad in ["", "123", "ABC", "A0", "1A", "A 1", "A1B", "$A$1"] {
            assert!(
                matches!(CellRef::parse(bad), Err(FormulaError::MalformedReference(_))),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_display_round_trip() {
        for label in ["A1", "Z9", "AA1", "BA52", "XFD1048576"] {
            assert_eq!(CellRef::parse(label).unwrap().to_string(), label);
        }
    }

    #[test]
    fn test_evaluate_addition() {
        assert_eq!(evaluate(&GridStore::new(), "3+4").unwrap(), 7.0);
    }

    #[test]
    fn test_evaluate_has_no_precedence() {
        assert_eq!(evaluate(&GridStore::new(), "10-2*3").unwrap(), 24.0);
        assert_eq!(evaluate(&GridStore::new(), "2+3*4/2").unwrap(), 10.0);
    }

    #[test]
    fn test_evaluate_cell_references() {
        let grid = sample_grid();
        assert_eq!(evaluate(&grid, "A1+A2").unwrap(), 15.0);
        assert_eq!(evaluate(&grid, "B1/A1").unwrap(), 3.0);
        assert_eq!(evaluate(&grid, "A1*C7").unwrap(), 0.0);
    }

    #[test]
    fn test_evaluate_non_numeric_cell_is_zero() {
        let mut grid = sample_grid();
        grid.set(2, 0, "apples"); // A3
        assert_eq!(evaluate(&grid, "A3+A1").unwrap(), 5.0);
    }

    #[test]
    fn test_evaluate_range_functions() {
        let grid = sample_grid();
        assert_eq!(evaluate(&grid, "sum(A1:B1)").unwrap(), 20.0);
        assert_eq!(evaluate(&grid, "average A1:B1").unwrap(), 10.0);
        assert_eq!(evaluate(&grid, "max A1:B1").unwrap(), 15.0);
        assert_eq!(evaluate(&grid, "min A1:B1").unwrap(), 5.0);
        assert_eq!(evaluate(&grid, "SUM A1:B2").unwrap(), 30.0);
    }

    #[test]
    fn test_evaluate_empty_block() {
        let grid = sample_grid();
        for formula in ["sum F1:H4", "average F1:H4", "max F1:H4", "min F1:H4"] {
            assert_eq!(evaluate(&grid, formula).unwrap(), 0.0, "{formula}");
        }
    }

    #[test]
    fn test_evaluate_empty_formula() {
        let grid = sample_grid();
        assert_eq!(evaluate(&grid, ""), Err(FormulaError::EmptyFormula));
        assert_eq!(evaluate(&grid, "   "), Err(FormulaError::EmptyFormula));
        assert_eq!(evaluate(&grid, "()"), Err(FormulaError::EmptyFormula));
    }

    #[test]
    fn test_evaluate_malformed_reference_text() {
        let grid = sample_grid();
        // "1A" is not a cell reference: it lexes as the literal 1.
        assert_eq!(evaluate(&grid, "1A+2").unwrap(), 3.0);
        assert!(matches!(
            evaluate(&grid, "A0+2"),
            Err(FormulaError::MalformedReference(_))
        ));
    }

    #[test]
    fn test_evaluate_division_by_zero_is_infinite() {
        let value = evaluate(&GridStore::new(), "5/0").unwrap();
        assert!(value.is_infinite() && value.is_sign_positive());
        assert_eq!(format_number(value), "Infinity");
    }

    #[test]
    fn test_evaluate_reads_written_back_results() {
        let mut grid = sample_grid();
        let value = evaluate(&grid, "5/0").unwrap();
        grid.set(3, 0, format_number(value)); // A4
        assert_eq!(evaluate(&grid, "A4").unwrap(), f64::INFINITY);

        let value = evaluate(&grid, "1/4").unwrap();
        grid.set(4, 0, format_number(value)); // A5
        assert_eq!(evaluate(&grid, "A5*8").unwrap(), 2.0);
    }
}
