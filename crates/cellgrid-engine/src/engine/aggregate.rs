//! Aggregate functions over a rectangular block of cells.

use tracing::debug;

use super::cell_ref::CellRange;
use super::format::coerce_number;
use super::grid::GridStore;

/// Aggregate function keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Aggregate {
    Sum,
    Average,
    Max,
    Min,
}

impl Aggregate {
    /// Match a formula keyword, ignoring case.
    pub fn from_keyword(word: &str) -> Option<Aggregate> {
        [Aggregate::Sum, Aggregate::Average, Aggregate::Max, Aggregate::Min]
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(word))
    }

    pub fn name(self) -> &'static str {
        match self {
            Aggregate::Sum => "sum",
            Aggregate::Average => "average",
            Aggregate::Max => "max",
            Aggregate::Min => "min",
        }
    }
}

/// Compute `kind` over every cell of `range`.
///
/// Each cell is read with [`coerce_number`], so empty and non-numeric cells
/// count as `0` (and are included in the average's cell count). `Max` and
/// `Min` are seeded with the value at `range.start`.
///
/// Only stored cells are visited; the empty remainder of the block is
/// accounted for by its area.
pub fn aggregate(store: &GridStore, kind: Aggregate, range: &CellRange) -> f64 {
    let values: Vec<f64> = store
        .iter_range(range)
        .map(|(_, text)| coerce_number(Some(text)))
        .collect();
    let area = range.rows() as f64 * range.cols() as f64;
    let has_empty = (values.len() as f64) < area;

    let result = match kind {
        Aggregate::Sum => values.iter().sum::<f64>(),
        Aggregate::Average => values.iter().sum::<f64>() / area,
        Aggregate::Max => {
            let seed = coerce_number(store.get_ref(&range.start));
            let max = values.iter().fold(seed, |max, &v| if v > max { v } else { max });
            if has_empty && max < 0.0 { 0.0 } else { max }
        }
        Aggregate::Min => {
            let seed = coerce_number(store.get_ref(&range.start));
            let min = values.iter().fold(seed, |min, &v| if v < min { v } else { min });
            if has_empty && min > 0.0 { 0.0 } else { min }
        }
    };

    debug!(function = kind.name(), %range, result, "aggregated range");
    result
}
