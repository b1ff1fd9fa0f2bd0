//! Projection of one column out of a row set.
//!
//! Both iterators borrow the rows and are `Clone`, so a series can be walked
//! again without copying the table.

use crate::libs::partition::LabeledValue;
use crate::libs::result::Cell;

static NULL_CELL: Cell = Cell::Null;

/// Cells of one column, in row order. Short rows yield `Cell::Null`.
#[derive(Debug, Clone)]
pub struct Column<'a> {
    rows: std::slice::Iter<'a, Vec<Cell>>,
    index: usize,
}

impl<'a> Iterator for Column<'a> {
    type Item = &'a Cell;

    fn next(&mut self) -> Option<Self::Item> {
        self.rows
            .next()
            .map(|row| row.get(self.index).unwrap_or(&NULL_CELL))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl ExactSizeIterator for Column<'_> {}

/// Numeric values of one column. Cells that do not parse are skipped.
#[derive(Debug, Clone)]
pub struct Numbers<'a> {
    column: Column<'a>,
}

impl Iterator for Numbers<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        for cell in self.column.by_ref() {
            match cell.as_f64() {
                Some(v) => return Some(v),
                None => tracing::debug!("skipping non-numeric cell {:?}", cell),
            }
        }
        None
    }
}

/// ```
/// # use quadview::libs::result::Cell;
/// # use quadview::libs::series::column;
/// let rows = vec![
///     vec![Cell::Text("a".into()), Cell::Number(1.0)],
///     vec![Cell::Text("b".into())],
/// ];
/// let col: Vec<_> = column(&rows, 1).collect();
/// assert_eq!(col, vec![&Cell::Number(1.0), &Cell::Null]);
/// ```
pub fn column(rows: &[Vec<Cell>], index: usize) -> Column<'_> {
    Column {
        rows: rows.iter(),
        index,
    }
}

/// Numeric series of a column.
///
/// Returns `None` when the first row is not numeric: the column is not a
/// numeric series and charts depending on it are skipped.
///
/// ```
/// # use quadview::libs::result::Cell;
/// # use quadview::libs::series::numbers;
/// let rows = vec![
///     vec![Cell::Text("a".into()), Cell::Text("2.5".into())],
///     vec![Cell::Text("b".into()), Cell::Number(1.0)],
/// ];
/// let series = numbers(&rows, 1).unwrap();
/// assert_eq!(series.clone().collect::<Vec<_>>(), vec![2.5, 1.0]);
/// assert_eq!(series.count(), 2);
///
/// assert!(numbers(&rows, 0).is_none());
/// ```
pub fn numbers(rows: &[Vec<Cell>], index: usize) -> Option<Numbers<'_>> {
    let col = column(rows, index);
    col.clone().next()?.as_f64()?;
    Some(Numbers { column: col })
}

/// Text rendering of a column, cells passed through unchanged.
pub fn strings(rows: &[Vec<Cell>], index: usize) -> impl Iterator<Item = String> + Clone + '_ {
    column(rows, index).map(|cell| cell.to_string())
}

/// Reduces rows to `(key, value)` pairs, dropping rows without a numeric value.
pub fn labeled_values(rows: &[Vec<Cell>], key: usize, value: usize) -> Vec<LabeledValue> {
    column(rows, key)
        .zip(column(rows, value))
        .filter_map(|(k, v)| v.as_f64().map(|v| LabeledValue::new(&k.to_string(), v)))
        .collect()
}
