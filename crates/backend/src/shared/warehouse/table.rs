use contracts::shared::dashboard::{CellValue, DataTable};

/// Row type that can be shown as a dataframe
pub trait TableRow {
    /// Column headers, in SELECT order
    const COLUMNS: &'static [&'static str];

    fn cells(&self) -> Vec<CellValue>;
}

pub fn to_table<T: TableRow>(rows: &[T]) -> DataTable {
    DataTable {
        columns: T::COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows: rows.iter().map(TableRow::cells).collect(),
    }
}
