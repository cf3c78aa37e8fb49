use crate::dataset::Dataset;
use crate::models::DatasetOverview;

impl Dataset {
    /// Row, column and missing-cell totals for the unfiltered table.
    pub fn overview(&self) -> DatasetOverview {
        DatasetOverview {
            rows: self.row_count(),
            columns: self.column_count(),
            missing: self.missing_cells(),
        }
    }
}
