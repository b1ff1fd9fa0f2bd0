/// Result sets with at least this many rows skip the partition chart
pub const PARTITION_LIMIT: usize = 500;
/// Approximate number of histogram ticks
pub const HISTOGRAM_TICKS: usize = 10;
/// Upper bound of the tick count, one counter is allocated per bin
pub const MAX_HISTOGRAM_TICKS: usize = 1000;
/// Rows shown in a result table
pub const ROW_LIMIT: usize = 50;
pub const NUCCORE_BASE: &str = "http://www.ncbi.nlm.nih.gov/nuccore/";
pub const UTRDB_BASE: &str = "http://utrdb.ba.itb.cnr.it/getutr/";

/// Knobs of the chart pipeline.
///
/// ```
/// # use quadview::libs::config::ChartConfig;
/// let config = ChartConfig::default().with_row_limit(10);
/// assert_eq!(config.row_limit, 10);
/// assert_eq!(config.partition_limit, 500);
/// assert_eq!(config.histogram_ticks, 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub partition_limit: usize,
    pub histogram_ticks: usize,
    pub row_limit: usize,
    pub nuccore_base: String,
    pub utrdb_base: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            partition_limit: PARTITION_LIMIT,
            histogram_ticks: HISTOGRAM_TICKS,
            row_limit: ROW_LIMIT,
            nuccore_base: NUCCORE_BASE.to_string(),
            utrdb_base: UTRDB_BASE.to_string(),
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_partition_limit(mut self, limit: usize) -> Self {
        self.partition_limit = limit;
        self
    }

    /// Clamped to `1..=MAX_HISTOGRAM_TICKS`.
    ///
    /// ```
    /// # use quadview::libs::config::{ChartConfig, MAX_HISTOGRAM_TICKS};
    /// assert_eq!(ChartConfig::new().with_histogram_ticks(0).histogram_ticks, 1);
    /// assert_eq!(
    ///     ChartConfig::new().with_histogram_ticks(1_000_000_000).histogram_ticks,
    ///     MAX_HISTOGRAM_TICKS
    /// );
    /// ```
    pub fn with_histogram_ticks(mut self, ticks: usize) -> Self {
        self.histogram_ticks = ticks.clamp(1, MAX_HISTOGRAM_TICKS);
        self
    }

    pub fn with_row_limit(mut self, limit: usize) -> Self {
        self.row_limit = limit;
        self
    }

    pub fn with_link_bases(mut self, nuccore: impl Into<String>, utrdb: impl Into<String>) -> Self {
        self.nuccore_base = nuccore.into();
        self.utrdb_base = utrdb.into();
        self
    }
}
