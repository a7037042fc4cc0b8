use serde::{Deserialize, Serialize};

/// Value in a table cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Text value
    Text(String),
    /// Integer value
    Integer(i64),
    /// Numeric value
    Number(f64),
    /// Null value
    Null,
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Null)
    }
}

/// Raw tabular result shown as a dataframe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    /// Column headers, in query order
    pub columns: Vec<String>,
    /// Rows, each with one cell per column
    pub rows: Vec<Vec<CellValue>>,
}

/// Numeric summary card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub label: String,
    /// Already formatted for display
    pub value: String,
}

/// One named line in a line chart, aligned with `LineChart::x`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Line chart with a shared x axis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    /// X axis labels (dates as "YYYY-MM-DD")
    pub x: Vec<String>,
    pub series: Vec<Series>,
}

impl LineChart {
    pub fn series_named(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }
}

/// Bar chart, one bar per label
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    /// Name of the plotted measure (e.g., "REVENUE")
    pub value_label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Single pie slice with its share of the total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Share of total in percent (0..=100)
    pub percent: f64,
    /// Share formatted as "12.3%"
    pub percent_label: String,
}

/// Share-of-total pie chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub value_label: String,
    pub slices: Vec<PieSlice>,
}

/// What a section renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Presentation {
    Metrics(Vec<MetricCard>),
    LineChart(LineChart),
    BarChart(BarChart),
    PieChart(PieChart),
    Table(DataTable),
    /// Informational placeholder shown instead of a chart
    Info(String),
}

/// A block of a tab: optional heading plus one presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub heading: Option<String>,
    pub presentation: Presentation,
}

impl Section {
    pub fn new(heading: impl Into<String>, presentation: Presentation) -> Self {
        Self {
            heading: Some(heading.into()),
            presentation,
        }
    }

    pub fn untitled(presentation: Presentation) -> Self {
        Self {
            heading: None,
            presentation,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::untitled(Presentation::Info(message.into()))
    }

    pub fn is_info(&self) -> bool {
        matches!(self.presentation, Presentation::Info(_))
    }
}
