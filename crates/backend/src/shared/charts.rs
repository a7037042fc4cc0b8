use chrono::NaiveDate;
use contracts::shared::dashboard::{BarChart, LineChart, PieChart, PieSlice, Series};
use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::format::format_percent;

/// Pivot `(index, series, value)` observations into a multi-series line chart.
///
/// The x axis holds every distinct index value, dates in chronological order
/// (anything that is not a date sorts after them, alphabetically). Series are
/// sorted by name and cells without an observation are 0. Repeated
/// `(index, series)` pairs are summed.
pub fn pivot_series<I, S>(points: impl IntoIterator<Item = (I, S, f64)>) -> LineChart
where
    I: Into<String>,
    S: Into<String>,
{
    let mut cells: HashMap<(String, String), f64> = HashMap::new();
    let mut index: BTreeSet<String> = BTreeSet::new();
    let mut names: BTreeSet<String> = BTreeSet::new();

    for (i, s, value) in points {
        let (i, s) = (i.into(), s.into());
        index.insert(i.clone());
        names.insert(s.clone());
        *cells.entry((s, i)).or_insert(0.0) += value;
    }

    let mut x: Vec<String> = index.into_iter().collect();
    x.sort_by_key(|label| axis_key(label));

    let series = names
        .into_iter()
        .map(|name| {
            let values = x
                .iter()
                .map(|i| cells.get(&(name.clone(), i.clone())).copied().unwrap_or(0.0))
                .collect();
            Series { name, values }
        })
        .collect();

    LineChart { x, series }
}

/// Single-series line chart; points keep their query order
pub fn single_series<S: Into<String>>(
    name: &str,
    points: impl IntoIterator<Item = (S, f64)>,
) -> LineChart {
    let (x, values): (Vec<String>, Vec<f64>) =
        points.into_iter().map(|(label, v)| (label.into(), v)).unzip();
    LineChart {
        x,
        series: vec![Series {
            name: name.to_string(),
            values,
        }],
    }
}

/// Bar chart; bars keep their query order
pub fn bar_chart<S: Into<String>>(
    value_label: &str,
    bars: impl IntoIterator<Item = (S, f64)>,
) -> BarChart {
    let (labels, values) = bars.into_iter().map(|(l, v)| (l.into(), v)).unzip();
    BarChart {
        value_label: value_label.to_string(),
        labels,
        values,
    }
}

/// Group by label and sum; labels sorted
pub fn sum_by<S: Into<String>>(pairs: impl IntoIterator<Item = (S, f64)>) -> Vec<(String, f64)> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for (label, value) in pairs {
        *totals.entry(label.into()).or_insert(0.0) += value;
    }
    totals.into_iter().collect()
}

/// Group by label and average; labels sorted
pub fn mean_by<S: Into<String>>(pairs: impl IntoIterator<Item = (S, f64)>) -> Vec<(String, f64)> {
    let mut acc: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for (label, value) in pairs {
        let entry = acc.entry(label.into()).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }
    acc.into_iter()
        .map(|(label, (sum, count))| (label, sum / count as f64))
        .collect()
}

/// Share-of-total pie, one slice per distinct label
pub fn pie_chart<S: Into<String>>(
    value_label: &str,
    pairs: impl IntoIterator<Item = (S, f64)>,
) -> PieChart {
    let totals = sum_by(pairs);
    let grand_total: f64 = totals.iter().map(|(_, v)| v).sum();

    let slices = totals
        .into_iter()
        .map(|(label, value)| {
            let percent = if grand_total == 0.0 {
                0.0
            } else {
                value / grand_total * 100.0
            };
            PieSlice {
                label,
                value,
                percent,
                percent_label: format_percent(percent),
            }
        })
        .collect();

    PieChart {
        value_label: value_label.to_string(),
        slices,
    }
}

fn axis_key(label: &str) -> (bool, Option<NaiveDate>, String) {
    let date = NaiveDate::parse_from_str(label, "%Y-%m-%d").ok();
    (date.is_none(), date, label.to_string())
}
