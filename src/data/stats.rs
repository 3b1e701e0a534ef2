//! Descriptive statistics over a [`DataFrame`].
//!
//! Every function is pure apart from [`convert_to_datetime`]. Results are
//! plain serializable structs so callers can print them as JSON.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer, ser::SerializeMap};
use tracing::debug;

use super::{Cell, Column, ColumnKind, DataError, DataFrame};

/// Date formats accepted by [`convert_to_datetime`], tried in order.
pub const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y", "%m/%d/%Y"];

/// Datetime formats accepted by [`convert_to_datetime`], tried in order.
pub const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
];

/// Maximum number of entries in [`Distribution::value_counts`].
pub const TOP_VALUES: usize = 10;

/// Values keyed by name, serialized as a JSON object in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Keyed<T>(pub Vec<(String, T)>);

impl<T> Keyed<T> {
    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> Vec<&str> {
        self.0.iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: Serialize> Serialize for Keyed<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Summary of one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    /// Present values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: Option<f64>,
    /// Sample standard deviation.
    pub std: Option<f64>,
    /// Smallest value.
    pub min: Option<f64>,
    /// First quartile.
    #[serde(rename = "25%")]
    pub q1: Option<f64>,
    /// Median.
    #[serde(rename = "50%")]
    pub median: Option<f64>,
    /// Third quartile.
    #[serde(rename = "75%")]
    pub q3: Option<f64>,
    /// Largest value.
    pub max: Option<f64>,
}

/// Completeness and uniqueness of every column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityReport {
    /// Number of rows.
    pub total_rows: usize,
    /// Number of columns.
    pub total_columns: usize,
    /// Missing values per column.
    pub missing_values: Keyed<usize>,
    /// Missing values per column as a percentage of the rows.
    pub missing_percentages: Keyed<f64>,
    /// Rows identical to an earlier row.
    pub duplicate_rows: usize,
    /// Distinct present values per column.
    pub unique_values: Keyed<usize>,
}

/// Aggregates of one column within one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStats {
    /// Mean, rounded to 2 decimals.
    pub mean: Option<f64>,
    /// Median, rounded to 2 decimals.
    pub median: Option<f64>,
    /// Sample standard deviation, rounded to 2 decimals.
    pub std: Option<f64>,
    /// Present values.
    pub count: usize,
}

/// Group value → aggregated column → statistics.
pub type GroupSummary = Keyed<Keyed<GroupStats>>;

/// Column → column → Pearson coefficient.
pub type CorrelationMatrix = Keyed<Keyed<Option<f64>>>;

/// Value distribution of one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    /// Most frequent values and their counts, most frequent first.
    pub value_counts: Keyed<usize>,
    /// Central tendency and cardinality.
    pub basic_stats: BasicStats,
}

/// Central tendency and cardinality of one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicStats {
    /// Mean of a numeric column.
    pub mean: Option<f64>,
    /// Median of a numeric column.
    pub median: Option<f64>,
    /// Most frequent values, ascending.
    pub mode: Vec<String>,
    /// Distinct present values.
    pub unique_values: usize,
    /// Missing values.
    pub null_count: usize,
}

/// Temporal patterns of one datetime column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    /// Counts per calendar unit.
    pub temporal_distribution: TemporalDistribution,
    /// First and last date.
    pub time_range: TimeRange,
}

/// Counts per year, month number and weekday, most frequent first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemporalDistribution {
    /// Counts per year.
    pub by_year: Keyed<usize>,
    /// Counts per month number (1-12).
    pub by_month: Keyed<usize>,
    /// Counts per weekday name.
    pub by_day_of_week: Keyed<usize>,
}

/// Span covered by a datetime column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeRange {
    /// Earliest date, `%Y-%m-%d`.
    pub start: String,
    /// Latest date, `%Y-%m-%d`.
    pub end: String,
    /// Whole days between start and end.
    pub total_days: i64,
}

/// Summarizes every numeric column.
///
/// # Errors
/// Returns `DataError::NoNumericColumns` if there is nothing to summarize.
pub fn describe(frame: &DataFrame) -> Result<Keyed<NumericSummary>, DataError> {
    let numeric = frame.numeric_columns();
    if numeric.is_empty() {
        return Err(DataError::NoNumericColumns);
    }

    let summaries = numeric
        .into_iter()
        .map(|column| {
            let mut values = column.numeric_values();
            values.sort_by(f64::total_cmp);

            let summary = NumericSummary {
                count: values.len(),
                mean: mean(&values),
                std: std_dev(&values),
                min: values.first().copied(),
                q1: quantile(&values, 0.25),
                median: quantile(&values, 0.5),
                q3: quantile(&values, 0.75),
                max: values.last().copied(),
            };
            (column.name().to_string(), summary)
        })
        .collect();

    Ok(Keyed(summaries))
}

/// Reports missing, duplicate and distinct values.
pub fn quality_report(frame: &DataFrame) -> QualityReport {
    let rows = frame.row_count();

    let missing_values = Keyed(
        frame
            .columns()
            .iter()
            .map(|column| (column.name().to_string(), column.null_count()))
            .collect(),
    );

    let missing_percentages = Keyed(
        missing_values
            .0
            .iter()
            .map(|(name, missing)| {
                let percentage = if rows == 0 {
                    0.0
                } else {
                    *missing as f64 / rows as f64 * 100.0
                };
                (name.clone(), percentage)
            })
            .collect(),
    );

    let unique_values = Keyed(
        frame
            .columns()
            .iter()
            .map(|column| (column.name().to_string(), column.unique_count()))
            .collect(),
    );

    let mut seen = std::collections::HashSet::new();
    let duplicate_rows = (0..rows)
        .filter(|&index| {
            let key: Vec<String> = frame.row(index).into_iter().map(Cell::key).collect();
            !seen.insert(key)
        })
        .count();

    QualityReport {
        total_rows: rows,
        total_columns: frame.column_count(),
        missing_values,
        missing_percentages,
        duplicate_rows,
        unique_values,
    }
}

/// Aggregates numeric columns per distinct value of `group_column`.
///
/// With `aggregate` set only that column is aggregated and it must be
/// numeric; otherwise every numeric column except the grouping one is.
/// Rows with a missing group value are dropped and groups are listed in
/// ascending order of their value.
///
/// # Errors
/// * `DataError::ColumnNotFound` - If either column is unknown
/// * `DataError::NotNumeric` - If `aggregate` names a non-numeric column
/// * `DataError::NoNumericColumns` - If there is nothing to aggregate
pub fn group_summary(
    frame: &DataFrame,
    group_column: &str,
    aggregate: Option<&str>,
) -> Result<GroupSummary, DataError> {
    let group = frame.require(group_column)?;

    let targets: Vec<&Column> = match aggregate {
        Some(name) => {
            let column = frame.require(name)?;
            if !column.kind().is_numeric() {
                return Err(DataError::NotNumeric(name.to_string()));
            }
            vec![column]
        }
        None => frame
            .numeric_columns()
            .into_iter()
            .filter(|column| column.name() != group_column)
            .collect(),
    };
    if targets.is_empty() {
        return Err(DataError::NoNumericColumns);
    }

    let mut groups: Vec<(&Cell, Vec<usize>)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    for (row, cell) in group.cells().iter().enumerate() {
        if cell.is_null() {
            continue;
        }
        let position = *positions.entry(cell.key()).or_insert_with(|| {
            groups.push((cell, Vec::new()));
            groups.len() - 1
        });
        groups[position].1.push(row);
    }
    groups.sort_by(|(a, _), (b, _)| a.compare(b));

    debug!(group_column, groups = groups.len(), "Grouped rows");

    let summary = groups
        .into_iter()
        .map(|(value, rows)| {
            let stats = targets
                .iter()
                .map(|column| {
                    let mut values: Vec<f64> = rows
                        .iter()
                        .filter_map(|&row| column.cells()[row].as_f64())
                        .collect();
                    values.sort_by(f64::total_cmp);

                    let stats = GroupStats {
                        mean: mean(&values).map(round2),
                        median: quantile(&values, 0.5).map(round2),
                        std: std_dev(&values).map(round2),
                        count: values.len(),
                    };
                    (column.name().to_string(), stats)
                })
                .collect();
            (value.to_string(), Keyed(stats))
        })
        .collect();

    Ok(Keyed(summary))
}

/// Pairwise Pearson correlation of the numeric columns, rounded to 2 decimals.
///
/// Each pair uses the rows where both values are present. Pairs with fewer
/// than two such rows or without variance have no coefficient.
///
/// # Errors
/// Returns `DataError::NoNumericColumns` if the frame has no numeric column.
pub fn correlation_matrix(frame: &DataFrame) -> Result<CorrelationMatrix, DataError> {
    let numeric = frame.numeric_columns();
    if numeric.is_empty() {
        return Err(DataError::NoNumericColumns);
    }

    let matrix = numeric
        .iter()
        .map(|a| {
            let row = numeric
                .iter()
                .map(|b| (b.name().to_string(), pearson(a, b).map(round2)))
                .collect();
            (a.name().to_string(), Keyed(row))
        })
        .collect();

    Ok(Keyed(matrix))
}

/// Value counts and central tendency of one column.
///
/// # Errors
/// Returns `DataError::ColumnNotFound` if the column is unknown.
pub fn distribution(frame: &DataFrame, column: &str) -> Result<Distribution, DataError> {
    let column = frame.require(column)?;

    let counts = value_counts(column.cells());
    let top = counts.first().map(|(_, count)| *count).unwrap_or(0);
    let mut modes: Vec<&Cell> = counts
        .iter()
        .filter(|(_, count)| *count == top)
        .map(|(cell, _)| *cell)
        .collect();
    modes.sort_by(|a, b| a.compare(b));

    let (mean_value, median_value) = if column.kind().is_numeric() {
        let mut values = column.numeric_values();
        values.sort_by(f64::total_cmp);
        (mean(&values), quantile(&values, 0.5))
    } else {
        (None, None)
    };

    Ok(Distribution {
        value_counts: Keyed(
            counts
                .iter()
                .take(TOP_VALUES)
                .map(|(cell, count)| (cell.to_string(), *count))
                .collect(),
        ),
        basic_stats: BasicStats {
            mean: mean_value,
            median: median_value,
            mode: modes.into_iter().map(ToString::to_string).collect(),
            unique_values: column.unique_count(),
            null_count: column.null_count(),
        },
    })
}

/// Parses the named column into datetimes in place.
///
/// Text cells are tried against [`DATETIME_FORMATS`], [`DATE_FORMATS`] and
/// RFC 3339. If any present cell fails to parse the column is left as it was.
///
/// # Errors
/// * `DataError::ColumnNotFound` - If the column is unknown
/// * `DataError::DateTimeConversion` - With the first value that failed
pub fn convert_to_datetime(frame: &mut DataFrame, column: &str) -> Result<(), DataError> {
    let source = frame.require(column)?;
    if source.kind() == ColumnKind::DateTime {
        return Ok(());
    }

    let cells = source
        .cells()
        .iter()
        .map(|cell| match cell {
            Cell::Null => Ok(Cell::Null),
            Cell::Text(text) => parse_datetime(text.trim()).map(Cell::DateTime).ok_or_else(|| {
                DataError::DateTimeConversion {
                    column: column.to_string(),
                    value: text.clone(),
                }
            }),
            other => Err(DataError::DateTimeConversion {
                column: column.to_string(),
                value: other.to_string(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(column, "Converted column to datetime");
    frame.replace_column(Column::new(column, ColumnKind::DateTime, cells))
}

/// Counts per year, month and weekday plus the covered range.
///
/// # Errors
/// * `DataError::ColumnNotFound` - If the column is unknown
/// * `DataError::NotDateTime` - If the column is not a datetime column
/// * `DataError::NoValues` - If the column has no present value
pub fn time_series(frame: &DataFrame, column: &str) -> Result<TimeSeries, DataError> {
    let source = frame.require(column)?;
    if source.kind() != ColumnKind::DateTime {
        return Err(DataError::NotDateTime(column.to_string()));
    }

    let dates: Vec<NaiveDateTime> = source
        .cells()
        .iter()
        .filter_map(|cell| match cell {
            Cell::DateTime(value) => Some(*value),
            _ => None,
        })
        .collect();

    let (Some(start), Some(end)) = (dates.iter().min(), dates.iter().max()) else {
        return Err(DataError::NoValues(column.to_string()));
    };

    let count_by = |label: fn(&NaiveDateTime) -> String| {
        let labels: Vec<Cell> = dates.iter().map(|date| Cell::Text(label(date))).collect();
        Keyed(
            value_counts(&labels)
                .into_iter()
                .map(|(cell, count)| (cell.to_string(), count))
                .collect(),
        )
    };

    Ok(TimeSeries {
        temporal_distribution: TemporalDistribution {
            by_year: count_by(|date| date.year().to_string()),
            by_month: count_by(|date| date.month().to_string()),
            by_day_of_week: count_by(|date| date.format("%A").to_string()),
        },
        time_range: TimeRange {
            start: start.format("%Y-%m-%d").to_string(),
            end: end.format("%Y-%m-%d").to_string(),
            total_days: (*end - *start).num_days(),
        },
    })
}

/// Rounds to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            DATE_FORMATS.iter().find_map(|format| {
                NaiveDate::parse_from_str(text, format)
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|datetime| datetime.naive_local())
        })
}

/// Present values with their counts, most frequent first, ties in order of first appearance.
fn value_counts(cells: &[Cell]) -> Vec<(&Cell, usize)> {
    let mut counts: Vec<(&Cell, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for cell in cells.iter().filter(|cell| !cell.is_null()) {
        match positions.get(&cell.key()) {
            Some(&position) => counts[position].1 += 1,
            None => {
                positions.insert(cell.key(), counts.len());
                counts.push((cell, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(variance.sqrt())
}

/// Linear interpolation quantile of ascending `sorted` values.
fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * weight)
}

fn pearson(a: &Column, b: &Column) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = a
        .cells()
        .iter()
        .zip(b.cells())
        .filter_map(|(x, y)| Some((x.as_f64()?, y.as_f64()?)))
        .collect();
    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let (mut covariance, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in &pairs {
        covariance += (x - mean_x) * (y - mean_y);
        var_x += (x - mean_x).powi(2);
        var_y += (y - mean_y).powi(2);
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(covariance / (var_x * var_y).sqrt())
}
