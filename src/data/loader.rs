use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument};

use super::{Column, DataError, DataFrame};

/// Cell texts read as missing values.
pub const NA_VALUES: [&str; 10] = [
    "", "NA", "N/A", "NaN", "nan", "null", "NULL", "None", "-NaN", "#N/A",
];

/// Loads a CSV file into a [`DataFrame`].
#[derive(Debug, Clone)]
pub struct DataLoader {
    path: PathBuf,
}

impl DataLoader {
    /// Creates a loader for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File this loader reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the file.
    ///
    /// # Errors
    /// * `DataError::NotFound` - If the file does not exist
    /// * `DataError::Empty` - If the file has no header row
    /// * `DataError::Malformed` / `DataError::UnterminatedQuote` - If the CSV is broken
    /// * `DataError::Io` - For any other read failure
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<DataFrame, DataError> {
        let content = fs::read_to_string(&self.path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => DataError::NotFound(self.path.clone()),
            _ => DataError::Io {
                path: self.path.clone(),
                source,
            },
        })?;

        let frame = parse_csv(&content)?;
        info!(
            rows = frame.row_count(),
            columns = frame.column_count(),
            "Loaded data file"
        );

        Ok(frame)
    }
}

/// Lists the `.csv` files directly inside `dir`, sorted by file name.
///
/// # Errors
/// Returns an error if the directory cannot be read.
pub fn list_csv_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|extension| extension.eq_ignore_ascii_case("csv"))
        })
        .collect();

    files.sort();
    debug!(dir = %dir.display(), count = files.len(), "Listed CSV files");
    Ok(files)
}

/// Parses CSV text whose first record is the header.
///
/// Fields are separated by commas and may be double-quoted; inside quotes a
/// doubled quote stands for one quote and commas and line breaks are kept.
/// Blank lines are skipped. Rows shorter than the header are padded with
/// missing values.
///
/// # Errors
/// * `DataError::Empty` - If there is no header
/// * `DataError::Malformed` - If a row has more fields than the header
/// * `DataError::UnterminatedQuote` - If a quoted field never closes
pub fn parse_csv(content: &str) -> Result<DataFrame, DataError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut records = split_records(content)?.into_iter();

    let Some((_, header)) = records.next() else {
        return Err(DataError::Empty);
    };
    let names = column_names(header);

    let mut raw: Vec<Vec<Option<String>>> = vec![Vec::new(); names.len()];
    for (line, fields) in records {
        if fields.len() > names.len() {
            return Err(DataError::Malformed {
                line,
                expected: names.len(),
                found: fields.len(),
            });
        }

        let mut fields = fields.into_iter();
        for values in raw.iter_mut() {
            let value = fields
                .next()
                .filter(|field| !NA_VALUES.contains(&field.trim()));
            values.push(value);
        }
    }

    let columns = names
        .into_iter()
        .zip(raw)
        .map(|(name, values)| Column::from_raw(name, values))
        .collect();

    DataFrame::new(columns)
}

/// Header names, with blanks named `Unnamed: <index>` and repeats suffixed `.1`, `.2`, ...
fn column_names(header: Vec<String>) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(header.len());

    for (index, field) in header.into_iter().enumerate() {
        let base = match field.trim() {
            "" => format!("Unnamed: {index}"),
            name => name.to_string(),
        };

        let mut name = base.clone();
        let mut suffix = 1;
        while names.contains(&name) {
            name = format!("{base}.{suffix}");
            suffix += 1;
        }
        names.push(name);
    }

    names
}

/// Splits CSV text into records, each tagged with the line it starts on.
fn split_records(content: &str) -> Result<Vec<(usize, Vec<String>)>, DataError> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut field_quoted = false;
    let mut line = 1;
    let mut record_line = 1;
    let mut quote_line = 1;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() && !field_quoted => {
                in_quotes = true;
                field_quoted = true;
                quote_line = line;
            }
            ',' => {
                record.push(std::mem::take(&mut field));
                field_quoted = false;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                record.push(std::mem::take(&mut field));
                let is_blank = record.len() == 1 && record[0].is_empty() && !field_quoted;
                if !is_blank {
                    records.push((record_line, std::mem::take(&mut record)));
                }
                record.clear();
                field_quoted = false;
                line += 1;
                record_line = line;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(DataError::UnterminatedQuote { line: quote_line });
    }

    if !field.is_empty() || !record.is_empty() || field_quoted {
        record.push(field);
        records.push((record_line, record));
    }

    Ok(records)
}
