//! CSV price curve loader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, trace};

use gbmfit_core::types::ISO_DATE_FORMAT;
use gbmfit_core::{Date, GbmError, GbmResult, Observation};

/// Number of fields in a `date,price` record.
const FIELDS_PER_RECORD: usize = 2;

/// Location label used for sources without a path.
const READER_LOCATION: &str = "<reader>";

/// CSV-based price curve loader.
///
/// Decodes one `date,price` record per line. Whitespace around fields is
/// trimmed and blank lines are ignored. The first malformed record aborts
/// the whole load; records are never skipped.
///
/// # Example
///
/// ```rust
/// use gbmfit_ext_file::CsvCurveLoader;
///
/// let observations = CsvCurveLoader::new()
///     .load_str("2020-01-01,100\n2021-01-01,90\n")
///     .unwrap();
/// assert_eq!(observations.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvCurveLoader {
    date_format: String,
    has_headers: bool,
    delimiter: u8,
}

impl Default for CsvCurveLoader {
    fn default() -> Self {
        Self {
            date_format: ISO_DATE_FORMAT.to_string(),
            has_headers: false,
            delimiter: b',',
        }
    }
}

impl CsvCurveLoader {
    /// Create a loader for headerless `YYYY-MM-DD,price` input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the strftime-style date format.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Skip a header row.
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Returns the configured date format.
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Load observations from a file.
    ///
    /// Failure to open or read the file is `SourceUnavailable`; a record
    /// that cannot be decoded is `MalformedRecord`.
    pub fn load_path(&self, path: impl AsRef<Path>) -> GbmResult<Vec<Observation>> {
        let path = path.as_ref();
        let location = path.display().to_string();
        let file = File::open(path)
            .map_err(|e| GbmError::source_unavailable(location.as_str(), e.to_string()))?;

        debug!("loading price curve from {location}");
        self.decode(file, &location)
    }

    /// Load observations from any reader.
    pub fn load_reader<R: Read>(&self, reader: R) -> GbmResult<Vec<Observation>> {
        self.decode(reader, READER_LOCATION)
    }

    /// Load observations from in-memory text.
    pub fn load_str(&self, text: &str) -> GbmResult<Vec<Observation>> {
        self.decode(text.as_bytes(), READER_LOCATION)
    }

    fn decode<R: Read>(&self, reader: R, location: &str) -> GbmResult<Vec<Observation>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(self.has_headers)
            .delimiter(self.delimiter)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut observations = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| self.read_error(e, location))?;
            let observation = self.decode_record(&record)?;
            trace!("decoded {observation}");
            observations.push(observation);
        }

        debug!("decoded {} observations from {location}", observations.len());
        Ok(observations)
    }

    fn decode_record(&self, record: &StringRecord) -> GbmResult<Observation> {
        let line = record.position().map_or(0, |p| p.line());
        let malformed = |reason: String| {
            GbmError::malformed_record(line, self.record_text(record), reason)
        };

        if record.len() != FIELDS_PER_RECORD {
            return Err(malformed(format!(
                "expected {FIELDS_PER_RECORD} fields, found {}",
                record.len()
            )));
        }

        let date = Date::parse_with_format(&record[0], &self.date_format)
            .map_err(|e| malformed(e.to_string()))?;

        let price_text = &record[1];
        let price: f64 = price_text
            .parse()
            .map_err(|e| malformed(format!("invalid price '{price_text}': {e}")))?;
        if !price.is_finite() {
            return Err(malformed(format!(
                "price '{price_text}' is not a finite number"
            )));
        }

        Ok(Observation::new(date, price))
    }

    fn read_error(&self, err: csv::Error, location: &str) -> GbmError {
        if err.is_io_error() {
            return GbmError::source_unavailable(location, err.to_string());
        }
        let line = err.position().map_or(0, |p| p.line());
        GbmError::malformed_record(line, String::new(), err.to_string())
    }

    fn record_text(&self, record: &StringRecord) -> String {
        let delimiter = char::from(self.delimiter).to_string();
        record.iter().collect::<Vec<_>>().join(&delimiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_str() {
        let observations = CsvCurveLoader::new()
            .load_str("2020-01-01,100\n2020-01-02,101.5\n")
            .unwrap();

        assert_eq!(
            observations,
            vec![
                Observation::new(Date::from_ymd(2020, 1, 1).unwrap(), 100.0),
                Observation::new(Date::from_ymd(2020, 1, 2).unwrap(), 101.5),
            ]
        );
    }

    #[test]
    fn test_trims_whitespace_and_skips_blank_lines() {
        let observations = CsvCurveLoader::new()
            .load_str(" 2020-01-01 , 100 \r\n\r\n2020-01-02,  99.5\n")
            .unwrap();

        assert_eq!(observations.len(), 2);
        assert_eq!(observations[1].price(), 99.5);
    }

    #[test]
    fn test_empty_input_loads_nothing() {
        assert!(CsvCurveLoader::new().load_str("").unwrap().is_empty());
    }

    #[test]
    fn test_negative_price_is_decoded() {
        let observations = CsvCurveLoader::new()
            .load_str("2020-01-01,100\n2020-01-02,-5\n")
            .unwrap();
        assert_eq!(observations[1].price(), -5.0);
    }

    #[test]
    fn test_wrong_date_format() {
        let err = CsvCurveLoader::new()
            .load_str("2020-01-01,100\n01/02/2020,101\n")
            .unwrap_err();

        match err {
            GbmError::MalformedRecord { line, record, .. } => {
                assert_eq!(line, 2);
                assert_eq!(record, "01/02/2020,101");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_impossible_calendar_date() {
        let err = CsvCurveLoader::new()
            .load_str("2021-02-30,100\n")
            .unwrap_err();
        assert!(matches!(err, GbmError::MalformedRecord { line: 1, .. }));
    }

    #[test]
    fn test_non_numeric_price() {
        let err = CsvCurveLoader::new()
            .load_str("2020-01-01,abc\n")
            .unwrap_err();
        assert!(err.to_string().contains("invalid price 'abc'"));
    }

    #[test]
    fn test_trailing_garbage_in_price() {
        let err = CsvCurveLoader::new()
            .load_str("2020-01-01,100abc\n")
            .unwrap_err();
        assert!(matches!(err, GbmError::MalformedRecord { .. }));
    }

    #[test]
    fn test_overflowing_price() {
        for text in ["1e400", "inf", "NaN"] {
            let err = CsvCurveLoader::new()
                .load_str(&format!("2020-01-01,{text}\n"))
                .unwrap_err();
            assert!(
                err.to_string().contains("not a finite number"),
                "{text}: {err}"
            );
        }
    }

    #[test]
    fn test_field_count() {
        for text in ["2020-01-01\n", "2020-01-01,100,7\n", "garbage\n"] {
            let err = CsvCurveLoader::new().load_str(text).unwrap_err();
            assert!(
                err.to_string().contains("expected 2 fields"),
                "{text:?}: {err}"
            );
        }
    }

    #[test]
    fn test_headers_and_custom_format() {
        let observations = CsvCurveLoader::new()
            .with_headers(true)
            .with_delimiter(b';')
            .with_date_format("%m/%d/%Y")
            .load_str("date;close\n01/15/2020;100\n01/16/2020;101\n")
            .unwrap();

        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].date(), Date::from_ymd(2020, 1, 15).unwrap());
    }

    #[test]
    fn test_error_line_accounts_for_header() {
        let err = CsvCurveLoader::new()
            .with_headers(true)
            .load_str("date,price\n2020-01-01,100\n2020-01-02,x\n")
            .unwrap_err();
        assert!(matches!(err, GbmError::MalformedRecord { line: 3, .. }));
    }

    #[test]
    fn test_load_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "2020-01-01,100").unwrap();
        writeln!(file, "2021-01-01,90").unwrap();

        let observations = CsvCurveLoader::new().load_path(file.path()).unwrap();
        assert_eq!(observations.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does_not_exist.csv");

        let err = CsvCurveLoader::new().load_path(&path).unwrap_err();
        match err {
            GbmError::SourceUnavailable { location, .. } => {
                assert!(location.ends_with("does_not_exist.csv"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let bytes: &[u8] = b"2020-01-01,100\n2020-01-02,\xff\xfe\n";
        let err = CsvCurveLoader::new().load_reader(bytes).unwrap_err();
        assert!(matches!(err, GbmError::MalformedRecord { .. }));
    }
}
