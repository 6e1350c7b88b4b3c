//! GWC file parser
//!
//! A GWC file is a positional text format. After discarding blank lines:
//!
//! | Line        | Contents                                             |
//! |-------------|------------------------------------------------------|
//! | 0           | Title                                                |
//! | 1           | `<ignored> <height_count> <direction_count> ...`     |
//! | 2           | Ignored                                              |
//! | 3           | Measurement altitudes, one per height level          |
//! | 4           | Sector frequencies, one per direction                |
//! | 5 + 2i      | Weibull A per height level for direction `i`         |
//! | 5 + 2i + 1  | Weibull k per height level for direction `i`         |

use crate::types::{GwcDataset, GwcError, Result, SectorRecord};
use std::path::Path;

const TITLE_LINE: usize = 0;
const HEADER_LINE: usize = 1;
const ALTITUDE_LINE: usize = 3;
const FREQUENCY_LINE: usize = 4;
const FIRST_SECTOR_LINE: usize = 5;

/// Parse a GWC file into a dataset
///
/// The whole file is read into memory and the handle is released before any
/// parsing starts.
pub fn parse_gwc_file(path: &Path) -> Result<GwcDataset> {
    log::info!("Parsing GWC file: {:?}", path);

    let content = std::fs::read_to_string(path).map_err(|source| GwcError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = parse_gwc_str(&content)?;

    log::info!(
        "Parsed {} heights x {} sectors from {:?}",
        dataset.len(),
        dataset.direction_count(),
        path
    );

    Ok(dataset)
}

/// Parse GWC content that is already in memory
pub fn parse_gwc_str(content: &str) -> Result<GwcDataset> {
    let lines = DataLines::new(content);

    let title = lines.get(TITLE_LINE)?.text;
    let (height_count, direction_count) = parse_header(lines.get(HEADER_LINE)?)?;
    log::debug!(
        "Header declares {} heights and {} directions",
        height_count,
        direction_count
    );

    let altitude_line = lines.get(ALTITUDE_LINE)?;
    let altitudes = altitude_line.floats_at_least(height_count, "altitude")?;
    let heights = altitudes[..height_count]
        .iter()
        .map(|&altitude| altitude_line.height_key(altitude))
        .collect::<Result<Vec<i64>>>()?;

    let frequencies = lines.get(FREQUENCY_LINE)?.floats()?;
    if frequencies.len() < direction_count {
        log::debug!(
            "Frequency line has {} of {} sectors, using uniform fallback for the rest",
            frequencies.len(),
            direction_count
        );
    }

    lines.require_sector_lines(direction_count)?;

    let mut dataset = GwcDataset::new(title, direction_count);
    for &height in &heights {
        if !dataset.insert_height(height) {
            log::warn!(
                "Altitude line {}: several altitudes truncate to {} m, their records share one bucket",
                altitude_line.number,
                height
            );
        }
    }

    for sector in 0..direction_count {
        let a_line = lines.get(FIRST_SECTOR_LINE + 2 * sector)?;
        let k_line = lines.get(FIRST_SECTOR_LINE + 2 * sector + 1)?;
        let scale = a_line.floats_at_least(height_count, "Weibull A")?;
        let shape = k_line.floats_at_least(height_count, "Weibull k")?;

        let frequency = match frequencies.get(sector) {
            Some(&frequency) => frequency,
            None => 1.0 / direction_count as f64,
        };

        for (level, &height) in heights.iter().enumerate() {
            dataset.push_record(
                height,
                SectorRecord::new(frequency, scale[level], shape[level]),
            );
        }
    }

    Ok(dataset)
}

/// Extract `(height_count, direction_count)` from the header line
///
/// The first token is never inspected; anything after the third is ignored.
fn parse_header(line: &DataLine<'_>) -> Result<(usize, usize)> {
    let mut tokens = line.text.split_whitespace().skip(1);
    let height_count = line.count(tokens.next(), "height count")?;
    let direction_count = line.count(tokens.next(), "direction count")?;
    Ok((height_count, direction_count))
}

/// Non-empty lines of the input, trimmed, with their physical line numbers
struct DataLines<'a> {
    lines: Vec<DataLine<'a>>,
}

struct DataLine<'a> {
    /// 1-based line number in the original text
    number: usize,
    text: &'a str,
}

impl<'a> DataLines<'a> {
    fn new(content: &'a str) -> Self {
        let lines = content
            .lines()
            .enumerate()
            .map(|(i, line)| DataLine {
                number: i + 1,
                text: line.trim(),
            })
            .filter(|line| !line.text.is_empty())
            .collect();
        Self { lines }
    }

    fn get(&self, index: usize) -> Result<&DataLine<'a>> {
        self.lines.get(index).ok_or(GwcError::MissingLine {
            index,
            available: self.lines.len(),
        })
    }

    /// Fail unless an A/k line pair is present for every direction
    fn require_sector_lines(&self, direction_count: usize) -> Result<()> {
        let last = direction_count
            .checked_mul(2)
            .and_then(|n| n.checked_add(FIRST_SECTOR_LINE - 1))
            .unwrap_or(usize::MAX);
        self.get(last).map(|_| ())
    }
}

impl DataLine<'_> {
    fn error(&self, message: impl Into<String>) -> GwcError {
        GwcError::Format {
            line: self.number,
            message: message.into(),
        }
    }

    fn floats(&self) -> Result<Vec<f64>> {
        self.text
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| self.error(format!("invalid number {:?}", token)))
            })
            .collect()
    }

    fn floats_at_least(&self, min: usize, what: &str) -> Result<Vec<f64>> {
        let values = self.floats()?;
        if values.len() < min {
            return Err(self.error(format!(
                "expected {} {} values, found {}",
                min,
                what,
                values.len()
            )));
        }
        Ok(values)
    }

    fn count(&self, token: Option<&str>, what: &str) -> Result<usize> {
        let token = token.ok_or_else(|| self.error(format!("missing {}", what)))?;
        token
            .parse::<usize>()
            .map_err(|_| self.error(format!("{} {:?} is not a non-negative integer", what, token)))
    }

    /// Truncate an altitude toward zero to get its bucket key
    fn height_key(&self, altitude: f64) -> Result<i64> {
        if !altitude.is_finite() {
            return Err(self.error(format!("altitude {} has no whole-meter value", altitude)));
        }
        Ok(altitude.trunc() as i64)
    }
}
