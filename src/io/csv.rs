//! CSV ingest of measured admittance spectra and two-column response export.
//!
//! Import follows the COMSOL export convention: lines starting with `%`
//! are metadata comments, the first remaining row is a header, and every
//! data row carries a frequency column and an admittance column. The
//! admittance cell may be a plain real or a complex literal (`a+bi`).

use std::io::{self, Write};
use std::path::Path;

use ::csv::{ReaderBuilder, Trim};

use crate::cascade::FilterResponse;
use crate::curve::SampleCurve;
use crate::errors::FilterError;
use crate::math::{Scalar, C};

/// Reads one resonator curve from a CSV file.
///
/// Fails with [`FilterError::Import`] on unreadable files, short rows, or
/// unparseable cells; the row number is included so bad measurements can
/// be located. The parsed curve is validated by [`SampleCurve::new`].
pub fn import_csv(path: &Path) -> Result<SampleCurve, FilterError> {
    let mut reader = ReaderBuilder::new()
        .comment(Some(b'%'))
        .trim(Trim::All)
        .from_path(path)
        .map_err(|e| FilterError::Import(format!("opening {}: {e}", path.display())))?;

    let mut frequencies: Vec<Scalar> = Vec::new();
    let mut admittance: Vec<C> = Vec::new();

    for (row, result) in reader.records().enumerate() {
        let record = result.map_err(|e| FilterError::Import(format!("row {row}: {e}")))?;
        if record.len() < 2 {
            return Err(FilterError::Import(format!(
                "row {row}: expected 2 columns (frequency, admittance), got {}",
                record.len()
            )));
        }
        let f: Scalar = record[0]
            .parse()
            .map_err(|e| FilterError::Import(format!("row {row}: frequency '{}': {e}", &record[0])))?;
        let y: C = record[1]
            .parse()
            .map_err(|e| FilterError::Import(format!("row {row}: admittance '{}': {e}", &record[1])))?;
        frequencies.push(f);
        admittance.push(y);
    }

    if frequencies.is_empty() {
        return Err(FilterError::Import(format!(
            "{}: no data rows",
            path.display()
        )));
    }

    SampleCurve::new(frequencies, admittance)
}

/// Writes a filter response as a two-column table
/// (`frequency,ReY,ImY`) to any writer.
pub fn write_response_csv<W: Write>(mut w: W, response: &FilterResponse) -> io::Result<()> {
    writeln!(w, "frequency,ReY,ImY")?;
    for (f, y) in response.frequencies.iter().zip(&response.admittance) {
        writeln!(w, "{:.16e},{:.16e},{:.16e}", f, y.re, y.im)?;
    }
    Ok(())
}
