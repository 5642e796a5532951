//! Input and output plumbing for CLI handlers.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};

use camino::Utf8Path;
use vitrine::{CardError, InputSource, ProductRecord, parse_products, read_products};

/// Loads product records from the configured source.
///
/// # Errors
///
/// Returns [`CardError::Io`] if the source cannot be read and
/// [`CardError::InvalidInput`] if it does not hold product records.
pub fn read_input(source: &InputSource) -> Result<Vec<ProductRecord>, CardError> {
    match source {
        InputSource::Stdin => read_products(io::stdin().lock()),
        InputSource::File(path) => {
            let content = fs::read_to_string(path).map_err(|e| CardError::Io {
                message: format!("failed to read input file '{path}': {e}"),
            })?;
            parse_products(&content)
        }
    }
}

/// Reads a template file.
///
/// # Errors
///
/// Returns [`CardError::Io`] if the file cannot be read.
pub fn read_template(path: &Utf8Path) -> Result<String, CardError> {
    fs::read_to_string(path).map_err(|e| CardError::Io {
        message: format!("failed to read template file '{path}': {e}"),
    })
}

/// Runs `write` against the output file, or stdout when `path` is `None`.
///
/// # Errors
///
/// Returns [`CardError::Io`] if the file cannot be created or flushed, and
/// any error returned by `write`.
pub fn with_output<T>(
    path: Option<&Utf8Path>,
    write: impl FnOnce(&mut dyn Write) -> Result<T, CardError>,
) -> Result<T, CardError> {
    if let Some(path) = path {
        let file = File::create(path).map_err(|e| CardError::Io {
            message: format!("failed to create output file '{path}': {e}"),
        })?;
        let mut writer = BufWriter::new(file);
        let result = write(&mut writer)?;
        writer.flush().map_err(|e| CardError::Io {
            message: format!("failed to flush output file: {e}"),
        })?;
        Ok(result)
    } else {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        let result = write(&mut writer)?;
        writer.flush().map_err(|e| CardError::io(&e))?;
        Ok(result)
    }
}
