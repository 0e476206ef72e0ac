//! Plain-text matrix files.
//!
//! One matrix row per line, no header. Files ending in `.tsv` are tab
//! separated; everything else is read as comma separated.
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};

use densemat::Matrix;

fn delimiter_for<P: AsRef<Path>>(path: P) -> u8 {
    let is_tsv = path
        .as_ref()
        .extension()
        .map(|e| e.eq_ignore_ascii_case("tsv"))
        .unwrap_or(false);
    if is_tsv {
        b'\t'
    } else {
        b','
    }
}

/// Load a matrix from a CSV or TSV file.
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<Matrix<f64>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open file: {:?}", path.as_ref()))?;
    parse_matrix(BufReader::new(file), delimiter_for(&path))
        .with_context(|| format!("Failed to read matrix from {:?}", path.as_ref()))
}

/// Parse delimited rows into a matrix. All rows must have the same length.
pub fn parse_matrix<R: Read>(reader: R, delimiter: u8) -> Result<Matrix<f64>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut values = Vec::new();
    let mut cols = 0;
    let mut rows = 0;
    for result in rdr.records() {
        let record = result?;
        if rows == 0 {
            cols = record.len();
        }
        for (j, field) in record.iter().enumerate() {
            let value: f64 = field
                .parse()
                .with_context(|| format!("Invalid number '{}' at row {}, column {}", field, rows + 1, j + 1))?;
            values.push(value);
        }
        rows += 1;
    }

    if rows == 0 {
        anyhow::bail!("No rows found");
    }
    log::debug!("Parsed {}x{} matrix", rows, cols);
    Ok(Matrix::from_shape_vec((rows, cols), values)?)
}

/// Write `matrix` with the same layout `read_matrix` accepts.
pub fn write_matrix<W: Write>(writer: W, matrix: &Matrix<f64>, delimiter: u8) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(writer);
    for row in 0..matrix.nrows() {
        wtr.write_record(matrix.row_slice(row).iter().map(|v| v.to_string()))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_matrix_file<P: AsRef<Path>>(path: P, matrix: &Matrix<f64>) -> Result<()> {
    let file = File::create(&path)
        .with_context(|| format!("Failed to create file: {:?}", path.as_ref()))?;
    write_matrix(file, matrix, delimiter_for(&path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_rows() {
        let m = parse_matrix("1, 2\n3, 4\n".as_bytes(), b',').unwrap();
        assert_eq!(m.size(), (2, 2));
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(parse_matrix("1,2\n3\n".as_bytes(), b',').is_err());
    }

    #[test]
    fn non_numeric_field_is_rejected() {
        let err = parse_matrix("1\tx\n".as_bytes(), b'\t').unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid number"));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(parse_matrix("".as_bytes(), b',').is_err());
    }

    #[test]
    fn written_rows_parse_back() {
        let m = Matrix::from_shape_vec((2, 2), vec![0.5, -1.0, 3.25, 8.0]).unwrap();
        let mut buf = Vec::new();
        write_matrix(&mut buf, &m, b'\t').unwrap();
        assert_eq!(String::from_utf8(buf.clone()).unwrap(), "0.5\t-1\n3.25\t8\n");
        assert_eq!(parse_matrix(buf.as_slice(), b'\t').unwrap(), m);
    }

    #[test]
    fn delimiter_follows_extension() {
        assert_eq!(delimiter_for("a.tsv"), b'\t');
        assert_eq!(delimiter_for("a.TSV"), b'\t');
        assert_eq!(delimiter_for("a.csv"), b',');
        assert_eq!(delimiter_for("a"), b',');
    }
}
