//! Reading name lists and writing duplicate reports

use std::io::{self, BufRead, Write};

use namedup_core::DuplicatePair;

use crate::cli::OutputFormat;

/// One name per line; blank lines are dropped.
pub fn read_names(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            names.push(line);
        }
    }
    Ok(names)
}

pub fn write_report(
    mut out: impl Write,
    pairs: &[DuplicatePair],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Tsv => {
            for pair in pairs {
                writeln!(out, "{}\t{}", pair.duplicate, pair.canonical)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, pairs)?;
            writeln!(out)?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_skips_blank_lines() {
        let input = "Bill Gates\n\n   \nGates Bill\n";
        let names = read_names(input.as_bytes()).unwrap();
        assert_eq!(names, vec!["Bill Gates", "Gates Bill"]);
    }

    #[test]
    fn read_keeps_original_spacing() {
        let names = read_names(" Bill  Gates \n".as_bytes()).unwrap();
        assert_eq!(names, vec![" Bill  Gates "]);
    }

    #[test]
    fn tsv_report() {
        let pairs = vec![DuplicatePair::new("Gates Bill", "Bill Gates")];
        let mut out = Vec::new();
        write_report(&mut out, &pairs, OutputFormat::Tsv).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Gates Bill\tBill Gates\n");
    }

    #[test]
    fn json_report() {
        let pairs = vec![DuplicatePair::new("William Gates", "Bill Gates")];
        let mut out = Vec::new();
        write_report(&mut out, &pairs, OutputFormat::Json).unwrap();
        let parsed: Vec<DuplicatePair> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, pairs);
    }

    #[test]
    fn empty_tsv_report() {
        let mut out = Vec::new();
        write_report(&mut out, &[], OutputFormat::Tsv).unwrap();
        assert!(out.is_empty());
    }
}
