use crate::domain::record::{CheckDigitRecord, ValidationRecord};
use crate::error::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per input
    #[default]
    Text,
    /// CSV with a header row
    Csv,
    /// A JSON array of records
    Json,
}

/// Writes check results to an output stream in the selected format.
///
/// In text mode, failed check-digit computations go to the separate error
/// stream. CSV and JSON carry them in the `error` column instead.
pub struct ReportWriter<W: Write, E: Write> {
    format: OutputFormat,
    out: W,
    err: E,
}

impl<W: Write, E: Write> ReportWriter<W, E> {
    pub fn new(format: OutputFormat, out: W, err: E) -> Self {
        Self { format, out, err }
    }

    pub fn write_validations(&mut self, records: &[ValidationRecord]) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                for record in records {
                    let verdict = if record.valid {
                        "✓ Valid"
                    } else {
                        "✗ Invalid"
                    };
                    writeln!(
                        self.out,
                        "[{}] CNPJ: [{}] {}",
                        record.position, record.input, verdict
                    )?;
                }
                self.out.flush()?;
                Ok(())
            }
            OutputFormat::Csv => self.write_csv(records),
            OutputFormat::Json => self.write_json(records),
        }
    }

    pub fn write_check_digits(&mut self, records: &[CheckDigitRecord]) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                for record in records {
                    match (&record.check_digits, &record.cnpj, &record.formatted) {
                        (Some(dv), Some(cnpj), Some(formatted)) => {
                            writeln!(
                                self.out,
                                "[{}] CNPJ: [{}] DV: [{}]",
                                record.position, record.input, dv
                            )?;
                            writeln!(self.out, "    Full CNPJ: {} ({})", cnpj, formatted)?;
                        }
                        _ => {
                            writeln!(
                                self.err,
                                "[{}] Error computing check digits for CNPJ [{}]: {}",
                                record.position,
                                record.input,
                                record.error.as_deref().unwrap_or("unknown error")
                            )?;
                        }
                    }
                }
                self.out.flush()?;
                self.err.flush()?;
                Ok(())
            }
            OutputFormat::Csv => self.write_csv(records),
            OutputFormat::Json => self.write_json(records),
        }
    }

    fn write_csv<T: Serialize>(&mut self, records: &[T]) -> Result<()> {
        let mut writer = csv::Writer::from_writer(&mut self.out);
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn write_json<T: Serialize>(&mut self, records: &[T]) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, records)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    /// Consumes the writer, returning the output and error streams.
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}
