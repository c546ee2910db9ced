use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::errors::{GenerationError, GenerationResult};
use crate::record::Record;

/// Write each record to `writer` as an indented JSON object.
pub fn print_records<W: Write>(writer: &mut W, records: &[Record]) -> GenerationResult<()> {
    for record in records {
        serde_json::to_writer_pretty(&mut *writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a batch as one indented JSON array, returning bytes written.
pub fn write_records_file(path: &Path, records: &[Record]) -> GenerationResult<u64> {
    let write_err = |source| GenerationError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = CountingWriter::new(BufWriter::new(file));
    write_pretty(&mut writer, records).map_err(write_err)?;
    writer.flush().map_err(write_err)?;
    Ok(writer.bytes_written())
}

fn write_pretty<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value).map_err(std::io::Error::from)
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
