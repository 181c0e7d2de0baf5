use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use shopgen_core::{Dataset, Record};
use tracing::debug;

use crate::errors::GenerationError;
use crate::model::TableReport;

/// Write records as CSV: a header row, then one row per record in order.
///
/// Returns the number of bytes written.
pub fn write_records<R: Record, W: Write>(writer: W, records: &[R]) -> Result<u64, csv::Error> {
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    writer.write_record(R::HEADER)?;
    for record in records {
        writer.write_record(record.row())?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

/// Write every collection of `dataset` to `<dir>/<entity>.csv`.
pub fn write_dataset(dataset: &Dataset, dir: &Path) -> Result<Vec<TableReport>, GenerationError> {
    std::fs::create_dir_all(dir)?;

    Ok(vec![
        write_table(dir, &dataset.users)?,
        write_table(dir, &dataset.products)?,
        write_table(dir, &dataset.orders)?,
        write_table(dir, &dataset.order_items)?,
        write_table(dir, &dataset.reviews)?,
    ])
}

fn write_table<R: Record>(dir: &Path, records: &[R]) -> Result<TableReport, GenerationError> {
    let path = dir.join(R::KIND.file_name());
    let file = BufWriter::new(File::create(&path)?);
    let bytes = write_records(file, records)?;
    let rows = records.len() as u64;
    debug!(table = %R::KIND, rows, bytes, path = %path.display(), "table written");
    Ok(TableReport {
        entity: R::KIND,
        path,
        rows,
        bytes,
    })
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
