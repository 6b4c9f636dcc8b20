use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use climate_core::MasterTable;
use climate_model::GlobalMonthlyRow;

use crate::error::{OutputError, Result};
use crate::format::format_value;

pub const GLOBAL_MONTHLY_COLUMNS: [&str; 4] = ["month", "year", "temp_anom", "month_idx"];

/// Creates the parent directory of `path` when it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Writes the master table. Returns the number of data rows written.
pub fn write_master_csv(path: &Path, table: &MasterTable) -> Result<usize> {
    let mut writer = open_writer(path)?;
    write_record(&mut writer, path, table.column_names())?;

    for row in &table.rows {
        let mut record = Vec::with_capacity(9);
        record.push(row.key.country_code.clone());
        record.push(row.key.country_name.clone());
        record.push(row.key.year.to_string());
        record.extend(row.values.iter().map(|value| format_value(*value)));
        if table.has_temperature {
            record.push(format_value(row.temp_anomaly));
        }
        write_record(&mut writer, path, &record)?;
    }

    finish(writer, path)?;
    tracing::info!(path = %path.display(), rows = table.len(), "wrote master table");
    Ok(table.len())
}

/// Writes the global monthly series in the order given.
pub fn write_global_monthly_csv(path: &Path, rows: &[GlobalMonthlyRow]) -> Result<usize> {
    let mut writer = open_writer(path)?;
    write_record(&mut writer, path, GLOBAL_MONTHLY_COLUMNS)?;

    for row in rows {
        write_record(
            &mut writer,
            path,
            [
                row.month.clone(),
                row.year.to_string(),
                format_value(row.temp_anomaly),
                row.month_index.to_string(),
            ],
        )?;
    }

    finish(writer, path)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "wrote global monthly series");
    Ok(rows.len())
}

type CsvWriter = csv::Writer<BufWriter<File>>;

fn open_writer(path: &Path) -> Result<CsvWriter> {
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(csv::Writer::from_writer(BufWriter::new(file)))
}

fn write_record<I, T>(writer: &mut CsvWriter, path: &Path, record: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    writer
        .write_record(record)
        .map_err(|source| OutputError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

fn finish(mut writer: CsvWriter, path: &Path) -> Result<()> {
    writer.flush().map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}
