use std::{fs::File, io::Write, path::Path};

use anyhow::{anyhow, Result};

use super::gps_fix::GpsFix;

const TITLE_ROW: [&str; 9] = [
    "time",
    "latitude",
    "longitude",
    "altitude",
    "speed_kph",
    "course_true",
    "course_magnetic",
    "satellites",
    "satellite_ids",
];

/// One row per published fix, coordinates in signed decimal degrees.
pub struct GpsFixCsvWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl GpsFixCsvWriter<File> {
    pub fn new<P: AsRef<Path>>(file_path: P) -> Result<Self> {
        Self::from_writer(File::create(file_path)?)
    }
}

impl<W: Write> GpsFixCsvWriter<W> {
    pub fn from_writer(writer: W) -> Result<Self> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(TITLE_ROW)?;
        Ok(Self { writer })
    }

    pub fn write(&mut self, fix: &GpsFix) -> Result<()> {
        let satellite_ids = fix
            .satellite_ids()
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        self.writer.write_record([
            fix.time.format("%Y-%m-%dT%H:%M:%S%.3f").to_string(),
            format!("{}", fix.latitude_degrees()),
            format!("{}", fix.longitude_degrees()),
            format!("{}", fix.altitude),
            format!("{}", fix.speed),
            format!("{}", fix.course_true),
            format!("{}", fix.course_magnetic),
            format!("{}", fix.satellite_count),
            satellite_ids,
        ])?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|error| anyhow!("failed to flush CSV writer: {}", error.error()))
    }
}
