use std::fs::read_to_string;

use anyhow::Result;
use cagcap_host_lib::{FixAggregator, GpsFixCsvWriter};
use cagcap_nmea::GpsDataProcessor;
use log::info;

use crate::DecodeArgs;

/// Replays a log through the same decoding and aggregation as a live capture.
/// There is no reset timer, so a gap in the log does not clear the fix.
pub fn decode(args: DecodeArgs) -> Result<()> {
    let log = read_to_string(&args.file)?;
    let mut csv_writer = args.csv.map(GpsFixCsvWriter::new).transpose()?;

    let mut processor = GpsDataProcessor::new();
    let mut aggregator = FixAggregator::new();
    let mut messages = Vec::new();
    processor.process(&log, |message| messages.push(message));

    let mut fix_count = 0;
    for message in &messages {
        println!("{:?}", message);
        if let Some(fix) = aggregator.handle(message) {
            println!("{}", fix);
            if let Some(csv_writer) = csv_writer.as_mut() {
                csv_writer.write(&fix)?;
            }
            fix_count += 1;
        }
    }
    if let Some(csv_writer) = csv_writer.as_mut() {
        csv_writer.flush()?;
    }

    info!(
        "Decoded {} messages into {} fixes from {}",
        messages.len(),
        fix_count,
        args.file.display()
    );
    Ok(())
}
