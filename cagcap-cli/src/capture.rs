use std::fs::File;

use anyhow::Result;
use cagcap_host_lib::{
    open_serial_device, pump, CagCapConfig, GpsFixCsvWriter, GpsReceiver, GpsReceiverDevice,
    NullGpsDevice,
};
use log::{info, warn};
use tokio::{select, signal::ctrl_c, sync::broadcast::error::RecvError, task::JoinHandle};

use crate::CaptureArgs;

pub async fn capture(args: CaptureArgs, mut config: CagCapConfig) -> Result<()> {
    let gps_config = &mut config.gps_receiver;
    if let Some(port) = args.port {
        gps_config.port = port;
    }
    if let Some(baud_rate) = args.baud_rate {
        gps_config.baud_rate = baud_rate;
    }

    let csv_writer = args.csv.map(GpsFixCsvWriter::new).transpose()?;
    let mut receiver = GpsReceiver::spawn(gps_config);

    let printer = spawn_fix_printer(&receiver, csv_writer);
    let raw_printer = args.raw.then(|| spawn_message_printer(&receiver));

    let result = if gps_config.enable {
        let mut device = open_serial_device(&gps_config.port, gps_config.baud_rate)?;
        run_until_ctrl_c(&mut device, &mut receiver).await
    } else {
        warn!("GPS receiver disabled in config");
        run_until_ctrl_c(&mut NullGpsDevice, &mut receiver).await
    };

    receiver.shutdown().await?;
    printer.await??;
    if let Some(raw_printer) = raw_printer {
        raw_printer.await?;
    }
    result
}

async fn run_until_ctrl_c<D: GpsReceiverDevice>(
    device: &mut D,
    receiver: &mut GpsReceiver,
) -> Result<()> {
    select! {
        result = pump(device, receiver) => result,
        result = ctrl_c() => {
            info!("Stopping capture");
            Ok(result?)
        }
    }
}

fn spawn_fix_printer(
    receiver: &GpsReceiver,
    mut csv_writer: Option<GpsFixCsvWriter<File>>,
) -> JoinHandle<Result<()>> {
    let mut fixes = receiver.subscribe_fixes();
    tokio::spawn(async move {
        loop {
            match fixes.recv().await {
                Ok(fix) => {
                    println!("{}", fix);
                    if let Some(csv_writer) = csv_writer.as_mut() {
                        csv_writer.write(&fix)?;
                        csv_writer.flush()?;
                    }
                }
                Err(RecvError::Lagged(skipped)) => warn!("Skipped {} GPS fixes", skipped),
                Err(RecvError::Closed) => break,
            }
        }
        Ok(())
    })
}

fn spawn_message_printer(receiver: &GpsReceiver) -> JoinHandle<()> {
    let mut messages = receiver.subscribe_messages();
    tokio::spawn(async move {
        loop {
            match messages.recv().await {
                Ok(message) => println!("{:?}", message),
                Err(RecvError::Lagged(skipped)) => warn!("Skipped {} NMEA messages", skipped),
                Err(RecvError::Closed) => break,
            }
        }
    })
}
