pub mod config;
pub mod gps;

pub use config::{load_config, read_config, CagCapConfig, GpsReceiverConfig, LoggingConfig};
pub use gps::{
    open_serial_device, pump, FixAggregator, GpsFix, GpsFixCsvWriter, GpsReceiver,
    GpsReceiverDevice, NullGpsDevice, SerialGpsDevice, StreamGpsDevice,
};

#[cfg(test)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
