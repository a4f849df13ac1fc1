mod device;
mod fix_aggregator;
mod gps_fix;
mod gps_fix_csv_writer;
mod gps_receiver;

pub use device::{
    open_serial_device, pump, GpsReceiverDevice, NullGpsDevice, SerialGpsDevice, StreamGpsDevice,
};
pub use fix_aggregator::FixAggregator;
pub use gps_fix::GpsFix;
pub use gps_fix_csv_writer::GpsFixCsvWriter;
pub use gps_receiver::GpsReceiver;
