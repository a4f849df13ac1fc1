use anyhow::Result;
use log::{debug, info};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio_serial::{DataBits, FlowControl, Parity, SerialPortBuilderExt, SerialStream, StopBits};

use super::gps_receiver::GpsReceiver;

const READ_BUFFER_SIZE: usize = 256;

/// Byte source of a GPS receiver.
pub trait GpsReceiverDevice {
    /// Next chunk of received text, `None` once the stream has ended.
    /// Chunks do not follow sentence boundaries.
    async fn read_chunk(&mut self) -> Result<Option<String>>;

    /// Sends one line to the receiver, CRLF is appended.
    async fn write_line(&mut self, line: &str) -> Result<()>;
}

pub struct StreamGpsDevice<S: AsyncRead + AsyncWrite + Unpin> {
    stream: S,
    buffer: [u8; READ_BUFFER_SIZE],
}

pub type SerialGpsDevice = StreamGpsDevice<SerialStream>;

impl<S: AsyncRead + AsyncWrite + Unpin> StreamGpsDevice<S> {
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            buffer: [0; READ_BUFFER_SIZE],
        }
    }

    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S: AsyncRead + AsyncWrite + Unpin> GpsReceiverDevice for StreamGpsDevice<S> {
    async fn read_chunk(&mut self) -> Result<Option<String>> {
        let length = self.stream.read(&mut self.buffer).await?;
        if length == 0 {
            return Ok(None);
        }
        // anything that is not ASCII makes the framing start over anyway
        Ok(Some(
            String::from_utf8_lossy(&self.buffer[..length]).into_owned(),
        ))
    }

    async fn write_line(&mut self, line: &str) -> Result<()> {
        self.stream.write_all(line.as_bytes()).await?;
        self.stream.write_all(b"\r\n").await?;
        self.stream.flush().await?;
        Ok(())
    }
}

/// Opens `port` as 8N1 without flow control.
pub fn open_serial_device(port: &str, baud_rate: u32) -> Result<SerialGpsDevice> {
    let serial = tokio_serial::new(port, baud_rate)
        .data_bits(DataBits::Eight)
        .parity(Parity::None)
        .stop_bits(StopBits::One)
        .flow_control(FlowControl::None)
        .open_native_async()?;
    info!("Opened GPS receiver on {} at {} baud", port, baud_rate);
    Ok(StreamGpsDevice::new(serial))
}

/// Stands in for a disabled receiver.
pub struct NullGpsDevice;

impl GpsReceiverDevice for NullGpsDevice {
    async fn read_chunk(&mut self) -> Result<Option<String>> {
        std::future::pending().await
    }

    async fn write_line(&mut self, line: &str) -> Result<()> {
        debug!("GPS receiver disabled, dropping {:?}", line);
        Ok(())
    }
}

/// Feeds everything `device` produces into `receiver` until the stream ends.
pub async fn pump<D: GpsReceiverDevice>(device: &mut D, receiver: &mut GpsReceiver) -> Result<()> {
    while let Some(chunk) = device.read_chunk().await? {
        receiver.feed(&chunk);
    }
    info!("GPS receiver stream ended");
    Ok(())
}
