use std::time::Duration;

use anyhow::Result;
use cagcap_nmea::{GpsDataProcessor, NmeaMessage};
use log::{debug, info};
use tokio::{
    select,
    sync::{
        broadcast,
        mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender},
        watch,
    },
    task::JoinHandle,
    time::{sleep_until, Instant},
};

use super::{fix_aggregator::FixAggregator, gps_fix::GpsFix};
use crate::config::GpsReceiverConfig;

/// Runs the GPS pipeline: transport chunks go in through [`GpsReceiver::feed`],
/// decoded messages and published fixes come out of the broadcast channels.
///
/// The aggregator and its reset timer live in a single task, so a timeout can
/// never interleave with a message being folded in.
pub struct GpsReceiver {
    processor: GpsDataProcessor,
    input: Option<UnboundedSender<NmeaMessage>>,
    messages: broadcast::Sender<NmeaMessage>,
    fixes: broadcast::Sender<GpsFix>,
    current: watch::Receiver<GpsFix>,
    task: Option<JoinHandle<()>>,
}

impl GpsReceiver {
    /// Must be called from within a tokio runtime.
    pub fn spawn(config: &GpsReceiverConfig) -> Self {
        let capacity = config.channel_capacity.max(1);
        let (input_tx, input_rx) = unbounded_channel();
        let (messages, _) = broadcast::channel(capacity);
        let (fixes, _) = broadcast::channel(capacity);
        let (current_tx, current_rx) = watch::channel(GpsFix::default());

        let task = tokio::spawn(run_aggregator(
            input_rx,
            fixes.clone(),
            current_tx,
            config.timeout(),
        ));

        Self {
            processor: GpsDataProcessor::new(),
            input: Some(input_tx),
            messages,
            fixes,
            current: current_rx,
            task: Some(task),
        }
    }

    /// Hands a raw transport chunk to the pipeline.
    pub fn feed(&mut self, data: &str) {
        let input = self.input.as_ref();
        let messages = &self.messages;
        self.processor.process(data, |message| {
            // no subscribers is fine
            let _ = messages.send(message.clone());
            if let Some(input) = input {
                let _ = input.send(message);
            }
        });
    }

    pub fn subscribe_messages(&self) -> broadcast::Receiver<NmeaMessage> {
        self.messages.subscribe()
    }

    pub fn subscribe_fixes(&self) -> broadcast::Receiver<GpsFix> {
        self.fixes.subscribe()
    }

    /// Latest working state of the aggregator.
    pub fn gps_fix(&self) -> GpsFix {
        self.current.borrow().clone()
    }

    pub fn watch_fix(&self) -> watch::Receiver<GpsFix> {
        self.current.clone()
    }

    /// Stops the aggregator task once it has drained what was already fed.
    pub async fn shutdown(mut self) -> Result<()> {
        self.input.take();
        if let Some(task) = self.task.take() {
            task.await?;
        }
        Ok(())
    }
}

async fn run_aggregator(
    mut input: UnboundedReceiver<NmeaMessage>,
    fixes: broadcast::Sender<GpsFix>,
    current: watch::Sender<GpsFix>,
    timeout: Duration,
) {
    let mut aggregator = FixAggregator::new();
    // armed by live messages only
    let mut deadline: Option<Instant> = None;

    loop {
        select! {
            message = input.recv() => {
                let Some(message) = message else {
                    break;
                };
                if let Some(fix) = aggregator.handle(&message) {
                    debug!("GPS fix: {}", fix);
                    let _ = fixes.send(fix);
                }
                current.send_replace(aggregator.gps_fix());
                deadline = Some(Instant::now() + timeout);
            }
            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                deadline = None;
                info!("No GPS data for {:?}, resetting fix", timeout);
                let fix = aggregator.reset();
                current.send_replace(fix.clone());
                let _ = fixes.send(fix);
            }
        }
    }
    debug!("GPS aggregator stopped");
}
