use std::collections::HashMap;

use cagcap_nmea::{Gga, Gsa, Gsv, NmeaMessage, SatelliteView, Vtg};

use super::gps_fix::GpsFix;

/// Folds decoded sentences into a [`GpsFix`].
///
/// A fix is published once a GGA position has arrived and the satellite list
/// resolved from GSA and GSV holds more than one satellite. The aggregator has
/// no clock of its own; whoever drives it calls [`FixAggregator::reset`] when
/// the receiver goes quiet.
#[derive(Debug, Default)]
pub struct FixAggregator {
    fix: GpsFix,
    satellite_views: HashMap<u16, SatelliteView>,
    satellite_numbers: Vec<u16>,
    satellites_in_view: u8,
    position_ready: bool,
}

impl FixAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot when `message` completes a publishable fix.
    pub fn handle(&mut self, message: &NmeaMessage) -> Option<GpsFix> {
        match message {
            NmeaMessage::Gga(gga) => self.update_gga(gga),
            NmeaMessage::Gsa(gsa) => self.update_gsa(gsa),
            NmeaMessage::Gsv(gsv) => self.update_gsv(gsv),
            NmeaMessage::Vtg(vtg) => self.update_vtg(vtg),
            NmeaMessage::Gll(_)
            | NmeaMessage::Rmc(_)
            | NmeaMessage::Txt(_)
            | NmeaMessage::Unknown(_) => {}
        }

        if self.position_ready && self.fix.satellites.len() > 1 {
            self.position_ready = false;
            return Some(self.gps_fix());
        }
        None
    }

    /// Drops everything collected so far and returns the empty fix.
    pub fn reset(&mut self) -> GpsFix {
        *self = Self::default();
        self.gps_fix()
    }

    /// Current working state, including data folded in after the last publish.
    pub fn gps_fix(&self) -> GpsFix {
        self.fix.clone()
    }

    fn update_gga(&mut self, gga: &Gga) {
        self.fix.time = gga.time;
        self.fix.latitude = gga.latitude;
        self.fix.latitude_hemisphere = gga.latitude_hemisphere;
        self.fix.longitude = gga.longitude;
        self.fix.longitude_hemisphere = gga.longitude_hemisphere;
        self.fix.altitude = gga.altitude;
        self.position_ready = true;
    }

    fn update_gsa(&mut self, gsa: &Gsa) {
        self.satellite_numbers = gsa.satellite_numbers.clone();
        self.satellite_views.clear();
    }

    fn update_gsv(&mut self, gsv: &Gsv) {
        if self.satellites_in_view != gsv.satellites_in_view {
            self.satellites_in_view = gsv.satellites_in_view;
            self.satellite_views.clear();
        }

        for view in &gsv.satellite_views {
            self.satellite_views.insert(view.id, *view);
        }

        if self.satellite_views.len() == self.satellites_in_view as usize {
            self.fix.satellites = self
                .satellite_numbers
                .iter()
                .filter_map(|id| self.satellite_views.get(id).copied())
                .collect();
            self.fix.satellite_count = self.fix.satellites.len();
            self.satellite_views.clear();
        }
    }

    fn update_vtg(&mut self, vtg: &Vtg) {
        self.fix.speed = vtg.speed_kph;
        self.fix.course_true = vtg.course_true;
        self.fix.course_magnetic = vtg.course_magnetic;
    }
}
