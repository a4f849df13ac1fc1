use core::fmt;

use cagcap_nmea::{
    latitude_to_degrees, longitude_to_degrees, LatitudeHemisphere, LongitudeHemisphere,
    SatelliteView,
};
use chrono::NaiveDateTime;

/// One consistent position and velocity snapshot built from several
/// sentences. Coordinates are kept in raw `ddmm.mmmm` form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GpsFix {
    pub time: NaiveDateTime,
    pub latitude: f64,
    pub latitude_hemisphere: LatitudeHemisphere,
    pub longitude: f64,
    pub longitude_hemisphere: LongitudeHemisphere,
    /// Metres above mean sea level.
    pub altitude: f64,
    /// km/h
    pub speed: f64,
    pub course_true: f64,
    pub course_magnetic: f64,
    pub satellite_count: usize,
    /// Ordered like the PRN list of the last GSA sentence.
    pub satellites: Vec<SatelliteView>,
}

impl GpsFix {
    pub fn latitude_degrees(&self) -> f64 {
        latitude_to_degrees(self.latitude, self.latitude_hemisphere)
    }

    pub fn longitude_degrees(&self) -> f64 {
        longitude_to_degrees(self.longitude, self.longitude_hemisphere)
    }

    pub fn satellite_ids(&self) -> Vec<u16> {
        self.satellites.iter().map(|satellite| satellite.id).collect()
    }
}

impl fmt::Display for GpsFix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Latitude: {} {:?}, Longitude: {} {:?}, Altitude: {}m, Speed: {}km/h, Course (True): {}°, satellites: ",
            self.latitude,
            self.latitude_hemisphere,
            self.longitude,
            self.longitude_hemisphere,
            self.altitude,
            self.speed,
            self.course_true,
        )?;
        for (i, satellite) in self.satellites.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(
                f,
                "[Id: {}, Elevation: {}, Azimuth: {}, SNR: {}]",
                satellite.id, satellite.elevation, satellite.azimuth, satellite.snr
            )?;
        }
        Ok(())
    }
}
