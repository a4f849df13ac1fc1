use chrono::NaiveDateTime;

use crate::common::{
    field, parse_data_status, parse_date_time, parse_f64, parse_latitude_hemisphere,
    parse_longitude_hemisphere, DataStatus, LatitudeHemisphere, LongitudeHemisphere, PositionFix,
};

/// Recommended minimum specific GNSS data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rmc {
    /// Combined from the time (field 0) and date (field 8) columns.
    pub time: NaiveDateTime,
    pub status: DataStatus,
    pub latitude: f64,
    pub latitude_hemisphere: LatitudeHemisphere,
    pub longitude: f64,
    pub longitude_hemisphere: LongitudeHemisphere,
    pub speed_knots: f64,
    pub course: f64,
    pub magnetic_variation: f64,
    pub magnetic_variation_direction: LongitudeHemisphere,
    pub position_mode: PositionFix,
}

pub fn parse_rmc(fields: &[String]) -> Rmc {
    Rmc {
        time: parse_date_time(field(fields, 0), field(fields, 8)),
        status: parse_data_status(field(fields, 1)),
        latitude: parse_f64(field(fields, 2)),
        latitude_hemisphere: parse_latitude_hemisphere(field(fields, 3)),
        longitude: parse_f64(field(fields, 4)),
        longitude_hemisphere: parse_longitude_hemisphere(field(fields, 5)),
        speed_knots: parse_f64(field(fields, 6)),
        course: parse_f64(field(fields, 7)),
        magnetic_variation: parse_f64(field(fields, 9)),
        magnetic_variation_direction: parse_longitude_hemisphere(field(fields, 10)),
        position_mode: PositionFix::from_mode(field(fields, 11)),
    }
}
