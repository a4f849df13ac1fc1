use crate::common::{field, parse_i16, parse_u16, parse_u8};

const FIRST_SATELLITE_FIELD: usize = 3;
const FIELDS_PER_SATELLITE: usize = 4;

/// One satellite record of a GSV sentence. Satellites are identified by `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SatelliteView {
    pub id: u16,
    /// Degrees, 0 to 90.
    pub elevation: i16,
    /// Degrees true, 0 to 359.
    pub azimuth: u16,
    /// dBHz, 0 when the satellite is not tracked.
    pub snr: u8,
}

/// GNSS satellites in view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Gsv {
    pub message_count: u8,
    pub message_index: u8,
    pub satellites_in_view: u8,
    pub satellite_views: Vec<SatelliteView>,
}

/// The record count follows the fields actually present, not
/// `satellites_in_view`, which covers the whole message group.
pub fn parse_satellite_views(fields: &[String]) -> Vec<SatelliteView> {
    fields
        .chunks_exact(FIELDS_PER_SATELLITE)
        .map(|record| SatelliteView {
            id: parse_u16(&record[0]),
            elevation: parse_i16(&record[1]),
            azimuth: parse_u16(&record[2]),
            snr: parse_u8(&record[3]),
        })
        .collect()
}

pub fn parse_gsv(fields: &[String]) -> Gsv {
    let records = fields.get(FIRST_SATELLITE_FIELD..).unwrap_or(&[]);
    Gsv {
        message_count: parse_u8(field(fields, 0)),
        message_index: parse_u8(field(fields, 1)),
        satellites_in_view: parse_u8(field(fields, 2)),
        satellite_views: parse_satellite_views(records),
    }
}
