use chrono::NaiveDateTime;

use crate::common::{
    field, parse_f64, parse_latitude_hemisphere, parse_longitude_hemisphere, parse_time,
    parse_u16, parse_u8, LatitudeHemisphere, LongitudeHemisphere, PositionFix,
};

//                                                       11
//         1         2       3 4        5 6 7  8   9  10 |  12 13  14
//         |         |       | |        | | |  |   |   | |   | |   |
// $--GGA,hhmmss.ss,ddmm.mm,a,ddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// Global positioning system fix data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Gga {
    pub time: NaiveDateTime,
    pub latitude: f64,
    pub latitude_hemisphere: LatitudeHemisphere,
    pub longitude: f64,
    pub longitude_hemisphere: LongitudeHemisphere,
    pub quality: PositionFix,
    pub satellites: u8,
    pub horizontal_dilution: f64,
    /// Metres above mean sea level.
    pub altitude: f64,
    pub geoid_separation: f64,
    /// Seconds since the last differential correction.
    pub differential_age: f64,
    pub differential_station_id: u16,
}

pub fn parse_gga(fields: &[String]) -> Gga {
    Gga {
        time: parse_time(field(fields, 0)),
        latitude: parse_f64(field(fields, 1)),
        latitude_hemisphere: parse_latitude_hemisphere(field(fields, 2)),
        longitude: parse_f64(field(fields, 3)),
        longitude_hemisphere: parse_longitude_hemisphere(field(fields, 4)),
        quality: PositionFix::from_quality(field(fields, 5)),
        satellites: parse_u8(field(fields, 6)),
        horizontal_dilution: parse_f64(field(fields, 7)),
        altitude: parse_f64(field(fields, 8)),
        geoid_separation: parse_f64(field(fields, 10)),
        differential_age: parse_f64(field(fields, 12)),
        differential_station_id: parse_u16(field(fields, 13)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fields;
    use approx::assert_relative_eq;
    use chrono::NaiveTime;

    #[test]
    fn gga() {
        let gga = parse_gga(&fields(&[
            "231320.00",
            "4734.99051",
            "N",
            "12201.11923",
            "W",
            "2",
            "05",
            "1.87",
            "145.3",
            "M",
            "-18.7",
            "M",
            "",
            "0000",
        ]));
        assert_eq!(
            gga.time.time(),
            NaiveTime::from_hms_opt(23, 13, 20).unwrap()
        );
        assert_relative_eq!(gga.latitude, 4734.99051);
        assert_eq!(gga.latitude_hemisphere, LatitudeHemisphere::North);
        assert_relative_eq!(gga.longitude, 12201.11923);
        assert_eq!(gga.longitude_hemisphere, LongitudeHemisphere::West);
        assert_eq!(gga.quality, PositionFix::DifferentialGnssFix);
        assert_eq!(gga.satellites, 5);
        assert_relative_eq!(gga.horizontal_dilution, 1.87);
        assert_relative_eq!(gga.altitude, 145.3);
        assert_relative_eq!(gga.geoid_separation, -18.7);
        assert_eq!(gga.differential_age, 0.0);
        assert_eq!(gga.differential_station_id, 0);
    }

    #[test]
    fn all_fields_empty() {
        assert_eq!(parse_gga(&fields(&[""; 14])), Gga::default());
    }

    #[test]
    fn short_sentence() {
        assert_eq!(parse_gga(&[]), Gga::default());
    }
}
