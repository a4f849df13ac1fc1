use chrono::NaiveDateTime;

use crate::common::{
    field, parse_data_status, parse_f64, parse_latitude_hemisphere, parse_longitude_hemisphere,
    parse_time, DataStatus, LatitudeHemisphere, LongitudeHemisphere, PositionFix,
};

/// Latitude and longitude, with time of position fix and status.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Gll {
    pub latitude: f64,
    pub latitude_hemisphere: LatitudeHemisphere,
    pub longitude: f64,
    pub longitude_hemisphere: LongitudeHemisphere,
    pub time: NaiveDateTime,
    pub status: DataStatus,
    pub position_mode: PositionFix,
}

pub fn parse_gll(fields: &[String]) -> Gll {
    Gll {
        latitude: parse_f64(field(fields, 0)),
        latitude_hemisphere: parse_latitude_hemisphere(field(fields, 1)),
        longitude: parse_f64(field(fields, 2)),
        longitude_hemisphere: parse_longitude_hemisphere(field(fields, 3)),
        time: parse_time(field(fields, 4)),
        status: parse_data_status(field(fields, 5)),
        position_mode: PositionFix::from_mode(field(fields, 6)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fields;
    use approx::assert_relative_eq;
    use chrono::NaiveTime;

    #[test]
    fn gll() {
        let gll = parse_gll(&fields(&[
            "4734.96497",
            "N",
            "12201.14301",
            "W",
            "183101.00",
            "A",
            "A",
        ]));
        assert_relative_eq!(gll.latitude, 4734.96497);
        assert_eq!(gll.latitude_hemisphere, LatitudeHemisphere::North);
        assert_relative_eq!(gll.longitude, 12201.14301);
        assert_eq!(gll.longitude_hemisphere, LongitudeHemisphere::West);
        assert_eq!(gll.time.time(), NaiveTime::from_hms_opt(18, 31, 1).unwrap());
        assert_eq!(gll.status, DataStatus::Valid);
        assert_eq!(gll.position_mode, PositionFix::AutonomousGnssFix);
    }

    #[test]
    fn all_fields_empty() {
        assert_eq!(parse_gll(&fields(&[""; 7])), Gll::default());
    }
}
