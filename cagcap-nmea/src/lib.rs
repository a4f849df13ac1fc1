//! NMEA-0183 framing and sentence decoding for GPS receivers.
//!
//! Characters go into a [`GpsDataProcessor`] (or straight into a
//! [`NmeaProtocol`]), which frames and checksums sentences and decodes the
//! supported ones into [`NmeaMessage`] values.

mod common;
mod gga;
mod gll;
mod gsa;
mod gsv;
mod message;
mod processor;
mod protocol;
mod rmc;
mod txt;
mod vtg;

pub use common::{
    latitude_to_degrees, longitude_to_degrees, parse_data_status, parse_date_time, parse_f64,
    parse_i16, parse_latitude_hemisphere, parse_longitude_hemisphere, parse_time, parse_u16,
    parse_u8, DataStatus, FieldError, LatitudeHemisphere, LongitudeHemisphere, PositionFix,
};
pub use gga::{parse_gga, Gga};
pub use gll::{parse_gll, Gll};
pub use gsa::{parse_gsa, Gsa, NavMode, OperationMode};
pub use gsv::{parse_gsv, Gsv, SatelliteView};
pub use message::{MessageKind, NmeaMessage};
pub use processor::GpsDataProcessor;
pub use protocol::{
    checksum, frame, FrameError, NmeaProtocol, NmeaState, Sentence, MAX_SENTENCE_LENGTH,
};
pub use rmc::{parse_rmc, Rmc};
pub use txt::{parse_txt, TextMessageType, Txt};
pub use vtg::{parse_vtg, Vtg};

/// Decodes a single complete sentence, e.g.
/// `"$GPVTG,,T,,M,0.088,N,0.163,K,D*22\r\n"`.
pub fn parse(sentence: &str) -> Option<NmeaMessage> {
    let mut protocol = NmeaProtocol::new();
    sentence.chars().find_map(|c| protocol.process(c))
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gga() {
        let result = parse("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n");
        let Some(NmeaMessage::Gga(gga)) = result else {
            panic!("expected GGA, got {:?}", result);
        };
        assert_relative_eq!(gga.latitude, 4807.038);
        assert_eq!(gga.latitude_hemisphere, LatitudeHemisphere::North);
        assert_relative_eq!(gga.longitude, 1131.0);
        assert_eq!(gga.longitude_hemisphere, LongitudeHemisphere::East);
        assert_eq!(gga.quality, PositionFix::AutonomousGnssFix);
        assert_eq!(gga.satellites, 8);
        assert_relative_eq!(gga.altitude, 545.4);
        assert_relative_eq!(gga.geoid_separation, 46.9);
    }

    #[test]
    fn vtg() {
        let result = parse("$GPVTG,,T,,M,0.088,N,0.163,K,D*22\r\n");
        let Some(NmeaMessage::Vtg(vtg)) = result else {
            panic!("expected VTG, got {:?}", result);
        };
        assert_relative_eq!(vtg.speed_kph, 0.163);
        assert_eq!(vtg.course_true, 0.0);
        assert_eq!(vtg.position_mode, PositionFix::DifferentialGnssFix);
    }

    #[test]
    fn gsa() {
        let result = parse("$GPGSA,A,3,14,08,30,27,05,09,07,,,,,,2.06,1.03,1.78*0A\r\n");
        let Some(NmeaMessage::Gsa(gsa)) = result else {
            panic!("expected GSA, got {:?}", result);
        };
        assert_eq!(gsa.satellite_numbers, vec![14, 8, 30, 27, 5, 9, 7]);
        assert_relative_eq!(gsa.vertical_dilution, 1.78);
    }

    #[test]
    fn unknown() {
        assert_eq!(
            parse("$GPNOP,,T,,M,0.088,N,0.163,K,D*36\r\n"),
            Some(NmeaMessage::Unknown("GPNOP".into()))
        );
    }

    #[test]
    fn proprietary() {
        for (body, address) in [
            ("PUBX,40,GLL,0,0,0,0", "PUBX,"),
            ("PSRF103,00,01,00,01", "PSRF1"),
            ("PGRMZ,246,f,3", "PGRMZ"),
        ] {
            assert_eq!(
                parse(&frame(body)),
                Some(NmeaMessage::Unknown(address.into())),
                "{}",
                body
            );
        }
    }

    #[test]
    fn corrupted() {
        assert_eq!(parse("$GPVTG,,T,,M,0.088,N,0.164,K,D*22\r\n"), None);
    }

    #[test]
    fn every_field_empty() {
        let sentences = [
            ("GPGGA", 14),
            ("GPGLL", 7),
            ("GPGSA", 17),
            ("GPGSV", 7),
            ("GPRMC", 12),
            ("GPTXT", 4),
            ("GPVTG", 9),
        ];
        for (address, count) in sentences {
            let body = format!("{},{}", address, ",".repeat(count - 1));
            let message = parse(&frame(&body));
            match message {
                Some(NmeaMessage::Gga(gga)) => assert_eq!(gga, Gga::default()),
                Some(NmeaMessage::Gll(gll)) => assert_eq!(gll, Gll::default()),
                Some(NmeaMessage::Gsa(gsa)) => assert_eq!(gsa, Gsa::default()),
                Some(NmeaMessage::Gsv(gsv)) => assert_eq!(gsv.satellites_in_view, 0),
                Some(NmeaMessage::Rmc(rmc)) => assert_eq!(rmc, Rmc::default()),
                Some(NmeaMessage::Txt(txt)) => assert_eq!(txt, Txt::default()),
                Some(NmeaMessage::Vtg(vtg)) => assert_eq!(vtg, Vtg::default()),
                other => panic!("{} decoded to {:?}", address, other),
            }
        }
    }
}
