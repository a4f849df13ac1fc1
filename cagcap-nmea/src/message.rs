use log::warn;

use crate::gga::{parse_gga, Gga};
use crate::gll::{parse_gll, Gll};
use crate::gsa::{parse_gsa, Gsa};
use crate::gsv::{parse_gsv, Gsv};
use crate::rmc::{parse_rmc, Rmc};
use crate::txt::{parse_txt, Txt};
use crate::vtg::{parse_vtg, Vtg};

/// Sentence kind without its payload, handy for logging and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Gga,
    Gll,
    Gsa,
    Gsv,
    Rmc,
    Txt,
    Vtg,
    Unknown,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NmeaMessage {
    Gga(Gga),
    Gll(Gll),
    Gsa(Gsa),
    Gsv(Gsv),
    Rmc(Rmc),
    Txt(Txt),
    Vtg(Vtg),
    /// Carries the address of a sentence nobody decodes.
    Unknown(String),
}

impl NmeaMessage {
    /// Decodes the fields of a verified sentence according to its address.
    pub fn create(address: &str, fields: &[String]) -> Self {
        match address {
            "GPGGA" => NmeaMessage::Gga(parse_gga(fields)),
            "GPGLL" => NmeaMessage::Gll(parse_gll(fields)),
            "GPGSA" => NmeaMessage::Gsa(parse_gsa(fields)),
            "GPGSV" => NmeaMessage::Gsv(parse_gsv(fields)),
            "GPRMC" => NmeaMessage::Rmc(parse_rmc(fields)),
            "GPTXT" => NmeaMessage::Txt(parse_txt(fields)),
            "GPVTG" => NmeaMessage::Vtg(parse_vtg(fields)),
            _ => {
                warn!("Unsupported message {}", address);
                NmeaMessage::Unknown(address.to_string())
            }
        }
    }

    pub fn kind(&self) -> MessageKind {
        match self {
            NmeaMessage::Gga(_) => MessageKind::Gga,
            NmeaMessage::Gll(_) => MessageKind::Gll,
            NmeaMessage::Gsa(_) => MessageKind::Gsa,
            NmeaMessage::Gsv(_) => MessageKind::Gsv,
            NmeaMessage::Rmc(_) => MessageKind::Rmc,
            NmeaMessage::Txt(_) => MessageKind::Txt,
            NmeaMessage::Vtg(_) => MessageKind::Vtg,
            NmeaMessage::Unknown(_) => MessageKind::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fields;

    #[test]
    fn dispatch_on_address() {
        let cases = [
            ("GPGGA", MessageKind::Gga),
            ("GPGLL", MessageKind::Gll),
            ("GPGSA", MessageKind::Gsa),
            ("GPGSV", MessageKind::Gsv),
            ("GPRMC", MessageKind::Rmc),
            ("GPTXT", MessageKind::Txt),
            ("GPVTG", MessageKind::Vtg),
            ("GPNOP", MessageKind::Unknown),
        ];
        for (address, kind) in cases {
            assert_eq!(NmeaMessage::create(address, &[]).kind(), kind, "{}", address);
        }
    }

    #[test]
    fn other_talkers_are_unknown() {
        let message = NmeaMessage::create("GNGLL", &fields(&["4315.68533", "N"]));
        assert_eq!(message, NmeaMessage::Unknown("GNGLL".into()));
    }
}
