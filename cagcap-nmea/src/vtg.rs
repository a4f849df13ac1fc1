use crate::common::{field, parse_f64, PositionFix};

//        0  1  2  3  4  5  6  7  8
// $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,a*hh<CR><LF>
/// Course over ground and ground speed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vtg {
    pub course_true: f64,
    pub course_magnetic: f64,
    pub speed_knots: f64,
    pub speed_kph: f64,
    pub position_mode: PositionFix,
}

pub fn parse_vtg(fields: &[String]) -> Vtg {
    Vtg {
        course_true: parse_f64(field(fields, 0)),
        course_magnetic: parse_f64(field(fields, 2)),
        speed_knots: parse_f64(field(fields, 4)),
        speed_kph: parse_f64(field(fields, 6)),
        position_mode: PositionFix::from_mode(field(fields, 8)),
    }
}
