use crate::common::{field, log_field_error, parse_f64, FieldError};

const SATELLITE_SLOTS: usize = 12;
const FIRST_SATELLITE_FIELD: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationMode {
    #[default]
    Automatic,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavMode {
    #[default]
    NoFix = 1,
    Fix2D = 2,
    Fix3D = 3,
}

/// GNSS dilution of precision and active satellites.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Gsa {
    pub operation_mode: OperationMode,
    pub nav_mode: NavMode,
    /// PRNs of the satellites used in the solution, in receiver order.
    pub satellite_numbers: Vec<u16>,
    pub position_dilution: f64,
    pub horizontal_dilution: f64,
    pub vertical_dilution: f64,
}

pub fn parse_operation_mode(text: &str) -> OperationMode {
    if text == "M" {
        OperationMode::Manual
    } else {
        OperationMode::Automatic
    }
}

pub fn parse_nav_mode(text: &str) -> NavMode {
    match text {
        "" | "1" => NavMode::NoFix,
        "2" => NavMode::Fix2D,
        "3" => NavMode::Fix3D,
        _ => {
            log_field_error(FieldError::Code {
                kind: "nav mode",
                text: text.into(),
            });
            NavMode::NoFix
        }
    }
}

/// Empty slots are skipped and so are PRNs that are not numbers.
pub fn parse_satellite_numbers(slots: &[String]) -> Vec<u16> {
    slots
        .iter()
        .take(SATELLITE_SLOTS)
        .filter(|slot| !slot.is_empty())
        .filter_map(|slot| match slot.parse::<u16>() {
            Ok(number) => Some(number),
            Err(_) => {
                log_field_error(FieldError::Number {
                    kind: "satellite number",
                    text: slot.clone(),
                });
                None
            }
        })
        .collect()
}

pub fn parse_gsa(fields: &[String]) -> Gsa {
    let slots = fields.get(FIRST_SATELLITE_FIELD..).unwrap_or(&[]);
    Gsa {
        operation_mode: parse_operation_mode(field(fields, 0)),
        nav_mode: parse_nav_mode(field(fields, 1)),
        satellite_numbers: parse_satellite_numbers(slots),
        position_dilution: parse_f64(field(fields, 14)),
        horizontal_dilution: parse_f64(field(fields, 15)),
        vertical_dilution: parse_f64(field(fields, 16)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fields;
    use approx::assert_relative_eq;

    #[test]
    fn gsa() {
        let gsa = parse_gsa(&fields(&[
            "A", "3", "14", "08", "30", "27", "05", "09", "07", "", "", "", "", "", "2.06",
            "1.03", "1.78",
        ]));
        assert_eq!(gsa.operation_mode, OperationMode::Automatic);
        assert_eq!(gsa.nav_mode, NavMode::Fix3D);
        assert_eq!(gsa.satellite_numbers, vec![14, 8, 30, 27, 5, 9, 7]);
        assert_relative_eq!(gsa.position_dilution, 2.06);
        assert_relative_eq!(gsa.horizontal_dilution, 1.03);
        assert_relative_eq!(gsa.vertical_dilution, 1.78);
    }

    #[test]
    fn all_fields_empty() {
        let gsa = parse_gsa(&fields(&[""; 17]));
        assert_eq!(gsa.operation_mode, OperationMode::Automatic);
        assert_eq!(gsa.nav_mode, NavMode::NoFix);
        assert!(gsa.satellite_numbers.is_empty());
        assert_eq!(gsa.position_dilution, 0.0);
        assert_eq!(gsa.horizontal_dilution, 0.0);
        assert_eq!(gsa.vertical_dilution, 0.0);
    }

    #[test]
    fn operation_mode() {
        assert_eq!(parse_operation_mode("M"), OperationMode::Manual);
        assert_eq!(parse_operation_mode("A"), OperationMode::Automatic);
        assert_eq!(parse_operation_mode(""), OperationMode::Automatic);
    }

    #[test]
    fn nav_mode() {
        assert_eq!(parse_nav_mode("1"), NavMode::NoFix);
        assert_eq!(parse_nav_mode("2"), NavMode::Fix2D);
        assert_eq!(parse_nav_mode("3"), NavMode::Fix3D);
        assert_eq!(parse_nav_mode("9"), NavMode::NoFix);
    }

    #[test]
    fn satellite_numbers_skip_garbage() {
        let numbers = parse_satellite_numbers(&fields(&[
            "14", "08", "30", "27", "05", "09", "07", "A", "B", "C", "D", "E", "F", "G", "H",
        ]));
        assert_eq!(numbers, vec![14, 8, 30, 27, 5, 9, 7]);
    }
}
