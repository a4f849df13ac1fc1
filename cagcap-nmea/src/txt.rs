use crate::common::{field, log_field_error, parse_u8, FieldError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMessageType {
    #[default]
    Error,
    Warning,
    Notice,
    User,
}

/// Free-form text emitted by the receiver, e.g. its firmware banner.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Txt {
    pub message_count: u8,
    pub message_index: u8,
    pub text_type: TextMessageType,
    pub text: String,
}

pub fn parse_text_type(text: &str) -> TextMessageType {
    match text {
        "" | "00" => TextMessageType::Error,
        "01" => TextMessageType::Warning,
        "02" => TextMessageType::Notice,
        "07" => TextMessageType::User,
        _ => {
            log_field_error(FieldError::Code {
                kind: "text type",
                text: text.into(),
            });
            TextMessageType::Error
        }
    }
}

pub fn parse_txt(fields: &[String]) -> Txt {
    Txt {
        message_count: parse_u8(field(fields, 0)),
        message_index: parse_u8(field(fields, 1)),
        text_type: parse_text_type(field(fields, 2)),
        text: field(fields, 3).to_string(),
    }
}
