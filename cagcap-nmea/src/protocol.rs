use core::mem;

use log::warn;
use thiserror::Error;

use crate::message::NmeaMessage;

pub const PREFIX: char = '$';
pub const DELIMITER: char = ',';
pub const CHECKSUM_PREFIX: char = '*';
pub const ADDRESS_LENGTH: usize = 5;
pub const CHECKSUM_LENGTH: usize = 2;
/// Counted from the `$` up to and including the line terminator.
pub const MAX_SENTENCE_LENGTH: usize = 84;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NmeaState {
    #[default]
    Start,
    Address,
    Data,
    Checksum,
    Done,
}

/// Reasons a partial sentence gets thrown away.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("checksum mismatch: sentence carries {expected:02X}, computed {computed:02X}")]
    ChecksumMismatch { expected: u8, computed: u8 },
    #[error("invalid checksum {0:?}")]
    InvalidChecksum(String),
    #[error("checksum longer than {len} characters", len = CHECKSUM_LENGTH)]
    ChecksumOverrun,
    #[error("sentence longer than {len} characters", len = MAX_SENTENCE_LENGTH)]
    SentenceOverrun,
    #[error("unexpected {0:?} in {1:?} state")]
    UnexpectedCharacter(char, NmeaState),
    #[error("partial sentence dropped for a new '$'")]
    Interrupted,
}

/// A checksum-verified sentence waiting for its line feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub address: String,
    pub fields: Vec<String>,
    pub checksum: u8,
}

impl Sentence {
    pub fn into_message(self) -> NmeaMessage {
        NmeaMessage::create(&self.address, &self.fields)
    }
}

/// XOR of every byte of `body`, i.e. everything between `$` and `*`.
pub fn checksum(body: &str) -> u8 {
    body.bytes().fold(0, |checksum, byte| checksum ^ byte)
}

/// Wraps `body` into a complete `$body*HH\r\n` sentence.
pub fn frame(body: &str) -> String {
    format!("{}{}{}{:02X}\r\n", PREFIX, body, CHECKSUM_PREFIX, checksum(body))
}

/// Character driven NMEA-0183 framing.
///
/// Feed characters one at a time with [`NmeaProtocol::process`]; a message is
/// returned on the line feed that completes a sentence with a valid checksum.
/// Any framing error is logged and throws the partial sentence away.
#[derive(Debug, Default)]
pub struct NmeaProtocol {
    state: NmeaState,
    address: String,
    fields: Vec<String>,
    field: String,
    checksum_text: String,
    checksum: u8,
    length: usize,
    // the first delimiter separates the address from the data
    leading_delimiter: bool,
    sentence: Option<Sentence>,
}

impl NmeaProtocol {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> NmeaState {
        self.state
    }

    pub fn process(&mut self, c: char) -> Option<NmeaMessage> {
        if c == PREFIX {
            if self.state != NmeaState::Start {
                self.fail(FrameError::Interrupted);
            }
            self.begin();
            return None;
        }
        if self.state == NmeaState::Start {
            return None;
        }
        if !c.is_ascii() {
            self.fail(FrameError::UnexpectedCharacter(c, self.state));
            return None;
        }
        self.length += 1;
        if self.length > MAX_SENTENCE_LENGTH {
            self.fail(FrameError::SentenceOverrun);
            return None;
        }

        match self.state {
            NmeaState::Start => None,
            NmeaState::Address => {
                self.process_address(c);
                None
            }
            NmeaState::Data => {
                self.process_data(c);
                None
            }
            NmeaState::Checksum => self.process_checksum(c),
            NmeaState::Done => {
                if c == '\n' {
                    self.complete()
                } else {
                    None
                }
            }
        }
    }

    fn begin(&mut self) {
        self.reset();
        self.state = NmeaState::Address;
        self.length = 1;
    }

    fn process_address(&mut self, c: char) {
        // proprietary addresses like `PUBX,` may hold any printable character
        if c == CHECKSUM_PREFIX || !(c.is_ascii_graphic() || c == ' ') {
            self.fail(FrameError::UnexpectedCharacter(c, self.state));
            return;
        }
        self.address.push(c);
        self.checksum ^= c as u8;
        if self.address.len() == ADDRESS_LENGTH {
            self.state = NmeaState::Data;
            self.leading_delimiter = true;
        }
    }

    fn process_data(&mut self, c: char) {
        match c {
            DELIMITER => {
                if self.leading_delimiter {
                    self.leading_delimiter = false;
                } else {
                    self.fields.push(mem::take(&mut self.field));
                }
                self.checksum ^= c as u8;
            }
            CHECKSUM_PREFIX => {
                if !self.leading_delimiter {
                    self.fields.push(mem::take(&mut self.field));
                }
                self.state = NmeaState::Checksum;
            }
            '\r' | '\n' => self.fail(FrameError::UnexpectedCharacter(c, self.state)),
            _ => {
                // a longer address runs straight into the first field
                self.leading_delimiter = false;
                self.field.push(c);
                self.checksum ^= c as u8;
            }
        }
    }

    fn process_checksum(&mut self, c: char) -> Option<NmeaMessage> {
        match c {
            '\r' => {
                self.verify();
                None
            }
            '\n' => {
                self.verify();
                self.complete()
            }
            _ if c.is_ascii_hexdigit() => {
                self.checksum_text.push(c);
                if self.checksum_text.len() > CHECKSUM_LENGTH {
                    self.fail(FrameError::ChecksumOverrun);
                }
                None
            }
            _ => {
                self.fail(FrameError::InvalidChecksum(format!(
                    "{}{}",
                    self.checksum_text, c
                )));
                None
            }
        }
    }

    fn verify(&mut self) {
        if self.checksum_text.len() != CHECKSUM_LENGTH {
            let text = mem::take(&mut self.checksum_text);
            self.fail(FrameError::InvalidChecksum(text));
            return;
        }
        let expected = match u8::from_str_radix(&self.checksum_text, 16) {
            Ok(expected) => expected,
            Err(_) => {
                let text = mem::take(&mut self.checksum_text);
                self.fail(FrameError::InvalidChecksum(text));
                return;
            }
        };
        if expected != self.checksum {
            let computed = self.checksum;
            self.fail(FrameError::ChecksumMismatch { expected, computed });
            return;
        }
        self.sentence = Some(Sentence {
            address: mem::take(&mut self.address),
            fields: mem::take(&mut self.fields),
            checksum: expected,
        });
        self.state = NmeaState::Done;
    }

    fn complete(&mut self) -> Option<NmeaMessage> {
        let sentence = self.sentence.take();
        self.reset();
        sentence.map(Sentence::into_message)
    }

    fn fail(&mut self, error: FrameError) {
        warn!("Discarding NMEA sentence: {}", error);
        self.reset();
    }

    pub fn reset(&mut self) {
        self.state = NmeaState::Start;
        self.address.clear();
        self.fields.clear();
        self.field.clear();
        self.checksum_text.clear();
        self.checksum = 0;
        self.length = 0;
        self.leading_delimiter = false;
        self.sentence = None;
    }
}
