//! Pusher command decoding and encoding
//!
//! Commands arrive as raw byte buffers: one opcode byte followed by an
//! opcode-specific payload. Each variant validates its minimum length
//! before reading any payload byte. Decoding is total: any input maps to
//! a command or a [`DecodeError`], never a panic.

use heapless::Vec;

/// Set the brightness scale of every strip at once
pub const OP_GLOBAL_BRIGHTNESS: u8 = 0x01;

/// Set the brightness scale of a single strip
pub const OP_STRIP_BRIGHTNESS: u8 = 0x02;

/// Largest encoded command size in bytes
pub const MAX_COMMAND_SIZE: usize = 4;

/// Errors that can occur while decoding a command buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Zero-length buffer, no opcode byte to read
    Empty,
    /// Recognized opcode but the payload is shorter than its minimum
    Truncated,
    /// Opcode byte outside the recognized set
    UnknownOpcode(u8),
}

/// A decoded control command
///
/// The brightness payloads keep their raw 16-bit wire values; conversion
/// to a scale fraction happens where the command is applied (see
/// [`crate::BrightnessScale`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PusherCommand {
    /// Set every strip's brightness scale
    GlobalBrightness {
        /// Raw 16-bit brightness value, 0xFFFF = full
        raw: u16,
    },
    /// Set one strip's brightness scale
    StripBrightness {
        /// 0-based strip index
        strip: u8,
        /// Raw 16-bit brightness value, 0xFFFF = full
        raw: u16,
    },
}

impl PusherCommand {
    /// Decode a command from a raw buffer
    ///
    /// The buffer is inspected from byte 0 onward; trailing bytes beyond
    /// a command's payload are ignored.
    pub fn decode(buf: &[u8]) -> Result<Self, DecodeError> {
        let (&opcode, payload) = buf.split_first().ok_or(DecodeError::Empty)?;

        match opcode {
            OP_GLOBAL_BRIGHTNESS => {
                if payload.len() < 2 {
                    return Err(DecodeError::Truncated);
                }
                Ok(PusherCommand::GlobalBrightness {
                    raw: u16::from_le_bytes([payload[0], payload[1]]),
                })
            }
            OP_STRIP_BRIGHTNESS => {
                if payload.len() < 3 {
                    return Err(DecodeError::Truncated);
                }
                Ok(PusherCommand::StripBrightness {
                    strip: payload[0],
                    raw: u16::from_le_bytes([payload[1], payload[2]]),
                })
            }
            other => Err(DecodeError::UnknownOpcode(other)),
        }
    }

    /// Encode this command into its wire bytes (for testing or simulation)
    pub fn encode(&self) -> Vec<u8, MAX_COMMAND_SIZE> {
        let mut out = Vec::new();
        // Pushes cannot fail: every variant fits MAX_COMMAND_SIZE
        match *self {
            PusherCommand::GlobalBrightness { raw } => {
                let [lo, hi] = raw.to_le_bytes();
                let _ = out.extend_from_slice(&[OP_GLOBAL_BRIGHTNESS, lo, hi]);
            }
            PusherCommand::StripBrightness { strip, raw } => {
                let [lo, hi] = raw.to_le_bytes();
                let _ = out.extend_from_slice(&[OP_STRIP_BRIGHTNESS, strip, lo, hi]);
            }
        }
        out
    }
}
