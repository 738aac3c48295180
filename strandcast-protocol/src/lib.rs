//! PixelPusher control-channel wire format
//!
//! This crate defines the byte-level format of the control commands a
//! PixelPusher protocol server forwards to an output device. Commands are
//! raw byte buffers received off the wire; the server strips any transport
//! framing and hands the buffer over untouched.
//!
//! # Command format
//!
//! ```text
//! ┌────────┬──────────────────────┐
//! │ OPCODE │ PAYLOAD              │
//! │ 1B     │ opcode-specific      │
//! └────────┴──────────────────────┘
//! ```
//!
//! Two opcodes are recognized:
//!
//! | Opcode | Name             | Payload                                  |
//! |--------|------------------|------------------------------------------|
//! | `0x01` | GlobalBrightness | 16-bit LE brightness value               |
//! | `0x02` | StripBrightness  | strip index, 16-bit LE brightness value  |
//!
//! Buffers shorter than an opcode's minimum size are incomplete and carry
//! no effect; the decoder reports this distinctly from an unknown opcode so
//! the device layer can choose its diagnostics.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod brightness;
pub mod command;

pub use brightness::BrightnessScale;
pub use command::{DecodeError, PusherCommand, OP_GLOBAL_BRIGHTNESS, OP_STRIP_BRIGHTNESS};
