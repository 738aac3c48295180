//! Output device contract
//!
//! The interface a protocol server drives. Per frame the server stages
//! zero or more pixel writes and then flushes once; control command
//! buffers arrive interleaved at any time, exactly as received off the
//! wire. All calls into one device are serialized by the server; nothing
//! here is reentrant.

use smart_leds::RGB8;

/// A multi-strip LED output device
pub trait OutputDevice {
    /// Transmission error surfaced by [`flush_frame`](Self::flush_frame)
    type Error;

    /// Fixed number of strips (= bus lanes) on this device
    fn strip_count(&self) -> u8;

    /// Fixed pixel count, identical for every strip
    fn pixels_per_strip(&self) -> u32;

    /// Stage one pixel color
    ///
    /// A `strip` index at or past [`strip_count`](Self::strip_count) is
    /// dropped without effect or error; pixel indexes are bounds-checked
    /// by the strip itself.
    fn set_pixel(&mut self, strip: u8, pixel: u32, color: RGB8);

    /// Transmit all staged pixel and brightness state across every lane
    ///
    /// Blocks until the transmission is issued. One call corresponds to
    /// exactly one physical transmission pass. Staged state survives the
    /// flush; flushing again without intervening writes re-transmits it.
    fn flush_frame(&mut self) -> Result<(), Self::Error>;

    /// Decode and apply a control command buffer
    ///
    /// Incomplete buffers are ignored silently; unknown opcodes are
    /// ignored with a diagnostic. Neither alters device state.
    fn handle_pusher_command(&mut self, buf: &[u8]);
}
