//! Multi-lane serial bus abstraction
//!
//! A bus owns N parallel output lanes, batches per-lane payloads, and
//! shifts all of them out in one synchronized pass. Implementations live
//! outside this crate (in-memory staging, hardware bit-shifting engines).

/// Identifier of one physical output lane
///
/// Lanes are 0-based in the public API. Hardware labels connectors
/// starting at 1, so a 1-based constructor is provided; the two numberings
/// map one-to-one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Lane(u8);

impl Lane {
    /// Lane from a 0-based index
    pub const fn new(index: u8) -> Self {
        Lane(index)
    }

    /// Lane from a 1-based connector number, as printed on the hardware
    pub const fn from_connector(connector: u8) -> Self {
        assert!(connector > 0, "connector numbering starts at 1");
        Lane(connector - 1)
    }

    /// 0-based lane index
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 1-based connector number
    pub const fn connector(self) -> u8 {
        self.0 + 1
    }
}

/// Multi-lane serial bus
///
/// `write_lane` stages a payload; nothing reaches the hardware until
/// `send_buffers`, which transmits every staged lane simultaneously and
/// blocks until the transmission is issued.
pub trait MultiLaneBus {
    /// Staging/transmission error type
    type Error;

    /// Number of physical lanes this bus drives
    fn lane_count(&self) -> u8;

    /// Replace the staged payload for one lane
    fn write_lane(&mut self, lane: Lane, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Transmit all staged lane payloads in one synchronized pass
    fn send_buffers(&mut self) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_numbering() {
        assert_eq!(Lane::new(0).index(), 0);
        assert_eq!(Lane::new(0).connector(), 1);
        assert_eq!(Lane::from_connector(1), Lane::new(0));
        assert_eq!(Lane::from_connector(16), Lane::new(15));
    }

    #[test]
    fn test_connector_mapping_is_injective() {
        let lanes: std::vec::Vec<Lane> = (1..=8).map(Lane::from_connector).collect();
        for (i, lane) in lanes.iter().enumerate() {
            assert_eq!(lane.index(), i);
        }
    }
}
