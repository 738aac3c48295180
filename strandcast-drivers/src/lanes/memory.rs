//! In-memory lane backend
//!
//! Holds one staging buffer per lane and models a transmission as a
//! snapshot of all staged buffers. Tests and the bring-up loop inspect
//! the snapshots; nothing leaves the process.

use alloc::vec::Vec;
use core::fmt;

use strandcast_core::traits::{Lane, MultiLaneBus};

/// Errors from the in-memory backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LaneError {
    /// Write addressed a lane the bus does not drive
    InvalidLane {
        /// 0-based index of the requested lane
        lane: u8,
        /// Lanes the bus drives
        lanes: u8,
    },
}

impl fmt::Display for LaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaneError::InvalidLane { lane, lanes } => {
                write!(f, "lane {lane} out of range for a {lanes}-lane bus")
            }
        }
    }
}

/// An in-memory multi-lane bus
pub struct MemoryLanes {
    clock_mhz: u32,
    staged: Vec<Vec<u8>>,
    last_transmission: Option<Vec<Vec<u8>>>,
    transmission_count: u64,
}

impl MemoryLanes {
    /// Create a bus with `lane_count` lanes shifting at `clock_mhz`
    ///
    /// The clock is recorded configuration; the in-memory backend
    /// transmits instantaneously regardless.
    pub fn new(lane_count: u8, clock_mhz: u32) -> Self {
        Self {
            clock_mhz,
            staged: alloc::vec![Vec::new(); lane_count as usize],
            last_transmission: None,
            transmission_count: 0,
        }
    }

    /// Configured shift clock in MHz
    pub fn clock_mhz(&self) -> u32 {
        self.clock_mhz
    }

    /// Currently staged bytes for one lane, if it exists
    pub fn staged(&self, lane: Lane) -> Option<&[u8]> {
        self.staged.get(lane.index()).map(Vec::as_slice)
    }

    /// All lane payloads of the most recent transmission
    pub fn last_transmission(&self) -> Option<&[Vec<u8>]> {
        self.last_transmission.as_deref()
    }

    /// Number of completed transmission passes
    pub fn transmission_count(&self) -> u64 {
        self.transmission_count
    }
}

impl MultiLaneBus for MemoryLanes {
    type Error = LaneError;

    fn lane_count(&self) -> u8 {
        self.staged.len() as u8
    }

    fn write_lane(&mut self, lane: Lane, bytes: &[u8]) -> Result<(), LaneError> {
        let lanes = self.lane_count();
        let slot = self
            .staged
            .get_mut(lane.index())
            .ok_or(LaneError::InvalidLane {
                lane: lane.index() as u8,
                lanes,
            })?;
        slot.clear();
        slot.extend_from_slice(bytes);
        Ok(())
    }

    fn send_buffers(&mut self) -> Result<(), LaneError> {
        self.last_transmission = Some(self.staged.clone());
        self.transmission_count += 1;
        log::trace!(
            "transmitted {} lanes, pass {}",
            self.staged.len(),
            self.transmission_count
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_send() {
        let mut bus = MemoryLanes::new(2, 12);
        bus.write_lane(Lane::new(0), &[1, 2, 3]).unwrap();
        bus.write_lane(Lane::new(1), &[4, 5]).unwrap();
        bus.send_buffers().unwrap();

        let sent = bus.last_transmission().unwrap();
        assert_eq!(sent[0], [1, 2, 3]);
        assert_eq!(sent[1], [4, 5]);
        assert_eq!(bus.transmission_count(), 1);
    }

    #[test]
    fn test_write_replaces_staged_payload() {
        let mut bus = MemoryLanes::new(1, 12);
        bus.write_lane(Lane::new(0), &[1, 2, 3]).unwrap();
        bus.write_lane(Lane::new(0), &[9]).unwrap();
        assert_eq!(bus.staged(Lane::new(0)).unwrap(), &[9]);
    }

    #[test]
    fn test_invalid_lane_rejected() {
        let mut bus = MemoryLanes::new(2, 12);
        let result = bus.write_lane(Lane::new(2), &[0]);
        assert_eq!(result, Err(LaneError::InvalidLane { lane: 2, lanes: 2 }));
    }

    #[test]
    fn test_staged_state_survives_transmission() {
        let mut bus = MemoryLanes::new(1, 4);
        bus.write_lane(Lane::new(0), &[7, 7]).unwrap();
        bus.send_buffers().unwrap();
        bus.send_buffers().unwrap();

        assert_eq!(bus.transmission_count(), 2);
        assert_eq!(bus.last_transmission().unwrap()[0], [7, 7]);
    }

    #[test]
    fn test_clock_recorded() {
        assert_eq!(MemoryLanes::new(8, 12).clock_mhz(), 12);
        assert_eq!(MemoryLanes::new(8, 4).clock_mhz(), 4);
    }
}
