use crate::entities::{ParkingSpace, Vehicle};

/// An ordered sequence of [`ParkingSpace`]s.
/// The order of the spaces is the order in which they are scanned by the allocator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParkingLevel {
    spaces: Vec<ParkingSpace>,
}

impl ParkingLevel {
    pub fn new(spaces: Vec<ParkingSpace>) -> Self {
        ParkingLevel { spaces }
    }

    pub fn spaces(&self) -> &[ParkingSpace] {
        &self.spaces
    }

    pub(crate) fn spaces_mut(&mut self) -> &mut [ParkingSpace] {
        &mut self.spaces
    }

    pub fn capacity(&self) -> usize {
        self.spaces.len()
    }

    pub fn occupancy(&self) -> usize {
        self.spaces.iter().filter(|s| s.is_occupied()).count()
    }

    /// The occupant of every space in order, `None` for an empty space
    pub fn vehicles(&self) -> impl Iterator<Item = Option<&Vehicle>> {
        self.spaces.iter().map(|s| s.occupant())
    }
}
