//! Placement solver data types
//!
//! `PlacedElement` records are immutable once the solver accepts them; the
//! occupancy pool is transient bookkeeping that only lives for the duration
//! of one solve run.

use glam::Vec3;

/// One successfully placed ornament instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedElement {
    pub position: Vec3,
    pub scale: f32,
    /// Euler angles (pitch, yaw, roll) in radians
    pub rotation: Vec3,
}

/// Bounding sphere of an accepted element, used only while solving
#[derive(Debug, Clone, Copy)]
pub struct OccupancyRecord {
    pub position: Vec3,
    pub radius: f32,
}

/// Solver output for one ornament class, in acceptance order
#[derive(Debug, Clone, Default)]
pub struct ClassLayout {
    pub id: String,
    pub elements: Vec<PlacedElement>,
}

/// Complete solver output, one entry per class in placement priority order
#[derive(Debug, Clone, Default)]
pub struct LayoutData {
    pub classes: Vec<ClassLayout>,
}

impl LayoutData {
    /// Placed elements for a class, empty when the id is unknown
    pub fn elements_for(&self, id: &str) -> &[PlacedElement] {
        self.classes
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.elements.as_slice())
            .unwrap_or(&[])
    }

    /// Total accepted elements across all classes
    pub fn total_elements(&self) -> usize {
        self.classes.iter().map(|c| c.elements.len()).sum()
    }
}
