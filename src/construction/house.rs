//! The house under construction

use serde::{Deserialize, Serialize};

use crate::construction::parts::BuildablePart;
use crate::construction::types::{PartKind, WINDOW_COUNT};

/// Aggregate of every part. Complete only when all of them are built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct House {
    pub basement: BuildablePart,
    pub walls: BuildablePart,
    pub door: BuildablePart,
    pub windows: [BuildablePart; WINDOW_COUNT],
    pub roof: BuildablePart,
}

impl Default for House {
    fn default() -> Self {
        Self::new()
    }
}

impl House {
    /// A house with nothing built yet
    pub fn new() -> Self {
        House {
            basement: BuildablePart::new(PartKind::Basement),
            walls: BuildablePart::new(PartKind::Walls),
            door: BuildablePart::new(PartKind::Door),
            windows: std::array::from_fn(|i| BuildablePart::new(PartKind::Window(i))),
            roof: BuildablePart::new(PartKind::Roof),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.basement.is_built()
            && self.walls.is_built()
            && self.door.is_built()
            && self.windows.iter().all(BuildablePart::is_built)
            && self.roof.is_built()
    }

    pub fn built_window_count(&self) -> usize {
        self.windows.iter().filter(|w| w.is_built()).count()
    }

    /// Highest-priority part still missing:
    /// basement, walls, door, first unbuilt window, then roof
    pub fn next_unbuilt(&self) -> Option<PartKind> {
        if !self.basement.is_built() {
            return Some(PartKind::Basement);
        }
        if !self.walls.is_built() {
            return Some(PartKind::Walls);
        }
        if !self.door.is_built() {
            return Some(PartKind::Door);
        }
        if let Some(window) = self.windows.iter().find(|w| !w.is_built()) {
            return Some(window.kind());
        }
        if !self.roof.is_built() {
            return Some(PartKind::Roof);
        }
        None
    }

    /// Look up a part by kind. Window indices past the last window yield None.
    pub fn part(&self, kind: PartKind) -> Option<&BuildablePart> {
        match kind {
            PartKind::Basement => Some(&self.basement),
            PartKind::Walls => Some(&self.walls),
            PartKind::Door => Some(&self.door),
            PartKind::Window(i) => self.windows.get(i),
            PartKind::Roof => Some(&self.roof),
        }
    }

    pub fn part_mut(&mut self, kind: PartKind) -> Option<&mut BuildablePart> {
        match kind {
            PartKind::Basement => Some(&mut self.basement),
            PartKind::Walls => Some(&mut self.walls),
            PartKind::Door => Some(&mut self.door),
            PartKind::Window(i) => self.windows.get_mut(i),
            PartKind::Roof => Some(&mut self.roof),
        }
    }

    /// Number of parts built, out of `total_parts()`
    pub fn built_part_count(&self) -> usize {
        [&self.basement, &self.walls, &self.door, &self.roof]
            .iter()
            .filter(|p| p.is_built())
            .count()
            + self.built_window_count()
    }

    pub fn total_parts() -> usize {
        4 + WINDOW_COUNT
    }

    /// Closing line narrated after the house is complete
    pub fn completion_message(&self) -> &'static str {
        "Дом готов нащальника"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construction::log::BuildLog;

    fn build(house: &mut House, kind: PartKind) {
        let mut log = BuildLog::new();
        house.part_mut(kind).unwrap().build(&mut log);
    }

    #[test]
    fn test_fresh_house_is_incomplete() {
        let house = House::new();
        assert!(!house.is_complete());
        assert_eq!(house.built_part_count(), 0);
        assert_eq!(house.next_unbuilt(), Some(PartKind::Basement));
    }

    #[test]
    fn test_all_parts_built_completes_house() {
        let mut house = House::new();
        build(&mut house, PartKind::Basement);
        build(&mut house, PartKind::Walls);
        build(&mut house, PartKind::Door);
        for i in 0..WINDOW_COUNT {
            build(&mut house, PartKind::Window(i));
        }
        assert!(!house.is_complete());

        build(&mut house, PartKind::Roof);
        assert!(house.is_complete());
        assert_eq!(house.built_part_count(), House::total_parts());
        assert_eq!(house.next_unbuilt(), None);
    }

    #[test]
    fn test_next_unbuilt_skips_built_windows() {
        let mut house = House::new();
        build(&mut house, PartKind::Basement);
        build(&mut house, PartKind::Walls);
        build(&mut house, PartKind::Door);
        build(&mut house, PartKind::Window(0));
        build(&mut house, PartKind::Window(2));

        assert_eq!(house.next_unbuilt(), Some(PartKind::Window(1)));
        assert_eq!(house.built_window_count(), 2);
    }

    #[test]
    fn test_roof_waits_for_windows() {
        let mut house = House::new();
        build(&mut house, PartKind::Roof);
        build(&mut house, PartKind::Basement);
        build(&mut house, PartKind::Walls);
        build(&mut house, PartKind::Door);

        assert_eq!(house.next_unbuilt(), Some(PartKind::Window(0)));
    }

    #[test]
    fn test_out_of_range_window() {
        let mut house = House::new();
        assert!(house.part(PartKind::Window(WINDOW_COUNT)).is_none());
        assert!(house.part_mut(PartKind::Window(WINDOW_COUNT)).is_none());
    }
}
