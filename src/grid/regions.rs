use crate::geometry::{Point, Rect};

/// How a region filters tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    /// Tiles inside the region are suppressed.
    Exclude,
    /// Tiles outside the region are suppressed.
    Include,
}

/// Ordered exclude and include lists.
///
/// A tile centre is admitted when it lies inside every include region and
/// outside every exclude region.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionSet {
    exclude: Vec<Rect>,
    include: Vec<Rect>,
}

impl RegionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: RegionKind, rect: Rect) {
        match kind {
            RegionKind::Exclude => self.exclude.push(rect),
            RegionKind::Include => self.include.push(rect),
        }
    }

    pub fn admits(&self, point: Point) -> bool {
        self.include.iter().all(|rect| rect.contains(point))
            && !self.exclude.iter().any(|rect| rect.contains(point))
    }

    pub fn excluded(&self) -> &[Rect] {
        &self.exclude
    }

    pub fn included(&self) -> &[Rect] {
        &self.include
    }

    pub fn is_empty(&self) -> bool {
        self.exclude.is_empty() && self.include.is_empty()
    }

    pub fn clear(&mut self) {
        self.exclude.clear();
        self.include.clear();
    }

    pub(crate) fn hash_into(&self, hasher: &mut blake3::Hasher) {
        for (tag, list) in [(b'x', &self.exclude), (b'i', &self.include)] {
            hasher.update(&[tag]);
            hasher.update(&(list.len() as u64).to_le_bytes());
            for rect in list {
                for value in [rect.x, rect.y, rect.width, rect.height] {
                    hasher.update(&value.to_le_bytes());
                }
            }
        }
    }
}
