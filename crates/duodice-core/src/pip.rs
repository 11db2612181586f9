//! Canonical dot (pip) layout of die faces.

use std::iter::FusedIterator;

/// A single dot position on a die face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pip {
    /// Upper-left corner.
    TopLeft,
    /// Upper-right corner.
    TopRight,
    /// Lower-left corner.
    BottomLeft,
    /// Lower-right corner.
    BottomRight,
    /// Middle of the face.
    Center,
    /// Left column, top row of the six-face layout.
    ColumnLeftTop,
    /// Left column, middle row of the six-face layout.
    ColumnLeftMiddle,
    /// Left column, bottom row of the six-face layout.
    ColumnLeftBottom,
    /// Right column, top row of the six-face layout.
    ColumnRightTop,
    /// Right column, middle row of the six-face layout.
    ColumnRightMiddle,
    /// Right column, bottom row of the six-face layout.
    ColumnRightBottom,
}

impl Pip {
    /// All pip positions, in [`PipSet`] bit order.
    pub const ALL: [Self; 11] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
        Self::Center,
        Self::ColumnLeftTop,
        Self::ColumnLeftMiddle,
        Self::ColumnLeftBottom,
        Self::ColumnRightTop,
        Self::ColumnRightMiddle,
        Self::ColumnRightBottom,
    ];

    /// Returns the pip center as fractions `(x, y)` of the face size.
    ///
    /// `(0.0, 0.0)` is the top-left corner of the face and `(1.0, 1.0)` the
    /// bottom-right one.
    #[must_use]
    pub const fn offset(self) -> (f32, f32) {
        match self {
            Self::TopLeft => (0.25, 0.25),
            Self::TopRight => (0.75, 0.25),
            Self::BottomLeft => (0.25, 0.75),
            Self::BottomRight => (0.75, 0.75),
            Self::Center => (0.5, 0.5),
            Self::ColumnLeftTop => (0.25, 0.2),
            Self::ColumnLeftMiddle => (0.25, 0.5),
            Self::ColumnLeftBottom => (0.25, 0.8),
            Self::ColumnRightTop => (0.75, 0.2),
            Self::ColumnRightMiddle => (0.75, 0.5),
            Self::ColumnRightBottom => (0.75, 0.8),
        }
    }

    const fn flag(self) -> PipSet {
        match self {
            Self::TopLeft => PipSet::TOP_LEFT,
            Self::TopRight => PipSet::TOP_RIGHT,
            Self::BottomLeft => PipSet::BOTTOM_LEFT,
            Self::BottomRight => PipSet::BOTTOM_RIGHT,
            Self::Center => PipSet::CENTER,
            Self::ColumnLeftTop => PipSet::COLUMN_LEFT_TOP,
            Self::ColumnLeftMiddle => PipSet::COLUMN_LEFT_MIDDLE,
            Self::ColumnLeftBottom => PipSet::COLUMN_LEFT_BOTTOM,
            Self::ColumnRightTop => PipSet::COLUMN_RIGHT_TOP,
            Self::ColumnRightMiddle => PipSet::COLUMN_RIGHT_MIDDLE,
            Self::ColumnRightBottom => PipSet::COLUMN_RIGHT_BOTTOM,
        }
    }
}

bitflags::bitflags! {
    /// A set of [`Pip`] positions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PipSet: u16 {
        /// Upper-left corner.
        const TOP_LEFT = 1 << 0;
        /// Upper-right corner.
        const TOP_RIGHT = 1 << 1;
        /// Lower-left corner.
        const BOTTOM_LEFT = 1 << 2;
        /// Lower-right corner.
        const BOTTOM_RIGHT = 1 << 3;
        /// Middle of the face.
        const CENTER = 1 << 4;
        /// Left column, top row.
        const COLUMN_LEFT_TOP = 1 << 5;
        /// Left column, middle row.
        const COLUMN_LEFT_MIDDLE = 1 << 6;
        /// Left column, bottom row.
        const COLUMN_LEFT_BOTTOM = 1 << 7;
        /// Right column, top row.
        const COLUMN_RIGHT_TOP = 1 << 8;
        /// Right column, middle row.
        const COLUMN_RIGHT_MIDDLE = 1 << 9;
        /// Right column, bottom row.
        const COLUMN_RIGHT_BOTTOM = 1 << 10;

        /// The four corners.
        const CORNERS = Self::TOP_LEFT.bits()
            | Self::TOP_RIGHT.bits()
            | Self::BOTTOM_LEFT.bits()
            | Self::BOTTOM_RIGHT.bits();
        /// Two columns of three, used by the six face.
        const COLUMNS = Self::COLUMN_LEFT_TOP.bits()
            | Self::COLUMN_LEFT_MIDDLE.bits()
            | Self::COLUMN_LEFT_BOTTOM.bits()
            | Self::COLUMN_RIGHT_TOP.bits()
            | Self::COLUMN_RIGHT_MIDDLE.bits()
            | Self::COLUMN_RIGHT_BOTTOM.bits();
    }
}

impl PipSet {
    /// Returns the number of pips in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits().count_ones() as usize
    }

    /// Returns `true` if the set contains `pip`.
    #[must_use]
    pub const fn contains_pip(self, pip: Pip) -> bool {
        self.contains(pip.flag())
    }

    /// Returns an iterator over the pips in the set, in [`Pip::ALL`] order.
    #[must_use]
    pub fn iter_pips(self) -> Pips {
        Pips {
            set: self,
            index: 0,
        }
    }
}

/// Iterator over the pips of a [`PipSet`], created by [`PipSet::iter_pips`].
#[derive(Debug, Clone)]
pub struct Pips {
    set: PipSet,
    index: usize,
}

impl Iterator for Pips {
    type Item = Pip;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&pip) = Pip::ALL.get(self.index) {
            self.index += 1;
            if self.set.contains_pip(pip) {
                return Some(pip);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(Pip::ALL.len().saturating_sub(self.index)))
    }
}

impl FusedIterator for Pips {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DieFace;

    fn rotated_half_turn(pip: Pip) -> Pip {
        match pip {
            Pip::TopLeft => Pip::BottomRight,
            Pip::TopRight => Pip::BottomLeft,
            Pip::BottomLeft => Pip::TopRight,
            Pip::BottomRight => Pip::TopLeft,
            Pip::Center => Pip::Center,
            Pip::ColumnLeftTop => Pip::ColumnRightBottom,
            Pip::ColumnLeftMiddle => Pip::ColumnRightMiddle,
            Pip::ColumnLeftBottom => Pip::ColumnRightTop,
            Pip::ColumnRightTop => Pip::ColumnLeftBottom,
            Pip::ColumnRightMiddle => Pip::ColumnLeftMiddle,
            Pip::ColumnRightBottom => Pip::ColumnLeftTop,
        }
    }

    #[test]
    fn test_pip_flags_are_distinct() {
        let mut seen = PipSet::empty();
        for pip in Pip::ALL {
            assert!(!seen.contains_pip(pip));
            seen |= pip.flag();
        }
        assert_eq!(seen.len(), Pip::ALL.len());
    }

    #[test]
    fn test_pips_iterates_in_bit_order() {
        let pips: Vec<_> = DieFace::D3.pips().iter_pips().collect();
        assert_eq!(pips, [Pip::TopRight, Pip::BottomLeft, Pip::Center]);
    }

    #[test]
    fn test_iter_pips_matches_set() {
        for face in DieFace::ALL {
            let mut iter = face.pips().iter_pips();
            let pips: Vec<_> = iter.by_ref().collect();
            assert_eq!(pips.len(), face.pips().len(), "face {face}");
            assert!(pips.iter().all(|&pip| face.pips().contains_pip(pip)));
            assert_eq!(iter.next(), None);
        }
    }

    #[test]
    fn test_offsets_lie_inside_face() {
        for pip in Pip::ALL {
            let (x, y) = pip.offset();
            assert!((0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y), "{pip:?}");
        }
    }

    #[test]
    fn test_six_face_uses_three_rows() {
        let rows: Vec<_> = DieFace::D6
            .pips()
            .iter_pips()
            .map(|pip| pip.offset().1)
            .collect();
        for y in [0.2, 0.5, 0.8] {
            let count = rows
                .iter()
                .filter(|&&row| (row - y).abs() < f32::EPSILON)
                .count();
            assert_eq!(count, 2, "row {y}");
        }
    }

    #[test]
    fn test_layouts_are_symmetric_under_half_turn() {
        for face in DieFace::ALL {
            for pip in face.pips().iter_pips() {
                let (x, y) = pip.offset();
                let mirrored = rotated_half_turn(pip);
                assert!(face.pips().contains_pip(mirrored), "face {face}: {pip:?}");
                let (mx, my) = mirrored.offset();
                assert!((x + mx - 1.0).abs() < f32::EPSILON);
                assert!((y + my - 1.0).abs() < f32::EPSILON);
            }
        }
    }
}
