//! Per-thumb offset state

/// Which of the two thumbs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Thumb {
    /// Controls the lower bound
    Left,
    /// Controls the upper bound
    Right,
}

impl Thumb {
    pub const BOTH: [Thumb; 2] = [Thumb::Left, Thumb::Right];

    /// The sibling thumb
    pub fn other(self) -> Self {
        match self {
            Thumb::Left => Thumb::Right,
            Thumb::Right => Thumb::Left,
        }
    }
}

/// Live and committed pixel offset of one thumb
///
/// Plain value holder: clamping belongs to the drag controller.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ThumbState {
    /// Live offset, updated on every drag move
    pub offset: f32,
    /// Offset at the end of the last drag; anchor for the next drag's
    /// cumulative translation
    pub committed_offset: f32,
}

impl ThumbState {
    pub fn new(offset: f32) -> Self {
        Self {
            offset,
            committed_offset: offset,
        }
    }

    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    /// Make the live offset the anchor for the next drag
    pub fn commit(&mut self) {
        self.committed_offset = self.offset;
    }

    /// Overwrite both offsets, used on measurement and external resync
    pub fn reset(&mut self, offset: f32) {
        self.offset = offset;
        self.committed_offset = offset;
    }
}

/// One value per thumb
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ThumbPair<T> {
    pub left: T,
    pub right: T,
}

impl<T> ThumbPair<T> {
    pub const fn new(left: T, right: T) -> Self {
        Self { left, right }
    }

    pub fn get(&self, thumb: Thumb) -> &T {
        match thumb {
            Thumb::Left => &self.left,
            Thumb::Right => &self.right,
        }
    }

    pub fn get_mut(&mut self, thumb: Thumb) -> &mut T {
        match thumb {
            Thumb::Left => &mut self.left,
            Thumb::Right => &mut self.right,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(Thumb, T) -> U) -> ThumbPair<U> {
        ThumbPair {
            left: f(Thumb::Left, self.left),
            right: f(Thumb::Right, self.right),
        }
    }
}
