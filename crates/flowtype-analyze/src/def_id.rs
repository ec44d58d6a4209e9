/// A lightweight handle to a named definition in a [`DependencyGraph`].
///
/// Ids are assigned in the order definitions are first seen, so sorting by
/// id restores definition order.
///
/// [`DependencyGraph`]: crate::DependencyGraph
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct DefId(u32);

impl DefId {
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
