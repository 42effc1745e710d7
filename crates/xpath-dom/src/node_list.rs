use core::marker::PhantomData;

/// Child list of a node that can never have children.
///
/// Zero-sized; every instance is interchangeable with every other.
pub struct EmptyNodeList<N> {
    _marker: PhantomData<fn() -> N>,
}

impl<N> EmptyNodeList<N> {
    pub const fn new() -> Self {
        Self { _marker: PhantomData }
    }

    pub fn len(&self) -> usize {
        0
    }

    pub fn is_empty(&self) -> bool {
        true
    }

    /// Indexed access; absent for every index, negative ones included.
    pub fn item(&self, _index: isize) -> Option<N> {
        None
    }

    pub fn iter(&self) -> Self {
        *self
    }
}

impl<N> Clone for EmptyNodeList<N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for EmptyNodeList<N> {}

impl<N> PartialEq for EmptyNodeList<N> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<N> Eq for EmptyNodeList<N> {}

impl<N> core::fmt::Debug for EmptyNodeList<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("EmptyNodeList")
    }
}

impl<N> Default for EmptyNodeList<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Iterator for EmptyNodeList<N> {
    type Item = N;

    fn next(&mut self) -> Option<Self::Item> {
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(0))
    }
}

impl<N> ExactSizeIterator for EmptyNodeList<N> {}
impl<N> core::iter::FusedIterator for EmptyNodeList<N> {}
