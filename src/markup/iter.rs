use std::iter::FusedIterator;

use super::Markup;

/// An iterator over the children of a [`Markup`] node, positioned under their parent.
#[derive(Debug, Clone)]
pub struct MarkupChildren<'m> {
    parent: &'m Markup,
    front:  usize,
    back:   usize,
}

impl<'m> MarkupChildren<'m> {
    #[inline]
    pub(super) fn new(parent: &'m Markup) -> Self {
        Self {
            parent,
            front: 0,
            back: parent.child_count(),
        }
    }

    #[inline]
    fn positioned(&self, index: usize) -> Option<Markup> {
        let raw = self.parent.raw().child(index)?;
        Some(self.parent.positioned_child(index, raw.clone()))
    }
}

impl Iterator for MarkupChildren<'_> {
    type Item = Markup;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let child = self.positioned(self.front);
        self.front += 1;
        child
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.len()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for MarkupChildren<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.positioned(self.back)
    }
}

impl ExactSizeIterator for MarkupChildren<'_> {}
impl FusedIterator for MarkupChildren<'_> {}
