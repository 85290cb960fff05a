use std::collections::VecDeque;
use std::vec::IntoIter;

/// An iterator that supports peeking arbitrarily far ahead.
///
/// rustlib's [`Peekable`] only looks at the next item. The scanner needs two characters of
/// lookahead to tell a fraction `1/2` from a division `1/(2)`, so items are buffered here as they
/// are peeked.
///
/// [`Peekable`]: core::iter::Peekable
pub struct PeekIter<T> {
    iter: IntoIter<T>,
    /// Items consumed from `iter` for peeking but not yet yielded.
    lookahead: VecDeque<T>,
}

impl<T> PeekIter<T> {
    pub fn new(iter: IntoIter<T>) -> Self {
        Self {
            iter,
            lookahead: VecDeque::with_capacity(2),
        }
    }

    /// Returns a reference to the next item without consuming it.
    pub fn peek(&mut self) -> Option<&T> {
        self.peek_nth(0)
    }

    /// Returns a reference to the item `n` places ahead without consuming anything.
    pub fn peek_nth(&mut self, n: usize) -> Option<&T> {
        while self.lookahead.len() <= n {
            let next = self.iter.next()?;
            self.lookahead.push_back(next);
        }
        self.lookahead.get(n)
    }

    /// Consumes items while they satisfy `predicate`, leaving the first item that fails it.
    pub fn collect_while<P, C>(&mut self, predicate: P) -> C
    where
        P: Fn(&T) -> bool,
        C: std::iter::FromIterator<T>,
    {
        std::iter::from_fn(|| {
            if self.peek().map_or(false, |item| predicate(item)) {
                self.next()
            } else {
                None
            }
        })
        .collect()
    }
}

impl<T> Iterator for PeekIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        // unwrap_or would poll `iter` before the lookahead is checked
        self.lookahead.pop_front().or_else(|| self.iter.next())
    }
}
