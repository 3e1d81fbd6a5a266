//! Index arithmetic over a circular collection.

/// Maps a possibly negative index onto `0..len`.
///
/// Returns `0` for an empty collection.
pub fn normalize_index(index: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.rem_euclid(len as i64) as usize
}

/// Number of rows advanced per auto-scroll shift (not a frame rate).
///
/// Collections shorter than two screens advance by `len % visible_count` rows so that the
/// wrap-around seam lines up; longer ones advance a whole screen at a time. The result is
/// never zero.
pub fn refresh_rate(len: usize, visible_count: usize) -> usize {
    if visible_count == 0 {
        return 1;
    }
    let rate = if len < visible_count.saturating_mul(2) {
        len % visible_count
    } else {
        visible_count
    };
    rate.max(1)
}

/// Iterator over `window_len` consecutive indexes of a circular collection of length `len`,
/// starting at `start`.
///
/// Indexes repeat when `window_len > len`. Yields nothing when `len == 0`.
#[derive(Clone, Debug)]
pub struct WrappedWindow {
    next: usize,
    remaining: usize,
    len: usize,
}

impl Iterator for WrappedWindow {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.next;
        self.remaining -= 1;
        self.next = if index + 1 == self.len { 0 } else { index + 1 };
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for WrappedWindow {}

pub fn wrapped_window(start: usize, window_len: usize, len: usize) -> WrappedWindow {
    if len == 0 {
        return WrappedWindow {
            next: 0,
            remaining: 0,
            len,
        };
    }
    WrappedWindow {
        next: start % len,
        remaining: window_len,
        len,
    }
}
