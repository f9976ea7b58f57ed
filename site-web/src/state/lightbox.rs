//! Lightbox navigation state machine
//!
//! Tracks the currently displayed gallery item plus a monotonically
//! increasing render token. Every state change bumps the token; an async
//! completion (a video becoming playable, say) compares the token it
//! captured against the current one and bails out if the user has navigated
//! away in the meantime. Pure state; the gallery component applies the DOM
//! effects.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    index: Option<usize>,
    token: u64,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: None,
            token: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.index.is_some()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Generation counter for discarding stale async completions.
    pub fn token(&self) -> u64 {
        self.token
    }

    /// True when `token` was captured by the most recent state change.
    pub fn is_current(&self, token: u64) -> bool {
        self.token == token
    }

    /// Open at item `i`. Out-of-range indices are ignored.
    pub fn open(&mut self, i: usize) {
        if i < self.len {
            self.index = Some(i);
            self.token += 1;
        }
    }

    pub fn close(&mut self) {
        self.index = None;
        self.token += 1;
    }

    /// Advance with wraparound. No-op while closed.
    pub fn next(&mut self) {
        if let Some(i) = self.index {
            self.index = Some((i + 1) % self.len);
            self.token += 1;
        }
    }

    /// Go back with wraparound. No-op while closed.
    pub fn prev(&mut self) {
        if let Some(i) = self.index {
            self.index = Some((i + self.len - 1) % self.len);
            self.token += 1;
        }
    }

    /// Index of the item to preload next, while open.
    pub fn preload_index(&self) -> Option<usize> {
        self.index.map(|i| (i + 1) % self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let lb = Lightbox::new(5);
        assert!(!lb.is_open());
        assert_eq!(lb.index(), None);
    }

    #[test]
    fn test_next_then_prev_round_trips() {
        for start in 0..5 {
            let mut lb = Lightbox::new(5);
            lb.open(start);
            lb.next();
            lb.prev();
            assert_eq!(lb.index(), Some(start));
        }
    }

    #[test]
    fn test_wraparound_both_directions() {
        let mut lb = Lightbox::new(3);
        lb.open(2);
        lb.next();
        assert_eq!(lb.index(), Some(0));
        lb.prev();
        assert_eq!(lb.index(), Some(2));
    }

    #[test]
    fn test_open_out_of_range_ignored() {
        let mut lb = Lightbox::new(3);
        lb.open(3);
        assert!(!lb.is_open());
        assert_eq!(lb.token(), 0);
    }

    #[test]
    fn test_navigation_noop_while_closed() {
        let mut lb = Lightbox::new(3);
        lb.next();
        lb.prev();
        assert!(!lb.is_open());
        assert_eq!(lb.token(), 0);
    }

    #[test]
    fn test_token_increases_and_guards_stale_completions() {
        let mut lb = Lightbox::new(4);
        lb.open(1);
        let video_token = lb.token();
        assert!(lb.is_current(video_token));

        // user navigates before the async completion arrives
        lb.next();
        assert!(!lb.is_current(video_token));
        assert!(lb.token() > video_token);

        lb.close();
        assert!(!lb.is_current(video_token));
    }

    #[test]
    fn test_close_resets_index() {
        let mut lb = Lightbox::new(2);
        lb.open(1);
        lb.close();
        assert_eq!(lb.index(), None);
        assert_eq!(lb.preload_index(), None);
    }

    #[test]
    fn test_preload_wraps_to_first() {
        let mut lb = Lightbox::new(3);
        lb.open(2);
        assert_eq!(lb.preload_index(), Some(0));
        lb.prev();
        assert_eq!(lb.preload_index(), Some(2));
    }
}
