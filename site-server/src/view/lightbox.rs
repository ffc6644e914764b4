//! Full-screen image viewer state

/// Keys the lightbox responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Escape,
}

/// Selected index into the image list, `None` when closed
///
/// Navigation wraps at both ends. Every operation takes the current list
/// length; with an empty list any navigation closes the viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lightbox {
    selected: Option<usize>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Open at `index`; ignored when out of range
    pub fn open(&mut self, index: usize, len: usize) {
        if index < len {
            self.selected = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn next(&mut self, len: usize) {
        self.step(len, |i| (i + 1) % len);
    }

    pub fn prev(&mut self, len: usize) {
        self.step(len, |i| (i + len - 1) % len);
    }

    fn step(&mut self, len: usize, f: impl FnOnce(usize) -> usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        if let Some(i) = self.selected {
            self.selected = Some(f(i.min(len - 1)));
        }
    }

    /// Keyboard navigation, only while open
    ///
    /// Returns whether the key was handled.
    pub fn handle_key(&mut self, key: Key, len: usize) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            Key::Left => self.prev(len),
            Key::Right => self.next(len),
            Key::Escape => self.close(),
        }
        true
    }

    /// Keep the selection valid after the list changed length
    pub fn clamp(&mut self, len: usize) {
        self.selected = match self.selected {
            Some(_) if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => None,
        };
    }
}
