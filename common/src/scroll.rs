use std::collections::BTreeSet;

// scroll lock
//
// both the mobile menu and the lightbox suspend page scrolling.  the lock tracks who
// holds it and only reports a change when the first holder arrives or the last one
// leaves, so closing the menu underneath an open lightbox leaves scrolling suspended.
// each holder counts once: releasing twice cannot steal someone else's hold
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScrollHolder {
    Menu,
    Lightbox,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockChange {
    Locked,
    Unlocked,
}

#[derive(Debug, Default)]
pub struct ScrollLock {
    holders: BTreeSet<ScrollHolder>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        !self.holders.is_empty()
    }

    #[cfg(test)]
    pub fn is_held_by(&self, holder: ScrollHolder) -> bool {
        self.holders.contains(&holder)
    }

    pub fn acquire(&mut self, holder: ScrollHolder) -> Option<LockChange> {
        let was_locked = self.is_locked();
        self.holders.insert(holder);

        (!was_locked).then_some(LockChange::Locked)
    }

    pub fn release(&mut self, holder: ScrollHolder) -> Option<LockChange> {
        if !self.holders.remove(&holder) {
            return None;
        }

        (!self.is_locked()).then_some(LockChange::Unlocked)
    }
}

// NavbarScroll
//
// derived "scrolled past the threshold" flag for the header.  only the previous value
// is kept, to skip redundant class writes
#[derive(Debug)]
pub struct NavbarScroll {
    threshold: f64,
    scrolled: Option<bool>,
}

impl NavbarScroll {
    pub fn new(threshold: f64) -> Self {
        NavbarScroll {
            threshold,
            scrolled: None,
        }
    }

    #[cfg(test)]
    pub fn scrolled(&self) -> bool {
        self.scrolled.unwrap_or(false)
    }

    /// Returns the new flag when it differs from the previous one.  The first
    /// update always reports.
    pub fn update(&mut self, offset: f64) -> Option<bool> {
        let scrolled = offset > self.threshold;

        if self.scrolled == Some(scrolled) {
            return None;
        }

        self.scrolled = Some(scrolled);
        Some(scrolled)
    }
}
