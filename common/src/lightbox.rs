use std::rc::Rc;

use crate::input::LightboxCommand;

// ImageRef
//
// snapshot of a single page image, taken once during discovery
#[derive(Clone, Debug, PartialEq)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

impl ImageRef {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        ImageRef {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

// ImageGroup
//
// the images of one group container (a room card or a gallery) in document order.
// groups are fixed after discovery and shared between the activation handlers and
// the session by Rc, so installing a group is a pointer copy
#[derive(Debug, Default, PartialEq)]
pub struct ImageGroup {
    images: Vec<ImageRef>,
}

impl ImageGroup {
    pub fn new(images: Vec<ImageRef>) -> Self {
        ImageGroup { images }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.images.get(index)
    }
}

/// What the overlay should display after a successful `show`.
#[derive(Clone, Debug, PartialEq)]
pub struct Slide {
    pub index: usize,
    pub src: String,
    pub alt: String,
    pub counter: String,
}

// LightboxSession
//
// the state behind the single shared overlay.  every transition returns what (if
// anything) the view must do, so the DOM side only ever applies results
#[derive(Debug, Default)]
pub struct LightboxSession {
    group: Option<Rc<ImageGroup>>,
    index: usize,
    visible: bool,
}

impl LightboxSession {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[cfg(test)]
    pub fn current_index(&self) -> usize {
        self.index
    }

    #[cfg(test)]
    pub fn current_group(&self) -> Option<&Rc<ImageGroup>> {
        self.group.as_ref()
    }

    /// Maps a key to a command, but only while the overlay is up.  Keys pressed
    /// anywhere else on the page are left alone.
    pub fn key_command(&self, key: &str) -> Option<LightboxCommand> {
        if !self.visible {
            return None;
        }

        LightboxCommand::from_key(key)
    }

    /// Installs `group` as the current group and shows the image at `index`.
    pub fn activate(&mut self, group: Rc<ImageGroup>, index: usize) -> Option<Slide> {
        self.group = Some(group);
        self.show(index)
    }

    /// Shows the image at `index` of the current group.
    ///
    /// Returns `None` and leaves the session untouched when there is no group,
    /// the group is empty, or the index is out of range.
    pub fn show(&mut self, index: usize) -> Option<Slide> {
        let group = self.group.as_ref()?;
        let image = group.get(index)?;

        let slide = Slide {
            index,
            src: image.src.clone(),
            alt: image.alt.clone(),
            counter: format!("{} / {}", index + 1, group.len()),
        };

        self.index = index;
        self.visible = true;

        Some(slide)
    }

    pub fn next(&mut self) -> Option<Slide> {
        let len = self.len()?;
        self.show((self.index + 1) % len)
    }

    pub fn prev(&mut self) -> Option<Slide> {
        let len = self.len()?;
        self.show((self.index + len - 1) % len)
    }

    /// Hides the overlay and drops the current group.
    ///
    /// Returns whether the overlay was visible beforehand.
    pub fn close(&mut self) -> bool {
        let was_visible = self.visible;

        self.group = None;
        self.visible = false;

        was_visible
    }

    // length of a usable group, so that the modulo below can never divide by zero
    fn len(&self) -> Option<usize> {
        self.group
            .as_ref()
            .map(|g| g.len())
            .filter(|len| *len > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Rc<ImageGroup> {
        Rc::new(ImageGroup::new(vec![
            ImageRef::new("a.jpg", "A"),
            ImageRef::new("b.jpg", "B"),
            ImageRef::new("c.jpg", "C"),
        ]))
    }

    #[test]
    fn activation_then_next_wraps() {
        let mut session = LightboxSession::new();

        let slide = session.activate(abc(), 1).unwrap();
        assert_eq!(slide.src, "b.jpg");
        assert_eq!(slide.counter, "2 / 3");

        let slide = session.next().unwrap();
        assert_eq!(slide.alt, "C");
        assert_eq!(slide.counter, "3 / 3");

        let slide = session.next().unwrap();
        assert_eq!(slide.src, "a.jpg");
        assert_eq!(slide.counter, "1 / 3");
    }

    #[test]
    fn navigation_stays_in_range() {
        let group = abc();
        let n = group.len();

        for i in 0..n {
            let mut session = LightboxSession::new();
            session.activate(group.clone(), i).unwrap();
            assert_eq!(session.next().unwrap().index, (i + 1) % n);

            let mut session = LightboxSession::new();
            session.activate(group.clone(), i).unwrap();
            assert_eq!(session.prev().unwrap().index, (i + n - 1) % n);
        }
    }

    #[test]
    fn prev_from_first_wraps_to_last() {
        let mut session = LightboxSession::new();
        session.activate(abc(), 0);

        let slide = session.prev().unwrap();
        assert_eq!(slide.index, 2);
        assert_eq!(slide.counter, "3 / 3");
    }

    #[test]
    fn single_image_group_navigates_to_itself() {
        let mut session = LightboxSession::new();
        session.activate(Rc::new(ImageGroup::new(vec![ImageRef::new("x", "")])), 0);

        assert_eq!(session.next().unwrap().counter, "1 / 1");
        assert_eq!(session.prev().unwrap().index, 0);
    }

    #[test]
    fn show_without_group_is_noop() {
        let mut session = LightboxSession::new();

        assert!(session.show(0).is_none());
        assert!(!session.is_visible());
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn show_on_empty_group_is_noop() {
        let mut session = LightboxSession::new();

        let empty = Rc::new(ImageGroup::new(Vec::new()));
        assert!(empty.is_empty());
        assert!(!abc().is_empty());

        assert!(session.activate(empty, 0).is_none());
        assert!(session.next().is_none());
        assert!(session.prev().is_none());
        assert!(!session.is_visible());
    }

    #[test]
    fn show_out_of_range_keeps_state() {
        let mut session = LightboxSession::new();
        session.activate(abc(), 2);

        assert!(session.show(3).is_none());
        assert_eq!(session.current_index(), 2);
        assert!(session.is_visible());
    }

    #[test]
    fn close_clears_group() {
        let mut session = LightboxSession::new();
        session.activate(abc(), 0);

        assert!(session.close());
        assert!(!session.is_visible());
        assert!(session.current_group().is_none());

        assert!(session.next().is_none());
        assert!(session.prev().is_none());
        assert!(session.show(1).is_none());
        assert!(!session.is_visible());

        // closing twice reports that nothing was open
        assert!(!session.close());
    }

    #[test]
    fn keys_only_apply_while_visible() {
        let mut session = LightboxSession::new();

        for key in ["ArrowRight", "ArrowLeft", "Escape"] {
            assert_eq!(session.key_command(key), None);
        }

        session.activate(abc(), 0);
        assert_eq!(session.key_command("ArrowRight"), Some(LightboxCommand::Next));
        assert_eq!(session.key_command("ArrowLeft"), Some(LightboxCommand::Prev));
        assert_eq!(session.key_command("Escape"), Some(LightboxCommand::Close));
        assert_eq!(session.key_command("Enter"), None);

        session.close();
        for key in ["ArrowRight", "ArrowLeft", "Escape"] {
            assert_eq!(session.key_command(key), None);
        }
    }

    #[test]
    fn activation_replaces_group() {
        let mut session = LightboxSession::new();
        session.activate(abc(), 2);

        let other = Rc::new(ImageGroup::new(vec![
            ImageRef::new("x.jpg", "X"),
            ImageRef::new("y.jpg", "Y"),
        ]));
        let slide = session.activate(other.clone(), 0).unwrap();

        assert_eq!(slide.counter, "1 / 2");
        assert!(Rc::ptr_eq(session.current_group().unwrap(), &other));
    }
}
