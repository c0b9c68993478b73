// input mapping
//
// the three input modalities of the lightbox (buttons, keyboard, swipe) all reduce to
// one of these commands before they reach the session

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxCommand {
    Next,
    Prev,
    Close,
}

impl LightboxCommand {
    /// Maps a `KeyboardEvent.key` value to a command.  Only the arrow keys and
    /// Escape are intercepted.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(LightboxCommand::Next),
            "ArrowLeft" => Some(LightboxCommand::Prev),
            "Escape" => Some(LightboxCommand::Close),
            _ => None,
        }
    }
}

/// Keys that open an image the same way a click does.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

// SwipeTracker
//
// remembers where a touch started; the end position decides if the gesture was a
// swipe.  motions up to and including the threshold are taps and are left to the
// click handlers
#[derive(Debug)]
pub struct SwipeTracker {
    threshold: f64,
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        SwipeTracker {
            threshold,
            start_x: None,
        }
    }

    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    pub fn end(&mut self, x: f64) -> Option<LightboxCommand> {
        let dx = x - self.start_x.take()?;

        if dx.abs() <= self.threshold {
            return None;
        }

        // swiping left pulls the next image in from the right
        if dx < 0.0 {
            Some(LightboxCommand::Next)
        } else {
            Some(LightboxCommand::Prev)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys() {
        assert_eq!(LightboxCommand::from_key("ArrowRight"), Some(LightboxCommand::Next));
        assert_eq!(LightboxCommand::from_key("ArrowLeft"), Some(LightboxCommand::Prev));
        assert_eq!(LightboxCommand::from_key("Escape"), Some(LightboxCommand::Close));
        assert_eq!(LightboxCommand::from_key("ArrowUp"), None);
        assert_eq!(LightboxCommand::from_key("Enter"), None);
    }

    #[test]
    fn activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Spacebar"));
        assert!(!is_activation_key("Tab"));
    }

    #[test]
    fn swipe_threshold_is_exclusive() {
        let mut swipe = SwipeTracker::new(50.0);

        swipe.begin(200.0);
        assert_eq!(swipe.end(150.0), None);

        swipe.begin(200.0);
        assert_eq!(swipe.end(250.0), None);

        swipe.begin(200.0);
        assert_eq!(swipe.end(149.0), Some(LightboxCommand::Next));

        swipe.begin(200.0);
        assert_eq!(swipe.end(251.0), Some(LightboxCommand::Prev));
    }

    #[test]
    fn end_without_begin_is_ignored() {
        let mut swipe = SwipeTracker::new(50.0);
        assert_eq!(swipe.end(0.0), None);

        // the start is consumed by the first end
        swipe.begin(300.0);
        assert_eq!(swipe.end(100.0), Some(LightboxCommand::Next));
        assert_eq!(swipe.end(100.0), None);
    }
}
