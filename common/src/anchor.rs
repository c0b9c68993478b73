// same-page anchors
//
// a bare "#" keeps the browser's default behavior.  anything else is taken over and
// scrolled to, if the fragment names an element

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnchorAction<'a> {
    // let the browser handle the click
    PassThrough,
    // prevent the jump and scroll to the element with this id, if any
    ScrollTo(&'a str),
}

pub fn classify(href: &str) -> AnchorAction<'_> {
    match href.strip_prefix('#') {
        Some("") | None => AnchorAction::PassThrough,
        Some(fragment) => AnchorAction::ScrollTo(fragment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_passes_through() {
        assert_eq!(classify("#"), AnchorAction::PassThrough);
    }

    #[test]
    fn fragments() {
        assert_eq!(classify("#rooms"), AnchorAction::ScrollTo("rooms"));
        assert_eq!(classify("#missing-id"), AnchorAction::ScrollTo("missing-id"));
    }

    #[test]
    fn other_links_pass_through() {
        assert_eq!(classify("/about#team"), AnchorAction::PassThrough);
        assert_eq!(classify(""), AnchorAction::PassThrough);
    }
}
