use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

// site configuration
//
// every structural marker and threshold the controllers rely on.  the defaults match
// the site's markup, and a page can override any subset of them by embedding a json
// document (see webapp/src/page.rs)
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub menu: MenuConfig,
    pub lightbox: LightboxConfig,
    pub navbar: NavbarConfig,
    pub smooth_scroll: SmoothScrollConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct MenuConfig {
    pub toggle_selector: String,
    pub panel_selector: String,
    // links inside the panel that close the menu
    pub link_selector: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig {
            toggle_selector: String::from(".menu-toggle"),
            panel_selector: String::from(".nav-links"),
            link_selector: String::from("a"),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct LightboxConfig {
    // containers that each define one image group
    pub group_selector: String,
    pub image_selector: String,
    pub swipe_threshold: f64,

    // overlay labels, in the site's language
    pub dialog_label: String,
    pub close_label: String,
    pub prev_label: String,
    pub next_label: String,
    pub image_alt: String,

    pub close_glyph: String,
    pub prev_glyph: String,
    pub next_glyph: String,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        LightboxConfig {
            group_selector: String::from(".room-card, .gallery"),
            image_selector: String::from("img"),
            swipe_threshold: 50.0,
            dialog_label: String::from("Bildvisning"),
            close_label: String::from("Stäng bildvisning"),
            prev_label: String::from("Föregående bild"),
            next_label: String::from("Nästa bild"),
            image_alt: String::from("Förstorad bild"),
            close_glyph: String::from("\u{00d7}"),
            prev_glyph: String::from("\u{276e}"),
            next_glyph: String::from("\u{276f}"),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub selector: String,
    pub scroll_threshold: f64,
    pub scrolled_class: String,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        NavbarConfig {
            selector: String::from(".navbar"),
            scroll_threshold: 100.0,
            scrolled_class: String::from("scrolled"),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SmoothScrollConfig {
    pub anchor_selector: String,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        SmoothScrollConfig {
            anchor_selector: String::from(r##"a[href^="#"]"##),
        }
    }
}

impl SiteConfig {
    #[instrument(level=Level::DEBUG, skip(doc))]
    pub fn from_json(doc: &str) -> anyhow::Result<Self> {
        let config: SiteConfig =
            serde_json::from_str(doc).context("failed to parse site config")?;

        debug!("successfully parsed site config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let config = SiteConfig::from_json(
            r#"{
                "navbar": { "scroll_threshold": 40 },
                "lightbox": { "close_label": "Close viewer" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.navbar.scroll_threshold, 40.0);
        assert_eq!(config.navbar.selector, ".navbar");
        assert_eq!(config.lightbox.close_label, "Close viewer");
        assert_eq!(config.lightbox.swipe_threshold, 50.0);
        assert_eq!(config.menu, MenuConfig::default());
    }

    #[test]
    fn malformed_document_is_error() {
        assert!(SiteConfig::from_json("{ navbar: ").is_err());
        assert!(SiteConfig::from_json(r#"{ "navbar": { "scroll_threshold": "far" } }"#).is_err());
    }

    #[test]
    fn defaults_match_markup() {
        let config = SiteConfig::default();

        assert_eq!(config.lightbox.group_selector, ".room-card, .gallery");
        assert_eq!(config.smooth_scroll.anchor_selector, "a[href^=\"#\"]");
        assert_eq!(config.navbar.scroll_threshold, 100.0);
    }
}
