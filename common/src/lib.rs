// DOM-free half of the site interaction layer
//
// everything here is plain state that the webapp drives from browser events, which
// keeps the transitions testable on the host
pub mod anchor;
pub mod config;
pub mod input;
pub mod lightbox;
pub mod menu;
pub mod scroll;
