//! Client-side interactivity for a static website, compiled to WebAssembly.
//!
//! Every feature (theme toggle, mobile navigation, disclosure menus, search
//! dialog, skip link) is a small browser-free core that consumes a typed
//! [`event::UiEvent`] and returns [`action::Action`]s. The [`binder`] routes
//! events to whichever cores are enabled, and the browser host in `dom`
//! (behind the `hydrate` feature) turns DOM events into `UiEvent`s and applies
//! the resulting actions to the page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`binder`] | Owns the enabled feature cores and routes events to them |
//! | [`event`] | Input events and the geometry they carry |
//! | [`action`] | DOM mutations requested by the cores |
//! | [`theme`] | Light/dark preference restore and toggle |
//! | [`nav`] | Mobile navigation panel open/close |
//! | [`disclosure`] | `<details>` menus with the single-open accordion policy |
//! | [`search`] | Search dialog open/closing/closed sequencing |
//! | [`skip_link`] | Skip-to-content scroll offset and focus |
//! | [`store`] | Preference storage capability |
//! | [`config`] | Selectors, class names, and timings |
//! | [`error`] | Host and config error types |
//! | [`consts`] | Shared constants |
//! | `dom` | Browser host (`hydrate` feature only) |

pub mod action;
pub mod binder;
pub mod config;
pub mod consts;
pub mod disclosure;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod error;
pub mod event;
pub mod nav;
pub mod search;
pub mod skip_link;
pub mod store;
pub mod theme;
