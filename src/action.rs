//! DOM mutations the feature cores ask the host to perform.

/// Named elements an action can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// `<html>`.
    Root,
    /// `<body>`.
    Body,
    ThemeToggle,
    NavTrigger,
    NavPanel,
    /// The `<details>` element at this index.
    Disclosure(usize),
    /// The `<summary>` of the disclosure at this index.
    DisclosureSummary(usize),
    SearchDialog,
    SearchInput,
    MainContent,
}

/// Timers a core can arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Move focus into the search field after the dialog opens.
    SearchFocus,
    /// Force close cleanup if `animationend` never arrives.
    SearchCloseFallback {
        /// Close attempt this timer belongs to; stale timers are ignored.
        generation: u32,
    },
}

/// A single DOM mutation, applied by the host in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetAttribute { target: Target, name: &'static str, value: String },
    RemoveAttribute { target: Target, name: &'static str },
    AddClass { target: Target, class: String },
    RemoveClass { target: Target, class: String },
    /// Set or clear a disclosure's `open` attribute.
    SetOpen { target: Target, open: bool },
    Focus { target: Target, prevent_scroll: bool },
    /// Native `showModal()` on the search dialog. The host skips it when the
    /// dialog is already open.
    ShowModal,
    /// Native `close()` on the search dialog.
    CloseModal,
    /// Replace an input's value.
    SetValue { target: Target, value: String },
    /// Scroll the window to an absolute vertical offset.
    ScrollTo { top: f64, smooth: bool },
    Schedule { timer: Timer, delay_ms: u32 },
    /// Suppress the default action of the event being dispatched.
    PreventDefault,
}
