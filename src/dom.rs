//! Browser host: binds the feature cores to the live page.
//!
//! ARCHITECTURE
//! ============
//! `start()` waits for the document to be parsed, resolves every configured
//! selector once, and builds a `BinderCore` with the features whose elements
//! exist. Each DOM listener translates its event into a `UiEvent`, capturing
//! the live DOM facts the core needs, and applies the returned actions. The
//! core borrow is released before any action runs, so focus/blur events
//! fired synchronously by an action can dispatch again safely.
//!
//! Listeners live for the lifetime of the page, so their closures are leaked
//! with `forget()`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{
    Document, Element, Event, EventTarget, FocusOptions, HtmlDialogElement, HtmlElement,
    HtmlInputElement, KeyboardEvent, MouseEvent, Node, NodeList, ScrollBehavior, ScrollToOptions, Window,
};

use crate::action::{Action, Target, Timer};
use crate::binder::{BinderCore, Presence};
use crate::config::{Config, Selectors};
use crate::consts::{CONFIG_ELEMENT_ID, PREFERS_DARK_QUERY, TABINDEX, THEME_ATTRIBUTE};
use crate::disclosure::GroupId;
use crate::error::DomError;
use crate::event::{Key, Modifiers, Point, Rect, UiEvent};
use crate::store::LocalStore;
use crate::theme::Theme;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("pagewire: logger already installed"));
    }
    if let Err(err) = run() {
        log::warn!("pagewire: not bound: {err}");
    }
}

fn run() -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::MissingWindow)?;
    let document = window.document().ok_or(DomError::MissingDocument)?;
    if document.ready_state() != "loading" {
        bind(window, document);
        return Ok(());
    }

    let ready_document = document.clone();
    let on_ready = Closure::once(move || bind(window, ready_document));
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();
    Ok(())
}

fn bind(window: Window, document: Document) {
    let config = load_config(&document);
    let elements = Elements::query(&document, &config.selectors);
    let presence = elements.presence();
    let store = LocalStore::from_window(&window);
    let core = BinderCore::new(&config, &presence, store);
    let host = Rc::new(Host { window, document, elements, core: RefCell::new(core) });

    let init = host.core.borrow().init();
    host.run(init, None);

    let wired = [
        ("theme", wire_theme(&host)),
        ("nav", wire_nav(&host)),
        ("disclosure", wire_disclosures(&host)),
        ("search", wire_search(&host)),
        ("skip-link", wire_skip_link(&host)),
    ];
    for (feature, result) in wired {
        if let Err(err) = result {
            log::warn!("pagewire: {feature} listeners not attached: {err}");
        }
    }
}

fn load_config(document: &Document) -> Config {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return Config::default();
    };
    match Config::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("pagewire: ignoring config block: {err}");
            Config::default()
        }
    }
}

// =============================================================
// Element lookup
// =============================================================

struct Elements {
    root: Option<Element>,
    body: Option<HtmlElement>,
    theme_toggle: Option<Element>,
    nav_trigger: Option<Element>,
    nav_panel: Option<Element>,
    nav_links: Vec<Element>,
    disclosures: Vec<(GroupId, Element)>,
    search_trigger: Option<Element>,
    search_dialog: Option<HtmlDialogElement>,
    search_close: Option<Element>,
    search_input: Option<HtmlInputElement>,
    search_hints: Vec<Element>,
    header: Option<Element>,
    skip_link: Option<Element>,
    main_content: Option<HtmlElement>,
}

impl Elements {
    fn query(document: &Document, sel: &Selectors) -> Self {
        let nav_panel = query(document, &sel.nav_panel);
        let nav_links = nav_panel
            .as_ref()
            .map(|panel| elements_of(panel.query_selector_all(&sel.nav_links), &sel.nav_links))
            .unwrap_or_default();

        let mut disclosures: Vec<(GroupId, Element)> = Vec::new();
        let groups = elements_of(document.query_selector_all(&sel.disclosure_groups), &sel.disclosure_groups);
        for (group, container) in groups.iter().enumerate() {
            for details in elements_of(container.query_selector_all(&sel.disclosures), &sel.disclosures) {
                if !disclosures.iter().any(|(_, seen)| *seen == details) {
                    disclosures.push((group, details));
                }
            }
        }

        let search_dialog = query(document, &sel.search_dialog).and_then(|el| cast::<HtmlDialogElement>(el, "dialog"));
        let (search_close, search_input, search_hints) = match &search_dialog {
            Some(dialog) => (
                query_in(dialog, &sel.search_close),
                query_in(dialog, &sel.search_input).and_then(|el| cast::<HtmlInputElement>(el, "input")),
                elements_of(dialog.query_selector_all(&sel.search_hints), &sel.search_hints),
            ),
            None => (None, None, Vec::new()),
        };

        Self {
            root: document.document_element(),
            body: document.body(),
            theme_toggle: query(document, &sel.theme_toggle),
            nav_trigger: query(document, &sel.nav_trigger),
            nav_panel,
            nav_links,
            disclosures,
            search_trigger: query(document, &sel.search_trigger),
            search_dialog,
            search_close,
            search_input,
            search_hints,
            header: query(document, &sel.header),
            skip_link: query(document, &sel.skip_link),
            main_content: query(document, &sel.main_content).and_then(|el| cast::<HtmlElement>(el, "HTML element")),
        }
    }

    fn presence(&self) -> Presence {
        Presence {
            theme_toggle: self.theme_toggle.is_some() && self.root.is_some(),
            nav: self.nav_trigger.is_some() && self.nav_panel.is_some() && self.body.is_some(),
            disclosures: self.disclosures.iter().map(|(group, d)| (*group, d.has_attribute("open"))).collect(),
            search: self.search_dialog.is_some() && self.search_input.is_some(),
            skip_link: self.skip_link.is_some() && self.main_content.is_some(),
        }
    }

    fn element(&self, target: Target) -> Result<Element, DomError> {
        let found = match target {
            Target::Root => self.root.clone(),
            Target::Body => self.body.clone().map(Element::from),
            Target::ThemeToggle => self.theme_toggle.clone(),
            Target::NavTrigger => self.nav_trigger.clone(),
            Target::NavPanel => self.nav_panel.clone(),
            Target::Disclosure(i) => self.disclosures.get(i).map(|(_, d)| d.clone()),
            Target::DisclosureSummary(i) => self.disclosures.get(i).and_then(|(_, d)| query_in(d, "summary")),
            Target::SearchDialog => self.search_dialog.clone().map(Element::from),
            Target::SearchInput => self.search_input.clone().map(Element::from),
            Target::MainContent => self.main_content.clone().map(Element::from),
        };
        found.ok_or(DomError::MissingElement(target))
    }

    fn html_element(&self, target: Target) -> Result<HtmlElement, DomError> {
        self.element(target)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| DomError::WrongElement { target, expected: "HtmlElement" })
    }
}

fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => {
            if found.is_none() {
                log::debug!("pagewire: no match for {selector:?}");
            }
            found
        }
        Err(err) => {
            log::warn!("pagewire: bad selector {selector:?}: {}", DomError::from(err));
            None
        }
    }
}

fn query_in(scope: &Element, selector: &str) -> Option<Element> {
    match scope.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("pagewire: bad selector {selector:?}: {}", DomError::from(err));
            None
        }
    }
}

fn elements_of(list: Result<NodeList, JsValue>, selector: &str) -> Vec<Element> {
    let list = match list {
        Ok(list) => list,
        Err(err) => {
            log::warn!("pagewire: bad selector {selector:?}: {}", DomError::from(err));
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

fn cast<T: JsCast>(element: Element, expected: &str) -> Option<T> {
    match element.dyn_into::<T>() {
        Ok(typed) => Some(typed),
        Err(element) => {
            log::warn!("pagewire: <{}> is not a {expected}; feature disabled", element.tag_name().to_lowercase());
            None
        }
    }
}

// =============================================================
// Host
// =============================================================

struct Host {
    window: Window,
    document: Document,
    elements: Elements,
    core: RefCell<BinderCore<LocalStore>>,
}

impl Host {
    fn dispatch(self: &Rc<Self>, event: UiEvent, source: Option<&Event>) {
        let actions = self.core.borrow_mut().dispatch(event);
        self.run(actions, source);
    }

    fn run(self: &Rc<Self>, actions: Vec<Action>, source: Option<&Event>) {
        for action in actions {
            if let Err(err) = self.apply(action, source) {
                log::warn!("pagewire: action failed: {err}");
            }
        }
    }

    fn apply(self: &Rc<Self>, action: Action, source: Option<&Event>) -> Result<(), DomError> {
        match action {
            Action::SetAttribute { target, name, value } => self.elements.element(target)?.set_attribute(name, &value)?,
            Action::RemoveAttribute { target, name } => self.elements.element(target)?.remove_attribute(name)?,
            Action::AddClass { target, class } => self.elements.element(target)?.class_list().add_1(&class)?,
            Action::RemoveClass { target, class } => self.elements.element(target)?.class_list().remove_1(&class)?,
            Action::SetOpen { target, open } => {
                self.elements.element(target)?.toggle_attribute_with_force("open", open)?;
            }
            Action::Focus { target, prevent_scroll } => {
                let options = FocusOptions::new();
                options.set_prevent_scroll(prevent_scroll);
                self.elements.html_element(target)?.focus_with_options(&options)?;
            }
            Action::ShowModal => {
                let dialog = self.dialog()?;
                if !dialog.open() {
                    dialog.show_modal()?;
                }
            }
            Action::CloseModal => self.dialog()?.close(),
            Action::SetValue { target, value } => self
                .elements
                .element(target)?
                .dyn_into::<HtmlInputElement>()
                .map_err(|_| DomError::WrongElement { target, expected: "HtmlInputElement" })?
                .set_value(&value),
            Action::ScrollTo { top, smooth } => {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(if smooth { ScrollBehavior::Smooth } else { ScrollBehavior::Auto });
                self.window.scroll_to_with_scroll_to_options(&options);
            }
            Action::Schedule { timer, delay_ms } => self.schedule(timer, delay_ms),
            Action::PreventDefault => {
                if let Some(event) = source {
                    event.prevent_default();
                }
            }
        }
        Ok(())
    }

    fn schedule(self: &Rc<Self>, timer: Timer, delay_ms: u32) {
        let host = Rc::clone(self);
        Timeout::new(delay_ms, move || {
            let dialog_open = host.dialog_open();
            host.dispatch(UiEvent::TimerElapsed { timer, dialog_open }, None);
        })
        .forget();
    }

    fn dialog(&self) -> Result<&HtmlDialogElement, DomError> {
        self.elements.search_dialog.as_ref().ok_or(DomError::MissingElement(Target::SearchDialog))
    }

    fn dialog_open(&self) -> bool {
        self.elements.search_dialog.as_ref().is_some_and(HtmlDialogElement::open)
    }

    fn prefers_dark(&self) -> bool {
        match self.window.match_media(PREFERS_DARK_QUERY) {
            Ok(Some(query)) => query.matches(),
            Ok(None) => false,
            Err(err) => {
                log::debug!("pagewire: matchMedia failed: {}", DomError::from(err));
                false
            }
        }
    }

    fn root_theme(&self) -> Option<Theme> {
        self.elements.root.as_ref()?.get_attribute(THEME_ATTRIBUTE).as_deref().and_then(Theme::parse)
    }
}

// =============================================================
// Listeners
// =============================================================

fn listen(target: &EventTarget, kind: &str, handler: impl FnMut(&Event) + 'static) -> Result<(), DomError> {
    let mut handler = handler;
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| handler(&event));
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Forward every `kind` event on `target` as the `UiEvent` built by `build`.
fn forward(
    host: &Rc<Host>,
    target: &EventTarget,
    kind: &str,
    build: impl Fn(&Host, &Event) -> Option<UiEvent> + 'static,
) -> Result<(), DomError> {
    let host = Rc::clone(host);
    listen(target, kind, move |event| {
        if let Some(ui) = build(&host, event) {
            host.dispatch(ui, Some(event));
        }
    })
}

fn wire_theme(host: &Rc<Host>) -> Result<(), DomError> {
    let Some(toggle) = host.elements.theme_toggle.clone() else {
        return Ok(());
    };
    forward(host, &toggle, "click", |host, _| {
        Some(UiEvent::ThemeToggleClick { current: host.root_theme(), prefers_dark: host.prefers_dark() })
    })
}

fn wire_nav(host: &Rc<Host>) -> Result<(), DomError> {
    let (Some(trigger), Some(panel)) = (host.elements.nav_trigger.clone(), host.elements.nav_panel.clone()) else {
        return Ok(());
    };
    forward(host, &trigger, "click", |_, _| Some(UiEvent::NavTriggerClick))?;
    forward(host, &panel, "click", |host, event| {
        let panel = host.elements.nav_panel.as_ref().map(AsRef::<EventTarget>::as_ref);
        Some(UiEvent::NavPanelClick { on_background: event.target().as_ref() == panel })
    })?;
    for link in &host.elements.nav_links {
        forward(host, link, "click", |_, _| Some(UiEvent::NavLinkClick))?;
    }
    // Escape for the panel shares the document keydown listener in `wire_search`.
    Ok(())
}

fn wire_disclosures(host: &Rc<Host>) -> Result<(), DomError> {
    if host.elements.disclosures.is_empty() {
        return Ok(());
    }
    forward(host, &host.document, "click", |host, event| {
        let target = event.target();
        let node = target.as_ref().and_then(|t| t.dyn_ref::<Node>());
        let inside = host
            .elements
            .disclosures
            .iter()
            .enumerate()
            .filter(|(_, (_, details))| details.contains(node))
            .map(|(i, _)| i)
            .collect();
        Some(UiEvent::DocumentClick { inside })
    })?;
    for (index, (_, details)) in host.elements.disclosures.iter().enumerate() {
        forward(host, details, "toggle", move |host, _| {
            let open = host.elements.disclosures.get(index).is_some_and(|(_, d)| d.has_attribute("open"));
            Some(UiEvent::DisclosureToggle { index, open })
        })?;
    }
    Ok(())
}

fn wire_search(host: &Rc<Host>) -> Result<(), DomError> {
    // Document keydown feeds Escape to nav/disclosures and the shortcut to search.
    forward(host, &host.document, "keydown", |host, event| {
        let key_event = event.dyn_ref::<KeyboardEvent>()?;
        Some(UiEvent::KeyDown {
            key: Key(key_event.key()),
            modifiers: Modifiers {
                shift: key_event.shift_key(),
                ctrl: key_event.ctrl_key(),
                alt: key_event.alt_key(),
                meta: key_event.meta_key(),
            },
            in_editable: is_editable(event.target().as_ref()),
            dialog_open: host.dialog_open(),
        })
    })?;

    let Some(dialog) = host.elements.search_dialog.clone() else {
        return Ok(());
    };
    if host.elements.search_input.is_none() {
        return Ok(());
    }
    if let Some(trigger) = host.elements.search_trigger.clone() {
        forward(host, &trigger, "click", |host, _| {
            Some(UiEvent::SearchTriggerClick { dialog_open: host.dialog_open() })
        })?;
    }
    if let Some(close) = host.elements.search_close.clone() {
        forward(host, &close, "click", |host, _| Some(UiEvent::SearchCloseClick { dialog_open: host.dialog_open() }))?;
    }
    forward(host, &dialog, "click", |host, event| {
        let mouse = event.dyn_ref::<MouseEvent>()?;
        // Keyboard activation of a button inside the dialog reports detail 0 and (0, 0).
        if mouse.detail() == 0 {
            return None;
        }
        let rect = host.elements.search_dialog.as_ref()?.get_bounding_client_rect();
        Some(UiEvent::SearchDialogClick {
            point: Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y())),
            bounds: Rect::new(rect.left(), rect.top(), rect.width(), rect.height()),
            dialog_open: host.dialog_open(),
        })
    })?;
    forward(host, &dialog, "cancel", |host, _| Some(UiEvent::SearchCancel { dialog_open: host.dialog_open() }))?;
    forward(host, &dialog, "animationend", |host, _| {
        Some(UiEvent::SearchAnimationEnd { dialog_open: host.dialog_open() })
    })?;
    for hint in &host.elements.search_hints {
        let label = hint.text_content().unwrap_or_default().trim().to_owned();
        forward(host, hint, "click", move |_, _| Some(UiEvent::SearchHintClick { label: label.clone() }))?;
    }
    Ok(())
}

fn wire_skip_link(host: &Rc<Host>) -> Result<(), DomError> {
    let (Some(link), Some(main)) = (host.elements.skip_link.clone(), host.elements.main_content.clone()) else {
        return Ok(());
    };
    forward(host, &link, "click", |host, _| {
        let main = host.elements.main_content.as_ref()?;
        let scroll_y = match host.window.scroll_y() {
            Ok(y) => y,
            Err(err) => {
                log::debug!("pagewire: scrollY unavailable: {}", DomError::from(err));
                0.0
            }
        };
        Some(UiEvent::SkipLinkClick {
            target_top: main.get_bounding_client_rect().top(),
            scroll_y,
            header_height: host.elements.header.as_ref().map_or(0.0, |h| h.get_bounding_client_rect().height()),
            focusable: main.has_attribute(TABINDEX),
        })
    })?;
    forward(host, &main, "blur", |_, _| Some(UiEvent::MainContentBlur))
}

fn is_editable(target: Option<&EventTarget>) -> bool {
    let Some(element) = target.and_then(|t| t.dyn_ref::<HtmlElement>()) else {
        return false;
    };
    element.is_content_editable() || matches!(element.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT")
}
