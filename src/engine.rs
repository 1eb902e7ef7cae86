use crate::audio::{self, AudioPlayer};
use crate::constants::*;
use crate::core::pointer::{CursorVariant, HoverCounter, ViewportPointer};
use crate::core::prefs::AudioMachine;
use crate::core::reveal::RevealTiming;
use crate::core::sections::SectionRegistry;
use crate::core::{EyeConfig, PreferenceState, Theme};
use crate::dom;
use crate::events::pointer::{wire_pointer, CursorElements, PointerTracker, PointerWiring};
use crate::events::scroll::{wire_scroll, ScrollWiring};
use crate::eyes::EyeWidget;
use crate::listener::{EventListener, TimeoutGuard};
use crate::overlay;
use crate::prefs;
use crate::reveal::{self, Entry, RevealGroupConfig, Reveals};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Everything the page shell hands the engine: the ordered section registry,
/// the control elements, and the reveal groups. Collected once at mount;
/// nothing here is re-queried afterwards.
pub struct ShellConfig {
    pub sections: Vec<(String, String, web::Element)>,
    pub nav_links: Vec<(String, web::Element)>,
    pub interactive: Vec<web::Element>,
    pub cursor: CursorElements,
    pub nav_pupils: Vec<web::HtmlElement>,
    pub footer_pupils: Vec<web::HtmlElement>,
    pub navbar: Option<web::HtmlElement>,
    pub hero: Option<web::HtmlElement>,
    pub theme_toggle: Option<web::Element>,
    pub audio_toggle: Option<web::Element>,
    pub back_to_top: Option<web::Element>,
    pub menu_toggle: Option<web::Element>,
    pub mobile_menu: Option<web::Element>,
    pub reveal_groups: Vec<RevealGroupConfig>,
}

impl ShellConfig {
    /// Gather the shell from the document. Sections carry `data-section`
    /// (document order is registry order); nav links point at them with
    /// `data-section-link`; reveal targets resolve their trigger as the
    /// nearest enclosing section.
    pub fn collect(document: &web::Document) -> Self {
        let sections: Vec<(String, String, web::Element)> =
            dom::query_all(document, "[data-section]")
                .into_iter()
                .filter_map(|el| {
                    let id = el.get_attribute("data-section")?;
                    let label = el.get_attribute("data-label").unwrap_or_else(|| id.clone());
                    Some((id, label, el))
                })
                .collect();
        let nav_links = dom::query_all(document, "[data-section-link]")
            .into_iter()
            .filter_map(|el| Some((el.get_attribute("data-section-link")?, el)))
            .collect();

        let mut reveal_groups = Vec::new();
        for el in dom::query_all_html(document, "[data-reveal]") {
            reveal_groups.push(RevealGroupConfig {
                name: "section",
                trigger: web::Element::from(el.clone()),
                targets: vec![el],
                threshold: SECTION_REVEAL_THRESHOLD,
                entry: Entry::Slide(SECTION_SHIFT_PX),
                timing: RevealTiming::uniform(SECTION_REVEAL_SECS),
            });
        }
        if let Some(group) = sibling_group(
            document,
            ".project-card",
            "cards",
            CARD_REVEAL_THRESHOLD,
            Entry::Slide(CARD_SHIFT_PX),
            RevealTiming {
                duration_secs: CARD_REVEAL_SECS,
                delay_secs: 0.0,
                stagger_secs: CARD_STAGGER_SECS,
            },
        ) {
            reveal_groups.push(group);
        }
        if let Some(group) = sibling_group(
            document,
            ".tech-icon",
            "tech",
            TECH_REVEAL_THRESHOLD,
            Entry::Scale(TECH_ENTRY_SCALE),
            RevealTiming {
                duration_secs: TECH_REVEAL_SECS,
                delay_secs: 0.0,
                stagger_secs: TECH_STAGGER_SECS,
            },
        ) {
            reveal_groups.push(group);
        }

        Self {
            sections,
            nav_links,
            interactive: dom::query_all(document, "a, button, [data-hover]"),
            cursor: CursorElements {
                inner: dom::query_all_html(document, ".cursor-inner").into_iter().next(),
                outer: dom::query_all_html(document, ".cursor-outer").into_iter().next(),
            },
            nav_pupils: dom::query_all_html(document, ".nav-pupil"),
            footer_pupils: dom::query_all_html(document, ".footer-pupil"),
            navbar: dom::html_by_id(document, "site-nav"),
            hero: dom::html_by_id(document, "hero"),
            theme_toggle: document.get_element_by_id("theme-toggle"),
            audio_toggle: document.get_element_by_id("audio-toggle"),
            back_to_top: document.get_element_by_id("back-to-top"),
            menu_toggle: document.get_element_by_id("menu-toggle"),
            mobile_menu: document.get_element_by_id("mobile-menu"),
            reveal_groups,
        }
    }
}

/// Staggered sibling group whose trigger is the section enclosing the first
/// target.
fn sibling_group(
    document: &web::Document,
    selector: &str,
    name: &'static str,
    threshold: f64,
    entry: Entry,
    timing: RevealTiming,
) -> Option<RevealGroupConfig> {
    let targets = dom::query_all_html(document, selector);
    let first = targets.first()?;
    let trigger = first
        .closest("[data-section]")
        .ok()
        .flatten()
        .unwrap_or_else(|| web::Element::from(first.clone()));
    Some(RevealGroupConfig {
        name,
        trigger,
        targets,
        threshold,
        entry,
        timing,
    })
}

/// The interaction engine. Owns every listener, observer and timer as an
/// RAII guard; dropping the engine is a complete teardown, after which no
/// scheduled frame, reveal or pending audio negotiation can mutate state.
pub struct Engine {
    document: web::Document,
    prefs: Rc<RefCell<PreferenceState>>,
    audio_machine: Rc<RefCell<AudioMachine>>,
    player: AudioPlayer,
    registry: Rc<SectionRegistry>,
    section_els: Rc<Vec<web::Element>>,
    active: Rc<Cell<usize>>,
    past_threshold: Rc<Cell<bool>>,
    hover: Rc<RefCell<HoverCounter>>,
    menu_open: Rc<Cell<bool>>,
    mobile_menu: Option<web::Element>,
    alive: Rc<Cell<bool>>,
    _pointer: PointerTracker,
    _scroll: EventListener,
    _reveals: Reveals,
    _controls: Vec<EventListener>,
    _overlay_timer: Option<TimeoutGuard>,
}

impl Engine {
    pub fn mount(window: &web::Window, document: &web::Document, shell: ShellConfig) -> Self {
        // Preferences load before the first themed paint, so the shell never
        // flashes the wrong theme.
        let loaded = prefs::load();
        prefs::apply_theme(document, loaded.theme);
        let prefs_state = Rc::new(RefCell::new(loaded));

        let registry = Rc::new(SectionRegistry::new(
            shell
                .sections
                .iter()
                .map(|(id, label, _)| (id.clone(), label.clone()))
                .collect(),
        ));
        let section_els: Rc<Vec<web::Element>> =
            Rc::new(shell.sections.into_iter().map(|(_, _, el)| el).collect());
        let nav_links: Rc<Vec<(usize, web::Element)>> = Rc::new(
            shell
                .nav_links
                .into_iter()
                .filter_map(|(id, el)| registry.order_of(&id).map(|order| (order, el)))
                .collect(),
        );
        let active = Rc::new(Cell::new(0));
        let past_threshold = Rc::new(Cell::new(false));
        let alive = Rc::new(Cell::new(true));
        let hover = Rc::new(RefCell::new(HoverCounter::default()));
        let pointer = Rc::new(RefCell::new(ViewportPointer::default()));
        let menu_open = Rc::new(Cell::new(false));

        let tracker = wire_pointer(
            window,
            PointerWiring {
                pointer,
                hover: hover.clone(),
                widgets: Rc::new(RefCell::new(Vec::new())),
                cursor: shell.cursor.clone(),
                alive: alive.clone(),
            },
            &shell.interactive,
        );
        if !shell.nav_pupils.is_empty() {
            tracker.register_widget(EyeWidget::new(shell.nav_pupils, EyeConfig::rotate()));
        }
        if !shell.footer_pupils.is_empty() {
            tracker.register_widget(EyeWidget::new(shell.footer_pupils, EyeConfig::translate()));
        }

        let scroll = wire_scroll(
            window,
            ScrollWiring {
                registry: registry.clone(),
                section_els: section_els.clone(),
                nav_links: nav_links.clone(),
                back_to_top: shell.back_to_top.clone(),
                active: active.clone(),
                past_threshold: past_threshold.clone(),
            },
        );

        // Above-the-fold entrances play on this mount pass; everything else
        // waits for its viewport trigger.
        if let Some(navbar) = &shell.navbar {
            reveal::play_entrance(
                navbar,
                Entry::Slide(NAVBAR_SHIFT_PX),
                &RevealTiming::uniform(NAVBAR_ENTER_SECS),
            );
        }
        if let Some(hero) = &shell.hero {
            reveal::play_entrance(
                hero,
                Entry::Slide(HERO_SHIFT_PX),
                &RevealTiming {
                    duration_secs: HERO_ENTER_SECS,
                    delay_secs: HERO_ENTER_DELAY_SECS,
                    stagger_secs: 0.0,
                },
            );
        }
        let reveals = Reveals::mount(shell.reveal_groups);

        let audio_machine = Rc::new(RefCell::new(AudioMachine::default()));
        let player = AudioPlayer::acquire(document, "ambient-audio");
        if prefs_state.borrow().audio_enabled {
            // A persisted "on" still has to renegotiate with the browser; a
            // denial rolls the stored flag back to off.
            audio::request_start(&player, &audio_machine);
        }

        let mut controls = Vec::new();
        if let Some(el) = &shell.theme_toggle {
            let document = document.clone();
            let prefs_state = prefs_state.clone();
            controls.push(EventListener::new(el.as_ref(), "click", move |_| {
                toggle_theme_impl(&document, &prefs_state);
            }));
        }
        if let Some(el) = &shell.audio_toggle {
            let player = player.clone();
            let machine = audio_machine.clone();
            controls.push(EventListener::new(el.as_ref(), "click", move |_| {
                toggle_audio_impl(&player, &machine);
            }));
        }
        if let Some(el) = &shell.back_to_top {
            controls.push(EventListener::new(el.as_ref(), "click", move |_| {
                dom::scroll_to_top();
            }));
        }
        if let Some(el) = &shell.menu_toggle {
            let menu_open = menu_open.clone();
            let mobile_menu = shell.mobile_menu.clone();
            controls.push(EventListener::new(el.as_ref(), "click", move |_| {
                set_menu(&menu_open, &mobile_menu, !menu_open.get());
            }));
        }
        for (order, link) in nav_links.iter() {
            let target = section_els.get(*order).cloned();
            let menu_open = menu_open.clone();
            let mobile_menu = shell.mobile_menu.clone();
            controls.push(EventListener::new(link.as_ref(), "click", move |_| {
                if let Some(target) = &target {
                    dom::scroll_into_view(target);
                }
                set_menu(&menu_open, &mobile_menu, false);
            }));
        }

        overlay::show(document);
        let overlay_timer = overlay::dismiss_after(document, LOADING_DISMISS_MS);

        Self {
            document: document.clone(),
            prefs: prefs_state,
            audio_machine,
            player,
            registry,
            section_els,
            active,
            past_threshold,
            hover,
            menu_open,
            mobile_menu: shell.mobile_menu,
            alive,
            _pointer: tracker,
            _scroll: scroll,
            _reveals: reveals,
            _controls: controls,
            _overlay_timer: overlay_timer,
        }
    }

    // ---------------- State exposed to the page shell ----------------

    pub fn active_section_id(&self) -> Option<String> {
        self.registry.id_at(self.active.get()).map(str::to_owned)
    }

    pub fn past_scroll_threshold(&self) -> bool {
        self.past_threshold.get()
    }

    pub fn cursor_variant(&self) -> CursorVariant {
        self.hover.borrow().variant()
    }

    pub fn theme(&self) -> Theme {
        self.prefs.borrow().theme
    }

    pub fn audio_enabled(&self) -> bool {
        self.audio_machine.borrow().is_on()
    }

    // ---------------- Commands ----------------

    pub fn toggle_theme(&self) {
        toggle_theme_impl(&self.document, &self.prefs);
    }

    pub fn toggle_audio(&self) {
        toggle_audio_impl(&self.player, &self.audio_machine);
    }

    /// Smooth-scroll to a registered section. An unknown id is a no-op.
    pub fn scroll_to_section(&self, id: &str) {
        match self.registry.order_of(id) {
            Some(order) => {
                if let Some(el) = self.section_els.get(order) {
                    dom::scroll_into_view(el);
                }
                set_menu(&self.menu_open, &self.mobile_menu, false);
            }
            None => log::info!("[nav] unknown section '{id}', ignoring"),
        }
    }

    pub fn scroll_to_top(&self) {
        dom::scroll_to_top();
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        // Scheduled frames check this flag; the listener guards unregister
        // themselves as the fields drop.
        self.alive.set(false);
        // Invalidate any in-flight audio negotiation.
        self.audio_machine.borrow_mut().stop();
    }
}

fn toggle_theme_impl(document: &web::Document, prefs_state: &Rc<RefCell<PreferenceState>>) {
    let next = {
        let mut p = prefs_state.borrow_mut();
        p.theme = p.theme.toggled();
        p.theme
    };
    prefs::apply_theme(document, next);
    prefs::persist_theme(next);
    log::info!("[theme] switched to {}", next.as_str());
}

fn toggle_audio_impl(player: &AudioPlayer, machine: &Rc<RefCell<AudioMachine>>) {
    let turn_off = {
        let m = machine.borrow();
        m.is_on() || m.is_pending()
    };
    if turn_off {
        audio::stop(player, machine);
    } else {
        audio::request_start(player, machine);
    }
}

fn set_menu(menu_open: &Rc<Cell<bool>>, mobile_menu: &Option<web::Element>, open: bool) {
    menu_open.set(open);
    if let Some(el) = mobile_menu {
        let cl = el.class_list();
        if open {
            _ = cl.add_1("open");
        } else {
            _ = cl.remove_1("open");
        }
    }
}
