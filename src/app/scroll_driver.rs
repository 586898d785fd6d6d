//! Browser binding for the scroll-effects engine.
//!
//! Wires the platform-free [`ScrollController`] to the page: a scroll
//! listener feeds raw samples, a requestAnimationFrame loop drives the
//! smoothing frames, intersection observers cover active-link tracking and
//! card reveals, and a debounced resize handler rebuilds the page model and
//! band elements wholesale. Everything is owned by an RAII guard so the
//! listeners, observers, and generated band nodes are torn down when the
//! page unmounts.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use std::cell::{Cell, RefCell};
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
use crate::scroll::{
    observer_root_margin, ControllerConfig, EffectSink, FrameOutcome, NavbarState, OverlayEffect,
    PageMetrics, PageModel, Rect, ScrollController, SectionDescriptor, TrackerStrategy,
    VisibilityEntry, ZParity,
};

/// Quiet period after the last resize notification before the band set and
/// page model are rebuilt.
#[cfg(target_arch = "wasm32")]
const RESIZE_DEBOUNCE_MS: i32 = 150;

/// Install the consolidated scroll handler once the page is mounted.
/// No-op during server rendering; on the client the guard persists across
/// renders and tears everything down on unmount.
pub fn use_scroll_effects() {
    #[cfg(target_arch = "wasm32")]
    {
        let guard: Rc<RefCell<Option<ScrollEffectsGuard>>> = use_hook(|| Rc::new(RefCell::new(None)));

        let guard_clone = guard.clone();
        use_effect(move || {
            if guard_clone.borrow().is_some() {
                return;
            }
            match ScrollEffectsGuard::install() {
                Some(installed) => {
                    *guard_clone.borrow_mut() = Some(installed);
                    tracing::info!("portfolio client wired");
                }
                None => tracing::warn!("scroll effects unavailable: no window/document"),
            }
        });
    }
}

/// Smooth-scroll the section with `id` into view. Used by nav links and the
/// hero call-to-action; no-op outside the browser.
pub fn scroll_to_section(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(section) = document.get_element_by_id(id) {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}

// ============ WASM-only implementation ============

/// Applies engine output to the cached page nodes. Resolved once at install
/// and re-resolved wholesale after a resize rebuild; missing nodes make the
/// corresponding effect a silent no-op.
#[cfg(target_arch = "wasm32")]
struct DomEffectSink {
    navbar: Option<web_sys::HtmlElement>,
    parallax_target: Option<web_sys::HtmlElement>,
    following: Option<web_sys::HtmlElement>,
    links: Vec<web_sys::HtmlElement>,
    /// Band nodes indexed by section; `None` for the hero slot.
    bands: Rc<RefCell<Vec<Option<web_sys::HtmlElement>>>>,
}

#[cfg(target_arch = "wasm32")]
impl DomEffectSink {
    fn resolve(
        document: &web_sys::Document,
        sections: &[web_sys::Element],
        hero: Option<usize>,
        bands: Rc<RefCell<Vec<Option<web_sys::HtmlElement>>>>,
    ) -> Self {
        let navbar = document
            .get_element_by_id("navbar")
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        let parallax_target = document
            .query_selector(".hero-content")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        let following = hero
            .and_then(|index| sections.get(index + 1))
            .and_then(|el| el.clone().dyn_into::<web_sys::HtmlElement>().ok());
        let links = query_all(document, "a.nav-link");
        Self {
            navbar,
            parallax_target,
            following,
            links,
            bands,
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl EffectSink for DomEffectSink {
    fn apply_navbar(&mut self, state: NavbarState) {
        if let Some(navbar) = &self.navbar {
            let _ = navbar
                .class_list()
                .toggle_with_force("elevated", state == NavbarState::Elevated);
        }
    }

    fn apply_parallax(&mut self, hero_offset: f64) {
        if let Some(target) = &self.parallax_target {
            let _ = target.style().set_property(
                "transform",
                &format!("translate3d(0, {hero_offset:.2}px, 0)"),
            );
        }
    }

    fn apply_overlay(&mut self, effect: OverlayEffect) {
        if let Some(following) = &self.following {
            // The offset is continuous in the scroll position, so it is
            // written every frame; removing it while engaged would make the
            // section jump. Only the marker class follows the activation
            // window.
            let _ = following
                .style()
                .set_property("--overlay-offset", &format!("{:.2}px", effect.translate));
            let _ = following
                .class_list()
                .toggle_with_force("overlay-active", effect.active);
        }
    }

    fn apply_active_link(&mut self, id: Option<&str>) {
        for link in &self.links {
            let matches = match (id, link.get_attribute("href")) {
                (Some(id), Some(href)) => href.strip_prefix('#') == Some(id),
                _ => false,
            };
            let _ = link.class_list().toggle_with_force("active", matches);
        }
    }

    fn apply_band(&mut self, section: usize, opacity: f64, drift: f64) {
        let bands = self.bands.borrow();
        if let Some(Some(band)) = bands.get(section) {
            let _ = band
                .style()
                .set_property("opacity", &format!("{opacity:.3}"));
            let _ = band
                .style()
                .set_property("transform", &format!("translate3d(0, {drift:.2}px, 0)"));
        }
    }
}

/// An intersection observer together with the closure backing its callback.
#[cfg(target_arch = "wasm32")]
struct ObserverHandle {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Owns every piece of the wiring; dropping it restores the page.
#[cfg(target_arch = "wasm32")]
struct ScrollEffectsGuard {
    window: web_sys::Window,
    controller: Rc<RefCell<ScrollController>>,
    onscroll: Closure<dyn FnMut()>,
    onresize: Closure<dyn FnMut()>,
    raf_id: Rc<Cell<Option<i32>>>,
    _raf_tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    resize_timer: Rc<Cell<Option<i32>>>,
    _resize_rebuild: Closure<dyn FnMut()>,
    bands: Rc<RefCell<Vec<Option<web_sys::HtmlElement>>>>,
    _section_observer: Option<ObserverHandle>,
    _reveal_observer: Option<ObserverHandle>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for ScrollEffectsGuard {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.onscroll.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.onresize.as_ref().unchecked_ref());
        if let Some(id) = self.raf_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        if let Some(id) = self.resize_timer.take() {
            self.window.clear_timeout_with_handle(id);
        }
        clear_band_elements(&mut self.bands.borrow_mut());
        self.controller.borrow_mut().stop();
    }
}

#[cfg(target_arch = "wasm32")]
impl ScrollEffectsGuard {
    fn install() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        let reduced_motion = window
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false);
        let observer_available =
            js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false);

        let section_elements = query_sections(&document);
        let hero = hero_index(&section_elements);

        let config = ControllerConfig::resolve(reduced_motion, observer_available);
        let strategy = config.strategy;
        let model = build_page_model(&window, &document, &section_elements, hero);
        let nav_height = model.metrics().nav_height;

        let controller = Rc::new(RefCell::new(ScrollController::new(config, model)));
        controller.borrow_mut().start();

        let bands = Rc::new(RefCell::new(build_band_elements(
            &window,
            &document,
            &section_elements,
            hero,
        )));
        let sink = Rc::new(RefCell::new(DomEffectSink::resolve(
            &document,
            &section_elements,
            hero,
            bands.clone(),
        )));

        // Frame loop: one engine frame per animation callback, rescheduling
        // itself only while the smoothing gap is open.
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let raf_tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        {
            let controller = controller.clone();
            let sink = sink.clone();
            let window = window.clone();
            let raf_id_inner = raf_id.clone();
            let raf_tick_inner = raf_tick.clone();
            *raf_tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                raf_id_inner.set(None);
                let outcome = controller.borrow_mut().on_frame(&mut *sink.borrow_mut());
                if outcome == FrameOutcome::Continue {
                    request_frame(&window, &raf_tick_inner, &raf_id_inner);
                }
            }) as Box<dyn FnMut()>));
        }

        // Scroll sampler: record the offset, schedule a frame on the
        // idle -> running edge. Reads no layout-dependent properties.
        let onscroll = {
            let controller = controller.clone();
            let window = window.clone();
            let raf_tick = raf_tick.clone();
            let raf_id = raf_id.clone();
            Closure::wrap(Box::new(move || {
                let offset = window.scroll_y().unwrap_or(0.0);
                if controller.borrow_mut().on_scroll(offset) {
                    request_frame(&window, &raf_tick, &raf_id);
                }
            }) as Box<dyn FnMut()>)
        };
        window
            .add_event_listener_with_callback("scroll", onscroll.as_ref().unchecked_ref())
            .ok()?;

        // Debounced resize rebuild: bands and the page model are replaced
        // wholesale once the viewport settles.
        let resize_timer: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let resize_rebuild = {
            let controller = controller.clone();
            let sink = sink.clone();
            let bands = bands.clone();
            let window = window.clone();
            let document = document.clone();
            let raf_tick = raf_tick.clone();
            let raf_id = raf_id.clone();
            let resize_timer = resize_timer.clone();
            Closure::wrap(Box::new(move || {
                resize_timer.set(None);
                let section_elements = query_sections(&document);
                let hero = hero_index(&section_elements);
                {
                    let mut slots = bands.borrow_mut();
                    clear_band_elements(&mut slots);
                    *slots = build_band_elements(&window, &document, &section_elements, hero);
                }
                controller
                    .borrow_mut()
                    .rebuild(build_page_model(&window, &document, &section_elements, hero));
                *sink.borrow_mut() =
                    DomEffectSink::resolve(&document, &section_elements, hero, bands.clone());
                let offset = window.scroll_y().unwrap_or(0.0);
                if controller.borrow_mut().on_scroll(offset) {
                    request_frame(&window, &raf_tick, &raf_id);
                }
            }) as Box<dyn FnMut()>)
        };
        let onresize = {
            let window = window.clone();
            let resize_timer = resize_timer.clone();
            let rebuild: js_sys::Function = resize_rebuild.as_ref().unchecked_ref::<js_sys::Function>().clone();
            Closure::wrap(Box::new(move || {
                // a pending rebuild is superseded, not queued
                if let Some(id) = resize_timer.take() {
                    window.clear_timeout_with_handle(id);
                }
                if let Ok(id) = window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(&rebuild, RESIZE_DEBOUNCE_MS)
                {
                    resize_timer.set(Some(id));
                }
            }) as Box<dyn FnMut()>)
        };
        window
            .add_event_listener_with_callback("resize", onresize.as_ref().unchecked_ref())
            .ok()?;

        let section_observer = if strategy == TrackerStrategy::Observer {
            install_section_observer(&controller, &sink, &section_elements, nav_height)
        } else {
            None
        };
        let reveal_observer = if observer_available {
            install_reveal_observer(&document)
        } else {
            reveal_all_cards(&document);
            None
        };

        // Initial frame so the page reflects the load-time scroll position.
        let offset = window.scroll_y().unwrap_or(0.0);
        if controller.borrow_mut().on_scroll(offset) {
            request_frame(&window, &raf_tick, &raf_id);
        }

        Some(Self {
            window,
            controller,
            onscroll,
            onresize,
            raf_id,
            _raf_tick: raf_tick,
            resize_timer,
            _resize_rebuild: resize_rebuild,
            bands,
            _section_observer: section_observer,
            _reveal_observer: reveal_observer,
        })
    }
}

#[cfg(target_arch = "wasm32")]
fn request_frame(
    window: &web_sys::Window,
    tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    raf_id: &Rc<Cell<Option<i32>>>,
) {
    if raf_id.get().is_some() {
        return;
    }
    let tick = tick.borrow();
    if let Some(callback) = tick.as_ref() {
        if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            raf_id.set(Some(id));
        }
    }
}

/// Every anchor section in document order.
#[cfg(target_arch = "wasm32")]
fn query_sections(document: &web_sys::Document) -> Vec<web_sys::Element> {
    let Ok(nodes) = document.query_selector_all("main section[id]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn hero_index(sections: &[web_sys::Element]) -> Option<usize> {
    sections
        .iter()
        .position(|section| section.class_list().contains("hero"))
}

#[cfg(target_arch = "wasm32")]
fn query_all(document: &web_sys::Document, selector: &str) -> Vec<web_sys::HtmlElement> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}

/// Capture the page into the engine's model: live metrics plus one bounds
/// provider per section. Providers yield `None` once a node leaves the tree.
#[cfg(target_arch = "wasm32")]
fn build_page_model(
    window: &web_sys::Window,
    document: &web_sys::Document,
    sections: &[web_sys::Element],
    hero: Option<usize>,
) -> PageModel {
    let metrics = {
        let window = window.clone();
        let document = document.clone();
        Box::new(move || {
            let viewport_height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .unwrap_or(0.0);
            let nav_height = document
                .get_element_by_id("navbar")
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
                .map(|el| f64::from(el.offset_height()))
                .unwrap_or(0.0);
            let scroll_height = document
                .document_element()
                .map(|root| (f64::from(root.scroll_height()) - viewport_height).max(0.0))
                .unwrap_or(0.0);
            PageMetrics {
                viewport_height,
                nav_height,
                scroll_height,
            }
        })
    };

    let descriptors = sections
        .iter()
        .map(|section| {
            let id = section.id();
            let element = section.clone();
            SectionDescriptor::new(
                id,
                Box::new(move || {
                    if !element.is_connected() {
                        return None;
                    }
                    let rect = element.get_bounding_client_rect();
                    Some(Rect::new(rect.top(), rect.height()))
                }),
            )
        })
        .collect();

    PageModel {
        metrics,
        hero,
        sections: descriptors,
    }
}

/// Create one fixed decorative band per content section, colored like the
/// section it shadows. Returned slots line up with section indices.
#[cfg(target_arch = "wasm32")]
fn build_band_elements(
    window: &web_sys::Window,
    document: &web_sys::Document,
    sections: &[web_sys::Element],
    hero: Option<usize>,
) -> Vec<Option<web_sys::HtmlElement>> {
    let Some(body) = document.body() else {
        return vec![None; sections.len()];
    };
    sections
        .iter()
        .enumerate()
        .map(|(index, section)| {
            if Some(index) == hero {
                return None;
            }
            let band = document
                .create_element("div")
                .ok()?
                .dyn_into::<web_sys::HtmlElement>()
                .ok()?;
            let parity = match ZParity::from_index(index) {
                ZParity::Even => "band-even",
                ZParity::Odd => "band-odd",
            };
            band.set_class_name(&format!("section-band {parity}"));
            if let Some(color) = section_band_color(window, section) {
                let _ = band.style().set_property("background-color", &color);
            }
            let _ = band.style().set_property("opacity", "0");
            body.append_child(&band).ok()?;
            Some(band)
        })
        .collect()
}

/// A section advertises its band color via the `--section-bg` custom
/// property, falling back to its computed background color.
#[cfg(target_arch = "wasm32")]
fn section_band_color(window: &web_sys::Window, section: &web_sys::Element) -> Option<String> {
    let style = window.get_computed_style(section).ok().flatten()?;
    let custom = style.get_property_value("--section-bg").ok()?;
    if !custom.trim().is_empty() {
        return Some(custom.trim().to_string());
    }
    let computed = style.get_property_value("background-color").ok()?;
    if computed.is_empty() {
        None
    } else {
        Some(computed)
    }
}

#[cfg(target_arch = "wasm32")]
fn clear_band_elements(bands: &mut Vec<Option<web_sys::HtmlElement>>) {
    for slot in bands.drain(..) {
        if let Some(band) = slot {
            band.remove();
        }
    }
}

/// Primary active-link strategy: observe every section inside the tracked
/// band and fold callbacks through the engine's reducer.
#[cfg(target_arch = "wasm32")]
fn install_section_observer(
    controller: &Rc<RefCell<ScrollController>>,
    sink: &Rc<RefCell<DomEffectSink>>,
    sections: &[web_sys::Element],
    nav_height: f64,
) -> Option<ObserverHandle> {
    let callback = {
        let controller = controller.clone();
        let sink = sink.clone();
        Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                let batch: Vec<VisibilityEntry> = entries
                    .iter()
                    .filter_map(|value| value.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                    .map(|entry| VisibilityEntry {
                        id: entry.target().id(),
                        ratio: entry.intersection_ratio(),
                        intersecting: entry.is_intersecting(),
                    })
                    .collect();
                controller
                    .borrow_mut()
                    .on_observer_update(&batch, &mut *sink.borrow_mut());
            },
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>)
    };

    let options = web_sys::IntersectionObserverInit::new();
    options.set_root_margin(&observer_root_margin(nav_height));
    let thresholds = js_sys::Array::new();
    for step in [0.0, 0.25, 0.5, 0.75, 1.0] {
        thresholds.push(&JsValue::from_f64(step));
    }
    options.set_threshold(&thresholds.into());

    let observer = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )
    .ok()?;
    for section in sections {
        observer.observe(section);
    }
    Some(ObserverHandle {
        observer,
        _callback: callback,
    })
}

/// Reveal-on-scroll for project cards: first intersection adds the animation
/// class, then the card is dropped from observation.
#[cfg(target_arch = "wasm32")]
fn install_reveal_observer(document: &web_sys::Document) -> Option<ObserverHandle> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for value in entries.iter() {
                let Ok(entry) = value.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("revealed");
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_root_margin("0px 0px -100px 0px");
    options.set_threshold(&JsValue::from_f64(0.1));

    let observer = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )
    .ok()?;
    let cards = query_all(document, ".project-card");
    if cards.is_empty() {
        return None;
    }
    for card in &cards {
        observer.observe(card);
    }
    Some(ObserverHandle {
        observer,
        _callback: callback,
    })
}

/// Without intersection observation the cards must not stay hidden.
#[cfg(target_arch = "wasm32")]
fn reveal_all_cards(document: &web_sys::Document) {
    for card in query_all(document, ".project-card") {
        let _ = card.class_list().add_1("revealed");
    }
}
