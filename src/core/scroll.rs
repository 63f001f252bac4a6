use super::constants::*;
use super::nav::anchor_target;
use super::port::{FrameScheduler, PresentationPort};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

/// Scroll thresholds and parallax tuning for one coordinator.
#[derive(Clone, Debug)]
pub struct ScrollConfig {
    pub back_to_top_after: f64,
    pub navbar_scrolled_after: f64,
    pub section_header_offset: f64,
    pub parallax_scale: f64,
    pub parallax_factor: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            back_to_top_after: BACK_TO_TOP_SHOW_AFTER,
            navbar_scrolled_after: NAVBAR_SCROLLED_AFTER,
            section_header_offset: SECTION_HEADER_OFFSET,
            parallax_scale: PARALLAX_SCALE,
            parallax_factor: PARALLAX_FACTOR,
        }
    }
}

/// Scroll position read once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSnapshot {
    pub offset: f64,
}

impl ScrollSnapshot {
    pub fn read<P: PresentationPort>(port: &P) -> Self {
        Self {
            offset: port.scroll_offset(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionEntry {
    pub id: String,
    pub top_threshold: f64,
}

/// A navigation control and the section id its `#fragment` points at.
#[derive(Clone, Debug)]
pub struct NavLinkBinding<E> {
    pub element: E,
    pub target_id: Option<String>,
}

impl<E> NavLinkBinding<E> {
    pub fn new(element: E, href: Option<&str>) -> Self {
        Self {
            element,
            target_id: href.and_then(anchor_target).map(str::to_owned),
        }
    }

    #[inline]
    pub fn is_active(&self, active_id: Option<&str>) -> bool {
        matches!((self.target_id.as_deref(), active_id), (Some(t), Some(a)) if t == a)
    }
}

/// Hero image transform: fixed zoom plus a scroll-proportional drift.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxTransform {
    pub scale: f64,
    pub translate_y: f64,
}

impl ParallaxTransform {
    pub fn at(offset: f64, config: &ScrollConfig) -> Self {
        Self {
            scale: config.parallax_scale,
            translate_y: offset * config.parallax_factor,
        }
    }

    pub fn css(&self) -> String {
        format!("scale({}) translateY({}px)", self.scale, self.translate_y)
    }
}

#[inline]
pub fn back_to_top_visible(offset: f64, config: &ScrollConfig) -> bool {
    offset > config.back_to_top_after
}

#[inline]
pub fn navbar_scrolled(offset: f64, config: &ScrollConfig) -> bool {
    offset > config.navbar_scrolled_after
}

/// Id of the last section (in document order) whose threshold has been
/// scrolled past, or `None` while the offset is above every section.
pub fn active_section(sections: &[SectionEntry], offset: f64) -> Option<&str> {
    let mut current = None;
    for section in sections {
        if offset >= section.top_threshold {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// Elements the coordinator updates; any of them may be missing.
pub struct ScrollTargets<E> {
    pub back_to_top: Option<E>,
    pub navbar: Option<E>,
    pub hero_image: Option<E>,
    pub sections: Vec<E>,
    pub nav_links: Vec<NavLinkBinding<E>>,
}

impl<E> Default for ScrollTargets<E> {
    fn default() -> Self {
        Self {
            back_to_top: None,
            navbar: None,
            hero_image: None,
            sections: Vec::new(),
            nav_links: Vec::new(),
        }
    }
}

impl<E: Clone> ScrollTargets<E> {
    /// Resolve the standard page targets through the port.
    pub fn query<P>(port: &P, back_to_top: Option<E>) -> Self
    where
        P: PresentationPort<Element = E>,
    {
        let nav_links = port
            .query_all(NAV_LINK_SELECTOR)
            .into_iter()
            .map(|el| {
                let href = port.attribute(&el, "href");
                NavLinkBinding::new(el, href.as_deref())
            })
            .collect();
        Self {
            back_to_top,
            navbar: port.query(NAVBAR_SELECTOR),
            hero_image: port.query(HERO_IMAGE_SELECTOR),
            sections: port.query_all(SECTION_SELECTOR),
            nav_links,
        }
    }
}

/// Coalesces scroll signals into one update pass per rendered frame.
pub struct ScrollCoordinator<P: PresentationPort> {
    port: P,
    targets: ScrollTargets<P::Element>,
    config: ScrollConfig,
    ticking: bool,
    frames_run: u64,
    active: Option<String>,
}

impl<P: PresentationPort> ScrollCoordinator<P> {
    /// Builds the coordinator and applies the resting hero transform so the
    /// zoom is visible before the first scroll.
    pub fn new(port: P, targets: ScrollTargets<P::Element>, config: ScrollConfig) -> Self {
        if let Some(hero) = &targets.hero_image {
            let rest = ParallaxTransform::at(0.0, &config);
            port.set_style(hero, "transform", &rest.css());
        }
        log::debug!(
            "[scroll] coordinator: sections={} links={} navbar={} hero={} back_to_top={}",
            targets.sections.len(),
            targets.nav_links.len(),
            targets.navbar.is_some(),
            targets.hero_image.is_some(),
            targets.back_to_top.is_some()
        );
        Self {
            port,
            targets,
            config,
            ticking: false,
            frames_run: 0,
            active: None,
        }
    }

    /// Scroll signal gate. Returns `true` when the caller must schedule a
    /// frame; `false` when one is already pending and the signal coalesces.
    pub fn request_update(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    /// Frame callback body: one offset read, four updates, then release the
    /// gate.
    pub fn run_frame(&mut self) -> ScrollSnapshot {
        let snapshot = ScrollSnapshot::read(&self.port);
        self.apply(snapshot);
        self.frames_run += 1;
        self.ticking = false;
        snapshot
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    fn apply(&mut self, snapshot: ScrollSnapshot) {
        let offset = snapshot.offset;
        let port = &self.port;

        if let Some(btn) = &self.targets.back_to_top {
            let display = if back_to_top_visible(offset, &self.config) {
                "block"
            } else {
                "none"
            };
            port.set_style(btn, "display", display);
        }

        if let Some(navbar) = &self.targets.navbar {
            port.set_class(navbar, SCROLLED_CLASS, navbar_scrolled(offset, &self.config));
        }

        let entries: SmallVec<[SectionEntry; 8]> = self
            .targets
            .sections
            .iter()
            .map(|sec| SectionEntry {
                id: port.element_id(sec),
                top_threshold: port.offset_top(sec) - self.config.section_header_offset,
            })
            .collect();
        let active = active_section(&entries, offset);
        for link in &self.targets.nav_links {
            port.set_class(&link.element, ACTIVE_CLASS, link.is_active(active));
        }
        if active != self.active.as_deref() {
            log::debug!("[scroll] active section {:?} -> {:?}", self.active, active);
            self.active = active.map(str::to_owned);
        }

        if let Some(hero) = &self.targets.hero_image {
            let transform = ParallaxTransform::at(offset, &self.config);
            port.set_style(hero, "transform", &transform.css());
        }
    }
}

/// Scroll listener body: passes the gate at most once per pending frame and
/// schedules the coordinated update.
pub fn on_scroll_signal<P, S>(coordinator: &Rc<RefCell<ScrollCoordinator<P>>>, frames: &S)
where
    P: PresentationPort + 'static,
    S: FrameScheduler,
{
    if !coordinator.borrow_mut().request_update() {
        return;
    }
    let coordinator = coordinator.clone();
    frames.request_frame(Box::new(move || {
        coordinator.borrow_mut().run_frame();
    }));
}

/// Load-time pass: schedule one coordinated frame before any scroll signal so
/// every derived state matches the initial offset.
pub fn start<P, S>(coordinator: &Rc<RefCell<ScrollCoordinator<P>>>, frames: &S)
where
    P: PresentationPort + 'static,
    S: FrameScheduler,
{
    on_scroll_signal(coordinator, frames);
}
