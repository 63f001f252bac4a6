// Recording doubles for the presentation port and schedulers.
//
// Each test binary declares `mod core` (the pure-Rust effect logic) before
// `mod common`, so `crate::core` resolves in every binary.

#![allow(dead_code)]
use crate::core::{DelayScheduler, FrameScheduler, PresentationPort};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct El(pub usize);

#[derive(Default, Debug)]
pub struct Node {
    pub id: String,
    pub offset_top: f64,
    pub attrs: HashMap<String, String>,
    pub classes: BTreeSet<String>,
    pub styles: BTreeMap<String, String>,
    pub text: String,
    /// Every text written, in order.
    pub text_log: Vec<String>,
    /// Every style write, in order.
    pub style_log: Vec<(String, String)>,
}

#[derive(Default)]
pub struct FakeDom {
    pub nodes: Vec<Node>,
    pub selectors: HashMap<String, Vec<El>>,
    pub scroll: Cell<f64>,
    pub scroll_reads: Cell<usize>,
}

/// Presentation port that mutates an in-memory document.
#[derive(Clone, Default)]
pub struct FakePort(pub Rc<RefCell<FakeDom>>);

impl FakePort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, node: Node) -> El {
        let mut dom = self.0.borrow_mut();
        dom.nodes.push(node);
        El(dom.nodes.len() - 1)
    }

    pub fn add_matching(&self, selector: &str, node: Node) -> El {
        let el = self.add(node);
        self.0
            .borrow_mut()
            .selectors
            .entry(selector.to_string())
            .or_default()
            .push(el);
        el
    }

    pub fn set_scroll(&self, offset: f64) {
        self.0.borrow().scroll.set(offset);
    }

    pub fn scroll_reads(&self) -> usize {
        self.0.borrow().scroll_reads.get()
    }

    pub fn has_class(&self, el: El, class: &str) -> bool {
        self.0.borrow().nodes[el.0].classes.contains(class)
    }

    pub fn style(&self, el: El, property: &str) -> Option<String> {
        self.0.borrow().nodes[el.0].styles.get(property).cloned()
    }

    pub fn style_writes(&self, el: El) -> usize {
        self.0.borrow().nodes[el.0].style_log.len()
    }

    pub fn text(&self, el: El) -> String {
        self.0.borrow().nodes[el.0].text.clone()
    }

    pub fn text_log(&self, el: El) -> Vec<String> {
        self.0.borrow().nodes[el.0].text_log.clone()
    }
}

impl PresentationPort for FakePort {
    type Element = El;

    fn query(&self, selector: &str) -> Option<El> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<El> {
        self.0
            .borrow()
            .selectors
            .get(selector)
            .cloned()
            .unwrap_or_default()
    }

    fn scroll_offset(&self) -> f64 {
        let dom = self.0.borrow();
        dom.scroll_reads.set(dom.scroll_reads.get() + 1);
        dom.scroll.get()
    }

    fn offset_top(&self, el: &El) -> f64 {
        self.0.borrow().nodes[el.0].offset_top
    }

    fn element_id(&self, el: &El) -> String {
        self.0.borrow().nodes[el.0].id.clone()
    }

    fn attribute(&self, el: &El, name: &str) -> Option<String> {
        self.0.borrow().nodes[el.0].attrs.get(name).cloned()
    }

    fn text(&self, el: &El) -> String {
        self.0.borrow().nodes[el.0].text.clone()
    }

    fn set_class(&self, el: &El, class: &str, on: bool) {
        let mut dom = self.0.borrow_mut();
        let classes = &mut dom.nodes[el.0].classes;
        if on {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn set_style(&self, el: &El, property: &str, value: &str) {
        let mut dom = self.0.borrow_mut();
        let node = &mut dom.nodes[el.0];
        node.styles.insert(property.to_string(), value.to_string());
        node.style_log.push((property.to_string(), value.to_string()));
    }

    fn set_text(&self, el: &El, text: &str) {
        let mut dom = self.0.borrow_mut();
        let node = &mut dom.nodes[el.0];
        node.text = text.to_string();
        node.text_log.push(text.to_string());
    }
}

pub fn section(id: &str, offset_top: f64) -> Node {
    Node {
        id: id.to_string(),
        offset_top,
        ..Node::default()
    }
}

pub fn with_attr(name: &str, value: &str) -> Node {
    let mut node = Node::default();
    node.attrs.insert(name.to_string(), value.to_string());
    node
}

/// Frame callbacks queue up until the test flushes them, one frame at a time.
#[derive(Clone, Default)]
pub struct ManualFrames {
    queue: Rc<RefCell<Vec<Box<dyn FnOnce()>>>>,
    requested: Rc<Cell<usize>>,
}

impl ManualFrames {
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn requested(&self) -> usize {
        self.requested.get()
    }

    /// Run every callback queued before this frame; callbacks they request
    /// land in the next frame.
    pub fn run_frame(&self) -> usize {
        let due: Vec<_> = self.queue.borrow_mut().drain(..).collect();
        let n = due.len();
        for cb in due {
            cb();
        }
        n
    }

    /// Run frames until nothing is pending; returns the number of frames.
    pub fn run_until_idle(&self, max_frames: usize) -> usize {
        let mut frames = 0;
        while self.pending() > 0 {
            assert!(frames < max_frames, "frame loop did not settle");
            self.run_frame();
            frames += 1;
        }
        frames
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) {
        self.requested.set(self.requested.get() + 1);
        self.queue.borrow_mut().push(callback);
    }
}

/// Timer callbacks with their delays, fired in order by the test.
#[derive(Clone, Default)]
pub struct ManualTimers {
    queue: Rc<RefCell<Vec<(u32, Box<dyn FnOnce()>)>>>,
    delays: Rc<RefCell<Vec<u32>>>,
}

impl ManualTimers {
    pub fn delays(&self) -> Vec<u32> {
        self.delays.borrow().clone()
    }

    pub fn run_all(&self, max: usize) -> usize {
        let mut fired = 0;
        loop {
            let next = {
                let mut q = self.queue.borrow_mut();
                if q.is_empty() {
                    break;
                }
                q.remove(0)
            };
            assert!(fired < max, "timers did not settle");
            (next.1)();
            fired += 1;
        }
        fired
    }
}

impl DelayScheduler for ManualTimers {
    fn schedule_after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        self.delays.borrow_mut().push(delay_ms);
        self.queue.borrow_mut().push((delay_ms, callback));
    }
}
