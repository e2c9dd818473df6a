use std::cell::RefCell;
use std::rc::Rc;

/// Where finished frames go.
pub trait FrameSink {
    fn write_frame(&mut self, frame: &str);
    fn clear(&mut self);
}

#[derive(Debug, Default)]
struct MemoryLog {
    frames: Vec<String>,
    cleared: usize,
}

/// Keeps every written frame in memory. Clones share the same log, so a
/// test can hand one clone to the world and read through the other.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    log: Rc<RefCell<MemoryLog>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<String> {
        self.log.borrow().frames.clone()
    }

    pub fn last(&self) -> Option<String> {
        self.log.borrow().frames.last().cloned()
    }

    pub fn writes(&self) -> usize {
        self.log.borrow().frames.len()
    }

    pub fn clears(&self) -> usize {
        self.log.borrow().cleared
    }
}

impl FrameSink for MemorySink {
    fn write_frame(&mut self, frame: &str) {
        self.log.borrow_mut().frames.push(frame.to_string());
    }

    fn clear(&mut self) {
        self.log.borrow_mut().cleared += 1;
    }
}

/// Writes frames into a page element's `innerHTML`.
#[cfg(target_arch = "wasm32")]
pub struct DomSink {
    element: web_sys::Element,
}

#[cfg(target_arch = "wasm32")]
impl DomSink {
    pub fn new(element: web_sys::Element) -> Self {
        DomSink { element }
    }

    /// Look the element up by id in the current document.
    pub fn from_id(id: &str) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        document.get_element_by_id(id).map(DomSink::new)
    }
}

#[cfg(target_arch = "wasm32")]
impl FrameSink for DomSink {
    fn write_frame(&mut self, frame: &str) {
        self.element.set_inner_html(frame);
    }

    fn clear(&mut self) {
        self.element.set_inner_html("");
    }
}
