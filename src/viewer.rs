//! Fullscreen image viewer state.
//!
//! The viewer is either closed or showing exactly one image. While it is open
//! it holds a [`Session`]: the background scroll lock plus a subscription to
//! the cancellation key. Both are released when the session is dropped, which
//! happens on close and when the controller itself is dropped.

use crate::portfolio::ImageRef;

pub static CANCEL_KEY: &str = "Escape";

pub fn is_cancel_key(key: &str) -> bool {
    key == CANCEL_KEY
}

/// Environment the viewer runs in.
///
/// `listen_for_cancel` registers a key listener that routes key presses back
/// to the viewer; dropping the returned subscription must unregister it.
pub trait ModalHost: Clone {
    type Subscription;

    fn lock_scroll(&self);
    fn unlock_scroll(&self);
    fn listen_for_cancel(&self) -> Self::Subscription;
}

/// Background scroll lock, held for as long as the value lives.
struct ScrollLock<H: ModalHost> {
    host: H,
}

impl<H: ModalHost> ScrollLock<H> {
    fn acquire(host: &H) -> Self {
        host.lock_scroll();
        Self { host: host.clone() }
    }
}

impl<H: ModalHost> Drop for ScrollLock<H> {
    fn drop(&mut self) {
        self.host.unlock_scroll();
    }
}

struct Session<H: ModalHost> {
    _scroll: ScrollLock<H>,
    _cancel: H::Subscription,
}

impl<H: ModalHost> Session<H> {
    fn start(host: &H) -> Self {
        Self {
            _scroll: ScrollLock::acquire(host),
            _cancel: host.listen_for_cancel(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Opened,
    Replaced,
    Closed,
    Unchanged,
}

/// Where a pointer interaction landed while the viewer was open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Backdrop,
    Content,
}

pub struct ModalController<H: ModalHost> {
    host: H,
    selected: Option<ImageRef>,
    session: Option<Session<H>>,
}

impl<H: ModalHost> ModalController<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            selected: None,
            session: None,
        }
    }

    pub fn selected(&self) -> Option<&ImageRef> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn open(&mut self, image: ImageRef) -> Transition {
        log::debug!("viewer showing {}", image.src);
        let transition = if self.selected.replace(image).is_some() {
            Transition::Replaced
        } else {
            Transition::Opened
        };
        if self.session.is_none() {
            self.session = Some(Session::start(&self.host));
        }
        transition
    }

    pub fn close(&mut self) -> Transition {
        if self.selected.take().is_none() {
            return Transition::Unchanged;
        }
        log::debug!("viewer closed");
        self.session = None;
        Transition::Closed
    }

    pub fn handle_key(&mut self, key: &str) -> Transition {
        if self.is_open() && is_cancel_key(key) {
            self.close()
        } else {
            Transition::Unchanged
        }
    }

    pub fn handle_pointer(&mut self, target: PointerTarget) -> Transition {
        match target {
            PointerTarget::Backdrop => self.close(),
            PointerTarget::Content => Transition::Unchanged,
        }
    }
}
