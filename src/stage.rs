use std::time::Duration;

use rand::Rng;

use crate::backdrop::Backdrop;
use crate::debounce::Ticket;
use crate::frame_loop::Phase;
use crate::modal::{Entry, Modal};

/// The backdrop together with the two things that can hold it still: the
/// details dialog and the user's pause button.
///
/// Methods that return `bool` report whether a frame request must be issued.
pub struct Stage {
    backdrop: Option<Backdrop>,
    modal: Modal,
    paused_by_user: bool,
}

impl Stage {
    pub fn new(backdrop: Option<Backdrop>) -> Self {
        Self {
            backdrop,
            modal: Modal::default(),
            paused_by_user: false,
        }
    }

    pub fn has_backdrop(&self) -> bool {
        self.backdrop.is_some()
    }

    pub fn backdrop_mut(&mut self) -> Option<&mut Backdrop> {
        self.backdrop.as_mut()
    }

    pub fn details(&self) -> Option<&'static Entry> {
        self.modal.current()
    }

    pub fn paused_by_user(&self) -> bool {
        self.paused_by_user
    }

    pub fn phase(&self) -> Option<Phase> {
        self.backdrop.as_ref().map(Backdrop::phase)
    }

    pub fn frame_interval(&self) -> Duration {
        self.backdrop
            .as_ref()
            .map(Backdrop::frame_interval)
            .unwrap_or_default()
    }

    pub fn frame(&mut self) -> bool {
        self.backdrop.as_mut().map_or(false, Backdrop::frame)
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused_by_user = !self.paused_by_user;
        if self.paused_by_user {
            self.pause();
            false
        } else {
            self.resume()
        }
    }

    /// Unknown keys leave both the dialog and the backdrop alone.
    pub fn open_details(&mut self, key: &str) -> bool {
        if self.modal.open(key) {
            self.pause();
        }
        false
    }

    pub fn close_details(&mut self) -> bool {
        self.modal.close() && self.resume()
    }

    pub fn resize_signal(&mut self, width: u32, height: u32) -> Option<(Ticket, Duration)> {
        self.backdrop.as_mut().map(|backdrop| {
            let ticket = backdrop.resize_signal(width, height);
            (ticket, backdrop.resize_window())
        })
    }

    pub fn resize_settled<R: Rng + ?Sized>(&mut self, ticket: Ticket, rng: &mut R) {
        if let Some(backdrop) = &mut self.backdrop {
            backdrop.resize_settled(ticket, rng);
        }
    }

    fn pause(&mut self) {
        if let Some(backdrop) = &mut self.backdrop {
            backdrop.pause();
        }
    }

    /// Either hold is enough to keep the backdrop paused.
    fn resume(&mut self) -> bool {
        if self.paused_by_user || self.modal.is_open() {
            return false;
        }
        self.backdrop.as_mut().map_or(false, Backdrop::resume)
    }
}
