//! In-memory [`MediaElement`] for exercising the controller without a DOM.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

use crate::element::MediaElement;

#[derive(Debug, Default)]
pub struct MockVideo {
    attrs: RefCell<HashMap<String, String>>,
    muted: Cell<bool>,
    plays_inline: Cell<bool>,
    play_calls: Cell<usize>,
    pause_calls: Cell<usize>,
    refuse_play: Cell<bool>,
}

impl MockVideo {
    pub fn with_attr(name: &str, value: &str) -> Self {
        let video = Self::default();
        video.set_attribute(name, value);
        video
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        self.attrs.borrow().get(name).cloned()
    }

    pub fn muted(&self) -> bool {
        self.muted.get()
    }

    pub fn plays_inline(&self) -> bool {
        self.plays_inline.get()
    }

    pub fn play_calls(&self) -> usize {
        self.play_calls.get()
    }

    pub fn pause_calls(&self) -> usize {
        self.pause_calls.get()
    }

    /// Makes `play()` fail synchronously, as when the element cannot start.
    pub fn refuse_play(&self, refuse: bool) {
        self.refuse_play.set(refuse);
    }
}

impl MediaElement for MockVideo {
    type Pending = ();

    fn has_attribute(&self, name: &str) -> bool {
        self.attrs.borrow().contains_key(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.attrs
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn set_muted(&self, muted: bool) {
        self.muted.set(muted);
    }

    fn set_plays_inline(&self, plays_inline: bool) {
        self.plays_inline.set(plays_inline);
    }

    fn play(&self) -> Option<()> {
        self.play_calls.set(self.play_calls.get() + 1);
        (!self.refuse_play.get()).then_some(())
    }

    fn pause(&self) {
        self.pause_calls.set(self.pause_calls.get() + 1);
    }
}
