use std::{
    cell::{Ref, RefCell},
    rc::Rc,
};

use js_sys::Promise;
use state::{AutoplayController, AutoplayOptions, FlushRequest, PlayAttempt, VisibilityAction};
use utils::{
    dom::{self, discover_videos, listen_forever, on_page_hidden, supports_intersection_observer},
    observer::visibility_observer,
    turn::next_turn,
    DomVideo, Result,
};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::IntersectionObserver;

type SharedController = Rc<RefCell<AutoplayController<DomVideo>>>;

/// A running controller. Listeners and the observer stay registered for the
/// page's lifetime whether or not this handle is kept.
pub struct Autoplay {
    controller: SharedController,
    observer: Option<IntersectionObserver>,
}

impl Autoplay {
    pub fn controller(&self) -> Ref<'_, AutoplayController<DomVideo>> {
        self.controller.borrow()
    }

    /// False when the page lacks `IntersectionObserver` and every video was
    /// started once instead.
    pub fn is_observing(&self) -> bool {
        self.observer.is_some()
    }
}

/// Wires every marked video on the page to the autoplay controller. Returns
/// `None` when nothing matches, in which case nothing is attached.
pub fn init_autoplay_videos(options: AutoplayOptions) -> Result<Option<Autoplay>> {
    let window = dom::window()?;
    let document = dom::document()?;

    let videos = discover_videos(&document, &options.selector)?;
    if videos.is_empty() {
        return Ok(None);
    }
    log::info!("autoplay: managing {} video(s)", videos.len());

    let controller: SharedController =
        Rc::new(RefCell::new(AutoplayController::new(videos, options)));
    attach_media_listeners(&controller);

    if !supports_intersection_observer(&window) {
        log::info!("autoplay: IntersectionObserver unavailable, playing all videos once");
        let started = controller.borrow_mut().play_all();
        for attempt in started {
            watch_play(&controller, attempt);
        }
        return Ok(Some(Autoplay {
            controller,
            observer: None,
        }));
    }

    let observer = {
        let controller = Rc::clone(&controller);
        let options = controller.borrow().options().clone();
        visibility_observer(&options, move |target, update| {
            let Ok(mut ctrl) = controller.try_borrow_mut() else {
                log::debug!("autoplay: controller busy, dropping visibility update");
                return;
            };
            let Some(key) = ctrl.find(|video| video.is(&target)) else {
                return;
            };
            let action = ctrl.on_visibility(key, update);
            drop(ctrl);
            match action {
                VisibilityAction::Play(Some(attempt)) => watch_play(&controller, attempt),
                VisibilityAction::Pause(Some(flush)) => schedule_flush(&controller, flush),
                VisibilityAction::Play(None) | VisibilityAction::Pause(None) => {}
            }
        })?
    };
    {
        let ctrl = controller.borrow();
        for key in ctrl.keys() {
            if let Some(video) = ctrl.element(key) {
                observer.observe(video.video());
            }
        }
    }

    let hidden_ctrl = Rc::clone(&controller);
    on_page_hidden(&document, move || {
        let Ok(mut ctrl) = hidden_ctrl.try_borrow_mut() else {
            log::debug!("autoplay: controller busy, dropping visibility change");
            return;
        };
        let flushes = ctrl.on_page_hidden();
        drop(ctrl);
        for flush in flushes {
            schedule_flush(&hidden_ctrl, flush);
        }
    });

    Ok(Some(Autoplay {
        controller,
        observer: Some(observer),
    }))
}

fn attach_media_listeners(controller: &SharedController) {
    let ctrl = controller.borrow();
    for key in ctrl.keys() {
        let Some(video) = ctrl.element(key) else {
            continue;
        };

        let on_pause = Rc::clone(controller);
        listen_forever(video.video(), "pause", move || {
            if let Ok(mut ctrl) = on_pause.try_borrow_mut() {
                ctrl.on_pause_event(key);
            } else {
                log::debug!("autoplay: controller busy, dropping pause event");
            }
        });

        let on_play = Rc::clone(controller);
        listen_forever(video.video(), "play", move || {
            if let Ok(mut ctrl) = on_play.try_borrow_mut() {
                ctrl.on_play_event(key);
            } else {
                log::debug!("autoplay: controller busy, dropping play event");
            }
        });
    }
}

/// Swallows a rejected `play()` promise, only noting it in the state machine.
fn watch_play(controller: &SharedController, attempt: PlayAttempt<Promise>) {
    let controller = Rc::clone(controller);
    let PlayAttempt { ticket, pending } = attempt;
    spawn_local(async move {
        if JsFuture::from(pending).await.is_err() {
            if let Ok(mut ctrl) = controller.try_borrow_mut() {
                ctrl.on_play_rejected(ticket);
            }
        }
    });
}

/// Clears the marker left by one controlled pause on the next task.
fn schedule_flush(controller: &SharedController, flush: FlushRequest) {
    let controller = Rc::clone(controller);
    next_turn(move || {
        // a dropped flush leaves the marker set for good
        let Ok(mut ctrl) = controller.try_borrow_mut() else {
            log::debug!("autoplay: controller busy, retrying flush");
            schedule_flush(&controller, flush);
            return;
        };
        ctrl.flush_deferred(flush);
    });
}
