use state::{
    testing::MockVideo, AutoplayController, AutoplayOptions, PlaybackPhase, VideoKey,
    VisibilityAction, VisibilityUpdate,
};

const A: VideoKey = VideoKey(0);
const B: VideoKey = VideoKey(1);
const C: VideoKey = VideoKey(2);

fn update(is_intersecting: bool, ratio: f64) -> VisibilityUpdate {
    VisibilityUpdate {
        is_intersecting,
        ratio,
    }
}

#[test]
fn user_pause_survives_visibility_updates() {
    let mut ctrl = AutoplayController::new(
        vec![
            MockVideo::with_attr("controls", ""),
            MockVideo::default(),
            MockVideo::default(),
        ],
        AutoplayOptions::default(),
    );

    // first observer batch
    assert!(matches!(ctrl.on_visibility(A, update(true, 0.3)), VisibilityAction::Play(Some(_))));
    let VisibilityAction::Pause(Some(flush_b)) = ctrl.on_visibility(B, update(true, 0.1)) else {
        panic!("B should pause");
    };
    let VisibilityAction::Pause(Some(flush_c)) = ctrl.on_visibility(C, update(false, 0.0)) else {
        panic!("C should pause");
    };

    // media tasks for the controlled pauses, then the flushes
    ctrl.on_pause_event(B);
    ctrl.on_pause_event(C);
    ctrl.flush_deferred(flush_b);
    ctrl.flush_deferred(flush_c);

    assert_eq!(ctrl.video(A).unwrap().phase(), PlaybackPhase::Playing);
    assert_eq!(ctrl.video(B).unwrap().phase(), PlaybackPhase::PausedAuto);
    assert_eq!(ctrl.video(C).unwrap().phase(), PlaybackPhase::PausedAuto);
    assert!(!ctrl.video(B).unwrap().user_paused());

    // user hits pause on A's controls
    ctrl.on_pause_event(A);
    assert!(ctrl.video(A).unwrap().user_paused());

    assert!(matches!(ctrl.on_visibility(A, update(true, 0.95)), VisibilityAction::Play(None)));
    assert_eq!(ctrl.element(A).unwrap().play_calls(), 1);
    assert_eq!(ctrl.video(A).unwrap().phase(), PlaybackPhase::PausedByUser);
    assert_eq!(ctrl.video(A).unwrap().visibility_ratio(), 0.95);

    // resuming from the controls hands A back to the controller
    ctrl.on_play_event(A);
    let flush = ctrl.safe_pause(A).unwrap();
    ctrl.on_pause_event(A);
    ctrl.flush_deferred(flush);
    assert!(!ctrl.video(A).unwrap().user_paused());
    assert!(matches!(ctrl.on_visibility(A, update(true, 0.5)), VisibilityAction::Play(Some(_))));
    assert_eq!(ctrl.element(A).unwrap().play_calls(), 2);
}

#[test]
fn hidden_tab_pauses_user_paused_videos_too() {
    let mut ctrl = AutoplayController::new(
        vec![MockVideo::with_attr("controls", ""), MockVideo::default()],
        AutoplayOptions::default(),
    );
    let _ = ctrl.on_visibility(A, update(true, 1.0));
    let _ = ctrl.on_visibility(B, update(true, 1.0));
    ctrl.on_pause_event(A);

    let flushes = ctrl.on_page_hidden();
    assert_eq!(flushes.len(), 2);
    assert_eq!(ctrl.element(A).unwrap().pause_calls(), 1);
    assert_eq!(ctrl.element(B).unwrap().pause_calls(), 1);

    ctrl.on_pause_event(B);
    for flush in flushes {
        ctrl.flush_deferred(flush);
    }
    assert!(ctrl.video(A).unwrap().user_paused());
    assert!(!ctrl.video(B).unwrap().user_paused());
}

#[test]
fn fallback_without_observer_plays_once() {
    let mut ctrl = AutoplayController::new(
        vec![MockVideo::default(), MockVideo::default(), MockVideo::default()],
        AutoplayOptions::default(),
    );

    let started = ctrl.play_all();
    assert_eq!(started.iter().map(|attempt| attempt.ticket.key()).collect::<Vec<_>>(), vec![A, B, C]);
    assert!(ctrl.keys().all(|k| ctrl.element(k).unwrap().play_calls() == 1));
}

#[test]
fn pause_in_a_later_task_outlives_an_earlier_flush() {
    let mut ctrl = AutoplayController::new(
        vec![MockVideo::default(), MockVideo::with_attr("controls", "")],
        AutoplayOptions::default(),
    );
    let _ = ctrl.on_visibility(A, update(true, 1.0));
    let _ = ctrl.on_visibility(B, update(true, 1.0));

    // observer task: A scrolls away
    let VisibilityAction::Pause(Some(flush_a)) = ctrl.on_visibility(A, update(false, 0.0)) else {
        panic!("A should pause");
    };
    // A's pause task
    ctrl.on_pause_event(A);
    // B scrolls away in another observer task before A's flush runs
    let VisibilityAction::Pause(Some(flush_b)) = ctrl.on_visibility(B, update(true, 0.1)) else {
        panic!("B should pause");
    };
    // A's flush runs, then B's pause task
    ctrl.flush_deferred(flush_a);
    ctrl.on_pause_event(B);
    ctrl.flush_deferred(flush_b);

    assert!(!ctrl.video(B).unwrap().user_paused());
    assert_eq!(ctrl.video(B).unwrap().phase(), PlaybackPhase::PausedAuto);
    assert!(matches!(ctrl.on_visibility(B, update(true, 0.8)), VisibilityAction::Play(Some(_))));
}
