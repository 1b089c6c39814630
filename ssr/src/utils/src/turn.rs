use gloo::timers::callback::Timeout;

/// Queues `f` as a fresh task, behind any media events already queued by
/// the current turn.
pub fn next_turn(f: impl FnOnce() + 'static) {
    Timeout::new(0, f).forget();
}
