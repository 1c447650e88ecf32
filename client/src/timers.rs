use gloo_timers::callback::Timeout;

use poimap_shared::TimerHost;

/// `setTimeout`-backed timers. Dropping the returned [`Timeout`] clears it.
#[derive(Clone, Copy, Default)]
pub struct BrowserTimers;

impl TimerHost for BrowserTimers {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}
