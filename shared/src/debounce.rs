use std::cell::RefCell;
use std::rc::Rc;

/// Something that can run a callback once after a delay.
pub trait TimerHost {
    /// Dropping the handle cancels the timer if it has not fired yet.
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Coalesces bursts of calls: only the last value reaches the handler, once
/// `delay_ms` passes without another call.
pub struct Debouncer<T, H: TimerHost> {
    host: H,
    delay_ms: u32,
    handler: Rc<dyn Fn(T)>,
    pending: RefCell<Option<H::Handle>>,
}

impl<T: 'static, H: TimerHost> Debouncer<T, H> {
    pub fn new(host: H, delay_ms: u32, handler: impl Fn(T) + 'static) -> Self {
        Self {
            host,
            delay_ms,
            handler: Rc::new(handler),
            pending: RefCell::new(None),
        }
    }

    pub fn call(&self, value: T) {
        // Drop the old handle before scheduling so at most one timer is live.
        self.cancel();
        let handler = Rc::clone(&self.handler);
        let handle = self
            .host
            .schedule(self.delay_ms, Box::new(move || handler(value)));
        *self.pending.borrow_mut() = Some(handle);
    }

    pub fn cancel(&self) {
        let previous = self.pending.borrow_mut().take();
        drop(previous);
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::TimerHost;

    struct Entry {
        due: u64,
        seq: u64,
        cancelled: Rc<Cell<bool>>,
        callback: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Inner {
        now: Cell<u64>,
        seq: Cell<u64>,
        queue: RefCell<Vec<Entry>>,
    }

    /// Virtual-clock timers for tests; time only moves on [`ManualTimers::advance`].
    #[derive(Clone, Default)]
    pub struct ManualTimers(Rc<Inner>);

    pub struct ManualHandle(Rc<Cell<bool>>);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    impl ManualTimers {
        pub fn advance(&self, ms: u64) {
            let target = self.0.now.get() + ms;
            loop {
                let next = {
                    let mut queue = self.0.queue.borrow_mut();
                    queue.retain(|entry| !entry.cancelled.get());
                    let idx = queue
                        .iter()
                        .enumerate()
                        .filter(|(_, entry)| entry.due <= target)
                        .min_by_key(|(_, entry)| (entry.due, entry.seq))
                        .map(|(idx, _)| idx);
                    idx.map(|idx| queue.remove(idx))
                };
                let Some(entry) = next else {
                    break;
                };
                self.0.now.set(entry.due);
                (entry.callback)();
            }
            self.0.now.set(target);
        }

        pub fn pending(&self) -> usize {
            self.0
                .queue
                .borrow()
                .iter()
                .filter(|entry| !entry.cancelled.get())
                .count()
        }
    }

    impl TimerHost for ManualTimers {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            let seq = self.0.seq.get();
            self.0.seq.set(seq + 1);
            self.0.queue.borrow_mut().push(Entry {
                due: self.0.now.get() + u64::from(delay_ms),
                seq,
                cancelled: Rc::clone(&cancelled),
                callback,
            });
            ManualHandle(cancelled)
        }
    }
}
