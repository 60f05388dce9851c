//! Two-way float bindings.
//!
//! A binding is an externally owned value that widgets can observe and write.
//! Change notifications are not delivered inline: they are queued to a single
//! background notifier thread and run there one at a time, so a listener never
//! re-enters the code that triggered it.

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock, mpsc};
use std::thread;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

use crate::error::BindingError;

new_key_type! {
    /// Handle returned by `add_listener`, used to remove the listener again.
    pub struct ListenerId;
}

pub type DataListener = Arc<dyn Fn() + Send + Sync>;

/// An observable float shared between a widget and its owner.
pub trait FloatBinding: Send + Sync {
    fn get(&self) -> Result<f64, BindingError>;
    fn set(&self, value: f64) -> Result<(), BindingError>;
    /// Registers a listener. Implementations notify a new listener once with
    /// the current value.
    fn add_listener(&self, listener: DataListener) -> ListenerId;
    fn remove_listener(&self, id: ListenerId);
}

/// A float held in shared memory.
#[derive(Clone, Default)]
pub struct SharedFloat(Arc<FloatInner>);

#[derive(Default)]
struct FloatInner {
    value: Mutex<f64>,
    listeners: Mutex<SlotMap<ListenerId, DataListener>>,
}

impl SharedFloat {
    pub fn new(value: f64) -> Self {
        let s = Self::default();
        *s.0.value.lock() = value;
        s
    }

    pub fn listener_count(&self) -> usize {
        self.0.listeners.lock().len()
    }
}

impl FloatBinding for SharedFloat {
    fn get(&self) -> Result<f64, BindingError> {
        Ok(*self.0.value.lock())
    }

    fn set(&self, value: f64) -> Result<(), BindingError> {
        {
            let mut cur = self.0.value.lock();
            if *cur == value {
                return Ok(());
            }
            *cur = value;
        }
        let listeners: Listeners = self.0.listeners.lock().values().cloned().collect();
        if listeners.is_empty() {
            return Ok(());
        }
        queue(listeners)
    }

    fn add_listener(&self, listener: DataListener) -> ListenerId {
        let id = self.0.listeners.lock().insert(listener.clone());
        if let Err(e) = queue(SmallVec::from_elem(listener, 1)) {
            log::error!("failed to queue initial binding notification: {e}");
        }
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        self.0.listeners.lock().remove(id);
    }
}

impl fmt::Debug for SharedFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedFloat")
            .field("value", &*self.0.value.lock())
            .field("listeners", &self.0.listeners.lock().len())
            .finish()
    }
}

type Listeners = SmallVec<[DataListener; 4]>;

enum Job {
    Notify(Listeners),
    Flush(mpsc::Sender<()>),
}

// Notify jobs queued but not yet delivered.
static PENDING: AtomicUsize = AtomicUsize::new(0);
static NOTIFIER: OnceLock<Option<mpsc::Sender<Job>>> = OnceLock::new();

fn notifier() -> Result<&'static mpsc::Sender<Job>, BindingError> {
    NOTIFIER
        .get_or_init(|| {
            let (tx, rx) = mpsc::channel();
            match thread::Builder::new()
                .name("spindle-binding".into())
                .spawn(move || run_notifier(rx))
            {
                Ok(_) => Some(tx),
                Err(e) => {
                    log::error!("failed to start binding notifier: {e}");
                    None
                }
            }
        })
        .as_ref()
        .ok_or(BindingError::Closed)
}

fn queue(listeners: Listeners) -> Result<(), BindingError> {
    let tx = notifier()?;
    PENDING.fetch_add(1, Ordering::AcqRel);
    tx.send(Job::Notify(listeners)).map_err(|_| {
        PENDING.fetch_sub(1, Ordering::AcqRel);
        BindingError::Closed
    })
}

fn run_notifier(rx: mpsc::Receiver<Job>) {
    while let Ok(job) = rx.recv() {
        match job {
            Job::Notify(listeners) => {
                for listener in listeners {
                    if catch_unwind(AssertUnwindSafe(|| listener())).is_err() {
                        log::error!("binding listener panicked");
                    }
                }
                PENDING.fetch_sub(1, Ordering::AcqRel);
            }
            Job::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
}

/// Blocks until every queued notification has been delivered, including
/// notifications queued by listeners while the queue drains.
///
/// Calling this from a listener deadlocks.
pub fn flush_notifications() -> Result<(), BindingError> {
    let tx = notifier()?;
    loop {
        let (done_tx, done_rx) = mpsc::channel();
        tx.send(Job::Flush(done_tx)).map_err(|_| BindingError::Closed)?;
        done_rx.recv().map_err(|_| BindingError::Closed)?;
        if PENDING.load(Ordering::Acquire) == 0 {
            return Ok(());
        }
    }
}
