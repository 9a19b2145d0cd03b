use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::traits::OffsetSource;

/// Handle returned by [`ScrollSource::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn Fn(f32) + Send>;

struct Registry {
    offset: f32,
    extent: f32,
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

impl Registry {
    fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Document-level scroll signal.
///
/// Holds the page offset in pixels, clamped to `[0, extent]`, and notifies
/// listeners synchronously whenever it changes. Clones share the same source.
#[derive(Clone)]
pub struct ScrollSource {
    registry: Arc<Mutex<Registry>>,
}

impl ScrollSource {
    /// Create a source at offset 0 that can scroll down to `extent` pixels.
    pub fn new(extent: f32) -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry {
                offset: 0.0,
                extent: extent.max(0.0),
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn offset(&self) -> f32 {
        lock(&self.registry).offset
    }

    pub fn extent(&self) -> f32 {
        lock(&self.registry).extent
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.registry).listeners.len()
    }

    /// Scroll relative to the current offset. Positive scrolls down the page.
    pub fn scroll_by(&self, delta: f32) {
        let mut registry = lock(&self.registry);
        let target = registry.offset + delta;
        Self::apply(&mut registry, target);
    }

    pub fn scroll_to(&self, offset: f32) {
        let mut registry = lock(&self.registry);
        Self::apply(&mut registry, offset);
    }

    fn apply(registry: &mut Registry, target: f32) {
        // NaN falls through max/min as 0
        let clamped = target.max(0.0).min(registry.extent);
        if clamped == registry.offset {
            return;
        }
        registry.offset = clamped;
        for (_, listener) in &registry.listeners {
            listener(clamped);
        }
    }

    /// Listeners run while the source is locked and must not call back into it.
    pub fn add_listener<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(f32) + Send + 'static,
    {
        let mut registry = lock(&self.registry);
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Unknown or already-removed ids are ignored.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        lock(&self.registry).remove(id)
    }

    fn downgrade(&self) -> Weak<Mutex<Registry>> {
        Arc::downgrade(&self.registry)
    }
}

impl std::fmt::Debug for ScrollSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registry = lock(&self.registry);
        f.debug_struct("ScrollSource")
            .field("offset", &registry.offset)
            .field("extent", &registry.extent)
            .field("listeners", &registry.listeners.len())
            .finish()
    }
}

/// Latest scroll offset as seen by the frame update.
///
/// Mounting registers a listener on the source; dropping the tracker (or
/// calling [`ScrollTracker::unmount`]) removes it. The offset is a single
/// atomic scalar, so reads never observe a torn value.
#[derive(Debug)]
pub struct ScrollTracker {
    latest: Arc<AtomicU32>,
    source: Weak<Mutex<Registry>>,
    listener: Option<ListenerId>,
}

impl ScrollTracker {
    pub fn mount(source: &ScrollSource) -> Self {
        let latest = Arc::new(AtomicU32::new(source.offset().to_bits()));
        let sink = Arc::clone(&latest);
        let listener = source.add_listener(move |offset| {
            sink.store(offset.to_bits(), Ordering::Relaxed);
        });
        log::debug!("scroll tracker mounted as {:?}", listener);

        Self {
            latest,
            source: source.downgrade(),
            listener: Some(listener),
        }
    }

    pub fn current_offset(&self) -> f32 {
        f32::from_bits(self.latest.load(Ordering::Relaxed))
    }

    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    /// Deregister from the source. Safe to call more than once.
    pub fn unmount(&mut self) {
        let Some(id) = self.listener.take() else {
            return;
        };
        if let Some(registry) = self.source.upgrade() {
            lock(&registry).remove(id);
            log::debug!("scroll tracker {:?} unmounted", id);
        }
    }
}

impl OffsetSource for ScrollTracker {
    fn current_offset(&self) -> f32 {
        ScrollTracker::current_offset(self)
    }
}

impl Drop for ScrollTracker {
    fn drop(&mut self) {
        self.unmount();
    }
}
