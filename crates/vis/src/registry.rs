//! The registry of live chart instances.
//!
//! Every canvas identifier maps to at most one live chart instance. A chart
//! is replaced by disposing the previous instance first and only then
//! creating the new one, so repeated refreshes never stack charts on the
//! same canvas.

use std::collections::HashMap;

use crate::chart::ChartConfig;
use crate::id::ElementId;
use crate::view::DrawingSurface;

/// The charting primitive that draws charts onto canvases.
pub trait ChartBackend {
    /// The handle of a live chart.
    type Instance;

    /// Draws a chart onto a surface and returns its live instance.
    fn create(&mut self, surface: DrawingSurface, config: &ChartConfig) -> Self::Instance;

    /// Disposes a live chart, releasing its canvas.
    fn dispose(&mut self, instance: Self::Instance);
}

/// The live chart instances of a page, keyed by canvas identifier.
pub struct ChartRegistry<B: ChartBackend> {
    backend: B,
    live: HashMap<ElementId, B::Instance>,
}

impl<B: ChartBackend> ChartRegistry<B> {
    /// Creates an empty registry drawing through `backend`.
    pub fn new(backend: B) -> ChartRegistry<B> {
        Self {
            backend,
            live: HashMap::new(),
        }
    }

    /// Returns the live instance of a canvas.
    pub fn get(&self, id: &ElementId) -> Option<&B::Instance> {
        self.live.get(id)
    }

    /// Stores `instance` as the live instance of a canvas, disposing
    /// the instance it replaces.
    pub fn set(&mut self, id: ElementId, instance: B::Instance) {
        self.dispose(&id);
        self.live.insert(id, instance);
    }

    /// Disposes the live instance of a canvas and clears its entry.
    ///
    /// Returns `true` if there was a live instance.
    pub fn dispose(&mut self, id: &ElementId) -> bool {
        match self.live.remove(id) {
            Some(instance) => {
                self.backend.dispose(instance);
                true
            }
            None => false,
        }
    }

    /// Draws a chart onto a surface, replacing the live instance of
    /// the same canvas.
    pub fn replace(&mut self, surface: DrawingSurface, config: &ChartConfig) {
        let id = surface.id().clone();

        if self.dispose(&id) {
            tracing::trace!(%id, "disposed the previous chart");
        }

        let instance = self.backend.create(surface, config);
        self.live.insert(id, instance);
    }

    /// Disposes every live instance.
    pub fn clear(&mut self) {
        for (_, instance) in self.live.drain() {
            self.backend.dispose(instance);
        }
    }

    /// The number of live instances.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Returns `true` if there are no live instances.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// The identifiers of the canvases with a live instance.
    pub fn ids(&self) -> impl Iterator<Item = &ElementId> {
        self.live.keys()
    }

    /// The charting backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::chart::ChartData;
    use crate::chart::ChartKind;

    /// A backend that records every chart it creates and disposes.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingBackend {
        next: u64,
        pub created: Vec<(ElementId, ChartConfig)>,
        pub disposed: Vec<u64>,
        live: HashSet<u64>,
    }

    #[derive(Debug, PartialEq, Eq)]
    pub(crate) struct Handle(pub u64);

    impl RecordingBackend {
        pub fn live(&self) -> usize {
            self.live.len()
        }

        pub fn last_config(&self, id: &str) -> Option<&ChartConfig> {
            self.created
                .iter()
                .rev()
                .find(|(created, _)| created.as_str() == id)
                .map(|(_, config)| config)
        }
    }

    impl ChartBackend for RecordingBackend {
        type Instance = Handle;

        fn create(&mut self, surface: DrawingSurface, config: &ChartConfig) -> Handle {
            self.next += 1;
            self.live.insert(self.next);
            self.created.push((surface.id().clone(), config.clone()));
            Handle(self.next)
        }

        fn dispose(&mut self, instance: Handle) {
            assert!(self.live.remove(&instance.0), "double dispose");
            self.disposed.push(instance.0);
        }
    }

    fn config() -> ChartConfig {
        ChartConfig::new(ChartKind::Bar, ChartData::default())
    }

    fn surface(id: &'static str) -> DrawingSurface {
        DrawingSurface::new(ElementId::new(id))
    }

    #[test]
    fn replace_disposes_the_previous_instance() {
        let mut registry = ChartRegistry::new(RecordingBackend::default());

        registry.replace(surface("a"), &config());
        registry.replace(surface("a"), &config());
        registry.replace(surface("b"), &config());

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.backend().live(), 2);
        assert_eq!(registry.backend().disposed, vec![1]);
        assert_eq!(registry.get(&ElementId::new("a")), Some(&Handle(2)));
    }

    #[test]
    fn dispose_clears_the_entry() {
        let mut registry = ChartRegistry::new(RecordingBackend::default());
        registry.replace(surface("a"), &config());

        assert!(registry.dispose(&ElementId::new("a")));
        assert!(!registry.dispose(&ElementId::new("a")));
        assert!(registry.is_empty());
        assert_eq!(registry.backend().live(), 0);
    }

    #[test]
    fn set_disposes_the_replaced_instance() {
        let mut backend = RecordingBackend::default();
        let first = backend.create(surface("a"), &config());
        let second = backend.create(surface("a"), &config());
        let mut registry = ChartRegistry::new(backend);

        registry.set(ElementId::new("a"), first);
        registry.set(ElementId::new("a"), second);

        assert_eq!(registry.backend().disposed, vec![1]);
        assert_eq!(registry.backend().live(), 1);
    }

    #[test]
    fn clear_disposes_everything() {
        let mut registry = ChartRegistry::new(RecordingBackend::default());
        registry.replace(surface("a"), &config());
        registry.replace(surface("b"), &config());

        registry.clear();

        assert!(registry.is_empty());
        assert_eq!(registry.backend().disposed.len(), 2);
    }
}
