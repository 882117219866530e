use indexmap::IndexMap;

use crate::core::PointKey;
use crate::render::animation::Transition;

/// Retained marker state. Geometry is derived at frame time; only identity
/// and the entry fade live here.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerNode {
    pub index: usize,
    pub entry: Transition,
}

impl MarkerNode {
    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.entry.eased()
    }
}

/// Retained state of the connecting path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathNode {
    pub dataset_generation: u64,
    pub draw_in: Transition,
}

impl PathNode {
    /// Fraction of the path currently revealed.
    #[must_use]
    pub fn revealed(&self) -> f64 {
        self.draw_in.eased()
    }
}

/// Outcome of a keyed marker join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkerJoin {
    pub entered: usize,
    pub updated: usize,
    pub exited: usize,
}

/// Retained scene graph of one plot: markers keyed by point identity plus at
/// most one path. Joins replace, never append, so re-rendering is idempotent.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    markers: IndexMap<PointKey, MarkerNode>,
    path: Option<PathNode>,
}

impl Scene {
    /// Joins markers against `keys` (dataset order). Surviving keys keep their
    /// fade state, new keys start a fresh entry transition, missing keys are
    /// dropped.
    pub fn join_markers(&mut self, keys: Vec<PointKey>, entry_duration_s: f64) -> MarkerJoin {
        let mut previous = std::mem::take(&mut self.markers);
        let mut join = MarkerJoin::default();
        let mut next = IndexMap::with_capacity(keys.len());

        for (index, key) in keys.into_iter().enumerate() {
            let node = match previous.swap_remove(&key) {
                Some(existing) => {
                    join.updated += 1;
                    MarkerNode {
                        index,
                        entry: existing.entry,
                    }
                }
                None => {
                    join.entered += 1;
                    MarkerNode {
                        index,
                        entry: Transition::new(entry_duration_s),
                    }
                }
            };
            next.insert(key, node);
        }

        join.exited = previous.len();
        self.markers = next;
        join
    }

    /// Removes every marker, keeping the path. Returns how many were dropped.
    pub fn clear_markers(&mut self) -> usize {
        let dropped = self.markers.len();
        self.markers.clear();
        dropped
    }

    /// Installs the path for `dataset_generation`; the draw-in restarts only
    /// when the generation changes.
    pub fn set_path(&mut self, dataset_generation: u64, draw_in_duration_s: f64) -> bool {
        if self
            .path
            .as_ref()
            .is_some_and(|path| path.dataset_generation == dataset_generation)
        {
            return false;
        }
        self.path = Some(PathNode {
            dataset_generation,
            draw_in: Transition::new(draw_in_duration_s),
        });
        true
    }

    pub fn clear_path(&mut self) {
        self.path = None;
    }

    pub fn clear(&mut self) {
        self.markers.clear();
        self.path = None;
    }

    pub fn advance(&mut self, delta_s: f64) {
        for node in self.markers.values_mut() {
            node.entry.advance(delta_s);
        }
        if let Some(path) = &mut self.path {
            path.draw_in.advance(delta_s);
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.markers.values().any(|node| !node.entry.is_finished())
            || self
                .path
                .as_ref()
                .is_some_and(|path| !path.draw_in.is_finished())
    }

    #[must_use]
    pub fn markers(&self) -> impl Iterator<Item = (&PointKey, &MarkerNode)> {
        self.markers.iter()
    }

    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn marker(&self, key: &PointKey) -> Option<&MarkerNode> {
        self.markers.get(key)
    }

    #[must_use]
    pub fn path(&self) -> Option<&PathNode> {
        self.path.as_ref()
    }
}
