use fnv::FnvHashMap;

/// A navigation section registered once at mount. The registry order is the
/// document order and never changes afterwards.
#[derive(Clone, Debug)]
pub struct NavSection {
    pub id: String,
    pub label: String,
    pub order: usize,
}

#[derive(Default, Debug)]
pub struct SectionRegistry {
    sections: Vec<NavSection>,
    by_id: FnvHashMap<String, usize>,
}

impl SectionRegistry {
    /// Build from `(id, label)` pairs in declared order. Every entry keeps
    /// its slot (orders stay aligned with the caller's element list); a
    /// duplicated id resolves to its first registration.
    pub fn new(entries: Vec<(String, String)>) -> Self {
        let mut sections = Vec::with_capacity(entries.len());
        let mut by_id = FnvHashMap::default();
        for (id, label) in entries {
            let order = sections.len();
            by_id.entry(id.clone()).or_insert(order);
            sections.push(NavSection { id, label, order });
        }
        Self { sections, by_id }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    #[inline]
    pub fn order_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    #[inline]
    pub fn get(&self, order: usize) -> Option<&NavSection> {
        self.sections.get(order)
    }

    #[inline]
    pub fn id_at(&self, order: usize) -> Option<&str> {
        self.sections.get(order).map(|s| s.id.as_str())
    }
}

/// Active-section policy: the last section (in declared order) whose
/// viewport-relative top is at or above the activation line. With no
/// qualifying section the first one is active.
#[inline]
pub fn active_index(tops: &[f64], activation_px: f64) -> usize {
    let mut active = 0;
    for (i, top) in tops.iter().enumerate() {
        if *top <= activation_px {
            active = i;
        }
    }
    active
}

#[inline]
pub fn past_threshold(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}
