use tracing::{debug, instrument};

use super::{MenuEntry, MenuHost, MenuItem};

/// Ordered collection of the actions a host exposes.
///
/// Entries are kept sorted by `(order, section, label)`, with the section and
/// label compared case-insensitively and root entries ahead of any section
/// sharing their order. The sort is stable, so entries that compare equal keep
/// their registration order.
///
/// # Example Structure
///
/// ```text
/// root
/// ├── summary          (root action)
/// ├── View ▶
/// │   ├── list columns
/// │   └── preview rows
/// └── Analyze ▶
///     ├── analyze
///     └── check data quality
/// ```
pub struct MenuRegistry<H> {
    entries: Vec<MenuEntry<H>>,
}

impl<H> Default for MenuRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> MenuRegistry<H> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Collects every action `host` registers, replacing any earlier entries.
    ///
    /// A host without menu items leaves the registry empty; that is not an error.
    pub fn discover(&mut self, host: &H)
    where
        H: MenuHost,
    {
        self.load(host.menu_items());
    }

    /// Replaces the entries with the given registrations.
    ///
    /// Items with an internal identifier or without a usable label are
    /// skipped. The remaining entries are sorted into the master ordering.
    #[instrument(skip_all)]
    pub fn load<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = MenuItem<H>>,
    {
        let mut entries: Vec<MenuEntry<H>> = items
            .into_iter()
            .filter_map(|item| {
                let identifier = item.identifier().to_string();
                let entry = item.into_entry();
                if entry.is_none() {
                    debug!(%identifier, "Menu item not listed");
                }
                entry
            })
            .collect();

        entries.sort_by_cached_key(|entry| {
            (
                entry.order(),
                entry.section().unwrap_or_default().to_lowercase(),
                entry.label().to_lowercase(),
            )
        });

        debug!(count = entries.len(), "Menu entries discovered");
        self.entries = entries;
    }

    /// True when no action was discovered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of discovered actions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// All entries in master order.
    pub fn entries(&self) -> &[MenuEntry<H>] {
        &self.entries
    }

    /// Distinct section names, ordered by the smallest order among each
    /// section's entries and then by case-insensitive name.
    pub fn sections(&self) -> Vec<&str> {
        let mut sections: Vec<(&str, i64)> = Vec::new();

        for entry in &self.entries {
            let Some(section) = entry.section() else {
                continue;
            };

            match sections.iter_mut().find(|(name, _)| *name == section) {
                Some((_, min_order)) => *min_order = (*min_order).min(entry.order()),
                None => sections.push((section, entry.order())),
            }
        }

        sections.sort_by_cached_key(|(name, min_order)| (*min_order, name.to_lowercase()));
        sections.into_iter().map(|(name, _)| name).collect()
    }

    /// Entries outside any section, sorted by case-insensitive label.
    pub fn actions_in_root(&self) -> Vec<&MenuEntry<H>> {
        self.actions_where(|entry| entry.section().is_none())
    }

    /// Entries of `section`, sorted by case-insensitive label.
    pub fn actions_in_section(&self, section: &str) -> Vec<&MenuEntry<H>> {
        self.actions_where(|entry| entry.section() == Some(section))
    }

    fn actions_where(&self, predicate: impl Fn(&MenuEntry<H>) -> bool) -> Vec<&MenuEntry<H>> {
        let mut actions: Vec<&MenuEntry<H>> = self
            .entries
            .iter()
            .filter(|entry| predicate(*entry))
            .collect();

        actions.sort_by_cached_key(|entry| entry.label().to_lowercase());
        actions
    }
}
