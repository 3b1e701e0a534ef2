use std::fmt;

use tracing::warn;

use crate::{Result, console::Console};

/// Sort priority given to items registered without an explicit order.
///
/// Large enough that every realistic explicit order sorts before it.
pub const DEFAULT_ORDER: i64 = 10_000;

/// Identifiers starting with this character are internal and never listed.
pub const INTERNAL_PREFIX: char = '_';

/// Signature of a menu action.
///
/// Actions receive the host they were registered by and the session console,
/// so they can prompt for further input and print their results.
pub type ActionFn<H> = dyn Fn(&mut H, &mut dyn Console) -> Result<()>;

/// A type whose operations can be offered through the menu.
///
/// Implementors list every action they expose once; the registry derives
/// sections and ordering from the returned metadata.
pub trait MenuHost: Sized {
    /// Returns the registration list for this host.
    fn menu_items(&self) -> Vec<MenuItem<Self>>;
}

/// Registration of a single action, built with a chain of setters.
///
/// ```
/// use datamenu::menu::MenuItem;
///
/// struct Counter(u32);
///
/// let item = MenuItem::new("increment", |counter: &mut Counter, _console| {
///     counter.0 += 1;
///     Ok(())
/// })
/// .order(1)
/// .section("Edit");
/// # let _ = item;
/// ```
pub struct MenuItem<H> {
    identifier: String,
    label: Option<String>,
    order: Option<i64>,
    section: Option<String>,
    action: Box<ActionFn<H>>,
}

impl<H> MenuItem<H> {
    /// Registers `action` under `identifier`.
    ///
    /// The identifier doubles as the default label, with `_` shown as a space.
    pub fn new<F>(identifier: impl Into<String>, action: F) -> Self
    where
        F: Fn(&mut H, &mut dyn Console) -> Result<()> + 'static,
    {
        Self {
            identifier: identifier.into(),
            label: None,
            order: None,
            section: None,
            action: Box::new(action),
        }
    }

    /// Sets the display label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the sort priority; lower values are listed first.
    pub fn order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    /// Places the action in a submenu. An empty name keeps it at the root.
    pub fn section(mut self, section: impl Into<String>) -> Self {
        let section = section.into();
        self.section = (!section.is_empty()).then_some(section);
        self
    }

    /// Identifier the item was registered under.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Turns the registration into an entry, or `None` if it must not be listed.
    pub(crate) fn into_entry(self) -> Option<MenuEntry<H>> {
        if self.identifier.starts_with(INTERNAL_PREFIX) {
            return None;
        }

        let label = match self.label {
            Some(label) if !label.trim().is_empty() => label,
            _ => self.identifier.replace('_', " ").trim().to_string(),
        };
        if label.is_empty() {
            warn!(identifier = %self.identifier, "Skipping menu item without a usable label");
            return None;
        }

        Some(MenuEntry {
            order: self.order.unwrap_or(DEFAULT_ORDER),
            section: self.section,
            label,
            identifier: self.identifier,
            action: self.action,
        })
    }
}

/// One discovered action with its display metadata.
pub struct MenuEntry<H> {
    order: i64,
    section: Option<String>,
    label: String,
    identifier: String,
    action: Box<ActionFn<H>>,
}

impl<H> MenuEntry<H> {
    /// Primary sort key.
    pub fn order(&self) -> i64 {
        self.order
    }

    /// Submenu this entry belongs to, `None` for the root.
    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    /// Text shown in the menu. Never empty.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Identifier the entry was registered under.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Runs the action against `host`.
    ///
    /// # Errors
    /// Propagates whatever error the action reports.
    pub fn invoke(&self, host: &mut H, console: &mut dyn Console) -> Result<()> {
        (self.action)(host, console)
    }
}

impl<H> fmt::Debug for MenuEntry<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuEntry")
            .field("order", &self.order)
            .field("section", &self.section)
            .field("label", &self.label)
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}
