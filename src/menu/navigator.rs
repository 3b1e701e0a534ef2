use std::fmt;

use super::{MenuEntry, MenuRegistry};

/// Id of the synthetic row that leaves a section.
pub const BACK_ID: &str = "0";

/// Label of the synthetic row that leaves a section.
pub const BACK_LABEL: &str = "◀ Back";

/// Suffix marking rows that open a section.
pub const SECTION_MARKER: &str = "▶";

/// Case-insensitive inputs that leave a section.
pub const BACK_TOKENS: [&str; 3] = ["0", "back", "b"];

/// What the menu is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Root actions followed by the section headers.
    #[default]
    Root,

    /// The actions of one section, preceded by a back row.
    Section(String),
}

impl View {
    /// Name of the open section, `None` at the root.
    pub fn section(&self) -> Option<&str> {
        match self {
            View::Root => None,
            View::Section(name) => Some(name),
        }
    }
}

/// One line of a rendered menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// What the user types to pick this row.
    pub id: String,
    /// Text shown for the row.
    pub label: String,
}

/// Outcome of resolving user input against a view.
pub enum NavigationResult<'a, H> {
    /// Run this entry's action; the view does not change.
    Action(&'a MenuEntry<H>),
    /// Open the named section.
    EnterSection(String),
    /// Return to the root view.
    Back,
    /// The input does not name anything in the view.
    Invalid,
}

impl<H> fmt::Debug for NavigationResult<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationResult::Action(entry) => f.debug_tuple("Action").field(entry).finish(),
            NavigationResult::EnterSection(name) => {
                f.debug_tuple("EnterSection").field(name).finish()
            }
            NavigationResult::Back => write!(f, "Back"),
            NavigationResult::Invalid => write!(f, "Invalid"),
        }
    }
}

enum Target<'a, H> {
    Back,
    Action(&'a MenuEntry<H>),
    Section(&'a str),
}

struct Slot<'a, H> {
    id: usize,
    target: Target<'a, H>,
}

/// Renders views of a registry and classifies input against them.
///
/// The navigator holds no state of its own; the caller decides which view is
/// current and passes it to every call.
pub struct Navigator<'a, H> {
    registry: &'a MenuRegistry<H>,
}

impl<'a, H> Navigator<'a, H> {
    /// Creates a navigator over `registry`.
    pub fn new(registry: &'a MenuRegistry<H>) -> Self {
        Self { registry }
    }

    /// Rows to display for `view`.
    pub fn render(&self, view: &View) -> Vec<DisplayRow> {
        self.slots(view)
            .into_iter()
            .map(|slot| DisplayRow {
                id: slot.id.to_string(),
                label: match slot.target {
                    Target::Back => BACK_LABEL.to_string(),
                    Target::Action(entry) => entry.label().to_string(),
                    Target::Section(name) => format!("{name} {SECTION_MARKER}"),
                },
            })
            .collect()
    }

    /// Maps raw input to the row of `view` it names.
    ///
    /// Ids follow exactly the numbering produced by [`Navigator::render`] for
    /// the same view. Unknown, out of range and non-numeric input resolves to
    /// [`NavigationResult::Invalid`].
    pub fn resolve(&self, choice: &str, view: &View) -> NavigationResult<'a, H> {
        let choice = choice.trim();

        if view.section().is_some()
            && BACK_TOKENS
                .iter()
                .any(|token| token.eq_ignore_ascii_case(choice))
        {
            return NavigationResult::Back;
        }

        let Ok(id) = choice.parse::<usize>() else {
            return NavigationResult::Invalid;
        };

        // Back is reachable through its tokens only, so "00" or "+0" stay invalid.
        let slot = self.slots(view).into_iter().find(|slot| slot.id == id);
        match slot.map(|slot| slot.target) {
            Some(Target::Action(entry)) => NavigationResult::Action(entry),
            Some(Target::Section(name)) => NavigationResult::EnterSection(name.to_string()),
            Some(Target::Back) | None => NavigationResult::Invalid,
        }
    }

    /// Single construction of a view's id space, shared by render and resolve.
    fn slots(&self, view: &View) -> Vec<Slot<'a, H>> {
        let registry = self.registry;

        match view.section() {
            None => registry
                .actions_in_root()
                .into_iter()
                .map(Target::Action)
                .chain(registry.sections().into_iter().map(Target::Section))
                .enumerate()
                .map(|(index, target)| Slot {
                    id: index + 1,
                    target,
                })
                .collect(),
            Some(section) => std::iter::once(Target::Back)
                .chain(
                    registry
                        .actions_in_section(section)
                        .into_iter()
                        .map(Target::Action),
                )
                .enumerate()
                .map(|(id, target)| Slot { id, target })
                .collect(),
        }
    }
}
