use tracing::{debug, info, instrument, warn};

use crate::{
    Result,
    console::Console,
    printer::{Output, Table},
};

use super::{MenuHost, MenuRegistry, NavigationResult, Navigator, View};

/// Tunables of the interactive loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Title shown above every menu.
    pub title: String,

    /// Inputs that end the session from any view, compared case-insensitively.
    pub quit_tokens: Vec<String>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            title: "Menu".to_string(),
            quit_tokens: vec!["q".to_string(), "quit".to_string(), "exit".to_string()],
        }
    }
}

/// Counters describing how a session went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Actions that completed.
    pub actions_run: usize,
    /// Actions that returned an error.
    pub actions_failed: usize,
    /// Inputs that did not name anything.
    pub invalid_choices: usize,
}

enum Turn {
    Continue,
    Quit,
}

/// The interactive loop driving a [`MenuHost`] through a [`Console`].
///
/// The session owns the only piece of navigation state, the current
/// [`View`]. Every turn renders the view, reads one line and acts on it.
/// Failing actions are reported and the loop carries on in the same view.
pub struct MenuSession<H, C> {
    registry: MenuRegistry<H>,
    host: H,
    console: C,
    options: SessionOptions,
    view: View,
}

impl<H: MenuHost, C: Console> MenuSession<H, C> {
    /// Discovers the actions of `host` and prepares a session at the root view.
    pub fn new(host: H, console: C, options: SessionOptions) -> Self {
        let mut registry = MenuRegistry::new();
        registry.discover(&host);

        Self {
            registry,
            host,
            console,
            options,
            view: View::Root,
        }
    }

    /// The registry built from the host.
    pub fn registry(&self) -> &MenuRegistry<H> {
        &self.registry
    }

    /// The view the next turn will show.
    pub fn view(&self) -> &View {
        &self.view
    }

    /// The host actions operate on.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The console the session talks through.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Consumes the session, handing back the host and console.
    pub fn into_parts(self) -> (H, C) {
        (self.host, self.console)
    }

    /// Runs turns until the user quits or the input ends.
    ///
    /// # Errors
    /// Returns an error only if reading from the console fails. Action
    /// failures are reported to the user and do not end the session.
    #[instrument(skip_all, fields(title = %self.options.title))]
    pub fn run(&mut self) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        if self.registry.is_empty() {
            info!("No menu actions discovered");
            self.console.emit(&Output::error("No actions available."));
            return Ok(summary);
        }

        info!(entries = self.registry.len(), "Menu session started");

        loop {
            self.show_view();

            let Some(line) = self.console.read_line(&self.prompt())? else {
                debug!("Input exhausted");
                self.console.emit(&Output::info("Exiting."));
                break;
            };

            if let Turn::Quit = self.handle(&line, &mut summary) {
                self.console.emit(&Output::info("Exiting."));
                break;
            }
        }

        info!(?summary, "Menu session ended");
        Ok(summary)
    }

    fn show_view(&mut self) {
        let title = match self.view.section() {
            None => self.options.title.clone(),
            Some(section) => format!("{} / {section}", self.options.title),
        };
        let quit = self.options.quit_tokens.first().map_or("q", String::as_str);
        self.console
            .emit(&Output::info(format!("{title} (press '{quit}' to quit)")));

        let mut table = Table::new(["id", "action"]);
        for row in Navigator::new(&self.registry).render(&self.view) {
            table.push_row([row.id, row.label]);
        }
        self.console.emit(&Output::Table(table));
    }

    fn prompt(&self) -> String {
        let mut prompt = String::from("Select an option by id");
        if self.view.section().is_some() {
            prompt.push_str(" ('0' to go back)");
        }
        prompt.push_str(": ");
        prompt
    }

    fn handle(&mut self, line: &str, summary: &mut SessionSummary) -> Turn {
        let choice = line.trim().to_lowercase();

        if self.options.quit_tokens.iter().any(|token| token.eq_ignore_ascii_case(&choice)) {
            debug!(%choice, "Quit requested");
            return Turn::Quit;
        }

        let navigator = Navigator::new(&self.registry);
        match navigator.resolve(&choice, &self.view) {
            NavigationResult::Action(entry) => {
                debug!(action = entry.identifier(), "Running menu action");
                match entry.invoke(&mut self.host, &mut self.console) {
                    Ok(()) => summary.actions_run += 1,
                    Err(e) => {
                        warn!(action = entry.identifier(), error = %e, "Menu action failed");
                        summary.actions_failed += 1;
                        self.console
                            .emit(&Output::error(format!("Error while executing action: {e}")));
                    }
                }
            }
            NavigationResult::EnterSection(section) => {
                debug!(%section, "Entering section");
                self.view = View::Section(section);
            }
            NavigationResult::Back => {
                debug!("Returning to root view");
                self.view = View::Root;
            }
            NavigationResult::Invalid => {
                debug!(%choice, "Invalid menu choice");
                summary.invalid_choices += 1;
                self.console
                    .emit(&Output::error("Invalid choice. Please try again."));
            }
        }

        Turn::Continue
    }
}
