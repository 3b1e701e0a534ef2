//! Datamenu - interactive numbered menus over annotated actions.
//!
//! A host type registers its actions through [`menu::MenuHost`]. The
//! [`menu::MenuSession`] turns those registrations into a two-level menu
//! of root actions and named sections, reads numeric choices from a
//! [`console::Console`] and runs the selected action. The bundled
//! [`analysis::DataAnalysis`] host exposes previews and statistics over a
//! CSV file.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use datamenu::{
//!     console::{Console, StdConsole},
//!     menu::{MenuHost, MenuItem, MenuSession, SessionOptions},
//!     printer::{Output, Printer},
//! };
//!
//! struct Greeter;
//!
//! impl Greeter {
//!     fn hello(&mut self, console: &mut dyn Console) -> datamenu::Result<()> {
//!         console.emit(&Output::plain("Hello!"));
//!         Ok(())
//!     }
//! }
//!
//! impl MenuHost for Greeter {
//!     fn menu_items(&self) -> Vec<MenuItem<Self>> {
//!         vec![MenuItem::new("hello", Self::hello).label("Say hello")]
//!     }
//! }
//!
//! let console = StdConsole::new(Printer::new(true));
//! let mut session = MenuSession::new(Greeter, console, SessionOptions::default());
//! session.run()?;
//! # Ok::<(), datamenu::DatamenuError>(())
//! ```

/// CSV workbench host with preview and statistics actions.
pub mod analysis;

/// Configuration schema definitions and loading.
pub mod config;

/// Line-oriented console abstraction.
pub mod console;

/// Core error types and result aliases.
pub mod core;

/// Tabular data loading and statistics.
pub mod data;

/// Menu registration, navigation and the interactive session.
pub mod menu;

/// Output values and their terminal rendering.
pub mod printer;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{DatamenuError, Result};
