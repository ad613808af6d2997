//! Console shell driving the file access layer.
//!
//! Numbered menus map user input onto a finite set of choices; the read-eval loop
//! dispatches each choice to one [`crate::file_handler::FileAccess`] operation and
//! prints the result or the error before prompting again.

pub mod menu;
pub mod repl;

// Public re-exports for convenience. Modules outside this crate should prefer importing
// from `crate::shell` rather than reaching into submodules.
pub use menu::{MainChoice, MenuChoice, ReadChoice, WriteChoice};
pub use repl::Shell;
