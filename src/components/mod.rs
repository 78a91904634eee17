//! # Concrete components
//!
//! Every component module exposes its locators as public constants (and
//! functions for locators that depend on a title or a name), so tests can
//! build fixtures against exactly what the page objects look for.
//!
//! ## Module structure
//! - `main_header`: header shared by every signed-in page
//! - `boards`: boards overview (create form, boards list, templates)
//! - `board`: a single board (header, settings, columns, tasks)
//! - `task`: the task settings popup

pub mod board;
pub mod boards;
pub mod main_header;
pub mod task;

pub use board::{BoardSettingsPopup, Column, ColumnsList, Header, Task, TaskList};
pub use boards::{BoardTemplates, BoardsList, CreateBoardForm};
pub use main_header::MainHeader;
pub use task::TaskSettingsPopup;
