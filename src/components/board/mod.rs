//! Components of a single board
//!
//! Nesting follows the page: [`ColumnsList`] → [`Column`] → [`TaskList`] →
//! [`Task`]. Nested components carry the root locator of their parent and
//! scope their own locators under it.

pub mod column;
pub mod columns_list;
pub mod header;
pub mod settings_popup;
pub mod task;
pub mod task_list;

pub use column::Column;
pub use columns_list::ColumnsList;
pub use header::Header;
pub use settings_popup::BoardSettingsPopup;
pub use task::Task;
pub use task_list::TaskList;
