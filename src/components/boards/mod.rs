//! Components of the boards overview page

pub mod board_templates;
pub mod boards_list;
pub mod create_board_form;

pub use board_templates::BoardTemplates;
pub use boards_list::BoardsList;
pub use create_board_form::CreateBoardForm;
