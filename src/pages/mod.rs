//! Routable pages of drello

pub mod board_page;
pub mod boards_page;
pub mod login_page;

pub use board_page::BoardPage;
pub use boards_page::BoardsPage;
pub use login_page::LoginPage;
