pub mod app;
pub mod borrow;
pub mod dashboard;
pub mod landing;
pub mod lend;
pub mod liquidate;
pub mod navbar;
pub mod register_modal;
pub mod tokenize;

pub use app::{App, Route};
pub use borrow::Borrow;
pub use dashboard::Dashboard;
pub use landing::Landing;
pub use lend::Lend;
pub use liquidate::Liquidate;
pub use navbar::Navbar;
pub use register_modal::RegisterModal;
pub use tokenize::Tokenize;
