pub mod home_page;
pub mod not_found;
pub mod shell;

pub use home_page::HomePage;
pub use not_found::NotFound;
pub use shell::{BrandHeader, LOGO_SRC};
