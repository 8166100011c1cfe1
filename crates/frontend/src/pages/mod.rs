pub mod charts;
pub mod home;
pub mod not_found;
pub mod reports;

pub use charts::ChartsPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use reports::ReportsPage;
