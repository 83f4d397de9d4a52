pub mod clients;
pub mod dashboard;
pub mod home;
pub mod not_found;

pub use clients::Clients;
pub use dashboard::Dashboard;
pub use home::Home;
pub use not_found::NotFound;
