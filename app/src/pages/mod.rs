mod info;
mod not_found;
mod register;

pub use info::InfoPage;
pub use not_found::NotFound;
pub use register::RegisterPage;
