pub mod bookings;
pub mod contact_info;
pub mod error;
pub mod health;
pub mod resources;
pub mod slots;

pub use error::AppError;
