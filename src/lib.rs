// Main library file for the hotel booking manager

// Export modules for each part of the system
pub mod hotel;
pub mod model;
pub mod shared;

// Re-export key types for convenience
pub use hotel::{AvailabilityStatus, Booking, BookingError, BookingStatus, ErrorKind, Hotel};
pub use model::{Guest, Room, RoomType};
pub use shared::SharedHotel;
