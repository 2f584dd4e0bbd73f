pub mod booking_repository;
pub mod cabin_repository;
pub mod guest_repository;

// Re-export all repositories for convenient access
pub use booking_repository::BookingRepository;
pub use cabin_repository::CabinRepository;
pub use guest_repository::GuestRepository;
