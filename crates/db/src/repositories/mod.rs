//! Repositories: one per table, stateless, operating on a borrowed pool.

pub mod booking_repo;
pub mod material_repo;
pub mod request_repo;

pub use booking_repo::BookingRepo;
pub use material_repo::MaterialRepo;
pub use request_repo::RequestRepo;
