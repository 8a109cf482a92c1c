//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod film_repo;
pub mod frame_repo;
pub mod user_repo;

pub use film_repo::FilmRepo;
pub use frame_repo::FrameRepo;
pub use user_repo::UserRepo;
