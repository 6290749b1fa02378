//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod board_repo;
pub mod comment_repo;
pub mod layer_repo;
pub mod membership_repo;
pub mod shape_repo;
pub mod user_repo;

pub use board_repo::BoardRepo;
pub use comment_repo::CommentRepo;
pub use layer_repo::LayerRepo;
pub use membership_repo::MembershipRepo;
pub use shape_repo::ShapeRepo;
pub use user_repo::UserRepo;
