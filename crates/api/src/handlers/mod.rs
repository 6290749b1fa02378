pub mod board;
pub mod comment;
pub mod layer;
pub mod me;
pub mod shape;
pub mod subscription;
