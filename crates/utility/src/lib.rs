pub mod id;
pub mod serde;
pub mod time;
