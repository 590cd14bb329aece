pub mod nullable;
pub mod number;
pub mod response;

pub use nullable::deserialize_nullable;
pub use number::{deserialize_optional_f64, deserialize_string_to_i64};
pub use response::MessageResponse;
