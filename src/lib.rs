pub mod vector;

pub use vector::Double3;
pub use vector::Vector3;
