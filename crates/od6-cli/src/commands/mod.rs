pub mod character;
pub mod roll;
pub mod stats;
pub mod template;
