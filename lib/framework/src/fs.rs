pub mod path;
pub mod scratch;
