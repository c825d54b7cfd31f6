pub mod invoke;
pub mod serve;
