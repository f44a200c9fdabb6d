pub mod initialize;
pub mod log;
pub mod meta;
pub mod migrate;
pub mod pool;
pub mod queries;
