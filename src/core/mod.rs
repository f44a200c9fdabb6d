pub mod add;
pub mod backup;
pub mod del;
pub mod import;
pub mod project;
pub mod rules;
pub mod sync;
