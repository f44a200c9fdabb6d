pub mod entry;
pub mod entry_type;
pub mod period;
pub mod project;
pub mod sync_status;
