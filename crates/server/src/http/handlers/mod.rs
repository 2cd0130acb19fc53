pub mod count;
pub mod events;
pub mod root;
