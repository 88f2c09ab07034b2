pub mod logging;
pub mod slug;
