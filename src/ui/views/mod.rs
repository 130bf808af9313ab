pub mod link;
pub mod watch;
