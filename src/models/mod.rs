pub mod content;
pub mod entry;
pub mod feed;
pub mod session;
pub mod subscription;
pub mod unread;
pub mod user;
