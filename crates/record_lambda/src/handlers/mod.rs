pub mod event;
pub mod lister;
pub mod recorder;
pub mod response;
