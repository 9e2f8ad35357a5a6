pub mod cfbd_api;

pub use cfbd_api::CfbdClient;
