mod rewrite;
mod status;
mod uid;

pub use rewrite::run_rewrite;
pub use status::run_status;
pub use uid::run_uid;
