mod get;
mod show;

pub use get::run_get;
pub use show::run_show;
