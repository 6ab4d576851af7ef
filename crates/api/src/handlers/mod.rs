pub mod doh;
pub mod health;
pub mod landing;
pub mod providers;
pub mod resolve;

pub use doh::{answer_options, dns_query_get, dns_query_post, method_not_allowed};
pub use health::health_check;
pub use landing::{landing, not_found};
pub use providers::{get_providers, get_stats, run_bench};
pub use resolve::resolve_name;
