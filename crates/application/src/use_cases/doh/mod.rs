mod handle_doh_query;
mod resolve_name;

pub use handle_doh_query::{DohPayload, HandleDohQueryUseCase};
pub use resolve_name::ResolveNameUseCase;
