mod handlers;
mod request_id;
mod routes;
mod state;

pub use request_id::REQUEST_ID_HEADER;
pub use routes::create_router;
pub use state::{AppState, Limits};
