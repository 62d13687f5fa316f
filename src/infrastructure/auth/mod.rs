pub mod middleware;
pub mod request_id;

pub use middleware::{api_key_middleware, API_KEY_QUERY_PARAM};
pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};
