pub mod summarize_request;
pub mod summarize_response;
pub mod summarize_route;
