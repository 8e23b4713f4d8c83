/// State handed to every request handler.
pub mod http_service_data;
