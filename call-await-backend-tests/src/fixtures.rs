mod client_options {
    mod headers;
    mod redirects;
    mod request_timeout;
    mod response_size;
    mod user_agent;
}
mod errors {
    mod connection;
    mod unsuccessful_status;
}
mod responses;
mod scenarios {
    mod cancellation;
    mod chunked_encoding;
    mod request_header_override;
}
