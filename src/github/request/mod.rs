pub mod create_release_request;
