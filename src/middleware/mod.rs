pub mod http_logger;
