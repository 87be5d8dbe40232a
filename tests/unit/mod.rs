mod application;
mod common;
mod test_error;
