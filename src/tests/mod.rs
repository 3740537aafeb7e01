pub mod common;

mod business_calls;
