mod support;

mod gate_tests;
mod session_tests;
mod store_tests;
mod token_tests;
mod validation_tests;
