mod executor_tests;
mod utils_tests;
