mod extract_tests;
mod timestamp_tests;
