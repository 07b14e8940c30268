mod choice_tests;
mod order_tests;
mod session_tests;
