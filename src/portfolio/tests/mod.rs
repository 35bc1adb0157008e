pub(crate) mod history_calculator_tests;
