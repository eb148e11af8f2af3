pub mod generate_test_inserts;
