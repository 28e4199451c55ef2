//! The smaller practice katas
//!
//! Each one is a pure function or a stateless value with its own tests.

pub mod age_calculator;
pub mod fizz_buzz;
pub mod greeter;
pub mod rock_paper_scissors;
pub mod string_calculator;

pub use age_calculator::age_in_years;
pub use fizz_buzz::FizzBuzz;
pub use greeter::{hello_person, hello_world};
pub use rock_paper_scissors::{play, Move, Outcome};
pub use string_calculator::StringCalculator;
