//! FizzBuzz, with the FizzWhiz twist for 3

/// Word substitution for counting games
#[derive(Debug, Clone, Copy, Default)]
pub struct FizzBuzz;

impl FizzBuzz {
    pub fn new() -> Self {
        Self
    }

    /// The word (or number) to say for `n`
    pub fn go(&self, n: u32) -> String {
        if n == 3 {
            return "FizzWhiz".to_string();
        }
        match (n % 3 == 0, n % 5 == 0) {
            (true, true) => "FizzBuzz".to_string(),
            (false, true) => "Buzz".to_string(),
            (true, false) => "Fizz".to_string(),
            (false, false) => n.to_string(),
        }
    }
}
