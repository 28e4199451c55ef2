//! Hello-world greeter

pub fn hello_world() -> String {
    "Hello, World!".to_string()
}

/// Greet someone by name; an empty name still gets a greeting
pub fn hello_person(name: &str) -> String {
    format!("Hello {}!", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_world() {
        assert_eq!(hello_world(), "Hello, World!");
    }

    #[test]
    fn test_hello_person() {
        assert_eq!(hello_person("Peter"), "Hello Peter!");
        assert_eq!(hello_person(""), "Hello !");
    }
}
