//Fixed opening line printed before the exercises
pub const GREETING: &str = "Olá, TypeScript!";

/// Builds the personalized welcome line for `name`.
///
/// The name is embedded as given; an empty name is not rejected.
pub fn welcome(name: &str) -> String {
    format!("Olá, {name}! Bem-vindo ao TypeScript.")
}
