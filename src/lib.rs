pub mod greeting;
pub mod numbers;
pub mod runner;
pub mod vehicle;
