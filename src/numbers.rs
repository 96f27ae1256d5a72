//Fixed input for the array exercise
pub const EXERCISE_VALUES: [f64; 3] = [10.0, 20.0, 30.0];

//Reduce the slice into its sum starting from 0, past f64::MAX it goes to infinity
pub fn sum(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, val| acc + val)
}
