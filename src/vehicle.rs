use std::fmt;

//Define a datastructure for a car, created once and only read afterwards
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Car {
    pub maker: String,
    pub model: String,
    pub year: u16,
}

impl Car {
    pub fn new(maker: impl Into<String>, model: impl Into<String>, year: u16) -> Self {
        Car {
            maker: maker.into(),
            model: model.into(),
            year,
        }
    }

    /// Describes the car as `"<maker> <model>, Ano: <year>"`.
    pub fn describe(&self) -> String {
        format!("{} {}, Ano: {}", self.maker, self.model, self.year)
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_corolla() {
        let car = Car::new("Toyota", "Corolla", 2022);
        assert_eq!(car.describe(), "Toyota Corolla, Ano: 2022");
    }

    #[test]
    fn test_display_matches_describe() {
        let car = Car::new("Fiat", "Uno", 1995);
        assert_eq!(car.to_string(), car.describe());
    }

    #[test]
    fn test_new_keeps_constructed_values() {
        let car = Car::new("Honda", "Civic", 2019);
        assert_eq!(car.maker, "Honda");
        assert_eq!(car.model, "Civic");
        assert_eq!(car.year, 2019);
    }

    #[test]
    fn test_serializes_with_field_names() {
        let car = Car::new("Toyota", "Corolla", 2022);
        let json = serde_json::to_value(&car).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "maker": "Toyota", "model": "Corolla", "year": 2022 })
        );

        let back: Car = serde_json::from_value(json).unwrap();
        assert_eq!(back, car);
    }
}
