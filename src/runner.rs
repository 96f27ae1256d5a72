use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};

use crate::greeting::{GREETING, welcome};
use crate::numbers::{EXERCISE_VALUES, sum};
use crate::vehicle::Car;

const WELCOME_NAME: &str = "Ana";

fn step_info(print_log: &str, start_time: &Instant) {
    log::info!("Till -- {} : {:?}", print_log, start_time.elapsed());
}

/// Writes the greeting followed by the three exercises, in order, to `out`.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let start_time = Instant::now();

    writeln!(out, "{GREETING}").context("failed to write greeting")?;
    step_info("Greeting", &start_time);

    //=====================================================================================================
    log::info!("Exercise 1: summing {:?}", EXERCISE_VALUES);
    writeln!(out, "Exercício 1").context("failed to write exercise 1 header")?;
    writeln!(out, "Soma dos valores: {}", sum(&EXERCISE_VALUES))
        .context("failed to write exercise 1 result")?;
    step_info("Exercise 1", &start_time);

    //=====================================================================================================
    log::info!("Exercise 2: welcoming {WELCOME_NAME}");
    writeln!(out, "Exercício 2").context("failed to write exercise 2 header")?;
    writeln!(out, "{}", welcome(WELCOME_NAME)).context("failed to write exercise 2 result")?;
    step_info("Exercise 2", &start_time);

    //=====================================================================================================
    let car = Car::new("Toyota", "Corolla", 2022);
    log::info!("Exercise 3: {:?}", car);
    writeln!(out, "Exercício 3").context("failed to write exercise 3 header")?;
    writeln!(out, "{}", car.describe()).context("failed to write exercise 3 result")?;
    step_info("Exercise 3", &start_time);

    Ok(())
}
