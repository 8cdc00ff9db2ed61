use crate::domain::ports::Logger;

pub struct CalculatorService<L: Logger> {
    logger: L,
}

impl<L: Logger> CalculatorService<L> {
    pub fn new(logger: L) -> Self {
        Self { logger }
    }

    pub fn add(&self, a: f64, b: f64) -> f64 {
        self.logger.log("Addition operation called");
        a + b
    }

    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        self.logger.log("Subtraction operation called");
        a - b
    }
}
