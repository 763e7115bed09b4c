// ============================================================================
// Calculator Operations
// Binary operators, scientific functions and constants
// ============================================================================

use crate::display::{CalcError, CalcResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Binary operator awaiting its right-hand operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    /// Apply the operator.
    ///
    /// # Errors
    /// - `DivisionByZero` for a zero divisor
    /// - `Domain` when the result overflows to a non-finite value
    pub fn apply(self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        let result = match self {
            BinaryOperator::Add => lhs + rhs,
            BinaryOperator::Subtract => lhs - rhs,
            BinaryOperator::Multiply => lhs * rhs,
            BinaryOperator::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                lhs / rhs
            },
        };
        finite(result)
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
        }
    }
}

/// Unary function applied to the displayed value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScientificFunction {
    Factorial,
    SquareRoot,
    CubeRoot,
    Square,
    Cube,
    /// Argument in degrees
    Sin,
    /// Argument in degrees
    Cos,
    /// Argument in degrees
    Tan,
    Sinh,
    Cosh,
    Tanh,
    Ln,
    Log10,
    Percent,
}

/// Largest n with a finite n! in f64
const MAX_FACTORIAL: f64 = 170.0;

impl ScientificFunction {
    pub const ALL: [ScientificFunction; 14] = [
        ScientificFunction::Factorial,
        ScientificFunction::SquareRoot,
        ScientificFunction::CubeRoot,
        ScientificFunction::Square,
        ScientificFunction::Cube,
        ScientificFunction::Sin,
        ScientificFunction::Cos,
        ScientificFunction::Tan,
        ScientificFunction::Sinh,
        ScientificFunction::Cosh,
        ScientificFunction::Tanh,
        ScientificFunction::Ln,
        ScientificFunction::Log10,
        ScientificFunction::Percent,
    ];

    /// Evaluate the function.
    ///
    /// # Errors
    /// Returns `Domain` for inputs outside the function's domain and for
    /// results that are not finite.
    pub fn apply(self, value: f64) -> CalcResult<f64> {
        let result = match self {
            ScientificFunction::Factorial => factorial(value)?,
            ScientificFunction::SquareRoot => {
                if value < 0.0 {
                    return Err(CalcError::Domain);
                }
                value.sqrt()
            },
            ScientificFunction::CubeRoot => value.cbrt(),
            ScientificFunction::Square => value.powi(2),
            ScientificFunction::Cube => value.powi(3),
            ScientificFunction::Sin => value.to_radians().sin(),
            ScientificFunction::Cos => value.to_radians().cos(),
            ScientificFunction::Tan => value.to_radians().tan(),
            ScientificFunction::Sinh => value.sinh(),
            ScientificFunction::Cosh => value.cosh(),
            ScientificFunction::Tanh => value.tanh(),
            ScientificFunction::Ln => {
                if value <= 0.0 {
                    return Err(CalcError::Domain);
                }
                value.ln()
            },
            ScientificFunction::Log10 => {
                if value <= 0.0 {
                    return Err(CalcError::Domain);
                }
                value.log10()
            },
            ScientificFunction::Percent => value / 100.0,
        };
        finite(result)
    }

    /// Keypad label
    pub fn label(self) -> &'static str {
        match self {
            ScientificFunction::Factorial => "x!",
            ScientificFunction::SquareRoot => "√x",
            ScientificFunction::CubeRoot => "∛x",
            ScientificFunction::Square => "x²",
            ScientificFunction::Cube => "x³",
            ScientificFunction::Sin => "sin",
            ScientificFunction::Cos => "cos",
            ScientificFunction::Tan => "tan",
            ScientificFunction::Sinh => "sinh",
            ScientificFunction::Cosh => "cosh",
            ScientificFunction::Tanh => "tanh",
            ScientificFunction::Ln => "ln",
            ScientificFunction::Log10 => "log",
            ScientificFunction::Percent => "%",
        }
    }
}

/// Constant keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Constant {
    E,
    Pi,
}

impl Constant {
    pub fn value(self) -> f64 {
        match self {
            Constant::E => std::f64::consts::E,
            Constant::Pi => std::f64::consts::PI,
        }
    }
}

fn factorial(value: f64) -> CalcResult<f64> {
    if value < 0.0 || value.fract() != 0.0 || value > MAX_FACTORIAL {
        return Err(CalcError::Domain);
    }
    Ok((2..=value as u32).fold(1.0, |acc, n| acc * f64::from(n)))
}

fn finite(value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::Domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_operators() {
        assert_eq!(BinaryOperator::Add.apply(5.0, 3.0).unwrap(), 8.0);
        assert_eq!(BinaryOperator::Subtract.apply(5.0, 3.0).unwrap(), 2.0);
        assert_eq!(BinaryOperator::Multiply.apply(5.0, 3.0).unwrap(), 15.0);
        assert_eq!(BinaryOperator::Divide.apply(6.0, 3.0).unwrap(), 2.0);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            BinaryOperator::Divide.apply(7.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_overflow_is_domain_error() {
        assert_eq!(
            BinaryOperator::Multiply.apply(f64::MAX, 10.0),
            Err(CalcError::Domain)
        );
    }

    #[test]
    fn test_factorial_domain() {
        assert_eq!(ScientificFunction::Factorial.apply(5.0).unwrap(), 120.0);
        assert_eq!(ScientificFunction::Factorial.apply(0.0).unwrap(), 1.0);
        assert_eq!(ScientificFunction::Factorial.apply(-1.0), Err(CalcError::Domain));
        assert_eq!(ScientificFunction::Factorial.apply(2.5), Err(CalcError::Domain));
        assert_eq!(ScientificFunction::Factorial.apply(171.0), Err(CalcError::Domain));
    }

    #[test]
    fn test_roots_and_logs() {
        assert_eq!(ScientificFunction::SquareRoot.apply(16.0).unwrap(), 4.0);
        assert_eq!(ScientificFunction::SquareRoot.apply(-4.0), Err(CalcError::Domain));
        assert_eq!(ScientificFunction::CubeRoot.apply(-27.0).unwrap(), -3.0);
        let log = ScientificFunction::Log10.apply(1000.0).unwrap();
        assert!((log - 3.0).abs() < 1e-12);
        assert_eq!(ScientificFunction::Ln.apply(0.0), Err(CalcError::Domain));
        assert_eq!(ScientificFunction::Log10.apply(-1.0), Err(CalcError::Domain));
    }

    #[test]
    fn test_trig_uses_degrees() {
        let sin = ScientificFunction::Sin.apply(30.0).unwrap();
        assert!((sin - 0.5).abs() < 1e-12);
        let cos = ScientificFunction::Cos.apply(180.0).unwrap();
        assert!((cos + 1.0).abs() < 1e-12);
        let tan = ScientificFunction::Tan.apply(45.0).unwrap();
        assert!((tan - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_percent_and_powers() {
        assert_eq!(ScientificFunction::Percent.apply(50.0).unwrap(), 0.5);
        assert_eq!(ScientificFunction::Square.apply(-3.0).unwrap(), 9.0);
        assert_eq!(ScientificFunction::Cube.apply(2.0).unwrap(), 8.0);
    }

    #[test]
    fn test_cosh_overflow() {
        assert_eq!(ScientificFunction::Cosh.apply(1000.0), Err(CalcError::Domain));
    }
}
