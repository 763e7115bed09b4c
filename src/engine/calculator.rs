// ============================================================================
// Scientific Calculator
// Pending-operator state machine with chained equals
// ============================================================================

use crate::display::{CalcError, CalcResult, DisplayBuffer, Rendered};
use crate::domain::{BinaryOperator, Constant, ScientificFunction};
use crate::interfaces::Keypad;

/// Engine state, derived from the pending operator and chain operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No operator since the last clear
    Idle,
    /// Operator pressed, waiting for `=`
    OperatorPending,
    /// At least one `=` since the operator; further `=` reapply it
    Chaining,
}

/// Keypad calculator with binary operators, unary functions and constants.
///
/// Operators are evaluated lazily on `=`. The first `=` computes
/// `memory <op> displayed` and remembers `displayed` as the chain operand;
/// each further `=` applies the same operator with that operand to the
/// running value.
#[derive(Debug, Clone)]
pub struct ScientificCalculator {
    buffer: DisplayBuffer,

    /// Left-hand operand captured on the last operator press
    memory: Option<f64>,

    /// Operator awaiting its right-hand operand
    pending: Option<BinaryOperator>,

    /// Right-hand operand reused by repeated `=`
    chain: Option<f64>,

    /// Running result across a chain of `=`
    value: f64,

    /// Next digit starts a new entry instead of appending
    lock_next_input: bool,
}

impl ScientificCalculator {
    pub fn new() -> Self {
        Self::with_buffer(DisplayBuffer::scientific())
    }

    pub fn with_buffer(buffer: DisplayBuffer) -> Self {
        Self {
            buffer,
            memory: None,
            pending: None,
            chain: None,
            value: 0.0,
            lock_next_input: false,
        }
    }

    pub fn state(&self) -> EngineState {
        match (self.pending, self.chain) {
            (None, _) => EngineState::Idle,
            (Some(_), None) => EngineState::OperatorPending,
            (Some(_), Some(_)) => EngineState::Chaining,
        }
    }

    pub fn memory(&self) -> Option<f64> {
        self.memory
    }

    pub fn pending_operator(&self) -> Option<BinaryOperator> {
        self.pending
    }

    /// Running result of the current chain
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Capture the display as the left operand and wait for `=`.
    ///
    /// # Errors
    /// Returns `Parse` (and shows "Error") if the display is not a number.
    pub fn operator(&mut self, op: BinaryOperator) -> CalcResult<()> {
        let lhs = self.buffer.get_value()?;

        self.memory = Some(lhs);
        self.pending = Some(op);
        self.chain = None;
        self.lock_next_input = true;

        tracing::trace!(operator = %op.symbol(), lhs, "operator pending");
        Ok(())
    }

    /// Apply a unary function to the displayed value.
    ///
    /// Operator state is left untouched, so the result can serve as the
    /// right-hand operand of a pending operator.
    ///
    /// # Errors
    /// Returns `Domain` for an unparseable display or an input outside the
    /// function's domain; the display shows "Error".
    pub fn function(&mut self, function: ScientificFunction) -> CalcResult<Rendered> {
        let input = self.displayed_operand()?;

        let result = match function.apply(input) {
            Ok(result) => result,
            Err(err) => {
                self.buffer.show_error();
                return Err(err);
            },
        };

        let previous = match function {
            ScientificFunction::Percent => 0.0,
            _ => input,
        };
        self.buffer.set_text(previous, result)
    }

    /// Show a constant without consuming an operand.
    pub fn constant(&mut self, constant: Constant) -> CalcResult<Rendered> {
        let previous = self.memory.unwrap_or(0.0);
        self.buffer.set_text(previous, constant.value())
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn displayed_operand(&mut self) -> CalcResult<f64> {
        self.buffer.parse_value().map_err(|_| {
            self.buffer.show_error();
            CalcError::Domain
        })
    }
}

impl Default for ScientificCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad for ScientificCalculator {
    fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    fn buffer_mut(&mut self) -> &mut DisplayBuffer {
        &mut self.buffer
    }

    fn update(&mut self, key: char) -> CalcResult<()> {
        if self.lock_next_input {
            self.buffer.clear();
            self.lock_next_input = false;
        }
        self.buffer.update(key)
    }

    fn clear(&mut self) {
        self.buffer.clear();
        self.memory = None;
        self.pending = None;
        self.chain = None;
        self.value = 0.0;
        self.lock_next_input = false;
    }

    /// Evaluate the pending operator.
    ///
    /// Does nothing without a pending operator or when the display is at its
    /// length cap. Division by zero shows "Error" and keeps the running value.
    fn equal(&mut self) -> CalcResult<Option<Rendered>> {
        let displayed = self.displayed_operand()?;

        let (Some(op), Some(memory)) = (self.pending, self.memory) else {
            return Ok(None);
        };
        if self.buffer.text().len() >= self.buffer.max_len() {
            return Ok(None);
        }

        let (lhs, rhs) = match self.chain {
            None => (memory, displayed),
            Some(chain) => (self.value, chain),
        };

        let result = match op.apply(lhs, rhs) {
            Ok(result) => result,
            Err(err) => {
                self.buffer.show_error();
                return Err(err);
            },
        };

        if self.chain.is_none() {
            self.chain = Some(displayed);
        }
        self.value = result;
        self.lock_next_input = true;

        tracing::trace!(operator = %op.symbol(), lhs, rhs, result, "equal");
        self.buffer.set_text(displayed, result).map(Some)
    }
}
