use thiserror::Error;

/// Domain errors of the banking session. All of these are recovered
/// locally by the menu loop; none of them end the session.
#[derive(Debug, Error, PartialEq)]
pub enum BankError {
    #[error("Amount cannot be negative: {0:.2}")]
    InvalidAmount(f64),
    #[error("INSUFFICIENT FUNDS: requested ${requested:.2}, available ${available:.2}")]
    InsufficientFunds { requested: f64, available: f64 },
    #[error("Invalid choice: {0}")]
    InvalidChoice(String),
}

/// One banking session: the running balance and the loop-continuation flag.
#[derive(Debug)]
pub struct Session {
    balance: f64,
    running: bool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            balance: 0.0,
            running: true,
        }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Add a non-negative amount to the balance. A negative amount is
    /// rejected and nothing is applied.
    pub fn deposit(&mut self, amount: f64) -> Result<(), BankError> {
        if amount < 0.0 {
            return Err(BankError::InvalidAmount(amount));
        }
        self.balance += amount;
        Ok(())
    }

    /// Subtract a non-negative amount that does not exceed the balance.
    /// On rejection the balance is left untouched; the balance can never
    /// go below zero through this method.
    pub fn withdraw(&mut self, amount: f64) -> Result<(), BankError> {
        if amount > self.balance {
            return Err(BankError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        if amount < 0.0 {
            return Err(BankError::InvalidAmount(amount));
        }
        self.balance -= amount;
        Ok(())
    }

    /// End the session; the menu loop stops after the current iteration.
    pub fn stop(&mut self) {
        self.running = false;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
