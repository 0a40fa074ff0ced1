use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::bank::session::{BankError, Session};
use crate::console;

/// One menu-selectable operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ShowBalance,
    Deposit,
    Withdraw,
    Exit,
}

impl Action {
    /// Parse a menu selection. Anything other than an integer in 1..=4
    /// is an invalid choice.
    pub fn from_choice(input: &str) -> Result<Self, BankError> {
        match input.trim().parse::<u32>() {
            Ok(1) => Ok(Action::ShowBalance),
            Ok(2) => Ok(Action::Deposit),
            Ok(3) => Ok(Action::Withdraw),
            Ok(4) => Ok(Action::Exit),
            _ => Err(BankError::InvalidChoice(input.trim().to_string())),
        }
    }
}

const MENU: &[&str] = &[
    "***************",
    "BANKING PROGRAM",
    "***************",
    "1. Show Balance",
    "2. Deposit",
    "3. Withdraw",
    "4. Exit",
    "***************",
];

/// Run one interactive banking session until the user exits or input ends.
///
/// The loop prints the menu, reads one choice, dispatches, and repeats.
/// Domain errors (invalid choice, negative amount, insufficient funds) are
/// printed and recovered; only I/O failure ends the session early.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    let mut session = Session::new();
    tracing::info!("banking session started");

    while session.is_running() {
        for line in MENU {
            writeln!(output, "{}", line.cyan())?;
        }

        let choice = match console::prompt(input, output, "Enter your choice (1-4): ")? {
            Some(choice) => choice,
            None => break,
        };

        match Action::from_choice(&choice) {
            Ok(Action::ShowBalance) => {
                writeln!(output, "${:.2}", session.balance())?;
            }
            Ok(Action::Deposit) => {
                if let Some(amount) =
                    prompt_amount(input, output, "Enter an amount to be deposited: ")?
                {
                    if let Err(e) = session.deposit(amount) {
                        tracing::debug!(amount, "deposit rejected");
                        writeln!(output, "{}", e.to_string().red())?;
                    }
                }
            }
            Ok(Action::Withdraw) => {
                if let Some(amount) =
                    prompt_amount(input, output, "Enter an amount to be withdrawn: ")?
                {
                    if let Err(e) = session.withdraw(amount) {
                        tracing::debug!(amount, "withdrawal rejected");
                        writeln!(output, "{}", e.to_string().red())?;
                    }
                }
            }
            Ok(Action::Exit) => {
                session.stop();
            }
            Err(e) => {
                writeln!(output, "{}", e.to_string().red())?;
            }
        }
    }

    tracing::info!(balance = session.balance(), "banking session ended");
    writeln!(output, "Thank you, have a great day!")?;
    Ok(())
}

/// Prompt for a currency amount. Returns `None` on end of input or when
/// the line does not parse as a number; the caller skips the action.
fn prompt_amount<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<Option<f64>> {
    let line = match console::prompt(input, output, text)? {
        Some(line) => line,
        None => return Ok(None),
    };
    match line.parse::<f64>() {
        Ok(amount) => Ok(Some(amount)),
        Err(_) => {
            writeln!(output, "{}", format!("Not a number: {line}").red())?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", Action::ShowBalance)]
    #[case("2", Action::Deposit)]
    #[case("3", Action::Withdraw)]
    #[case("4", Action::Exit)]
    #[case("  4  ", Action::Exit)]
    fn parses_valid_choices(#[case] input: &str, #[case] expected: Action) {
        assert_eq!(Action::from_choice(input).unwrap(), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("5")]
    #[case("-1")]
    #[case("deposit")]
    #[case("")]
    fn rejects_out_of_range_choices(#[case] input: &str) {
        assert_eq!(
            Action::from_choice(input).unwrap_err(),
            BankError::InvalidChoice(input.trim().to_string())
        );
    }
}
