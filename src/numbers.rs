use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::console;

pub fn max(nums: &[i64]) -> Option<i64> {
    nums.iter().copied().max()
}

pub fn min(nums: &[i64]) -> Option<i64> {
    nums.iter().copied().min()
}

/// Arithmetic mean as a real number. `None` on an empty slice.
pub fn average(nums: &[i64]) -> Option<f64> {
    if nums.is_empty() {
        return None;
    }
    let sum: i64 = nums.iter().sum();
    Some(sum as f64 / nums.len() as f64)
}

/// Read `count` integers from the console and print their maximum,
/// minimum, and average. A line that does not parse is reported and
/// re-prompted; it does not count toward the total.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W, count: usize) -> io::Result<()> {
    let mut nums = Vec::with_capacity(count);

    while nums.len() < count {
        let line = match console::prompt(input, output, "Enter a number: ")? {
            Some(line) => line,
            None => break,
        };
        match line.parse::<i64>() {
            Ok(n) => nums.push(n),
            Err(_) => writeln!(output, "{}", format!("Not a number: {line}").red())?,
        }
    }

    if nums.is_empty() {
        writeln!(output, "No numbers entered.")?;
        return Ok(());
    }

    // nums is non-empty past this point.
    writeln!(output, "Maximum: {}", max(&nums).unwrap())?;
    writeln!(output, "Minimum: {}", min(&nums).unwrap())?;
    writeln!(output, "Average: {:.2}", average(&nums).unwrap())?;
    Ok(())
}
