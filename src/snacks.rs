use std::io::{self, BufRead, Write};

use crate::console;

/// Join entries into one English list: commas between items and "and"
/// before the last, with a closing period.
pub fn join_grammatical(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => format!("{only}."),
        [first, second] => format!("{first} and {second}."),
        [head @ .., last] => format!("{}, and {last}.", head.join(", ")),
    }
}

/// Collect `count` snack names from the console and print them back as
/// one grammatically-joined sentence.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W, count: usize) -> io::Result<()> {
    let mut snacks = Vec::with_capacity(count);

    for i in 1..=count {
        match console::prompt(input, output, &format!("Snack {i}: "))? {
            Some(snack) => snacks.push(snack),
            None => break,
        }
    }

    writeln!(output, "You have entered: {}", join_grammatical(&snacks))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;

    fn entries(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case(&[], "")]
    #[case(&["chips"], "chips.")]
    #[case(&["chips", "salsa"], "chips and salsa.")]
    #[case(&["a", "b", "c"], "a, b, and c.")]
    #[case(&["a", "b", "c", "d", "e"], "a, b, c, d, and e.")]
    fn joins_grammatically(#[case] items: &[&str], #[case] expected: &str) {
        assert_eq!(join_grammatical(&entries(items)), expected);
    }

    #[test]
    fn collects_and_prints_five_entries() {
        let mut input = Cursor::new("chips\nsalsa\ncookies\npretzels\nsoda\n");
        let mut output = Vec::new();
        run(&mut input, &mut output, 5).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Snack 1: "));
        assert!(output.contains("Snack 5: "));
        assert!(output
            .contains("You have entered: chips, salsa, cookies, pretzels, and soda."));
    }

    #[test]
    fn stops_early_when_input_ends() {
        let mut input = Cursor::new("chips\nsalsa\n");
        let mut output = Vec::new();
        run(&mut input, &mut output, 5).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("You have entered: chips and salsa."));
    }
}
