//! Line-based prompts with re-prompt validation loops.
//!
//! Every prompt returns `Ok(None)` once the input is exhausted so callers can
//! shut down cleanly on end of input.

use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;
use taxcheck_core::{DeclarationInput, TaxpayerCategory};

use crate::utils::{parse_positive_amount, parse_yes_no};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(
        input: R,
        output: W,
    ) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line without its terminator. `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Prints `text` without a newline and reads the answer.
    pub fn prompt(
        &mut self,
        text: &str,
    ) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Asks until a strictly positive amount is entered.
    pub fn prompt_amount(
        &mut self,
        text: &str,
    ) -> io::Result<Option<Decimal>> {
        loop {
            let Some(line) = self.prompt(text)? else {
                return Ok(None);
            };
            match parse_positive_amount(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => writeln!(self.output, "Error: {err}. Please try again.")?,
            }
        }
    }

    /// Asks until one of the category selectors 1, 2 or 3 is entered.
    pub fn prompt_category(&mut self) -> io::Result<Option<TaxpayerCategory>> {
        loop {
            let Some(line) = self.prompt(
                "Taxpayer category (1 - individual, 2 - individual entrepreneur, 3 - company): ",
            )?
            else {
                return Ok(None);
            };
            let category = line
                .trim()
                .parse::<u8>()
                .ok()
                .and_then(TaxpayerCategory::from_code);
            match category {
                Some(category) => return Ok(Some(category)),
                None => writeln!(self.output, "Error: enter 1, 2 or 3.")?,
            }
        }
    }

    /// Asks until a yes/no answer is entered.
    pub fn prompt_benefits(&mut self) -> io::Result<Option<bool>> {
        loop {
            let Some(line) = self.prompt("Benefits (y/n): ")? else {
                return Ok(None);
            };
            match parse_yes_no(&line) {
                Some(answer) => return Ok(Some(answer)),
                None => writeln!(self.output, "Error: enter y (yes) or n (no).")?,
            }
        }
    }

    /// Collects a complete declaration.
    pub fn prompt_declaration(&mut self) -> io::Result<Option<DeclarationInput>> {
        let Some(income) = self.prompt_amount("Total income: ")? else {
            return Ok(None);
        };
        let Some(tax_paid) = self.prompt_amount("Tax paid: ")? else {
            return Ok(None);
        };
        let Some(category) = self.prompt_category()? else {
            return Ok(None);
        };
        let Some(has_benefits) = self.prompt_benefits()? else {
            return Ok(None);
        };

        Ok(Some(DeclarationInput {
            income,
            tax_paid,
            category,
            has_benefits,
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn read_line_strips_crlf() {
        let mut console = console("12,5\r\nnext\n");

        assert_eq!(console.read_line().unwrap(), Some("12,5".to_string()));
        assert_eq!(console.read_line().unwrap(), Some("next".to_string()));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn prompt_amount_reprompts_until_valid() {
        let mut console = console("abc\n-5\n0\n1500,75\n");

        let value = console.prompt_amount("Amount: ").unwrap();

        assert_eq!(value, Some(dec!(1500.75)));
        let text = output(console);
        assert_eq!(text.matches("Amount: ").count(), 4);
        assert!(text.contains("Error: not a number. Please try again."));
        assert!(text.contains("Error: value cannot be negative. Please try again."));
        assert!(text.contains("Error: value must be positive. Please try again."));
    }

    #[test]
    fn prompt_amount_returns_none_at_end_of_input() {
        let mut console = console("oops\n");

        assert_eq!(console.prompt_amount("Amount: ").unwrap(), None);
    }

    #[test]
    fn prompt_category_rejects_out_of_range() {
        let mut console = console("0\n4\ncompany\n3\n");

        let category = console.prompt_category().unwrap();

        assert_eq!(category, Some(TaxpayerCategory::Company));
        assert_eq!(output(console).matches("Error: enter 1, 2 or 3.").count(), 3);
    }

    #[test]
    fn prompt_benefits_accepts_russian_layout() {
        let mut console = console("\nmaybe\nН\n");

        let answer = console.prompt_benefits().unwrap();

        assert_eq!(answer, Some(true));
        assert_eq!(
            output(console)
                .matches("Error: enter y (yes) or n (no).")
                .count(),
            2
        );
    }

    #[test]
    fn prompt_declaration_collects_all_fields() {
        let mut console = console("1000000\n117000.00\n1\ny\n");

        let input = console.prompt_declaration().unwrap();

        assert_eq!(
            input,
            Some(DeclarationInput {
                income: dec!(1000000),
                tax_paid: dec!(117000),
                category: TaxpayerCategory::Individual,
                has_benefits: true,
            })
        );
    }

    #[test]
    fn prompt_declaration_stops_at_end_of_input() {
        let mut console = console("1000000\n117000\n");

        assert_eq!(console.prompt_declaration().unwrap(), None);
    }
}
