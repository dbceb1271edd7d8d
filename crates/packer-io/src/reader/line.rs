use packer_core::{Item, PackerError, Result, Task};

/// Parses a single task line. Errors report line 1.
pub fn parse_task(line: &str) -> Result<Task> {
    parse_line(line, 1)
}

pub(super) fn parse_line(line: &str, line_number: usize) -> Result<Task> {
    let mut cursor = Cursor {
        rest: line.trim(),
        line_number,
    };

    let capacity = cursor.number("capacity")?;
    cursor.skip_whitespace();
    cursor.expect(':')?;
    cursor.skip_whitespace();

    let mut items = vec![cursor.item()?];
    while !cursor.rest.is_empty() {
        if !cursor.skip_whitespace() {
            return Err(cursor.error("expected whitespace between items"));
        }
        items.push(cursor.item()?);
    }

    Ok(Task::new(capacity, items))
}

struct Cursor<'a> {
    rest: &'a str,
    line_number: usize,
}

impl<'a> Cursor<'a> {
    fn error(&self, message: &str) -> PackerError {
        let near: String = self.rest.chars().take(12).collect();
        let message = if near.is_empty() {
            format!("{} at end of line", message)
        } else {
            format!("{} near '{}'", message, near)
        };
        PackerError::IncorrectInput {
            line: self.line_number,
            message,
        }
    }

    // Returns true if any whitespace was skipped.
    fn skip_whitespace(&mut self) -> bool {
        let trimmed = self.rest.trim_start();
        let skipped = trimmed.len() != self.rest.len();
        self.rest = trimmed;
        skipped
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        match self.rest.strip_prefix(expected) {
            Some(rest) => {
                self.rest = rest;
                Ok(())
            }
            None => Err(self.error(&format!("expected '{}'", expected))),
        }
    }

    fn take_while(&mut self, accept: impl Fn(char) -> bool) -> &'a str {
        let end = self
            .rest
            .char_indices()
            .find(|&(_, c)| !accept(c))
            .map_or(self.rest.len(), |(i, _)| i);
        let (token, rest) = self.rest.split_at(end);
        self.rest = rest;
        token
    }

    fn index(&mut self) -> Result<u32> {
        let token = self.take_while(|c| c.is_ascii_digit());
        token
            .parse()
            .map_err(|_| self.error("expected an item index"))
    }

    fn number(&mut self, what: &str) -> Result<f64> {
        let token = self.take_while(|c| c.is_ascii_digit() || c == '.');
        if !is_number(token) {
            return Err(self.error(&format!("expected {} as a number", what)));
        }
        token
            .parse()
            .map_err(|_| self.error(&format!("expected {} as a number", what)))
    }

    fn item(&mut self) -> Result<Item> {
        self.expect('(')?;
        let index = self.index()?;
        self.expect(',')?;
        let weight = self.number("weight")?;
        self.expect(',')?;
        self.expect('€')?;
        let cost = self.number("cost")?;
        self.expect(')')?;
        Ok(Item::new(index, weight, cost))
    }
}

// digits | digits? '.' digits
fn is_number(token: &str) -> bool {
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    match token.split_once('.') {
        None => !token.is_empty() && all_digits(token),
        Some((whole, fraction)) => {
            all_digits(whole) && !fraction.is_empty() && all_digits(fraction)
        }
    }
}
