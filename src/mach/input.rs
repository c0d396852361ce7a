use std::collections::VecDeque;
use std::io::BufRead;

/// ## Whitespace separated words from a reader
///
/// `IN` consumes one word per execution, no matter how the words
/// are spread over lines. Reading is lazy so an interactive terminal
/// is only asked for a line when the program wants one.

pub struct Words<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Words<R> {
    pub fn new(reader: R) -> Words<R> {
        Words {
            reader,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> Iterator for Words<R> {
    type Item = std::io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(word) = self.pending.pop_front() {
                return Some(Ok(word));
            }
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => self
                    .pending
                    .extend(line.split_whitespace().map(String::from)),
                Err(error) => return Some(Err(error)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_across_lines() {
        let words: Vec<String> = Words::new("1 2\n\n  -3\t4\n".as_bytes())
            .map(|w| w.unwrap())
            .collect();
        assert_eq!(words, vec!["1", "2", "-3", "4"]);
    }
}
