pub struct Reader {
    code: Vec<char>,
    position: usize,
}

impl Reader {
    #[must_use]
    pub fn new(code: &str) -> Reader {
        let code: Vec<_> = code.chars().collect();
        Reader { code, position: 0 }
    }

    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.code.get(self.position).copied()
    }

    /// The character after the current one, without consuming anything.
    #[must_use]
    pub fn peek_next(&self) -> Option<char> {
        self.code.get(self.position + 1).copied()
    }

    /// Never moves past the end, so reading at EOF is idempotent.
    pub fn forward(&mut self) {
        if self.position < self.code.len() {
            self.position += 1;
        }
    }

    pub fn skip_spaces(&mut self) {
        while self
            .peek()
            .is_some_and(|c| matches!(c, ' ' | '\t' | '\n' | '\r'))
        {
            self.forward();
        }
    }

    /// Consumes the maximal run of characters satisfying `accept`.
    pub fn take_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let start = self.position;
        while self.peek().is_some_and(&accept) {
            self.forward();
        }
        self.code[start..self.position].iter().collect()
    }
}
