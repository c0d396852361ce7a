use super::LineNumber;

pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn is_parse_error(&self) -> bool {
        (self.code as u16) < 20
    }

    /// Attach a source line. A line already present wins, so errors
    /// can be tagged again as they travel outward.
    pub fn in_line_number(self, line: LineNumber) -> Error {
        if self.line_number.is_some() {
            return self;
        }
        Error {
            line_number: line,
            ..self
        }
    }

    pub fn message<S: AsRef<str>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.as_ref().to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError = 1,
    UnknownInstruction = 2,
    UnsupportedInstruction = 3,
    InvalidValue = 4,
    IntegerTooLong = 5,
    UnterminatedValue = 6,
    LexemeTooLong = 7,

    MemoryIndex = 20,
    ReferenceOverflow = 21,
    MemoryLimit = 22,
    TimeLimit = 23,
    InvalidPosition = 24,
    DivisionByZero = 25,
    Overflow = 26,
    InvalidInput = 27,
    InputPastEnd = 28,
    Break = 29,
    InternalError = 51,
    FileNotFound = 53,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let s = match self {
            SyntaxError => "SYNTAX ERROR",
            UnknownInstruction => "UNKNOWN INSTRUCTION",
            UnsupportedInstruction => "UNSUPPORTED INSTRUCTION",
            InvalidValue => "INVALID VALUE",
            IntegerTooLong => "INTEGER TOO LONG",
            UnterminatedValue => "UNTERMINATED VALUE",
            LexemeTooLong => "LEXEME TOO LONG",
            MemoryIndex => "MEMORY INDEX ERROR",
            ReferenceOverflow => "REFERENCES OVERFLOW",
            MemoryLimit => "MEMORY LIMIT EXCEEDED",
            TimeLimit => "TIME LIMIT EXCEEDED",
            InvalidPosition => "INVALID POSITION",
            DivisionByZero => "DIVISION BY ZERO",
            Overflow => "OVERFLOW",
            InvalidInput => "INVALID INPUT",
            InputPastEnd => "INPUT PAST END",
            Break => "BREAK",
            InternalError => "INTERNAL ERROR",
            FileNotFound => "FILE NOT FOUND",
        };
        write!(f, "{}", s)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code)?;
        if let Some(line_number) = self.line_number {
            write!(f, " IN {}", line_number)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = error!(MemoryIndex, Some(3); "INDEX 12 OF 10");
        assert_eq!(e.to_string(), "MEMORY INDEX ERROR IN 3; INDEX 12 OF 10");
        assert_eq!(error!(TimeLimit).to_string(), "TIME LIMIT EXCEEDED");
    }

    #[test]
    fn test_first_line_number_wins() {
        let e = error!(Overflow, Some(7)).in_line_number(Some(9));
        assert_eq!(e.line_number(), Some(7));
    }

    #[test]
    fn test_categories() {
        assert!(error!(IntegerTooLong).is_parse_error());
        assert!(error!(UnknownInstruction).is_parse_error());
        assert!(!error!(ReferenceOverflow).is_parse_error());
        assert!(!error!(Break).is_parse_error());
    }
}
