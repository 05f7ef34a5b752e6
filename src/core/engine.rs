use crate::core::template::{add, get_message, print_welcome, LEFT_OPERAND, RIGHT_OPERAND};
use crate::utils::error::Result;
use std::io::Write;

/// Runs the welcome, sum and message steps in order against a sink.
pub struct TemplateEngine<W: Write> {
    out: W,
}

impl<W: Write> TemplateEngine<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn run(&mut self) -> Result<()> {
        tracing::info!("Starting template run");

        tracing::debug!("Printing welcome");
        print_welcome(&mut self.out)?;

        let result = add(LEFT_OPERAND, RIGHT_OPERAND);
        tracing::debug!(a = LEFT_OPERAND, b = RIGHT_OPERAND, result, "Computed sum");
        writeln!(self.out, "{} + {} = {}", LEFT_OPERAND, RIGHT_OPERAND, result)?;

        tracing::debug!("Printing message");
        writeln!(self.out, "{}", get_message())?;

        self.out.flush()?;
        tracing::info!("Template run completed");
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::TemplateError;
    use std::io;

    struct ClosedSink;

    impl Write for ClosedSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_writes_three_lines() {
        let mut engine = TemplateEngine::new(Vec::new());
        engine.run().unwrap();

        let output = String::from_utf8(engine.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Welcome to the C++ Project!",
                "5 + 3 = 8",
                "This is a basic C++ project template.",
            ]
        );
    }

    #[test]
    fn test_run_is_deterministic() {
        let mut first = TemplateEngine::new(Vec::new());
        first.run().unwrap();
        let mut second = TemplateEngine::new(Vec::new());
        second.run().unwrap();
        assert_eq!(first.into_inner(), second.into_inner());
    }

    #[test]
    fn test_run_reports_write_failure() {
        let mut engine = TemplateEngine::new(ClosedSink);
        match engine.run() {
            Err(TemplateError::IoError(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected IoError, got {:?}", other),
        }
    }
}
