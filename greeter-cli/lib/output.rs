use std::io::Write;

use greeter_core::greet;

use crate::GreeterCliResult;

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Writes one greeting per line for each of `names`, in order.
///
/// Returns the number of greetings written.
pub fn write_greetings<W: Write>(out: &mut W, names: &[&str]) -> GreeterCliResult<usize> {
    for name in names {
        tracing::debug!(name = %name, "writing greeting");
        writeln!(out, "{}", greet(name))?;
    }

    out.flush()?;
    Ok(names.len())
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::GreeterCliError;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test_log::test]
    fn test_write_greetings_one_per_line() -> GreeterCliResult<()> {
        let mut out = Vec::new();
        let count = write_greetings(&mut out, &["A", "B"])?;

        assert_eq!(count, 2);
        assert_eq!(String::from_utf8_lossy(&out), "Hello, A!\nHello, B!\n");
        Ok(())
    }

    #[test_log::test]
    fn test_write_greetings_empty_name() -> GreeterCliResult<()> {
        let mut out = Vec::new();
        write_greetings(&mut out, &[""])?;

        assert_eq!(String::from_utf8_lossy(&out), "Hello, !\n");
        Ok(())
    }

    #[test]
    fn test_write_greetings_no_names() -> GreeterCliResult<()> {
        let mut out = Vec::new();
        assert_eq!(write_greetings(&mut out, &[])?, 0);
        assert!(out.is_empty());
        Ok(())
    }

    #[test]
    fn test_write_greetings_reports_io_error() {
        let err = write_greetings(&mut BrokenPipe, &["World"]).unwrap_err();
        match err {
            GreeterCliError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        }
    }
}
