use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Env, Target};

/// Initializes the global logger. `RUST_LOG` controls the filter (default
/// `info`). With `log_file` set, every line goes to stdout and to that file.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));

    if let Some(path) = log_file {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(Target::Pipe(Box::new(Tee {
            file,
            stdout: io::stdout(),
        })));
    }

    builder.init();
    Ok(())
}

struct Tee<F, S> {
    file: F,
    stdout: S,
}

impl<F: Write, S: Write> Write for Tee<F, S> {
    // Both sides are always attempted; the file error wins if both fail.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let file = self.file.write_all(buf);
        let stdout = self.stdout.write_all(buf);
        file.and(stdout).map(|_| buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let file = self.file.flush();
        let stdout = self.stdout.flush();
        file.and(stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn tee_copies_every_write_into_both_sides() {
        let mut tee = Tee {
            file: Vec::new(),
            stdout: Vec::new(),
        };
        write!(tee, "first ").unwrap();
        writeln!(tee, "second").unwrap();
        tee.flush().unwrap();
        assert_eq!(tee.file, b"first second\n");
        assert_eq!(tee.stdout, b"first second\n");
    }

    #[test]
    fn tee_keeps_writing_the_file_when_stdout_fails() {
        let mut tee = Tee {
            file: Vec::new(),
            stdout: ClosedPipe,
        };
        let err = tee.write(b"line\n").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(tee.file, b"line\n");
        assert!(tee.flush().is_err());
    }
}
