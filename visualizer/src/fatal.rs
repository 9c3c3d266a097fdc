use std::io::{self, BufRead, Write};
use std::panic::{self, AssertUnwindSafe};

/// Exit status reported after an unhandled failure.
pub const FAILURE_STATUS: i32 = -1;

pub const PAUSE_PROMPT: &str = "Press Enter to exit...";

/// Runs the program body once and returns the process exit status.
///
/// An error or a panic is printed to stderr, then the user must answer the
/// pause prompt on stdout before [`FAILURE_STATUS`] is returned.
pub fn guard<F>(body: F) -> i32
where
    F: FnOnce() -> anyhow::Result<()>,
{
    let outcome = panic::catch_unwind(AssertUnwindSafe(body));
    let mut console = Console {
        input: io::stdin().lock(),
        prompt: io::stdout(),
        diagnostics: io::stderr(),
    };
    match outcome {
        Ok(result) => report(result, &mut console),
        // the default hook has already printed the panic message
        Err(_) => pause(&mut console),
    }
}

/// Streams the guard talks to.
pub struct Console<R, P, D> {
    pub input: R,
    pub prompt: P,
    pub diagnostics: D,
}

/// Maps the body's result to an exit status, printing and pausing on error.
pub fn report<R: BufRead, P: Write, D: Write>(
    result: anyhow::Result<()>,
    console: &mut Console<R, P, D>,
) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            let _ = writeln!(console.diagnostics, "Error: {err:?}");
            let _ = console.diagnostics.flush();
            pause(console)
        }
    }
}

fn pause<R: BufRead, P: Write, D: Write>(console: &mut Console<R, P, D>) -> i32 {
    let _ = write!(console.prompt, "{PAUSE_PROMPT}");
    let _ = console.prompt.flush();
    let mut line = String::new();
    let _ = console.input.read_line(&mut line);
    FAILURE_STATUS
}
