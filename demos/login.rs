//! Walks through a passing and a failing test the way a host engine would
//! report them.
//!
//! ```bash
//! cargo run --example login -- --color always --rule-width 50
//! ```

use robot_logger::{cli, invoke, Logger, Reporter as _, Status};

#[derive(cli::Args)]
struct Demo {
    /// Outputs diagnostics of the logger itself to stderr.
    #[arg(long)]
    trace: bool,
}

fn main() -> robot_logger::Result<()> {
    let opts = cli::Opts::<Demo>::parsed();
    if opts.custom.trace {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let mut logger = Logger::stdout();
    logger.apply_cli(opts.logger);

    logger.info("Robot Logger ready!");

    logger.start_test("Login Test");
    logger.step("Navigate to login page");
    logger.step("Enter username");
    logger.step("Enter password");
    logger.pass_test("Login successful");
    logger.end_test(Status::Pass);

    // The same, as a keyword-driven engine binds it.
    invoke(&mut logger, "Start Test", &["Compare Greetings"])?;
    invoke(&mut logger, "Step", &["Fetch greeting"])?;
    invoke(&mut logger, "Assertion", &["equals", "hello", "goodbye"])?;
    invoke(&mut logger, "Fail", &["mismatch: hello != goodbye"])?;
    invoke(
        &mut logger,
        "Error Details",
        &["AssertionError", "Test failed: hello != goodbye"],
    )?;
    invoke(&mut logger, "End Test", &["FAIL"])?;

    Ok(())
}
