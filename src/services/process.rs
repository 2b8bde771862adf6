use crate::{engine::ProcessRunner, error::*, types::*};
use std::process::{Command, Stdio};

/// Runs the scraper with `std::process::Command`.
///
/// Only stdout is piped. Stdin and stderr stay attached to the parent, so
/// whatever the scraper logs goes straight to our stderr and is never
/// inspected. There is no timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn name(&self) -> &'static str {
        "system-runner"
    }

    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput> {
        ::log::debug!(
            "{}: spawning {} {:?} in {}",
            self.name(),
            invocation.program,
            invocation.args,
            invocation.cwd.display()
        );

        let child = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .stdout(Stdio::piped())
            .spawn()?;

        let output = child.wait_with_output()?;
        Ok(ProcessOutput::new(output.stdout, output.status.code()))
    }
}
