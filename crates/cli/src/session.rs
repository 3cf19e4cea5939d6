//! Interactive course session driven by line commands.

use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::{Local, Utc};
use nrp_core::{CertificateRenderer, ModuleId};
use nrp_progress::{CompletionEstimator, CourseProgressTracker};
use tracing::debug;

use crate::render;

const HELP: &str = "\
commands:
  select <n>      open module n
  complete [<n>]  mark module n (default: the open module) complete
  modules         list modules
  status          show progress
  estimate        show remaining study time
  certificate     show the certificate (all modules complete)
  help            show this help
  quit            leave the course";

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select(usize),
    Complete(Option<u32>),
    Modules,
    Status,
    Estimate,
    Certificate,
    Help,
    Quit,
}

impl std::str::FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or_default().to_lowercase();
        let arg = parts.next();
        if parts.next().is_some() {
            return Err(format!("too many arguments: {line}"));
        }

        let number = |arg: Option<&str>| -> Result<Option<u32>, String> {
            arg.map(|a| a.parse::<u32>().map_err(|_| format!("not a module number: {a}")))
                .transpose()
        };

        match verb.as_str() {
            "select" | "s" => match number(arg)? {
                Some(n) => Ok(Command::Select(n as usize)),
                None => Err("select needs a module number".to_string()),
            },
            "complete" | "c" => Ok(Command::Complete(number(arg)?)),
            "modules" | "ls" => Ok(Command::Modules),
            "status" => Ok(Command::Status),
            "estimate" => Ok(Command::Estimate),
            "certificate" | "cert" => Ok(Command::Certificate),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "" => Err("empty command".to_string()),
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// One learner working through one course.
pub struct Session<R: CertificateRenderer> {
    tracker: CourseProgressTracker,
    contractor: String,
    renderer: R,
}

impl<R: CertificateRenderer> Session<R> {
    /// Create a session.
    pub fn new(tracker: CourseProgressTracker, contractor: impl Into<String>, renderer: R) -> Self {
        Self {
            tracker,
            contractor: contractor.into(),
            renderer,
        }
    }

    /// Read commands until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        write!(out, "{}", render::course_header(self.tracker.course()))?;
        writeln!(out, "{}", render::summary_line(&self.tracker.progress_summary()))?;
        writeln!(out, "type 'help' for commands")?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command, out)?,
                Err(message) => writeln!(out, "error: {message}")?,
            }
        }

        Ok(())
    }

    /// Apply one command, printing its result. Tracker errors are printed, not returned.
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<()> {
        match command {
            Command::Select(n) => {
                let Some(index) = n.checked_sub(1) else {
                    writeln!(out, "error: module numbers start at 1")?;
                    return Ok(());
                };
                match self.tracker.select_module(index) {
                    Ok(true) => {
                        let module = self.tracker.selected_module();
                        writeln!(out, "Module {}: {}", module.id, module.title)?;
                        for lesson in &module.lessons {
                            writeln!(out, "  - {lesson}")?;
                        }
                    }
                    Ok(false) => {
                        debug!(module = n, "locked module requested");
                        writeln!(out, "Module {n} is locked")?
                    }
                    Err(e) => writeln!(out, "error: {e}")?,
                }
            }
            Command::Complete(id) => {
                let result = match id {
                    Some(id) => self.tracker.complete_module(ModuleId::new(id)),
                    None => self.tracker.complete_selected(),
                };
                match result {
                    Ok(outcome) => {
                        writeln!(out, "{}", render::summary_line(&self.tracker.progress_summary()))?;
                        if outcome.course_completed {
                            writeln!(
                                out,
                                "Congratulations! You've completed all modules. Type 'certificate' to view it."
                            )?;
                        } else {
                            let next = self.tracker.selected_module();
                            writeln!(out, "Next: Module {}: {}", next.id, next.title)?;
                        }
                    }
                    Err(e) => writeln!(out, "error: {e}")?,
                }
            }
            Command::Modules => write!(out, "{}", render::module_list(&self.tracker, true))?,
            Command::Status => {
                writeln!(out, "{}", render::summary_line(&self.tracker.progress_summary()))?
            }
            Command::Estimate => {
                let estimate = CompletionEstimator::default().estimate(&self.tracker, Utc::now());
                writeln!(
                    out,
                    "{} remaining, about {} study day(s)",
                    nrp_core::format_minutes(estimate.remaining_minutes),
                    estimate.study_days
                )?;
            }
            Command::Certificate => {
                let today = Local::now().date_naive();
                match self.tracker.issue_certificate(&self.contractor, today) {
                    Ok(record) => write!(out, "{}", self.renderer.render(&record)?)?,
                    Err(e) => writeln!(out, "error: {e}")?,
                }
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    /// The underlying tracker.
    pub fn tracker(&self) -> &CourseProgressTracker {
        &self.tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TextCertificateRenderer;
    use nrp_core::catalog;

    fn session() -> Session<TextCertificateRenderer> {
        let course = catalog::customer_service_excellence().unwrap();
        Session::new(CourseProgressTracker::new(course), "John Smith", TextCertificateRenderer)
    }

    fn run_script(session: &mut Session<TextCertificateRenderer>, script: &str) -> String {
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("select 3".parse::<Command>(), Ok(Command::Select(3)));
        assert_eq!("complete".parse::<Command>(), Ok(Command::Complete(None)));
        assert_eq!("C 4".parse::<Command>(), Ok(Command::Complete(Some(4))));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
        assert!("select".parse::<Command>().is_err());
        assert!("select x".parse::<Command>().is_err());
        assert!("complete 1 2".parse::<Command>().is_err());
        assert!("dance".parse::<Command>().is_err());
    }

    #[test]
    fn test_locked_module_selection() {
        let mut session = session();
        let output = run_script(&mut session, "select 8\nselect 0\nselect 11\n");
        assert!(output.contains("Module 8 is locked"));
        assert!(output.contains("module numbers start at 1"));
        assert!(output.contains("error: invalid argument"));
        assert_eq!(session.tracker().selected_index(), 0);
    }

    #[test]
    fn test_certificate_before_completion() {
        let mut session = session();
        let output = run_script(&mut session, "complete\ncertificate\n");
        assert!(output.contains("1 of 10 modules completed"));
        assert!(output.contains("error: course incomplete: 1 of 10"));
    }

    #[test]
    fn test_full_session() {
        let mut session = session();
        let script = "complete\n".repeat(10) + "certificate\nquit\nstatus\n";
        let output = run_script(&mut session, &script);

        assert!(session.tracker().is_course_complete());
        assert!(output.contains("Congratulations!"));
        assert!(output.contains("CERTIFICATE OF COMPLETION"));
        assert!(output.contains("John Smith"));
        assert_eq!(output.matches("10 of 10 modules completed").count(), 1);
    }
}
