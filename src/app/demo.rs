use std::{
    fmt::Display,
    io::{Stdout, Write},
};

use crate::{
    common::{errors::Result, notice::NoticeBuffer, observed::Observed, stack::Stack},
    features::{args::Args, running::Runnable, stack::StackLike},
    printer::Printer,
};

/// Walk a stack through its whole lifecycle and print every result
///
/// After pushing all values the runner checks size and top, pops twice,
/// checks again, then pops until it hits the empty stack once. Notices from
/// each operation are printed before that operation's result.
pub struct DemoRunner<W = Stdout> {
    values: Vec<i64>,
    quiet: bool,
    printer: Printer<W>,
}

impl DemoRunner {
    pub fn new(args: &impl Args) -> DemoRunner {
        DemoRunner::with_printer(args.values(), args.quiet(), Printer::new(!args.no_color()))
    }
}

impl<W: Write> DemoRunner<W> {
    pub fn with_printer(values: Vec<i64>, quiet: bool, printer: Printer<W>) -> DemoRunner<W> {
        DemoRunner {
            values,
            quiet,
            printer,
        }
    }
}

impl<W: Write> Runnable for DemoRunner<W> {
    fn run(self) -> Result<()> {
        tracing::debug!("DemoRunner: run scenario with {} values", self.values.len());

        let mut session = Session {
            stack: Observed::new(Stack::with_capacity(self.values.len()), NoticeBuffer::new()),
            quiet: self.quiet,
            printer: self.printer,
        };
        session.play(&self.values)?;

        tracing::debug!("DemoRunner: scenario is done");
        session.printer.flush()
    }
}

struct Session<W> {
    stack: Observed<Stack<i64>, NoticeBuffer>,
    quiet: bool,
    printer: Printer<W>,
}

impl<W: Write> Session<W> {
    fn play(&mut self, values: &[i64]) -> Result<()> {
        let empty = self.stack.is_empty();
        self.step("is_empty", Some(empty))?;
        for item in values {
            self.stack.push(*item);
            self.notices()?;
            self.printer.print_push(item)?;
        }
        let size = self.stack.size();
        self.step("size", Some(size))?;
        let top = self.stack.peek().copied();
        self.step("peek", top)?;

        let item = self.stack.pop();
        self.step("pop", item)?;
        let item = self.stack.pop();
        self.step("pop", item)?;
        let size = self.stack.size();
        self.step("size", Some(size))?;
        let empty = self.stack.is_empty();
        self.step("is_empty", Some(empty))?;

        // Drain, including one pop on the empty stack
        loop {
            let item = self.stack.pop();
            let drained = item.is_none();
            self.step("pop", item)?;
            if drained {
                break;
            }
        }
        let empty = self.stack.is_empty();
        self.step("is_empty", Some(empty))
    }

    fn step<D: Display>(&mut self, op: &str, result: Option<D>) -> Result<()> {
        self.notices()?;
        self.printer.print_step(op, result)
    }

    /// Print what the last operation reported, nothing in quiet mode
    fn notices(&mut self) -> Result<()> {
        for notice in self.stack.observer().drain() {
            if !self.quiet {
                self.printer.print_notice(&notice)?;
            }
        }
        Ok(())
    }
}
