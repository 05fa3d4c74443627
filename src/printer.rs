use std::{
    fmt::Display,
    io::{stdout, Stdout, Write},
};

use ansi_term::{
    Colour::{Blue, Cyan, Green, Yellow},
    Style,
};

use crate::common::errors::Result;

pub struct Printer<W = Stdout> {
    colors: Colors,
    out: W,
}

impl Printer {
    pub fn new(colored: bool) -> Printer {
        let colors = if colored {
            Colors::colored()
        } else {
            Colors::plain()
        };
        Printer::with_writer(stdout(), colors)
    }
}

impl<W: Write> Printer<W> {
    pub fn with_writer(out: W, colors: Colors) -> Printer<W> {
        Printer { colors, out }
    }

    /// Print one operation with its result, `None` for the absent value
    pub fn print_step<D: Display>(&mut self, op: &str, result: Option<D>) -> Result<()> {
        let result = match result {
            Some(result) => self.colors.value.paint(result.to_string()),
            None => self.colors.absent.paint("None".to_owned()),
        };
        writeln!(
            &mut self.out,
            "  {}: {}",
            self.colors.op.paint(format!("{:>8}", op)),
            result
        )?;
        Ok(())
    }

    pub fn print_push<D: Display>(&mut self, item: D) -> Result<()> {
        writeln!(
            &mut self.out,
            "  {}: {}",
            self.colors.op.paint(format!("{:>8}", "push")),
            self.colors.pushed.paint(item.to_string())
        )?;
        Ok(())
    }

    pub fn print_notice(&mut self, notice: &str) -> Result<()> {
        writeln!(&mut self.out, "  {}", self.colors.notice.paint(notice))?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

#[derive(Default)]
pub struct Colors {
    pub op: Style,
    pub value: Style,
    pub pushed: Style,
    pub absent: Style,
    pub notice: Style,
}

impl Colors {
    pub fn plain() -> Colors {
        Colors::default()
    }

    pub fn colored() -> Colors {
        Colors {
            op: Blue.bold(),
            value: Green.bold(),
            pushed: Cyan.normal(),
            absent: Yellow.bold(),
            notice: Style::new().dimmed(),
        }
    }
}
