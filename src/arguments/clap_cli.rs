use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct LifoCli {
    #[clap(
        allow_negative_numbers = true,
        help = "Values to push onto the stack, e.g. 10 20 30 [default: 10 20 30]"
    )]
    pub values: Vec<i64>,

    #[clap(long, help = "Print without colors")]
    pub no_color: bool,

    #[clap(long, help = "Debug output. Log at debug level")]
    pub debug: bool,

    #[clap(long, help = "Quiet mode. Don't print stack notices")]
    pub quiet: bool,
}
