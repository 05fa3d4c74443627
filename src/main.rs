use std::process::exit;

use lifo::{
    app::demo::DemoRunner,
    arguments::cmd_args::CmdArgs,
    common::logging::init_tracing,
    features::{args::Args, running::Runnable},
};

fn main() {
    let result = CmdArgs::new().and_then(|args| {
        let _guard = init_tracing(args.debug(), args.no_color())?;
        tracing::debug!("Input configuration: {:?}", args);

        DemoRunner::new(&args).run()
    });

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        exit(1);
    }
}
