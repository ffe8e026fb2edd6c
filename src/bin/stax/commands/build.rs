use stax::driver::{compile, CompileOptions};

use crate::cli::ComArgs;

pub fn run(args: &ComArgs) -> i32 {
    let opts = CompileOptions {
        output: args.output.clone(),
        run_after: args.run,
    };

    match compile(&args.file, &opts) {
        Ok(()) => 0,
        Err(err) => {
            log::error!("{err}");
            eprintln!("{err}");
            1
        }
    }
}
