use stax::driver::simulate;
use stax::simulator::ExitStatus;

use crate::cli::SimArgs;

pub fn run(args: &SimArgs) -> i32 {
    match simulate(&args.file) {
        Ok(ExitStatus::Exited(code)) => (code & 0xFF) as i32,
        Ok(ExitStatus::RanToCompletion) => 0,
        Err(err) => {
            log::error!("{err}");
            eprintln!("{err}");
            1
        }
    }
}
