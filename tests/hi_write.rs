use std::{error::Error, path::Path};

use test_utils::{check_simulation, Expected};

const SRC_PATH: &str = "./demos/hi_write.stax";
const EXPECTED: Expected = Expected {
    stdout: "Hi\n",
    stderr: "",
};

#[test]
fn simulates_a_write_syscall_through_memory() -> Result<(), Box<dyn Error>> {
    check_simulation(Path::new(SRC_PATH), EXPECTED)
}
