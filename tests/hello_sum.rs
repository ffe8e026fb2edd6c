use std::{error::Error, path::Path};

use test_utils::{check_simulation, Expected};

const SRC_PATH: &str = "./demos/hello_sum.stax";
const EXPECTED: Expected = Expected {
    stdout: "69\n",
    stderr: "",
};

#[test]
fn simulates_addition_and_dump() -> Result<(), Box<dyn Error>> {
    check_simulation(Path::new(SRC_PATH), EXPECTED)
}
