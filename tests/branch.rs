use std::{error::Error, path::Path};

use test_utils::{check_simulation, Expected};

const SRC_PATH: &str = "./demos/branch.stax";
const EXPECTED: Expected = Expected {
    stdout: "10\n",
    stderr: "",
};

#[test]
fn simulates_the_true_branch() -> Result<(), Box<dyn Error>> {
    check_simulation(Path::new(SRC_PATH), EXPECTED)
}
