use std::{error::Error, path::Path};

use test_utils::{check_simulation, Expected};

const SRC_PATH: &str = "./demos/countdown.stax";
const EXPECTED: Expected = Expected {
    stdout: "5\n4\n3\n2\n1\n",
    stderr: "",
};

#[test]
fn simulates_a_while_do_countdown() -> Result<(), Box<dyn Error>> {
    check_simulation(Path::new(SRC_PATH), EXPECTED)
}
