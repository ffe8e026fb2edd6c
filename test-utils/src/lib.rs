use std::{
    error::Error,
    path::Path,
    process::{Command, Output},
    str,
};

const STAX_PATH: &str = "./target/debug/stax";

pub struct Expected<'a> {
    pub stdout: &'a str,
    pub stderr: &'a str,
}

impl<'a> Expected<'a> {
    fn assert_matches(self, output: &Output) -> Result<(), Box<dyn Error>> {
        assert_eq!(str::from_utf8(&output.stdout)?, self.stdout);
        assert_eq!(str::from_utf8(&output.stderr)?, self.stderr);
        Ok(())
    }
}

fn run_sim(src_path: &Path) -> Result<Output, std::io::Error> {
    Command::new(STAX_PATH).arg("sim").arg(src_path).output()
}

/// Simulate `src_path` and assert its stdout/stderr against `expected`.
pub fn check_simulation(src_path: &Path, expected: Expected) -> Result<(), Box<dyn Error>> {
    let output = run_sim(src_path)?;

    expected.assert_matches(&output)?;
    assert!(
        output.status.success(),
        "stax sim exited with status {:?}",
        output.status.code()
    );

    Ok(())
}

/// Assert that resolving/simulating `src_path` fails (a `ResolveError` or
/// `SimError`), without checking the exact diagnostic text.
pub fn check_simulation_fails(src_path: &Path) -> Result<(), Box<dyn Error>> {
    let output = run_sim(src_path)?;

    assert!(
        !output.status.success(),
        "stax sim unexpectedly succeeded for {}",
        src_path.display()
    );

    Ok(())
}

/// Compile-and-run `src_path` through the native `as`/`ld` path and assert
/// its stdout/stderr against `expected`. Requires a host with Apple's `as`
/// and `ld` (macOS on Apple Silicon).
pub fn check_compilation(src_path: &Path, expected: Expected) -> Result<(), Box<dyn Error>> {
    let out_path = Path::new("./target/tmp").join(src_path.file_stem().unwrap());
    std::fs::create_dir_all(out_path.parent().unwrap())?;

    let compile_output = Command::new(STAX_PATH)
        .arg("com")
        .arg("-o")
        .arg(&out_path)
        .arg(src_path)
        .output()?;

    assert!(
        compile_output.status.success(),
        "stax com exited with status {:?}: {}",
        compile_output.status.code(),
        str::from_utf8(&compile_output.stderr)?
    );

    let output = Command::new(&out_path).output()?;

    expected.assert_matches(&output)?;
    assert!(
        output.status.success(),
        "compiled program exited with status {:?}",
        output.status.code()
    );

    Ok(())
}
