/// The real binary must save and exit on Ctrl-C even while stdin stays open

use std::io::Read;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use contact_book::*;
use tempfile::TempDir;

const PROMPT: &str = "Enter a command: ";

#[test]
fn test_interrupt_exits_with_stdin_open() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(DEFAULT_FILE_NAME);

    let mut child = Command::new(env!("CARGO_BIN_EXE_contact-book"))
        .arg("--file")
        .arg(&path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to start contact-book");

    // Keep the write end alive so the read on stdin never finishes by itself
    let _stdin = child.stdin.take().expect("stdin is piped");
    let mut stdout = child.stdout.take().expect("stdout is piped");

    let mut seen = Vec::new();
    let mut chunk = [0u8; 256];
    while !String::from_utf8_lossy(&seen).contains(PROMPT) {
        let n = stdout.read(&mut chunk).expect("Failed to read stdout");
        assert!(n > 0, "binary closed stdout before prompting");
        seen.extend_from_slice(&chunk[..n]);
    }
    // Give the session a moment to install its Ctrl-C handler
    std::thread::sleep(Duration::from_millis(300));

    let status = Command::new("kill")
        .arg("-INT")
        .arg(child.id().to_string())
        .status()
        .expect("Failed to run kill");
    assert!(status.success());

    let deadline = Instant::now() + Duration::from_secs(10);
    let exit = loop {
        if let Some(exit) = child.try_wait().expect("Failed to poll child") {
            break exit;
        }
        if Instant::now() > deadline {
            let _ = child.kill();
            panic!("contact-book still running 10s after SIGINT");
        }
        std::thread::sleep(Duration::from_millis(50));
    };
    assert!(exit.success(), "unexpected exit status: {:?}", exit);

    let mut rest = String::new();
    stdout.read_to_string(&mut rest).expect("Failed to read stdout");
    assert!(rest.contains("Exiting... (Data will be saved)"));
    assert!(rest.contains("Data saved. Good bye!"));
    assert!(path.exists());
}
