/// Full shell sessions against a real file
use contact_book::*;
use tempfile::TempDir;

async fn run_session(path: std::path::PathBuf, script: &str) -> String {
    let mut session = ContactBookApp::open(path).into_session();
    let mut output = Vec::new();
    session
        .run(script.as_bytes(), &mut output, std::future::pending::<()>())
        .await
        .expect("Session failed");
    String::from_utf8(output).expect("Output is not UTF-8")
}

#[tokio::test]
async fn test_session_persists_between_runs() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(DEFAULT_FILE_NAME);

    let script = "\
add contact Ann 0931112233
add email Ann Ann@Example.com
add address Ann Kyiv, Main st. 1
add birthday Ann 01.02.1990
change contact Ann 0931112233 0501234567
exit
";
    let output = run_session(path.clone(), script).await;
    assert!(output.contains("Contact added."));
    assert!(output.contains("Email added."));
    assert!(output.contains("Address added."));
    assert!(output.contains("Birthday added."));
    assert!(output.contains("Contact updated."));

    let output = run_session(path.clone(), "show all\nsearch main st\nclose\n").await;
    let expected = "Contact name: Ann, phones: 0501234567, email: ann@example.com, \
                    address: Kyiv, Main st. 1, birthday: 01.02.1990";
    assert!(output.contains(&format!("All contacts:\n{}", expected)));
    assert!(output.contains(&format!("Search results for 'main st':\n{}", expected)));
}

#[tokio::test]
async fn test_errors_do_not_end_the_session() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(DEFAULT_FILE_NAME);

    let script = "\
change birthday Ghost 01.01.2000
add contact Ann
change email Ann ann@example.com
birthdays -1
birthdays many
hello
exit
";
    let output = run_session(path, script).await;
    assert!(output.contains("Error: Contact 'Ghost' not found"));
    assert!(output.contains("Error: Not enough arguments. Usage: add contact [name] [phone]"));
    assert!(output.contains("Error: Contact 'Ann' not found"));
    assert!(output.contains("Error: Number of days cannot be negative."));
    assert!(output.contains("Error: Enter a valid number (e.g., 'birthdays 5')"));
    assert!(output.contains("How can I help you?"));
    assert!(output.contains("Data saved. Good bye!"));
}

#[tokio::test]
async fn test_delete_is_saved() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(DEFAULT_FILE_NAME);

    run_session(path.clone(), "add contact Ann 0931112233\nadd contact Bob 0501234567\nexit\n").await;
    let output = run_session(path.clone(), "delete contact Ann\nexit\n").await;
    assert!(output.contains("Contact 'Ann' deleted."));

    let storage = JsonFileStorage::new(path);
    let book = storage.load().unwrap().book;
    let names: Vec<&str> = book.iter().map(Record::name).collect();
    assert_eq!(names, vec!["Bob"]);
}
