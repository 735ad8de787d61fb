/// Basic integration tests
use contact_book::*;
use tempfile::TempDir;

#[cfg(test)]
mod basic_integration_tests {
    use super::*;

    #[test]
    fn test_save_and_reload_one_record() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let storage = JsonFileStorage::new(dir.path().join(DEFAULT_FILE_NAME));

        let mut record = Record::new("Ann").unwrap();
        record.add_phone("0931112233").unwrap();
        record.set_email("ann@example.com").unwrap();
        record.set_address("Kyiv").unwrap();
        record.set_birthday("01.02.1990").unwrap();
        let mut book = AddressBook::new();
        book.add_record(record.clone());

        storage.save(&book).expect("Failed to save");
        let reloaded = storage.load().expect("Failed to load").book;

        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.find("Ann"), Some(&record));
    }

    #[test]
    fn test_app_starts_empty_without_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let app = ContactBookApp::open(dir.path().join(DEFAULT_FILE_NAME));
        assert!(app.book().is_empty());
        assert!(app.notices().is_empty());
    }

    #[test]
    fn test_app_survives_corrupt_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join(DEFAULT_FILE_NAME);
        std::fs::write(&path, "this is not json").unwrap();

        let app = ContactBookApp::open(path);
        assert!(app.book().is_empty());
        assert_eq!(app.notices().len(), 1);
        assert!(app.notices()[0].starts_with("Error: Can't read"));
    }

    #[test]
    fn test_app_reports_skipped_records() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join(DEFAULT_FILE_NAME);
        std::fs::write(
            &path,
            r#"[{"name": "Ann", "phones": ["0931112233"]}, {"name": "Bob", "email": "bob"}]"#,
        )
        .unwrap();

        let app = ContactBookApp::open(path);
        assert_eq!(app.book().len(), 1);
        assert_eq!(app.notices().len(), 1);
        assert!(app.notices()[0].contains("Bob"));
    }
}
