/// Birthday window behavior through the public API
use chrono::{Datelike, NaiveDate, Weekday};
use contact_book::*;

fn book_with_birthday(name: &str, date: NaiveDate) -> AddressBook {
    let mut record = Record::new(name).unwrap();
    record.set_birthday(&date.format("%d.%m.%Y").to_string()).unwrap();
    let mut book = AddressBook::new();
    book.add_record(record);
    book
}

#[test]
fn test_seven_day_window_on_every_weekday() {
    // One full week of "today" values covers every weekday for the target
    let start = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
    for offset in 0..7 {
        let today = start + chrono::Days::new(offset);
        let target = today + chrono::Days::new(7);
        let book = book_with_birthday("Ann", target.with_year(1990).unwrap());

        let reminders = book.birthdays_between(7, today).unwrap();
        assert_eq!(reminders.len(), 1);

        let reported = reminders[0].congratulation_date;
        match target.weekday() {
            Weekday::Sat | Weekday::Sun => {
                assert_eq!(reported.weekday(), Weekday::Mon);
                assert!(reported > target);
            }
            _ => assert_eq!(reported, target),
        }
    }
}

#[test]
fn test_birthday_itself_is_not_shifted() {
    // 2024-09-14 is a Saturday
    let birthday = NaiveDate::from_ymd_opt(1990, 9, 14).unwrap();
    let book = book_with_birthday("Ann", birthday);
    book.birthdays_between(7, NaiveDate::from_ymd_opt(2024, 9, 7).unwrap()).unwrap();

    let stored = book.find("Ann").unwrap().birthday().unwrap();
    assert_eq!(stored.date(), birthday);
}

#[test]
fn test_negative_window_is_an_argument_error() {
    let book = AddressBook::new();
    let err = book.birthdays_in_days(-1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);
}
