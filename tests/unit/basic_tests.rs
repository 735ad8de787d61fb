/// Basic unit tests to verify core functionality
use contact_book::*;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;

    #[test]
    fn test_new_contact_scenario() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Ann").unwrap());
        book.find_mut("Ann").unwrap().add_phone("0931112233").unwrap();

        assert_eq!(
            book.find("Ann").unwrap().render(),
            "Contact name: Ann, phones: 0931112233"
        );
    }

    #[test]
    fn test_edit_unknown_phone_is_not_found() {
        let mut record = Record::new("Ann").unwrap();
        let err = record.edit_phone("0931112233", "0000000000").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_phone_validation_rule() {
        let valid = ["0000000000", "0931112233", "9999999999"];
        let invalid = ["", "0", "093111223", "09311122334", "09311122a3", "+380931112", "0931 11223"];

        for raw in valid {
            assert!(PhoneNumber::new(raw).is_ok(), "{} should be valid", raw);
        }
        for raw in invalid {
            assert_eq!(PhoneNumber::new(raw).unwrap_err().kind(), ErrorKind::Validation);
        }
    }

    #[test]
    fn test_portable_round_trip_all_combinations() {
        for mask in 0..16u8 {
            let mut record = Record::new("Combo").unwrap();
            if mask & 1 != 0 {
                record.add_phone("0931112233").unwrap();
            }
            if mask & 2 != 0 {
                record.set_email("combo@example.com").unwrap();
            }
            if mask & 4 != 0 {
                record.set_address("Odesa").unwrap();
            }
            if mask & 8 != 0 {
                record.set_birthday("29.02.1996").unwrap();
            }

            let restored = Record::from_portable(&record.to_portable()).unwrap();
            assert_eq!(restored, record, "mask {:04b}", mask);
        }
    }

    #[test]
    fn test_search_counts_each_record_once() {
        let mut book = AddressBook::new();
        let mut record = Record::new("Anna").unwrap();
        record.set_email("anna@anna.com").unwrap();
        record.set_address("Anna street").unwrap();
        book.add_record(record);

        assert_eq!(book.search("anna").len(), 1);
    }
}
