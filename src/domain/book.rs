/// The address book and its birthday-reminder query
///
/// Records are kept in insertion order and looked up by exact name. Only the
/// operations below are exposed; callers never touch the underlying storage.

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};

use crate::domain::{DomainError, Record, DATE_FORMAT};

/// Default window used by `upcoming_birthdays`
pub const DEFAULT_BIRTHDAY_WINDOW: i64 = 7;

/// An ordered collection of records keyed by contact name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

/// A contact to congratulate and the (weekday) date to do it on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayReminder {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

impl BirthdayReminder {
    /// Congratulation date as `DD.MM.YYYY`
    pub fn formatted_date(&self) -> String {
        self.congratulation_date.format(DATE_FORMAT).to_string()
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name
    ///
    /// A replaced record keeps its original position in the iteration order.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// Exact, case-sensitive lookup
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|record| record.name() == name)
    }

    /// Remove a record by exact name, returning it
    pub fn delete(&mut self, name: &str) -> Result<Record, DomainError> {
        let index = self
            .position(name)
            .ok_or_else(|| DomainError::ContactNotFound { name: name.to_string() })?;
        Ok(self.records.remove(index))
    }

    /// Records with any field containing `query`, case-insensitively
    ///
    /// Each record appears at most once, in book order.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        let query_lower = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.fields().iter().any(|field| field.matches(&query_lower)))
            .collect()
    }

    /// Birthdays falling exactly `days` days from today
    pub fn birthdays_in_days(&self, days: i64) -> Result<Vec<BirthdayReminder>, DomainError> {
        self.birthdays_between(days, Local::now().date_naive())
    }

    /// Birthdays falling exactly one week from today
    pub fn upcoming_birthdays(&self) -> Result<Vec<BirthdayReminder>, DomainError> {
        self.birthdays_in_days(DEFAULT_BIRTHDAY_WINDOW)
    }

    /// Birthdays whose next occurrence (counting `today`) is `today + days`
    ///
    /// Weekend occurrences are congratulated on the following Monday. The
    /// result is sorted by name.
    pub fn birthdays_between(
        &self,
        days: i64,
        today: NaiveDate,
    ) -> Result<Vec<BirthdayReminder>, DomainError> {
        let offset = u64::try_from(days).map_err(|_| DomainError::InvalidArgument {
            message: "Number of days cannot be negative.".to_string(),
        })?;
        let target = today
            .checked_add_days(Days::new(offset))
            .ok_or_else(|| DomainError::InvalidArgument {
                message: format!("Number of days is too large: {}", days),
            })?;

        let mut reminders: Vec<BirthdayReminder> = self
            .records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let mut occurrence = birthday.occurrence_in(today.year())?;
                if occurrence < today {
                    occurrence = birthday.occurrence_in(today.year() + 1)?;
                }
                (occurrence == target).then(|| BirthdayReminder {
                    name: record.name().to_string(),
                    congratulation_date: congratulation_date(occurrence),
                })
            })
            .collect();

        reminders.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(reminders)
    }

    /// Records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|record| record.name() == name)
    }
}

/// Move Saturday and Sunday occurrences to the following Monday
fn congratulation_date(date: NaiveDate) -> NaiveDate {
    let shift = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date + Days::new(shift)
}
