use crate::domain::model::{AgePolicy, LoadResult, Person};
use crate::domain::ports::Storage;
use crate::utils::error::{Result, RosterError};
use regex::Regex;
use std::io::BufRead;
use std::sync::LazyLock;

// `name:` then optional whitespace then ASCII digits; anything after the digits is ignored
static LINE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.*):\s*([0-9]+)").unwrap());

/// Parses a single roster line. Ages too large for a `u32` become zero.
pub fn parse_line(line: &str) -> Option<Person> {
    match parse_line_with_policy(line, 0, AgePolicy::Lenient) {
        Ok(person) => person,
        Err(_) => None,
    }
}

fn parse_line_with_policy(
    line: &str,
    line_number: usize,
    policy: AgePolicy,
) -> Result<Option<Person>> {
    let Some(caps) = LINE_PATTERN.captures(line) else {
        return Ok(None);
    };

    let name = &caps[1];
    let digits = &caps[2];
    let age = match (digits.parse::<u32>(), policy) {
        (Ok(age), _) => age,
        (Err(_), AgePolicy::Lenient) => 0,
        (Err(_), AgePolicy::Strict) => {
            return Err(RosterError::AgeParseError {
                line_number,
                value: digits.to_string(),
            })
        }
    };

    Ok(Some(Person::new(name, age)))
}

/// Returns a copy of `records` ordered by age; equal ages keep their scan order.
pub fn sort_by_age(records: &[Person]) -> Vec<Person> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|person| person.age);
    sorted
}

pub struct RecordLoader<S: Storage> {
    storage: S,
    policy: AgePolicy,
}

impl<S: Storage> RecordLoader<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            policy: AgePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: AgePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn load_and_sort(&self, path: &str) -> Result<LoadResult> {
        let records = self.load(path)?;
        let sorted = sort_by_age(&records);
        Ok(LoadResult { records, sorted })
    }

    /// Records in file order.
    pub fn load(&self, path: &str) -> Result<Vec<Person>> {
        tracing::debug!("Opening roster file: {}", path);
        let reader = self.storage.open(path)?;
        let records = read_records(reader, self.policy)?;
        tracing::debug!("Loaded {} records from {}", records.len(), path);
        Ok(records)
    }
}

pub fn read_records<R: BufRead>(mut reader: R, policy: AgePolicy) -> Result<Vec<Person>> {
    let mut records = Vec::new();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        if let Some(person) = parse_line_with_policy(line, line_number, policy)? {
            records.push(person);
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::io::Cursor;

    struct MockStorage {
        files: HashMap<String, String>,
        written: RefCell<Vec<String>>,
    }

    impl MockStorage {
        fn with_file(path: &str, content: &str) -> Self {
            let mut files = HashMap::new();
            files.insert(path.to_string(), content.to_string());
            Self {
                files,
                written: RefCell::new(Vec::new()),
            }
        }
    }

    impl Storage for MockStorage {
        type Reader = Cursor<Vec<u8>>;

        fn open(&self, path: &str) -> Result<Self::Reader> {
            self.files
                .get(path)
                .map(|content| Cursor::new(content.clone().into_bytes()))
                .ok_or_else(|| RosterError::FileOpenError {
                    path: path.to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
                })
        }

        fn write_file(&self, path: &str, _data: &[u8]) -> Result<()> {
            self.written.borrow_mut().push(path.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_parse_line_matches_name_and_age() {
        assert_eq!(parse_line("Alice: 30"), Some(Person::new("Alice", 30)));
        assert_eq!(parse_line("Bob:25"), Some(Person::new("Bob", 25)));
        assert_eq!(parse_line("Carol:\t  7"), Some(Person::new("Carol", 7)));
    }

    #[test]
    fn test_parse_line_skips_non_matching() {
        assert_eq!(parse_line("not a record"), None);
        assert_eq!(parse_line("Dave: thirty"), None);
        assert_eq!(parse_line(""), None);
    }

    #[test]
    fn test_parse_line_is_greedy_on_name() {
        assert_eq!(parse_line("a:b: 3"), Some(Person::new("a:b", 3)));
        assert_eq!(parse_line("Eve: 41 years"), Some(Person::new("Eve", 41)));
    }

    #[test]
    fn test_overflowing_age_is_zero_when_lenient() {
        assert_eq!(
            parse_line("Methuselah: 99999999999"),
            Some(Person::new("Methuselah", 0))
        );
    }

    #[test]
    fn test_overflowing_age_fails_when_strict() {
        let input = "Alice: 30\nMethuselah: 99999999999\n";
        let err = read_records(Cursor::new(input), AgePolicy::Strict).unwrap_err();
        match err {
            RosterError::AgeParseError { line_number, value } => {
                assert_eq!(line_number, 2);
                assert_eq!(value, "99999999999");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_and_sort_is_stable() {
        let storage = MockStorage::with_file("ages", "Alice: 30\nBob: 25\nnot a record\nCarol: 25\n");
        let loader = RecordLoader::new(storage);

        let result = loader.load_and_sort("ages").unwrap();

        assert_eq!(
            result.records,
            vec![
                Person::new("Alice", 30),
                Person::new("Bob", 25),
                Person::new("Carol", 25)
            ]
        );
        assert_eq!(
            result.sorted,
            vec![
                Person::new("Bob", 25),
                Person::new("Carol", 25),
                Person::new("Alice", 30)
            ]
        );
        assert!(loader.storage.written.borrow().is_empty());
    }

    #[test]
    fn test_crlf_and_missing_trailing_newline() {
        let records = read_records(Cursor::new("Alice: 30\r\nBob: 25"), AgePolicy::Lenient).unwrap();
        assert_eq!(records, vec![Person::new("Alice", 30), Person::new("Bob", 25)]);
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let input = b"Al\xffce: 30\nBob: 25\n".to_vec();
        let records = read_records(Cursor::new(input), AgePolicy::Lenient).unwrap();
        assert_eq!(
            records,
            vec![Person::new("Al\u{FFFD}ce", 30), Person::new("Bob", 25)]
        );
    }

    #[test]
    fn test_missing_file_propagates() {
        let loader = RecordLoader::new(MockStorage::with_file("ages", ""));
        let err = loader.load_and_sort("missing").unwrap_err();
        assert!(matches!(err, RosterError::FileOpenError { ref path, .. } if path == "missing"));
    }

    #[test]
    fn test_empty_file_gives_empty_result() {
        let loader = RecordLoader::new(MockStorage::with_file("ages", ""));
        let result = loader.load_and_sort("ages").unwrap();
        assert!(result.records.is_empty());
        assert!(result.sorted.is_empty());
    }
}
