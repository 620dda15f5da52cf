use super::*;

/// One bucket per letter of the alphabet.
pub const BUCKET_COUNT: usize = 26;

/// Upper-cased first letter of a surname, the bucket key. Only ASCII
/// letters can index a bucket.
pub fn bucket_key(surname: &str) -> Result<char, AppError> {
    match surname.chars().next() {
        Some(first) if first.is_ascii_alphabetic() => Ok(first.to_ascii_uppercase()),
        Some(first) => Err(AppError::InvalidSurname(format!(
            "'{first}' cannot index a bucket"
        ))),
        None => Err(AppError::InvalidSurname("surname is empty".to_string())),
    }
}

fn bucket_index(surname: &str) -> Result<usize, AppError> {
    Ok((bucket_key(surname)? as u8 - b'A') as usize)
}

/// Contacts partitioned by the upper-cased first letter of the surname,
/// the way a phone groups its contact list. Searching a surname only ever
/// touches one of the 26 buckets instead of the whole collection.
///
/// Every bucket stays sorted ascending by surname after any insertion.
/// Duplicate contacts are allowed, same as on a phone.
#[derive(Debug, Clone, Default)]
pub struct ContactDirectory {
    buckets: [Vec<Contact>; BUCKET_COUNT],
}

impl ContactDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a contact from split record fields and files it under its
    /// bucket. A malformed record leaves the directory untouched.
    pub fn add(&mut self, fields: &[String]) -> Result<(), AppError> {
        let contact = Contact::from_fields(fields)?;
        self.insert(contact)
    }

    pub fn insert(&mut self, contact: Contact) -> Result<(), AppError> {
        let bucket = &mut self.buckets[bucket_index(contact.surname())?];

        bucket.push(contact);
        // Stable sort, so equal surnames keep their insertion order
        bucket.sort_by(|a, b| a.surname().cmp(b.surname()));
        Ok(())
    }

    /// Exact surname match, case-insensitive. Scans a single bucket, which
    /// is the whole point of keying the collection by first letter.
    pub fn search_by_surname(&self, surname: &str) -> Vec<&Contact> {
        let Ok(index) = bucket_index(surname) else {
            return Vec::new();
        };

        self.buckets[index]
            .iter()
            .filter(|contact| contact.surname().eq_ignore_ascii_case(surname))
            .collect()
    }

    /// Exact name match, case-insensitive. The index gives no help here,
    /// every bucket is scanned in A to Z order.
    pub fn search_by_name(&self, name: &str) -> Vec<&Contact> {
        self.buckets
            .iter()
            .flatten()
            .filter(|contact| contact.name().eq_ignore_ascii_case(name))
            .collect()
    }

    /// Removes at most one contact from the surname's bucket.
    ///
    /// With no `name`/`phone` given, the first contact whose surname
    /// matches (case-insensitive) is removed. When either is supplied the
    /// first contact matching surname plus name or phone (or both) is
    /// removed. Matching on name alone or phone alone qualifies; with
    /// duplicated entries this can pick an earlier record than an exact
    /// pair would. Kept as-is for compatibility with how duplicate
    /// contacts behave on a phone.
    ///
    /// Returns `true` when a contact was found and removed.
    pub fn remove(
        &mut self,
        surname: &str,
        name: Option<&str>,
        phone: Option<&str>,
    ) -> Result<bool, AppError> {
        let bucket = &mut self.buckets[bucket_index(surname)?];

        let position = bucket.iter().position(|contact| {
            if !contact.surname().eq_ignore_ascii_case(surname) {
                return false;
            }

            match (name, phone) {
                (None, None) => true,
                _ => {
                    name.is_some_and(|n| contact.name().eq_ignore_ascii_case(n))
                        || phone.is_some_and(|p| contact.phone() == p)
                }
            }
        });

        match position {
            Some(position) => {
                bucket.remove(position);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Non-empty buckets in A to Z order, each with its contacts in stored
    /// (sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &[Contact])> {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(index, bucket)| ((b'A' + index as u8) as char, bucket.as_slice()))
    }

    /// Total contacts across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}
