use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Csv(csv::Error),
    MalformedRecord(String),
    InvalidSurname(String),
    NotFound(String),
    ParseCommand(String),
    ParseInt(std::num::ParseIntError),
    Regex(regex::Error),
    Validation(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Csv(err)
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::ParseInt(err)
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Regex(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Csv(e) => {
                write!(f, "CSV error while reading or writing a record: {}", e)
            }
            AppError::MalformedRecord(msg) => {
                write!(f, "Malformed record: {}", msg)
            }
            AppError::InvalidSurname(msg) => {
                write!(f, "Invalid surname: {}", msg)
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Unrecognized command: '{}'", cmd)
            }
            AppError::ParseInt(e) => {
                write!(f, "Invalid number format: {}", e)
            }
            AppError::Regex(e) => {
                write!(f, "Invalid regular expression: {}", e)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use crate::validation::validate_number;

    use super::*;

    #[test]
    fn confirm_parse_int_error_message() {
        let wrong_string = "abc".parse::<i32>().unwrap_err();
        let err = AppError::ParseInt(wrong_string);

        assert!(format!("{}", err).contains("Invalid number format: "));
    }

    #[test]
    fn confirm_validation_error() -> Result<(), AppError> {
        if !validate_number("abc")? {
            let err = AppError::Validation("\nInvalid Number input.".to_string());

            assert_eq!(
                format!("{}", err),
                format!("Validation failed: \nInvalid Number input.")
            );
            Ok(())
        } else {
            panic!();
        }
    }

    #[test]
    fn confirm_not_found_error_message() {
        let err = AppError::NotFound("Contact".to_string());
        assert_eq!(format!("{}", err), "Contact Not found");
    }

    #[test]
    fn confirm_malformed_record_message() {
        let err = AppError::MalformedRecord("expected 3 fields, got 2".to_string());
        assert!(format!("{}", err).starts_with("Malformed record: "));
    }
}
