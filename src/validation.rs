use regex::Regex;

use crate::errors::AppError;

pub enum ValidationReq {
    __,
}

impl ValidationReq {
    pub fn name_req() -> String {
        "Name must begin with an alphabet, may contain spaces, hyphens and apostrophes \
        between alphabets. Name must not exceed 50 characters"
            .to_string()
    }

    pub fn phone_req() -> String {
        "Number must contain 7 to 15 digits, may begin with + or 00 and may use space, \
        dot or dash separators"
            .to_string()
    }
}

pub fn validate_person_name(name: &str) -> Result<bool, AppError> {
    // Must begin with alphabet
    // May contain spaces, hyphens, and apostrophes between alphabets
    // Not more than 50 characters
    let re = Regex::new(r"^[A-Za-z][A-Za-z\s'-]*$")?;
    Ok(name.len() <= 50 && re.is_match(name))
}

pub fn validate_number(phone: &str) -> Result<bool, AppError> {
    // Between 7 and 15 digits overall
    // May begin with + or 00 signifying a country code
    // Space, dot and dash separators are tolerated between digit groups
    let re = Regex::new(r"^(\+|00)?\d{1,4}([\s.-]?\d{1,4}){1,5}$")?;
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    Ok((7..=15).contains(&digits) && re.is_match(phone))
}
