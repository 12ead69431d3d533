use crate::error::AutoXisoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexChoice {
    Back,
    Index(usize),
}

/// Parses the answer to the ROM index prompt. `back` is accepted in any case.
pub fn parse_index_choice(input: &str, catalog_len: usize) -> Result<IndexChoice, AutoXisoError> {
    let trimmed = input.trim();

    if trimmed.eq_ignore_ascii_case("back") {
        return Ok(IndexChoice::Back);
    }

    match trimmed.parse::<usize>() {
        Ok(index) if index < catalog_len => Ok(IndexChoice::Index(index)),
        _ => Err(AutoXisoError::InvalidUserInput {
            input: input.to_string(),
        }),
    }
}

/// Parses a (Y/N) answer; `None` means the answer must be asked again.
pub fn parse_confirmation(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}
