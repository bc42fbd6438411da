use crate::error::AppError;

/// Extracts the city name from the process arguments.
///
/// `args` must include the program name at position 0. Exactly one more
/// token is accepted and returned verbatim.
pub fn get_city(args: &[String]) -> Result<String, AppError> {
    match args {
        [] | [_] => Err(AppError::MissingArgument),
        [_, city] => Ok(city.clone()),
        _ => Err(AppError::TooManyArguments),
    }
}
