use thiserror::Error;

pub type FgResult<T> = Result<T, FgError>;

#[derive(Error, Debug)]
pub enum FgError {
    #[error("Empty collection for {what}: at least one element is required")]
    Empty { what: &'static str },
}
