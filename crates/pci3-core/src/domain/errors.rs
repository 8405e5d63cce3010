pub type Pci3Result<T> = Result<T, Pci3Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pci3ErrorCategory {
    InputValidationError,
    IoSystemError,
    InternalError,
}

impl Pci3ErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::InternalError => 5,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InputValidationError => "InputValidationError",
            Self::IoSystemError => "IoSystemError",
            Self::InternalError => "InternalError",
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{} [{placeholder}] {message}", .category.as_str())]
pub struct Pci3Error {
    category: Pci3ErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl Pci3Error {
    pub fn new(
        category: Pci3ErrorCategory,
        placeholder: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            placeholder,
            message: message.into(),
        }
    }

    pub fn input_validation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(
            Pci3ErrorCategory::InputValidationError,
            placeholder,
            message,
        )
    }

    pub fn io_system(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(Pci3ErrorCategory::IoSystemError, placeholder, message)
    }

    pub fn internal(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(Pci3ErrorCategory::InternalError, placeholder, message)
    }

    pub const fn category(&self) -> Pci3ErrorCategory {
        self.category
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.placeholder, self.message)
    }

    pub fn fatal_exit_line(&self) -> String {
        format!("FATAL EXIT CODE: {}", self.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::{Pci3Error, Pci3ErrorCategory};

    #[test]
    fn exit_code_mapping_is_stable() {
        let cases = [
            (Pci3ErrorCategory::InputValidationError, 2, "InputValidationError"),
            (Pci3ErrorCategory::IoSystemError, 3, "IoSystemError"),
            (Pci3ErrorCategory::InternalError, 5, "InternalError"),
        ];

        for (category, exit_code, label) in cases {
            assert_eq!(category.exit_code(), exit_code);
            assert_eq!(category.as_str(), label);
        }
    }

    #[test]
    fn error_renders_diagnostic_and_exit_lines() {
        let error = Pci3Error::input_validation(
            "INPUT.NEGATIVE_PMOL",
            "requested pmol for 'anti-CD3' must be non-negative, got -1",
        );

        assert_eq!(error.exit_code(), 2);
        assert_eq!(
            error.diagnostic_line(),
            "ERROR: [INPUT.NEGATIVE_PMOL] requested pmol for 'anti-CD3' must be non-negative, got -1"
        );
        assert_eq!(error.fatal_exit_line(), "FATAL EXIT CODE: 2");
        assert_eq!(
            error.to_string(),
            "InputValidationError [INPUT.NEGATIVE_PMOL] requested pmol for 'anti-CD3' must be non-negative, got -1"
        );
    }

    #[test]
    fn io_errors_use_io_exit_code() {
        let error = Pci3Error::io_system("IO.REQUEST_READ", "missing file");
        assert_eq!(error.category(), Pci3ErrorCategory::IoSystemError);
        assert_eq!(error.placeholder(), "IO.REQUEST_READ");
        assert_eq!(error.message(), "missing file");
        assert_eq!(error.exit_code(), 3);
    }
}
