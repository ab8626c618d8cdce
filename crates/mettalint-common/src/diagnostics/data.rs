use super::{DiagnosticCategory, DiagnosticMessage};

pub mod diagnostic_codes {
    pub const VARIABLE_USED_WITHOUT_DEFINITION: u32 = 1001;
    pub const VARIABLE_DEFINED_BUT_NEVER_USED: u32 = 1002;
    pub const EXPRESSION_IS_NEVER_CLOSED: u32 = 1003;
}

pub mod diagnostic_messages {
    use super::{DiagnosticCategory, DiagnosticMessage, diagnostic_codes};

    pub const VARIABLE_USED_WITHOUT_DEFINITION: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::VARIABLE_USED_WITHOUT_DEFINITION,
        category: DiagnosticCategory::Error,
        message: "Variable '{0}' used without definition",
    };
    pub const VARIABLE_DEFINED_BUT_NEVER_USED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::VARIABLE_DEFINED_BUT_NEVER_USED,
        category: DiagnosticCategory::Warning,
        message: "Variable '{0}' defined but never used",
    };
    pub const EXPRESSION_IS_NEVER_CLOSED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::EXPRESSION_IS_NEVER_CLOSED,
        category: DiagnosticCategory::Error,
        message: "Expression starting here is never closed (unclosed depth {0})",
    };
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    diagnostic_messages::VARIABLE_USED_WITHOUT_DEFINITION,
    diagnostic_messages::VARIABLE_DEFINED_BUT_NEVER_USED,
    diagnostic_messages::EXPRESSION_IS_NEVER_CLOSED,
];
