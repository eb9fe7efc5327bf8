// Thu Jan 15 2026 - Alex

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Declared type of the shift amount, whatever the extern says.
pub const SHIFT_AMOUNT_TYPE: &str = "int";

static OPERATOR_TOKENS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Addition", "+"),
        ("Subtraction", "-"),
        ("UnaryMinus", "-"),
        ("Multiplication", "*"),
        ("Multiply", "*"),
        ("Division", "/"),
        ("Equality", "=="),
        ("Inequality", "!="),
        ("LessThan", "<"),
        ("GreaterThan", ">"),
        ("LessThanOrEqual", "<="),
        ("GreaterThanOrEqual", ">="),
        ("LeftShift", "<<"),
        ("RightShift", ">>"),
        ("LogicalAnd", "&"),
        ("LogicalOr", "|"),
        ("LogicalXor", "^"),
        ("UnaryNegation", "!"),
    ])
});

const NOT_OVERLOADABLE: &[&str] = &["ConditionalAnd", "ConditionalOr", "ConditionalXor"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    Implicit,
    Explicit,
}

impl Conversion {
    pub fn keyword(&self) -> &'static str {
        match self {
            Conversion::Implicit => "implicit",
            Conversion::Explicit => "explicit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorForm {
    Symbol(&'static str),
    Conversion(Conversion),
    NotOverloadable,
    Unknown,
}

pub fn classify_operator(name: &str) -> OperatorForm {
    if let Some(token) = OPERATOR_TOKENS.get(name) {
        return OperatorForm::Symbol(*token);
    }
    match name {
        "Implicit" => OperatorForm::Conversion(Conversion::Implicit),
        "Explicit" => OperatorForm::Conversion(Conversion::Explicit),
        n if NOT_OVERLOADABLE.contains(&n) => OperatorForm::NotOverloadable,
        _ => OperatorForm::Unknown,
    }
}

pub fn is_shift(name: &str) -> bool {
    matches!(name, "LeftShift" | "RightShift")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_table() {
        assert_eq!(classify_operator("Addition"), OperatorForm::Symbol("+"));
        assert_eq!(classify_operator("UnaryMinus"), OperatorForm::Symbol("-"));
        assert_eq!(classify_operator("Multiply"), OperatorForm::Symbol("*"));
        assert_eq!(classify_operator("UnaryNegation"), OperatorForm::Symbol("!"));
        assert_eq!(classify_operator("Implicit"), OperatorForm::Conversion(Conversion::Implicit));
        assert_eq!(classify_operator("ConditionalAnd"), OperatorForm::NotOverloadable);
        assert_eq!(classify_operator("Modulus"), OperatorForm::Unknown);
        assert!(is_shift("RightShift"));
        assert!(!is_shift("Addition"));
    }
}
