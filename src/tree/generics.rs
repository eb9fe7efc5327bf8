// Tue Jan 13 2026 - Alex

/// `Base<Arguments>` split at the first `<` and the last `>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericExpression<'a> {
    pub base: &'a str,
    pub arguments: &'a str,
}

impl<'a> GenericExpression<'a> {
    pub fn parse(expression: &'a str) -> Option<Self> {
        let open = expression.find('<')?;
        let close = expression.rfind('>')?;
        if open == 0 || close <= open {
            return None;
        }

        Some(Self {
            base: &expression[..open],
            arguments: &expression[open + 1..close],
        })
    }

    pub fn argument_list(&self) -> Vec<&'a str> {
        split_arguments(self.arguments)
    }

    pub fn arity(&self) -> usize {
        self.argument_list().len()
    }
}

/// Splits generic arguments on commas outside angle brackets.
///
/// Only one level of nested generics occurs in practice
/// (`Outer<Inner<A, B>>`); deeper nesting is split the same way but
/// is otherwise unsupported.
pub fn split_arguments(arguments: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in arguments.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(arguments[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(arguments[start..].trim());

    parts.into_iter().filter(|p| !p.is_empty()).collect()
}
