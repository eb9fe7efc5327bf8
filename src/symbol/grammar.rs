// Tue Jan 13 2026 - Alex

use crate::symbol::SymbolError;
use serde::Serialize;
use std::fmt;

pub const CTOR_NAME: &str = "ctor";
pub const DEFAULT_ESCAPE_TOKENS: &[&str] = &["VRCSDKBaseVRC_"];

const NAMESPACE_SEPARATOR: &str = ".__";
const SEGMENT_SEPARATOR: &str = "__";
const ESCAPE_PLACEHOLDER: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MethodKind {
    Plain,
    Constructor,
    Getter,
    Setter,
    Operator,
    EventAdd,
    EventRemove,
}

impl MethodKind {
    const PREFIXED: [MethodKind; 5] = [
        MethodKind::Getter,
        MethodKind::Operator,
        MethodKind::Setter,
        MethodKind::EventAdd,
        MethodKind::EventRemove,
    ];

    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            MethodKind::Getter => Some("get"),
            MethodKind::Setter => Some("set"),
            MethodKind::Operator => Some("op"),
            MethodKind::EventAdd => Some("add"),
            MethodKind::EventRemove => Some("remove"),
            MethodKind::Plain | MethodKind::Constructor => None,
        }
    }

    pub fn is_accessor(&self) -> bool {
        matches!(self, MethodKind::Getter | MethodKind::Setter)
    }

    pub fn name(&self) -> &'static str {
        match self {
            MethodKind::Plain => "plain",
            MethodKind::Constructor => "constructor",
            MethodKind::Getter => "getter",
            MethodKind::Setter => "setter",
            MethodKind::Operator => "operator",
            MethodKind::EventAdd => "event add",
            MethodKind::EventRemove => "event remove",
        }
    }
}

/// Structured form of one extern symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodGrammar {
    pub namespace: String,
    pub kind: MethodKind,
    pub name: String,
    /// Raw input segment as it appeared in the symbol; `None` when the symbol has no input segment.
    pub raw_inputs: Option<String>,
    pub inputs: Vec<String>,
    pub output: String,
}

impl MethodGrammar {
    pub fn is_constructor(&self) -> bool {
        self.kind == MethodKind::Constructor
    }

    pub fn has_pointer_token(&self) -> bool {
        self.namespace.contains('*')
            || self.output.contains('*')
            || self.inputs.iter().any(|i| i.contains('*'))
    }

    /// Reassembles the symbol from its parts.
    pub fn to_symbol(&self) -> String {
        let mut s = format!("{}{}", self.namespace, NAMESPACE_SEPARATOR);
        if let Some(prefix) = self.kind.prefix() {
            s.push_str(prefix);
            s.push('_');
        }
        s.push_str(&self.name);
        if let Some(raw) = &self.raw_inputs {
            s.push_str(SEGMENT_SEPARATOR);
            s.push_str(raw);
        }
        s.push_str(SEGMENT_SEPARATOR);
        s.push_str(&self.output);
        s
    }
}

impl fmt::Display for MethodGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}::{}({}) -> {}",
            self.kind.name(), self.namespace, self.name, self.inputs.join(", "), self.output)
    }
}

/// Recognises the extern naming convention:
/// `<namespace>.__[<kind>_]<name>[__<inputs>]__<output>` and the constructor
/// form `<namespace>.__ctor__<inputs>__<output>`.
#[derive(Debug, Clone)]
pub struct GrammarParser {
    escape_tokens: Vec<String>,
}

impl GrammarParser {
    pub fn new() -> Self {
        Self {
            escape_tokens: DEFAULT_ESCAPE_TOKENS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_escape_tokens(tokens: Vec<String>) -> Self {
        Self { escape_tokens: tokens }
    }

    pub fn parse(&self, symbol: &str) -> Result<MethodGrammar, SymbolError> {
        let mismatch = || SymbolError::GrammarMismatch(symbol.to_string());

        let split = symbol.find(NAMESPACE_SEPARATOR).ok_or_else(mismatch)?;
        let namespace = &symbol[..split];
        if !is_namespace_token(namespace) {
            return Err(mismatch());
        }
        let rest = &symbol[split + NAMESPACE_SEPARATOR.len()..];

        let parts = match rest.strip_prefix("ctor__") {
            Some(after) => parse_constructor(after),
            None => parse_general(rest),
        }
        .ok_or_else(mismatch)?;

        let inputs = match &parts.raw_inputs {
            Some(raw) => self.split_inputs(raw),
            None => Vec::new(),
        };

        Ok(MethodGrammar {
            namespace: namespace.to_string(),
            kind: parts.kind,
            name: parts.name.to_string(),
            raw_inputs: parts.raw_inputs.map(str::to_string),
            inputs,
            output: parts.output.to_string(),
        })
    }

    /// Splits the input segment on `_`, keeping the underscore inside escape tokens.
    pub fn split_inputs(&self, raw: &str) -> Vec<String> {
        let mut escaped = raw.to_string();
        for token in &self.escape_tokens {
            escaped = escaped.replace(token.as_str(), &token.replace('_', &ESCAPE_PLACEHOLDER.to_string()));
        }

        escaped
            .split('_')
            .filter(|s| !s.is_empty())
            .map(|s| s.replace(ESCAPE_PLACEHOLDER, "_"))
            .collect()
    }
}

impl Default for GrammarParser {
    fn default() -> Self {
        Self::new()
    }
}

struct RawParts<'a> {
    kind: MethodKind,
    name: &'a str,
    raw_inputs: Option<&'a str>,
    output: &'a str,
}

fn parse_constructor(after: &str) -> Option<RawParts<'_>> {
    let end = after.find(SEGMENT_SEPARATOR)?;
    let raw = &after[..end];
    if !is_input_segment(raw, true) {
        return None;
    }

    Some(RawParts {
        kind: MethodKind::Constructor,
        name: CTOR_NAME,
        raw_inputs: Some(raw),
        output: &after[end + SEGMENT_SEPARATOR.len()..],
    })
}

fn parse_general(rest: &str) -> Option<RawParts<'_>> {
    for kind in MethodKind::PREFIXED {
        let prefix = kind.prefix().unwrap_or_default();
        if let Some(after) = rest.strip_prefix(prefix).and_then(|s| s.strip_prefix('_')) {
            if let Some(parts) = parse_tail(kind, after) {
                return Some(parts);
            }
        }
    }
    parse_tail(MethodKind::Plain, rest)
}

fn parse_tail(kind: MethodKind, s: &str) -> Option<RawParts<'_>> {
    if s.starts_with(CTOR_NAME) {
        return None;
    }

    let name_len = method_name_len(s);
    let name = &s[..name_len];
    let tail = s[name_len..].strip_prefix(SEGMENT_SEPARATOR)?;

    let (raw_inputs, output) = match tail.find(SEGMENT_SEPARATOR) {
        Some(end) if is_input_segment(&tail[..end], false) => {
            (Some(&tail[..end]), &tail[end + SEGMENT_SEPARATOR.len()..])
        }
        _ => (None, tail),
    };

    Some(RawParts { kind, name, raw_inputs, output })
}

/// Length of `(m_|_)?[A-Za-z0-9]+`, or zero when the name is absent.
fn method_name_len(s: &str) -> usize {
    let alnum_run = |t: &str| t.bytes().take_while(|b| b.is_ascii_alphanumeric()).count();

    for prefix in ["m_", "_"] {
        if let Some(after) = s.strip_prefix(prefix) {
            let n = alnum_run(after);
            if n > 0 {
                return prefix.len() + n;
            }
        }
    }
    alnum_run(s)
}

fn is_namespace_token(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

fn is_input_segment(raw: &str, allow_empty: bool) -> bool {
    if raw.is_empty() {
        return allow_empty;
    }

    let is_type_char = |b: u8| b.is_ascii_alphanumeric() || b == b'*';
    raw.split('_').enumerate().all(|(i, segment)| {
        if segment.is_empty() {
            i == 0 && allow_empty
        } else {
            segment.bytes().all(is_type_char)
        }
    })
}
