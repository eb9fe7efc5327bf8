// Tue Jan 13 2026 - Alex

/// Full name that the resolver only knows under a hand-picked alias.
pub const OBJECT_LIST_FULL_NAME: &str = "System.Collections.Generic.List<System.Object>";
pub const OBJECT_LIST_GRAMMAR_NAME: &str = "ListT";

/// Pointer types whose grammar name keeps the raw `*`.
const STARRED_POINTERS: &[&str] = &["System.Char*", "System.SByte*"];

pub fn strip_special_characters(name: &str, replace_array: bool, replace_star: bool) -> String {
    let mut s = name.to_string();
    if replace_array {
        s = s.replace("[]", "Array");
    }
    s = s.replace('.', "");
    s = s.replace('<', "");
    s = s.replace('>', "");
    if replace_star {
        s = s.replace('*', "Ref");
    }
    s.replace(", ", "")
}

/// Derives the token the name grammar uses for a dotted type name.
pub fn grammar_name(full_name: &str) -> String {
    if full_name == OBJECT_LIST_FULL_NAME {
        return OBJECT_LIST_GRAMMAR_NAME.to_string();
    }
    let replace_star = !STARRED_POINTERS.contains(&full_name);
    strip_special_characters(full_name, true, replace_star)
}

/// Candidate grammar name for a node that has no resolved binding yet.
pub fn candidate_grammar_name(full_name: &str) -> String {
    strip_special_characters(full_name, true, true)
}

pub fn first_char_lower(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if !first.is_lowercase() => {
            first.to_lowercase().chain(chars).collect()
        }
        _ => s.to_string(),
    }
}

pub fn parameter_name(grammar_name: &str, index: usize) -> String {
    let base = strip_special_characters(&first_char_lower(grammar_name), true, true);
    format!("{}_{}", base, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammar_name() {
        assert_eq!(grammar_name("System.Int32"), "SystemInt32");
        assert_eq!(grammar_name("System.Int32[]"), "SystemInt32Array");
        assert_eq!(
            grammar_name("System.Collections.Generic.Dictionary<System.String, System.Int32>"),
            "SystemCollectionsGenericDictionarySystemStringSystemInt32"
        );
        assert_eq!(grammar_name("System.Byte*"), "SystemByteRef");
        assert_eq!(grammar_name("System.Char*"), "SystemChar*");
        assert_eq!(grammar_name(OBJECT_LIST_FULL_NAME), "ListT");
    }

    #[test]
    fn test_parameter_name() {
        assert_eq!(parameter_name("SystemInt32", 0), "systemInt32_0");
        assert_eq!(parameter_name("UnityEngineVector3Array", 2), "unityEngineVector3Array_2");
        assert_eq!(first_char_lower(""), "");
        assert_eq!(first_char_lower("already"), "already");
    }
}
