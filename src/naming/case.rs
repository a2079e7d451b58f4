// src/naming/case.rs

/// `kyouko_kamigaito` → `KyoukoKamigaito`.
///
/// Any non-alphanumeric character is a word boundary and is dropped; each
/// word gets an uppercase first letter and lowercase tail.
pub fn to_pascal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.extend(chars.flat_map(char::to_lowercase));
        }
    }
    out
}
