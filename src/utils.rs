//! String transformation utilities for class-name derivation.

/// Uppercases the first character of a string, leaving the rest untouched.
///
/// # Examples
/// ```
/// use actionforge::utils::capitalize_first;
///
/// assert_eq!(capitalize_first("fooGenerator"), "FooGenerator");
/// assert_eq!(capitalize_first(""), "");
/// ```
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Derives the generated class identifier from a generator symbol name.
///
/// # Examples
/// ```
/// use actionforge::utils::symbol_class_name;
///
/// assert_eq!(symbol_class_name("fooGenerator"), "FooGeneratorClass");
/// ```
pub fn symbol_class_name(symbol: &str) -> String {
    format!("{}Class", capitalize_first(symbol))
}

/// Derives the generated class identifier from a folder name, for the flat
/// layout where the folder itself is the output unit.
///
/// Underscore-separated words are capitalized and joined:
/// `user_profile` becomes `MockUserProfileClass`.
pub fn folder_class_name(folder: &str) -> String {
    let pascal: String = folder
        .split('_')
        .filter(|w| !w.is_empty())
        .map(capitalize_first)
        .collect();
    format!("Mock{pascal}Class")
}
