/// Strip the generic arity marker a runtime appends to type names.
///
/// Everything from the first backtick on is dropped, which also removes the
/// bracketed argument list of a constructed full name.
///
/// # Examples
/// ```
/// use tyname_core::utils::strip_arity;
/// assert_eq!(strip_arity("List`1"), "List");
/// assert_eq!(strip_arity("Dictionary`2[[System.String],[System.Int32]]"), "Dictionary");
/// assert_eq!(strip_arity("String"), "String");
/// ```
pub fn strip_arity(name: &str) -> &str {
    match name.find('`') {
        Some(idx) => &name[..idx],
        None => name,
    }
}

/// Last segment of a qualified name, treating `.` and `+` (nested types)
/// as separators.
///
/// # Examples
/// ```
/// use tyname_core::utils::last_segment;
/// assert_eq!(last_segment("System.Collections.Generic.List`1"), "List`1");
/// assert_eq!(last_segment("Demo.Fixtures+Inner"), "Inner");
/// assert_eq!(last_segment("Plain"), "Plain");
/// ```
pub fn last_segment(name: &str) -> &str {
    let head = strip_arity(name);
    let start = head.rfind(['.', '+']).map_or(0, |idx| idx + 1);
    &name[start..]
}
