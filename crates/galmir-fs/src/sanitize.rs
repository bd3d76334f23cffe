use std::borrow::Cow;

const REPLACEMENT: char = '_';

/// Turn a remote name into a single, safe path component.
///
/// Path separators and NUL are replaced, and names that would resolve to the
/// current or parent directory (or to nothing) are replaced outright, so a
/// remote name can never escape the directory it is joined onto.
pub fn sanitize_component(name: &str) -> Cow<'_, str> {
    match name.trim() {
        "" | "." | ".." => return Cow::Owned(REPLACEMENT.to_string()),
        _ => {}
    }

    if !name.contains(is_forbidden) {
        return Cow::Borrowed(name);
    }

    Cow::Owned(
        name.chars()
            .map(|c| if is_forbidden(c) { REPLACEMENT } else { c })
            .collect(),
    )
}

fn is_forbidden(c: char) -> bool {
    matches!(c, '/' | '\\' | '\0')
}
