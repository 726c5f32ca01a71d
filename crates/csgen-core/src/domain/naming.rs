//! Naming rules shared by the renderer and the manifest patcher.

use heck::ToSnakeCase;

/// Suffix stripped from a generator's snake-cased type name to form its
/// template folder.
const GENERATOR_SUFFIX: &str = "_generator";

/// Convert a declaration attribute key to the manifest's attribute naming.
///
/// `rel_path` becomes `RelPath` and `sub/type` becomes `Sub::Type`. Characters
/// that are already upper case are kept, so `RelPath` maps to itself.
///
/// Two passes: each `/` becomes `::` and upper-cases the character after it;
/// then the first character is upper-cased and every `_` that has a
/// character after it is dropped, upper-casing that character.
pub fn camelize(key: &str) -> String {
    let mut namespaced = String::with_capacity(key.len() + 2);
    let mut chars = key.chars();
    while let Some(c) = chars.next() {
        if c == '/' {
            namespaced.push_str("::");
            if let Some(next) = chars.next() {
                namespaced.extend(next.to_uppercase());
            }
        } else {
            namespaced.push(c);
        }
    }

    let mut out = String::with_capacity(namespaced.len());
    let mut chars = namespaced.chars().peekable();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
    }
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('_', Some(_)) => {
                if let Some(next) = chars.next() {
                    out.extend(next.to_uppercase());
                }
            }
            _ => out.push(c),
        }
    }

    out
}

/// Convert a forward-slash output path to the backslash form stored in the
/// manifest.
pub fn to_manifest_path(path: &str) -> String {
    path.replace('/', "\\")
}

/// Template folder name for a generator type.
///
/// Accepts a bare or fully qualified type name (as returned by
/// [`std::any::type_name`]); generic parameters are ignored.
///
/// `my_tool::TriadGenerator` → `triad`.
pub fn template_slug(type_name: &str) -> String {
    let base = type_name.split('<').next().unwrap_or(type_name);
    let last = base.rsplit("::").next().unwrap_or(base);
    last.to_snake_case().replace(GENERATOR_SUFFIX, "")
}
