//! Case-conversion filters available to every template.
//!
//! `{{ name | snake_case }}`, `{{ name | pascal_case }}`,
//! `{{ name | camel_case }}`, `{{ name | kebab_case }}`.

use heck::{ToKebabCase, ToLowerCamelCase, ToPascalCase, ToSnakeCase};
use minijinja::{Environment, Error, ErrorKind, Value};

type CaseFn = fn(&str) -> String;

const FILTERS: [(&str, CaseFn); 4] = [
    ("snake_case", |s: &str| s.to_snake_case()),
    ("pascal_case", |s: &str| s.to_pascal_case()),
    ("camel_case", |s: &str| s.to_lower_camel_case()),
    ("kebab_case", |s: &str| s.to_kebab_case()),
];

/// Register every case filter on `env`.
pub(crate) fn register(env: &mut Environment<'_>) {
    for (name, convert) in FILTERS {
        env.add_filter(name, move |value: Value| -> Result<String, Error> {
            let s = value.as_str().ok_or_else(|| {
                Error::new(
                    ErrorKind::InvalidOperation,
                    format!("{name} filter expects a string"),
                )
            })?;
            Ok(convert(s))
        });
    }
}
