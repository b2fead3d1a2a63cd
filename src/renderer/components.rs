use crate::renderer::traits::Breadcrumb;

/// Marker for the raw collection label
pub const COLLECTION_PLACEHOLDER: &str = "CollectionPlaceholder";
/// Prefix turning [`COLLECTION_PLACEHOLDER`] into its identifier-safe variant
pub const SANITIZED_PREFIX: &str = "Sanitized";
/// Marker for the current item's own name
pub const OWN_NAME_PLACEHOLDER: &str = "${0}";
/// Marker for the enclosing item's name
pub const PARENT_NAME_PLACEHOLDER: &str = "${1}";

/// Helper for the running indent string
pub struct IndentationHelper;

impl IndentationHelper {
    /// Grows `base` by `amount` copies of `fill`, or shrinks it by `-amount`
    /// characters. Shrinking is purely by length and clamps at empty, so a
    /// grow followed by the matching shrink restores the original string.
    pub fn extend(base: &str, amount: i32, fill: char) -> String {
        if amount >= 0 {
            let mut indent = String::with_capacity(base.len() + amount as usize);
            indent.push_str(base);
            indent.extend(std::iter::repeat(fill).take(amount as usize));
            indent
        } else {
            let keep = base.chars().count().saturating_sub(amount.unsigned_abs() as usize);
            base.chars().take(keep).collect()
        }
    }
}

/// Helper for resolving template placeholders
pub struct Placeholders;

impl Placeholders {
    /// Replaces everything but ASCII letters, digits and `_` with `_`
    pub fn sanitize(name: &str) -> String {
        name.chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
            .collect()
    }

    /// Substitutes the collection label into `template`: the sanitized marker
    /// gets the identifier-safe label, the plain marker the label verbatim.
    pub fn substitute_label(template: &str, label: &str) -> String {
        let mut output = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(position) = rest.find(COLLECTION_PLACEHOLDER) {
            let (before, after) = rest.split_at(position);
            match before.strip_suffix(SANITIZED_PREFIX) {
                Some(head) => {
                    output.push_str(head);
                    output.push_str(&Self::sanitize(label));
                }
                None => {
                    output.push_str(before);
                    output.push_str(label);
                }
            }
            rest = &after[COLLECTION_PLACEHOLDER.len()..];
        }

        output.push_str(rest);
        output
    }

    /// Substitutes the names recorded at `level` and `level - 1` into an item
    /// template. Placeholders whose breadcrumb is missing or unnamed are left
    /// as they are.
    pub fn substitute_breadcrumbs(template: &str, crumbs: &Breadcrumb<'_>, level: usize) -> String {
        let mut output = template.to_string();

        if let Some(own) = crumbs.name_at(level).filter(|name| !name.is_empty()) {
            output = output.replace(OWN_NAME_PLACEHOLDER, &Self::sanitize(own));
        }

        let parent = level
            .checked_sub(1)
            .and_then(|above| crumbs.name_at(above))
            .filter(|name| !name.is_empty());
        if let Some(parent) = parent {
            output = output.replace(PARENT_NAME_PLACEHOLDER, &Self::sanitize(parent));
        }

        output
    }
}
