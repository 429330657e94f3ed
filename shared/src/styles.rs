//! Presentation tables for rich text: editor color keys to CSS values and
//! per-element utility classes.

use crate::content::{HeadingLevel, TextState};

/// Text colors offered by the editor, `light-dark()` so both themes work.
pub const TEXT_COLORS: &[(&str, &str)] = &[
    ("text-red", "light-dark(#DC2626, #EF4444)"),
    ("text-orange", "light-dark(#EA580C, #FB923C)"),
    ("text-yellow", "light-dark(#CA8A04, #FDE047)"),
    ("text-green", "light-dark(#16A34A, #4ADE80)"),
    ("text-blue", "light-dark(#2563EB, #60A5FA)"),
    ("text-purple", "light-dark(#9333EA, #C084FC)"),
    ("text-pink", "light-dark(#DB2777, #F472B6)"),
];

/// Highlight colors offered by the editor.
pub const BACKGROUND_COLORS: &[(&str, &str)] = &[
    ("bg-red", "light-dark(#FEE2E2, #7F1D1D)"),
    ("bg-orange", "light-dark(#FFEDD5, #7C2D12)"),
    ("bg-yellow", "light-dark(#FEF3C7, #78350F)"),
    ("bg-green", "light-dark(#DCFCE7, #14532D)"),
    ("bg-blue", "light-dark(#DBEAFE, #1E3A8A)"),
    ("bg-purple", "light-dark(#F3E8FF, #581C87)"),
    ("bg-pink", "light-dark(#FCE7F3, #831843)"),
];

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| *value)
}

/// Font sizes arrive as CSS lengths such as `24px`; anything that could
/// break out of the declaration is dropped.
fn is_safe_css_length(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '%')
}

/// Inline style for a text node's state, or `None` when nothing applies.
pub fn text_style(state: &TextState) -> Option<String> {
    let mut declarations = Vec::new();

    if let Some(color) = state.color.as_deref().and_then(|key| lookup(TEXT_COLORS, key)) {
        declarations.push(format!("color: {color}"));
    }
    if let Some(background) = state
        .background
        .as_deref()
        .and_then(|key| lookup(BACKGROUND_COLORS, key))
    {
        declarations.push(format!("background-color: {background}"));
    }
    if let Some(size) = state
        .font_size
        .as_deref()
        .map(str::trim)
        .filter(|size| is_safe_css_length(size))
    {
        declarations.push(format!("font-size: {size}"));
    }

    if declarations.is_empty() {
        None
    } else {
        Some(declarations.join("; "))
    }
}

/// Utility classes for a heading; every level leaves room for the sticky
/// header when jumped to from the outline.
pub fn heading_class(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => {
            "text-3xl md:text-4xl font-bold mt-12 mb-5 text-gray-900 tracking-tight scroll-mt-24"
        },
        HeadingLevel::H2 => {
            "text-2xl md:text-3xl font-bold mt-10 mb-4 text-gray-900 tracking-tight scroll-mt-24"
        },
        HeadingLevel::H3 => {
            "text-xl md:text-2xl font-semibold mt-8 mb-3 text-gray-900 tracking-tight scroll-mt-24"
        },
        HeadingLevel::H4 => "text-lg md:text-xl font-semibold mt-7 mb-3 text-gray-900 scroll-mt-24",
        HeadingLevel::H5 => "text-base md:text-lg font-semibold mt-6 mb-2 text-gray-900 scroll-mt-24",
        HeadingLevel::H6 => "text-base font-semibold mt-5 mb-2 text-gray-900 scroll-mt-24",
    }
}

/// Left margin for nested lists, two rem per indent level.
pub fn indent_style(indent: u32) -> String {
    format!("margin-left: {}rem", indent * 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(color: Option<&str>, background: Option<&str>, size: Option<&str>) -> TextState {
        TextState {
            color: color.map(str::to_string),
            background: background.map(str::to_string),
            font_size: size.map(str::to_string),
        }
    }

    #[test]
    fn builds_style_in_fixed_order() {
        let style = text_style(&state(Some("text-red"), Some("bg-blue"), Some("24px")));
        assert_eq!(
            style.as_deref(),
            Some(
                "color: light-dark(#DC2626, #EF4444); background-color: light-dark(#DBEAFE, \
                 #1E3A8A); font-size: 24px"
            )
        );
    }

    #[test]
    fn unknown_keys_produce_no_style() {
        assert_eq!(text_style(&state(Some("text-teal"), Some("bg-gold"), None)), None);
        assert_eq!(text_style(&TextState::default()), None);
    }

    #[test]
    fn font_size_rejects_injection() {
        assert_eq!(text_style(&state(None, None, Some("12px; position: fixed"))), None);
        assert_eq!(
            text_style(&state(None, None, Some("1.25rem"))).as_deref(),
            Some("font-size: 1.25rem")
        );
    }

    #[test]
    fn indent_is_two_rem_per_level() {
        assert_eq!(indent_style(0), "margin-left: 0rem");
        assert_eq!(indent_style(2), "margin-left: 4rem");
    }
}
