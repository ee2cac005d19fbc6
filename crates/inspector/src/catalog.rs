//! # Property catalog
//!
//! The fixed set of CSS properties the overlay inspects, grouped into
//! eight display categories. The grouping and the order of properties
//! inside each group are part of the panel's visual contract and never
//! change at runtime.

/// The eight panel categories, in the order they are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    FontText,
    ColorBackground,
    Box,
    Positioning,
    List,
    Table,
    Misc,
    Effect,
}

impl Category {
    /// Render order of the categories, top to bottom.
    pub const ALL: [Category; 8] = [
        Category::FontText,
        Category::ColorBackground,
        Category::Box,
        Category::Positioning,
        Category::List,
        Category::Table,
        Category::Misc,
        Category::Effect,
    ];

    /// Section heading shown in the panel and in generated CSS text.
    pub fn title(self) -> &'static str {
        match self {
            Category::FontText => "Font",
            Category::ColorBackground => "Color",
            Category::Box => "Box",
            Category::Positioning => "Position",
            Category::List => "List",
            Category::Table => "Table",
            Category::Misc => "Misc",
            Category::Effect => "Effect",
        }
    }

    /// Stable lowercase identifier, used for panel element ids.
    pub fn id(self) -> &'static str {
        match self {
            Category::FontText => "font",
            Category::ColorBackground => "color",
            Category::Box => "box",
            Category::Positioning => "position",
            Category::List => "list",
            Category::Table => "table",
            Category::Misc => "misc",
            Category::Effect => "effect",
        }
    }

    /// Properties belonging to this category, in display order.
    pub fn properties(self) -> &'static [&'static str] {
        match self {
            Category::FontText => FONT_TEXT_PROPERTIES,
            Category::ColorBackground => COLOR_BACKGROUND_PROPERTIES,
            Category::Box => BOX_PROPERTIES,
            Category::Positioning => POSITIONING_PROPERTIES,
            Category::List => LIST_PROPERTIES,
            Category::Table => TABLE_PROPERTIES,
            Category::Misc => MISC_PROPERTIES,
            Category::Effect => EFFECT_PROPERTIES,
        }
    }
}

pub const FONT_TEXT_PROPERTIES: &[&str] = &[
    "font-family",
    "font-size",
    "font-style",
    "font-variant",
    "font-weight",
    "letter-spacing",
    "line-height",
    "text-decoration",
    "text-align",
    "text-indent",
    "text-transform",
    "vertical-align",
    "white-space",
    "word-spacing",
];

pub const COLOR_BACKGROUND_PROPERTIES: &[&str] = &[
    "background-attachment",
    "background-color",
    "background-image",
    "background-position",
    "background-repeat",
    "color",
];

pub const BOX_PROPERTIES: &[&str] = &[
    "height",
    "width",
    "border",
    "border-top",
    "border-right",
    "border-bottom",
    "border-left",
    "margin",
    "padding",
    "max-height",
    "min-height",
    "max-width",
    "min-width",
];

pub const POSITIONING_PROPERTIES: &[&str] = &[
    "position",
    "top",
    "bottom",
    "right",
    "left",
    "float",
    "display",
    "clear",
    "z-index",
];

pub const LIST_PROPERTIES: &[&str] = &[
    "list-style-image",
    "list-style-type",
    "list-style-position",
];

pub const TABLE_PROPERTIES: &[&str] = &[
    "border-collapse",
    "border-spacing",
    "caption-side",
    "empty-cells",
    "table-layout",
];

pub const MISC_PROPERTIES: &[&str] = &["overflow", "cursor", "visibility"];

pub const EFFECT_PROPERTIES: &[&str] = &[
    "transform",
    "transition",
    "outline",
    "outline-offset",
    "box-sizing",
    "resize",
    "text-shadow",
    "text-overflow",
    "word-wrap",
    "box-shadow",
    "border-top-left-radius",
    "border-top-right-radius",
    "border-bottom-left-radius",
    "border-bottom-right-radius",
];

/// Tags for which the Table category is relevant.
pub const TABLE_TAGS: &[&str] = &[
    "table", "caption", "thead", "tbody", "tfoot", "colgroup", "col", "tr", "th", "td",
];

/// Tags for which the List category is relevant.
pub const LIST_TAGS: &[&str] = &["ul", "li", "dd", "dt", "ol"];

/// Whether `tag` names a table-family element. Case-insensitive.
pub fn is_table_tag(tag: &str) -> bool {
    TABLE_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// Whether `tag` names a list-family element. Case-insensitive.
pub fn is_list_tag(tag: &str) -> bool {
    LIST_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// Iterates every catalog property once, in category render order.
pub fn all_properties() -> impl Iterator<Item = &'static str> {
    Category::ALL.iter().flat_map(|c| c.properties().iter().copied())
}
