//! Unified field schema for the analysis form.
//!
//! DESIGN
//! ======
//! The backend grew a second form revision (room counts + blueprint
//! view) next to the original one. Rather than branching component
//! code, both revisions share one static field table and the variant
//! picks a prefix-plus-extension slice. Field order is wire order: the
//! multipart body lists fields exactly as they appear here.

#[cfg(test)]
#[path = "form_schema_test.rs"]
mod form_schema_test;

/// Which revision of the analysis form the page is built with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormVariant {
    /// Original eight-field form, no blueprint view.
    Standard,
    /// Adds per-room counts and the floor-blueprint view.
    #[default]
    Extended,
}

impl FormVariant {
    /// Whether the blueprint result view is selectable for this variant.
    pub const fn has_blueprint_view(self) -> bool {
        matches!(self, Self::Extended)
    }

    /// The ordered field list submitted by this variant.
    pub fn fields(self) -> &'static [FormField] {
        match self {
            Self::Standard => STANDARD_FIELDS,
            Self::Extended => EXTENDED_FIELDS,
        }
    }
}

/// One field of the analysis form, keyed by its multipart field name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormField {
    /// Multipart field name; doubles as the control's `name` and `id`.
    pub name: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Control kind to render.
    pub kind: FieldKind,
}

/// How a form field is rendered and captured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text input.
    Text,
    /// Numeric input; the value still travels as an uncoerced string.
    Number,
    /// Fixed option list.
    Select(&'static [&'static str]),
    /// Single-file image input.
    File,
}

/// Building types the backend prices; anything else falls back to a
/// generic estimate server-side.
const BUILDING_TYPES: &[&str] = &[
    "Residential",
    "Duplex",
    "Villa",
    "Apartment",
    "Commercial",
    "Office",
    "Other",
];

/// Floor selections in the backend's `G+N` notation.
const FLOOR_OPTIONS: &[&str] = &["G", "G+1", "G+2", "G+3", "G+4"];

const STANDARD_FIELDS: &[FormField] = &[
    FormField {
        name: "area",
        label: "Site Area (sq. yd)",
        kind: FieldKind::Number,
    },
    FormField {
        name: "floors",
        label: "Floors",
        kind: FieldKind::Select(FLOOR_OPTIONS),
    },
    FormField {
        name: "buildingType",
        label: "Building Type",
        kind: FieldKind::Select(BUILDING_TYPES),
    },
    FormField {
        name: "budget",
        label: "Budget",
        kind: FieldKind::Number,
    },
    FormField {
        name: "days",
        label: "Duration (days)",
        kind: FieldKind::Number,
    },
    FormField {
        name: "latitude",
        label: "Latitude",
        kind: FieldKind::Text,
    },
    FormField {
        name: "longitude",
        label: "Longitude",
        kind: FieldKind::Text,
    },
    FormField {
        name: "land_image",
        label: "Land Image",
        kind: FieldKind::File,
    },
];

const EXTENDED_FIELDS: &[FormField] = &[
    STANDARD_FIELDS[0],
    STANDARD_FIELDS[1],
    STANDARD_FIELDS[2],
    STANDARD_FIELDS[3],
    STANDARD_FIELDS[4],
    STANDARD_FIELDS[5],
    STANDARD_FIELDS[6],
    FormField {
        name: "bedrooms",
        label: "Bedrooms",
        kind: FieldKind::Number,
    },
    FormField {
        name: "bathrooms",
        label: "Bathrooms",
        kind: FieldKind::Number,
    },
    FormField {
        name: "kitchen",
        label: "Kitchens",
        kind: FieldKind::Number,
    },
    FormField {
        name: "hall",
        label: "Halls",
        kind: FieldKind::Number,
    },
    STANDARD_FIELDS[7],
];
